//! Bilinear resampling between f32 planes.
//!
//! The sample grid is anchored at the top-left corner (`src = dst * ratio`),
//! matching the decimation grid used by the pyramid builder: a pyramid pixel
//! at level `l`, index `i`, corresponds to fine-level index `2^l * i`, so
//! upsampled surround maps stay registered with their center maps.

use super::ImageF32;

/// Resize `src` to `dst_w × dst_h` with bilinear interpolation, clamping
/// sample coordinates to the source extents.
pub fn resize_bilinear(src: &ImageF32, dst_w: usize, dst_h: usize) -> ImageF32 {
    assert!(
        src.w > 0 && src.h > 0 && dst_w > 0 && dst_h > 0,
        "resize requires non-empty source and destination"
    );
    if dst_w == src.w && dst_h == src.h {
        return src.clone();
    }

    let x_ratio = src.w as f32 / dst_w as f32;
    let y_ratio = src.h as f32 / dst_h as f32;
    let x_max = (src.w - 1) as f32;
    let y_max = (src.h - 1) as f32;

    let mut out = ImageF32::new(dst_w, dst_h);
    for y in 0..dst_h {
        let sy = (y as f32 * y_ratio).min(y_max);
        let y0 = sy.floor() as usize;
        let y1 = (y0 + 1).min(src.h - 1);
        let fy = sy - y0 as f32;
        let row0 = src.row(y0);
        let row1 = src.row(y1);
        let dst_row = out.row_mut(y);
        for (x, dst_px) in dst_row.iter_mut().enumerate() {
            let sx = (x as f32 * x_ratio).min(x_max);
            let x0 = sx.floor() as usize;
            let x1 = (x0 + 1).min(src.w - 1);
            let fx = sx - x0 as f32;
            let top = row0[x0] + (row0[x1] - row0[x0]) * fx;
            let bot = row1[x0] + (row1[x1] - row1[x0]) * fx;
            *dst_px = top + (bot - top) * fy;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_size_is_identity() {
        let src = ImageF32::from_vec(2, 2, vec![0.0, 1.0, 2.0, 3.0]);
        let out = resize_bilinear(&src, 2, 2);
        assert_eq!(out.data, src.data);
    }

    #[test]
    fn upscale_interpolates_between_samples() {
        let src = ImageF32::from_vec(2, 2, vec![0.0, 1.0, 2.0, 3.0]);
        let out = resize_bilinear(&src, 4, 4);
        assert_eq!(out.w, 4);
        assert_eq!(out.h, 4);
        // Top-left anchored: dst x=0 hits src 0, x=1 the midpoint, x>=2 clamp.
        assert_eq!(out.row(0), &[0.0, 0.5, 1.0, 1.0]);
        assert_eq!(out.row(1), &[1.0, 1.5, 2.0, 2.0]);
        assert_eq!(out.row(2), &[2.0, 2.5, 3.0, 3.0]);
        assert_eq!(out.row(3), &[2.0, 2.5, 3.0, 3.0]);
    }

    #[test]
    fn one_by_one_source_broadcasts() {
        let src = ImageF32::from_vec(1, 1, vec![7.0]);
        let out = resize_bilinear(&src, 3, 2);
        assert!(out.data.iter().all(|&v| v == 7.0));
    }
}
