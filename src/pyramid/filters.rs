//! Separable 1-D filters used before pyramid decimation.

use crate::image::ImageF32;

/// Trait implemented by separable 1-D filters used for pyramid construction.
pub trait SeparableFilter {
    /// Return the 1D taps (in left-to-right order).
    fn taps(&self) -> &[f32];
}

/// Simple wrapper around a static filter kernel.
#[derive(Clone, Copy, Debug)]
pub struct StaticSeparableFilter {
    taps: &'static [f32],
}

impl Default for StaticSeparableFilter {
    fn default() -> Self {
        GAUSSIAN_5TAP
    }
}

impl StaticSeparableFilter {
    pub const fn new(taps: &'static [f32]) -> Self {
        Self { taps }
    }
}

impl SeparableFilter for StaticSeparableFilter {
    #[inline]
    fn taps(&self) -> &[f32] {
        self.taps
    }
}

/// Normalised 5-tap Gaussian filter `[1, 4, 6, 4, 1] / 16`.
pub const GAUSSIAN_5TAP: StaticSeparableFilter =
    StaticSeparableFilter::new(&[0.0625, 0.25, 0.375, 0.25, 0.0625]);

/// Apply the filter horizontally then vertically, clamping samples to the
/// image extents (replicate border).
pub fn apply(filter: &dyn SeparableFilter, src: &ImageF32) -> ImageF32 {
    let taps = filter.taps();
    let radius = taps.len() / 2;
    let (w, h) = (src.w, src.h);

    let mut horiz = ImageF32::new(w, h);
    for y in 0..h {
        let src_row = src.row(y);
        let dst_row = horiz.row_mut(y);
        for (x, dst_px) in dst_row.iter_mut().enumerate() {
            let mut acc = 0.0f32;
            for (t, &tap) in taps.iter().enumerate() {
                let sx = (x + t).saturating_sub(radius).min(w - 1);
                acc += tap * src_row[sx];
            }
            *dst_px = acc;
        }
    }

    let mut out = ImageF32::new(w, h);
    for y in 0..h {
        let dst_row = out.row_mut(y);
        for (t, &tap) in taps.iter().enumerate() {
            let sy = (y + t).saturating_sub(radius).min(h - 1);
            let src_row = horiz.row(sy);
            for (dst_px, &src_px) in dst_row.iter_mut().zip(src_row.iter()) {
                *dst_px += tap * src_px;
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gaussian_taps_sum_to_one() {
        let sum: f32 = GAUSSIAN_5TAP.taps().iter().sum();
        assert!((sum - 1.0).abs() < 1e-6);
    }

    #[test]
    fn constant_image_is_invariant_under_blur() {
        let src = ImageF32::from_vec(5, 4, vec![0.75; 20]);
        let out = apply(&GAUSSIAN_5TAP, &src);
        for &v in &out.data {
            assert!((v - 0.75).abs() < 1e-6, "v={v}");
        }
    }
}
