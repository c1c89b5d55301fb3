//! Gaussian pyramid over a single feature plane.
//!
//! Level 0 is the input unchanged; each subsequent level applies a separable
//! 5-tap Gaussian blur (kernel [1,4,6,4,1]/16) and decimates 2:1. Border
//! samples clamp to the image extents. Dimensions round up (`div_ceil`) and
//! bottom out at 1×1, so arbitrarily small inputs build a full-depth pyramid
//! instead of erroring.
//!
//! Levels are never mutated after construction; every downstream consumer
//! reads them immutably.

pub mod filters;

use crate::image::ImageF32;
use filters::{apply as apply_filter, SeparableFilter, GAUSSIAN_5TAP};

/// Pyramid depth used by the saliency pipeline: levels 0..=8.
///
/// The center-surround catalog touches levels 0..=7; the ninth level
/// completes the dyadic ladder.
pub const PYRAMID_LEVELS: usize = 9;

/// Ordered dyadic scale ladder of one feature plane; `levels[0]` is the
/// original resolution.
#[derive(Clone, Debug, Default)]
pub struct Pyramid {
    pub levels: Vec<ImageF32>,
}

impl Pyramid {
    /// Build a pyramid with the default Gaussian filter and depth.
    pub fn build(plane: ImageF32) -> Self {
        Self::build_with(plane, PYRAMID_LEVELS, &GAUSSIAN_5TAP)
    }

    /// Build a pyramid of `levels` levels using `filter` before every
    /// decimation.
    pub fn build_with(plane: ImageF32, levels: usize, filter: &dyn SeparableFilter) -> Self {
        assert!(levels >= 1, "pyramid requires at least one level");
        assert!(
            plane.w > 0 && plane.h > 0,
            "pyramid base level must be non-empty"
        );
        let mut out = Vec::with_capacity(levels);
        out.push(plane);

        for _ in 1..levels {
            let prev = out.last().expect("previous level available");
            let blurred = apply_filter(filter, prev);
            let (nw, nh) = (prev.w.div_ceil(2), prev.h.div_ceil(2));
            let mut down = ImageF32::new(nw, nh);
            for y in 0..nh {
                let sy = (y * 2).min(blurred.h - 1);
                let src_row = blurred.row(sy);
                let dst_row = down.row_mut(y);
                for (x, dst_px) in dst_row.iter_mut().enumerate() {
                    let sx = (x * 2).min(blurred.w - 1);
                    *dst_px = src_row[sx];
                }
            }
            out.push(down);
        }

        Self { levels: out }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(w: usize, h: usize) -> ImageF32 {
        let data = (0..w * h).map(|i| i as f32).collect();
        ImageF32::from_vec(w, h, data)
    }

    #[test]
    fn base_level_is_the_input_unchanged() {
        let plane = ramp(64, 48);
        let expected = plane.data.clone();
        let pyr = Pyramid::build(plane);
        assert_eq!(pyr.levels.len(), PYRAMID_LEVELS);
        assert_eq!(pyr.levels[0].data, expected);
    }

    #[test]
    fn level_dimensions_halve_and_never_grow() {
        let pyr = Pyramid::build(ramp(100, 70));
        for pair in pyr.levels.windows(2) {
            assert_eq!(pair[1].w, pair[0].w.div_ceil(2).max(1));
            assert_eq!(pair[1].h, pair[0].h.div_ceil(2).max(1));
            assert!(pair[1].w <= pair[0].w);
            assert!(pair[1].h <= pair[0].h);
        }
    }

    #[test]
    fn tiny_input_clamps_at_one_pixel() {
        let pyr = Pyramid::build(ImageF32::from_vec(2, 1, vec![0.25, 0.75]));
        assert_eq!(pyr.levels.len(), PYRAMID_LEVELS);
        let last = pyr.levels.last().unwrap();
        assert_eq!((last.w, last.h), (1, 1));
    }

    #[test]
    fn constant_plane_stays_constant_at_every_level() {
        let pyr = Pyramid::build(ImageF32::from_vec(33, 17, vec![0.5; 33 * 17]));
        for level in &pyr.levels {
            for &v in &level.data {
                assert!((v - 0.5).abs() < 1e-6);
            }
        }
    }
}
