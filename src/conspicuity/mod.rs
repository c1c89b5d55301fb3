//! Center-surround conspicuity maps over pyramid levels.
//!
//! For a scale pair (c, s) the "center" is a fine pyramid level and the
//! "surround" a coarser one; the surround is upsampled to the center's
//! resolution and the absolute difference highlights local contrast at that
//! scale. A channel compared against itself uses its own levels on both
//! sides; an opponent channel pair (a, b) contrasts `a[c] − b[c]` against the
//! upsampled `b[s] − a[s]`, so the sign of the opponency flips between center
//! and surround.
//!
//! The raw map for pair (c, s) always has the spatial size of level c.

pub mod normalize;

use crate::image::{resize_bilinear, ImageF32};
use crate::pyramid::Pyramid;

/// Fixed (center, surround) level catalog, 0-indexed into the pyramid.
///
/// The catalog is an invariant of the algorithm, not an input.
pub const SCALE_PAIRS: [(usize, usize); 6] = [(1, 4), (1, 5), (2, 5), (2, 6), (3, 6), (3, 7)];

/// Catalog index whose intensity map supplies the common size all maps are
/// resized to during combination.
pub const REFERENCE_PAIR: usize = 3;

/// Six raw conspicuity maps of one channel contrasted against itself.
pub fn center_surround_self(pyramid: &Pyramid) -> Vec<ImageF32> {
    SCALE_PAIRS
        .iter()
        .map(|&(c, s)| {
            let center = &pyramid.levels[c];
            let surround = &pyramid.levels[s];
            abs_diff_upsampled(center, surround)
        })
        .collect()
}

/// Six raw conspicuity maps of an opponent channel pair (a, b).
pub fn center_surround_opponent(a: &Pyramid, b: &Pyramid) -> Vec<ImageF32> {
    SCALE_PAIRS
        .iter()
        .map(|&(c, s)| {
            let center = diff(&a.levels[c], &b.levels[c]);
            let surround = diff(&b.levels[s], &a.levels[s]);
            abs_diff_upsampled(&center, &surround)
        })
        .collect()
}

/// Resize every map to `w × h` and sum them elementwise.
pub fn addition(maps: &[ImageF32], w: usize, h: usize) -> ImageF32 {
    let mut sum = ImageF32::new(w, h);
    for map in maps {
        let resized = resize_bilinear(map, w, h);
        for (dst, src) in sum.data.iter_mut().zip(resized.data.iter()) {
            *dst += src;
        }
    }
    sum
}

fn abs_diff_upsampled(center: &ImageF32, surround: &ImageF32) -> ImageF32 {
    let surround_up = resize_bilinear(surround, center.w, center.h);
    let mut out = ImageF32::new(center.w, center.h);
    for ((dst, &c), &s) in out
        .data
        .iter_mut()
        .zip(center.data.iter())
        .zip(surround_up.data.iter())
    {
        *dst = (c - s).abs();
    }
    out
}

fn diff(a: &ImageF32, b: &ImageF32) -> ImageF32 {
    debug_assert_eq!((a.w, a.h), (b.w, b.h));
    let mut out = ImageF32::new(a.w, a.h);
    for ((dst, &x), &y) in out.data.iter_mut().zip(a.data.iter()).zip(b.data.iter()) {
        *dst = x - y;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::ImageF32;

    fn noise_plane(w: usize, h: usize) -> ImageF32 {
        // Deterministic pseudo-random values; enough texture for the maps to
        // be non-trivial.
        let data = (0..w * h)
            .map(|i| ((i * 2654435761usize) % 1000) as f32 / 1000.0)
            .collect();
        ImageF32::from_vec(w, h, data)
    }

    #[test]
    fn maps_have_center_level_dimensions() {
        let pyr = Pyramid::build(noise_plane(100, 80));
        let maps = center_surround_self(&pyr);
        assert_eq!(maps.len(), SCALE_PAIRS.len());
        for (map, &(c, _)) in maps.iter().zip(SCALE_PAIRS.iter()) {
            assert_eq!(map.w, pyr.levels[c].w);
            assert_eq!(map.h, pyr.levels[c].h);
        }
    }

    #[test]
    fn maps_are_non_negative() {
        let pyr = Pyramid::build(noise_plane(64, 64));
        for map in center_surround_self(&pyr) {
            assert!(map.data.iter().all(|&v| v >= 0.0));
        }
    }

    #[test]
    fn constant_channel_has_zero_conspicuity() {
        let pyr = Pyramid::build(ImageF32::from_vec(64, 64, vec![0.5; 64 * 64]));
        for map in center_surround_self(&pyr) {
            assert!(map.data.iter().all(|&v| v.abs() < 1e-5));
        }
    }

    #[test]
    fn identical_opponent_pyramids_cancel() {
        let plane = noise_plane(64, 64);
        let a = Pyramid::build(plane.clone());
        let b = Pyramid::build(plane);
        for map in center_surround_opponent(&a, &b) {
            assert!(map.data.iter().all(|&v| v.abs() < 1e-5));
        }
    }

    #[test]
    fn addition_resizes_and_sums() {
        let maps = vec![
            ImageF32::from_vec(1, 1, vec![2.0]),
            ImageF32::from_vec(2, 2, vec![1.0; 4]),
        ];
        let sum = addition(&maps, 2, 2);
        assert!(sum.data.iter().all(|&v| (v - 3.0).abs() < 1e-6));
    }
}
