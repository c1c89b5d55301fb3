//! Peak-contrast normalization of conspicuity maps.
//!
//! A map is rescaled by `(M − m)²` where `M` is its global maximum and `m`
//! the mean of the *other* local maxima (3×3 neighborhood, the pixel itself
//! included). A map with one dominant peak keeps its weight; a texture-like
//! map with many comparable peaks is suppressed.
//!
//! A pixel qualifies as a local maximum when it equals its 3×3-neighborhood
//! maximum; equality is non-strict, so plateau pixels qualify. Pixels whose
//! value equals `M` are excluded from the mean. When no pixel qualifies
//! (flat maps, or a map whose only local maximum is the global one) the mean
//! over the empty selection is defined as 0 rather than an error.

use crate::image::ImageF32;

/// Rescale `map` by how far its global peak stands above competing peaks.
pub fn peak_normalize(map: &ImageF32) -> ImageF32 {
    let global_max = map.peak();
    let local_max = neighborhood_max(map);

    let mut sum = 0.0f64;
    let mut count = 0usize;
    for (&v, &m) in map.data.iter().zip(local_max.data.iter()) {
        if v == m && v != global_max {
            sum += v as f64;
            count += 1;
        }
    }
    let competing_mean = if count > 0 {
        (sum / count as f64) as f32
    } else {
        0.0
    };

    let delta = global_max - competing_mean;
    let weight = delta * delta;
    let mut out = ImageF32::new(map.w, map.h);
    for (dst, &src) in out.data.iter_mut().zip(map.data.iter()) {
        *dst = src * weight;
    }
    out
}

/// 3×3 neighborhood maximum with clamped borders; the center pixel is part
/// of its own neighborhood.
fn neighborhood_max(map: &ImageF32) -> ImageF32 {
    let (w, h) = (map.w, map.h);
    let mut out = ImageF32::new(w, h);
    for y in 0..h {
        let rows = [
            map.row(y.saturating_sub(1)),
            map.row(y),
            map.row((y + 1).min(h - 1)),
        ];
        let dst = out.row_mut(y);
        for (x, dst_px) in dst.iter_mut().enumerate() {
            let xs = [x.saturating_sub(1), x, (x + 1).min(w - 1)];
            let mut m = f32::NEG_INFINITY;
            for row in &rows {
                for &xi in &xs {
                    m = m.max(row[xi]);
                }
            }
            *dst_px = m;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighborhood_max_covers_adjacent_pixels() {
        let map = ImageF32::from_vec(3, 3, vec![0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0]);
        let nm = neighborhood_max(&map);
        assert!(nm.data.iter().all(|&v| v == 1.0));
    }

    #[test]
    fn single_dominant_peak_keeps_full_weight() {
        // Competing local maxima are the far zeros, so m = 0 and the weight
        // is max² = 1.
        let mut map = ImageF32::new(9, 9);
        map.set(4, 4, 1.0);
        let out = peak_normalize(&map);
        assert!((out.get(4, 4) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn competing_peaks_suppress_the_map() {
        let mut map = ImageF32::new(16, 16);
        map.set(3, 3, 1.0);
        map.set(12, 12, 0.9);
        let out = peak_normalize(&map);
        // Weight is (1 − m)² with m pulled up by the 0.9 competitor, so the
        // peak must lose value; exact m depends on how many flat-zero pixels
        // also qualify.
        assert!(out.get(3, 3) < 1.0);
        assert!(out.data.iter().all(|&v| v >= 0.0));
    }

    #[test]
    fn empty_selection_mean_is_zero() {
        // Constant non-zero map: every pixel equals the neighborhood max and
        // also the global max, so the selection is empty and m = 0.
        let map = ImageF32::from_vec(4, 4, vec![2.0; 16]);
        let out = peak_normalize(&map);
        for &v in &out.data {
            assert!((v - 8.0).abs() < 1e-5, "expected 2 * (2-0)^2, got {v}");
        }
    }

    #[test]
    fn all_zero_map_stays_zero() {
        let map = ImageF32::new(5, 5);
        let out = peak_normalize(&map);
        assert!(out.data.iter().all(|&v| v == 0.0));
    }
}
