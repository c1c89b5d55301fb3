//! Oriented Gabor bank applied to the grayscale plane.
//!
//! Four real-valued Gabor kernels at 0°, 45°, 90° and 135° turn the grayscale
//! image into orientation-energy channels. The kernel constants (size, σ, λ,
//! γ, ψ) are algorithm constants: changing them changes saliency-map
//! semantics, so they live here as documented defaults rather than tuning
//! knobs.
//!
//! Application is full 2-D convolution with zero padding, so each output
//! channel is `(H + K − 1) × (W + K − 1)` for a `K × K` kernel.

use crate::image::ImageF32;
use rayon::prelude::*;
use serde::Deserialize;
use std::f32::consts::PI;

/// Number of orientations in the bank.
pub const ORIENTATIONS: usize = 4;

/// Gabor kernel constants. Defaults reproduce the canonical bank; altering
/// them alters the meaning of the orientation conspicuity maps.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct GaborOptions {
    /// Kernel side length in pixels.
    pub kernel_size: usize,
    /// Standard deviation of the Gaussian envelope along the wave axis.
    pub sigma: f32,
    /// Wavelength of the carrier cosine.
    pub wavelength: f32,
    /// Spatial aspect ratio; the envelope σ across the wave axis is `sigma /
    /// aspect_ratio`.
    pub aspect_ratio: f32,
    /// Phase offset of the carrier.
    pub phase: f32,
}

impl Default for GaborOptions {
    fn default() -> Self {
        Self {
            kernel_size: 16,
            sigma: 2.0,
            wavelength: 10.0,
            aspect_ratio: 0.5,
            phase: 0.0,
        }
    }
}

/// Orientations of the bank: `k * π/4` for `k = 0..4`.
pub fn orientation_angles() -> [f32; ORIENTATIONS] {
    let mut angles = [0.0f32; ORIENTATIONS];
    for (k, angle) in angles.iter_mut().enumerate() {
        *angle = k as f32 * PI / (ORIENTATIONS as f32);
    }
    angles
}

/// Generate one real Gabor kernel at orientation `theta`.
///
/// Sample offsets run over `−K/2 .. K/2` (exclusive upper bound), so an even
/// kernel size is centered between pixels.
pub fn gabor_kernel(options: &GaborOptions, theta: f32) -> ImageF32 {
    let k = options.kernel_size;
    assert!(k > 0, "gabor kernel size must be positive");
    let half = (k / 2) as i32;
    let sigma_x = options.sigma;
    let sigma_y = options.sigma / options.aspect_ratio;
    let ex = -0.5 / (sigma_x * sigma_x);
    let ey = -0.5 / (sigma_y * sigma_y);
    let carrier = 2.0 * PI / options.wavelength;
    let (sin_t, cos_t) = theta.sin_cos();

    let mut kernel = ImageF32::new(k, k);
    for row in 0..k {
        let y = (row as i32 - half) as f32;
        let dst = kernel.row_mut(row);
        for (col, px) in dst.iter_mut().enumerate() {
            let x = (col as i32 - half) as f32;
            let xr = x * cos_t + y * sin_t;
            let yr = -x * sin_t + y * cos_t;
            *px = (ex * xr * xr + ey * yr * yr).exp() * (carrier * xr + options.phase).cos();
        }
    }
    kernel
}

/// Generate the full bank of [`ORIENTATIONS`] kernels.
pub fn gabor_bank(options: &GaborOptions) -> Vec<ImageF32> {
    orientation_angles()
        .iter()
        .map(|&theta| gabor_kernel(options, theta))
        .collect()
}

/// Convolve every kernel of the bank with `gray`, in parallel.
pub fn apply_bank(gray: &ImageF32, kernels: &[ImageF32]) -> Vec<ImageF32> {
    kernels
        .par_iter()
        .map(|kernel| convolve_full(gray, kernel))
        .collect()
}

/// Full 2-D convolution with zero padding: output size is
/// `(h + kh − 1) × (w + kw − 1)`.
pub fn convolve_full(img: &ImageF32, kernel: &ImageF32) -> ImageF32 {
    assert!(img.w > 0 && img.h > 0, "convolution input must be non-empty");
    let (w, h) = (img.w, img.h);
    let (kw, kh) = (kernel.w, kernel.h);
    let out_w = w + kw - 1;
    let out_h = h + kh - 1;

    let mut out = ImageF32::new(out_w, out_h);
    for oy in 0..out_h {
        let ky_lo = oy.saturating_sub(h - 1);
        let ky_hi = oy.min(kh - 1);
        let out_row = out.row_mut(oy);
        for ky in ky_lo..=ky_hi {
            let src_row = img.row(oy - ky);
            let ker_row = kernel.row(ky);
            for (ox, acc) in out_row.iter_mut().enumerate() {
                let kx_lo = ox.saturating_sub(w - 1);
                let kx_hi = ox.min(kw - 1);
                let mut sum = 0.0f32;
                for kx in kx_lo..=kx_hi {
                    sum += ker_row[kx] * src_row[ox - kx];
                }
                *acc += sum;
            }
        }
    }
    out
}
