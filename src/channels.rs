//! Feature channel extraction from planar RGB input.
//!
//! Produces the broadly-tuned color-opponency planes and the intensity plane
//! feeding the pyramid stage, plus the luma grayscale used by the Gabor bank.
//!
//! Raw color is normalized by intensity before the opponency differences are
//! taken, but only where intensity exceeds 10% of its global maximum; darker
//! pixels are zeroed so near-black regions are not amplified by a near-zero
//! denominator. An all-black image therefore yields all-zero opponency
//! planes instead of dividing by zero.

use crate::image::{ImageF32, ImageRgbF32};
use log::debug;

/// Fraction of the intensity peak below which color is considered unreliable.
pub const INTENSITY_GATE: f32 = 0.1;

/// Luma weights applied to raw RGB for the grayscale plane.
pub const LUMA_WEIGHTS: [f32; 3] = [0.299, 0.587, 0.114];

/// Opponency planes and the intensity plane derived from one RGB image.
#[derive(Clone, Debug)]
pub struct ChannelSet {
    /// Red opponency `r − (g+b)/2`
    pub red: ImageF32,
    /// Green opponency `g − (r+b)/2`
    pub green: ImageF32,
    /// Blue opponency `b − (r+g)/2`
    pub blue: ImageF32,
    /// Yellow opponency `(r+g)/2 − |r−g|/2 − b`
    pub yellow: ImageF32,
    /// Intensity `(r+g+b)/3` of the raw planes
    pub intensity: ImageF32,
    /// Gate threshold actually applied (`INTENSITY_GATE * max(intensity)`)
    pub gate_threshold: f32,
}

/// Decompose an RGB image into opponency planes and intensity.
pub fn extract_channels(image: &ImageRgbF32) -> ChannelSet {
    let (w, h) = (image.width(), image.height());
    let mut intensity = ImageF32::new(w, h);
    for i in 0..intensity.data.len() {
        intensity.data[i] = (image.r.data[i] + image.g.data[i] + image.b.data[i]) / 3.0;
    }

    let threshold = INTENSITY_GATE * intensity.peak();
    debug!("extract_channels w={} h={} gate_threshold={:.4}", w, h, threshold);

    let rn = gate_by_intensity(&image.r, &intensity, threshold);
    let gn = gate_by_intensity(&image.g, &intensity, threshold);
    let bn = gate_by_intensity(&image.b, &intensity, threshold);

    let mut red = ImageF32::new(w, h);
    let mut green = ImageF32::new(w, h);
    let mut blue = ImageF32::new(w, h);
    let mut yellow = ImageF32::new(w, h);
    for i in 0..red.data.len() {
        let (r, g, b) = (rn.data[i], gn.data[i], bn.data[i]);
        red.data[i] = r - (g + b) / 2.0;
        green.data[i] = g - (r + b) / 2.0;
        blue.data[i] = b - (r + g) / 2.0;
        yellow.data[i] = (r + g) / 2.0 - (r - g).abs() / 2.0 - b;
    }

    ChannelSet {
        red,
        green,
        blue,
        yellow,
        intensity,
        gate_threshold: threshold,
    }
}

/// Luma grayscale of the raw (unnormalized) RGB planes.
pub fn luma_grayscale(image: &ImageRgbF32) -> ImageF32 {
    let mut gray = ImageF32::new(image.width(), image.height());
    let [wr, wg, wb] = LUMA_WEIGHTS;
    for i in 0..gray.data.len() {
        gray.data[i] = wr * image.r.data[i] + wg * image.g.data[i] + wb * image.b.data[i];
    }
    gray
}

fn gate_by_intensity(channel: &ImageF32, intensity: &ImageF32, threshold: f32) -> ImageF32 {
    let mut out = ImageF32::new(channel.w, channel.h);
    for i in 0..out.data.len() {
        let denom = intensity.data[i];
        out.data[i] = if denom > threshold {
            channel.data[i] / denom
        } else {
            0.0
        };
    }
    out
}
