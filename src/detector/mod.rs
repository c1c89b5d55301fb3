//! Saliency detector orchestrating the multi-channel center-surround
//! pipeline.
//!
//! Overview
//! - Splits the input into color-opponency planes and intensity, and runs a
//!   Gabor bank over the luma grayscale for orientation energy.
//! - Expands every feature plane into a Gaussian pyramid.
//! - Compares fine (center) against upsampled coarse (surround) levels over
//!   the fixed scale-pair catalog, giving raw conspicuity maps.
//! - Contrast-normalizes each map so lone peaks win over texture, then
//!   resizes to a common reference size and combines per feature family
//!   (intensity, color, orientation) into the final saliency map.
//!
//! The pipeline is a pure function of the input: `process` borrows the
//! detector immutably and identical inputs give identical outputs, so one
//! detector can serve concurrent callers.
//!
//! Modules
//! - [`params`] – configuration types used by the detector and the tools.
//! - `pipeline` – the [`SaliencyDetector`] implementation.

pub mod params;
mod pipeline;

pub use params::SaliencyParams;
pub use pipeline::SaliencyDetector;
