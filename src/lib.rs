#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod detector;
pub mod diagnostics;
pub mod image;
pub mod types;

// Building blocks of the pipeline – public for tools and experiments, but
// considered unstable internals.
pub mod channels;
pub mod conspicuity;
pub mod gabor;
pub mod pyramid;

// --- High-level re-exports -------------------------------------------------

// Main entry points: detector + results.
pub use crate::detector::{SaliencyDetector, SaliencyParams};
pub use crate::types::SaliencyResult;

// High-level diagnostics returned by the detector.
pub use crate::diagnostics::{PipelineTrace, SaliencyReport};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
pub mod prelude {
    pub use crate::image::{ImageF32, ImageRgbF32};
    pub use crate::{SaliencyDetector, SaliencyParams, SaliencyResult};
}
