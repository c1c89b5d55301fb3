//! Parameter types for the saliency pipeline.
//!
//! Defaults reproduce the canonical algorithm constants. The scale-pair
//! catalog is deliberately not a parameter; it is an invariant of the
//! center-surround architecture (see [`crate::conspicuity::SCALE_PAIRS`]).

use crate::gabor::GaborOptions;
use crate::pyramid::PYRAMID_LEVELS;
use serde::Deserialize;

/// Pipeline-wide parameters.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct SaliencyParams {
    /// Pyramid depth per feature channel. Must exceed the deepest surround
    /// level of the scale-pair catalog.
    pub pyramid_levels: usize,
    /// Gabor bank constants.
    pub gabor: GaborOptions,
}

impl Default for SaliencyParams {
    fn default() -> Self {
        Self {
            pyramid_levels: PYRAMID_LEVELS,
            gabor: GaborOptions::default(),
        }
    }
}
