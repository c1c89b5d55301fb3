//! Result types returned by the saliency pipeline.

use crate::image::ImageF32;

/// Output of one saliency computation.
///
/// The saliency map shares the input's resolution; its scale is relative
/// (non-negative, unnormalized). The orientation-energy planes and the
/// kernels that produced them are returned alongside so callers can persist
/// every intermediate the way the grayscale tool chain expects.
#[derive(Clone, Debug)]
pub struct SaliencyResult {
    /// Final saliency map, `input W × input H`.
    pub saliency: ImageF32,
    /// Luma grayscale the Gabor bank ran on.
    pub grayscale: ImageF32,
    /// One full-convolution response plane per bank orientation.
    pub orientation_energy: Vec<ImageF32>,
    /// The Gabor kernels, in orientation order.
    pub gabor_kernels: Vec<ImageF32>,
    /// Wall-clock latency of the computation in milliseconds.
    pub latency_ms: f64,
}
