use serde::{Deserialize, Serialize};

/// Channel-extraction details.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelStage {
    pub elapsed_ms: f64,
    /// Global maximum of the intensity plane.
    pub intensity_peak: f32,
    /// Intensity gate actually applied to the color planes.
    pub gate_threshold: f32,
}

/// Gabor bank details.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GaborStage {
    pub elapsed_ms: f64,
    pub kernel_size: usize,
    pub orientations_deg: Vec<f32>,
}

/// Center-surround, normalization and combination details.
///
/// The per-feature peaks are taken from the summed conspicuity maps before
/// the final cross-feature normalization; a zero peak means the feature
/// contributed nothing (e.g. color on an achromatic image).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConspicuityStage {
    pub center_surround_ms: f64,
    pub normalize_ms: f64,
    pub combine_ms: f64,
    /// Raw maps produced across all channels (6 per comparison).
    pub raw_maps: usize,
    pub intensity_peak: f32,
    pub color_peak: f32,
    pub orientation_peak: f32,
}
