use super::pyramid::PyramidStage;
use super::stages::{ChannelStage, ConspicuityStage, GaborStage};
use super::timing::TimingBreakdown;
use crate::types::SaliencyResult;
use serde::{Deserialize, Serialize};

/// Input dimensions as seen by the pipeline.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
    pub pyramid_levels: usize,
}

/// Structured per-stage trace of one saliency run; serializable for tooling.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineTrace {
    pub input: InputDescriptor,
    pub timings: TimingBreakdown,
    pub channels: ChannelStage,
    pub gabor: GaborStage,
    pub pyramid: PyramidStage,
    pub conspicuity: ConspicuityStage,
}

/// Full result of a diagnostic run: the maps plus the trace.
#[derive(Clone, Debug)]
pub struct SaliencyReport {
    pub result: SaliencyResult,
    pub trace: PipelineTrace,
}
