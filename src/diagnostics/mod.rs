//! Diagnostics data model exposed by the saliency pipeline.
//!
//! `SaliencyReport` is the entry point returned by
//! `SaliencyDetector::process_with_diagnostics`, bundling the computed maps
//! with a `PipelineTrace` describing every stage the pipeline executed.

pub mod pyramid;
pub mod report;
pub mod stages;
pub mod timing;

pub use pyramid::{PyramidLevelReport, PyramidStage};
pub use report::{InputDescriptor, PipelineTrace, SaliencyReport};
pub use stages::{ChannelStage, ConspicuityStage, GaborStage};
pub use timing::{StageTiming, TimingBreakdown};
