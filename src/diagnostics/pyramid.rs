use crate::pyramid::Pyramid;
use serde::{Deserialize, Serialize};

/// Statistics for a single pyramid level.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PyramidLevelReport {
    pub level_index: usize,
    pub width: usize,
    pub height: usize,
    pub mean_value: f32,
}

/// Construction details of the intensity pyramid.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PyramidStage {
    pub elapsed_ms: f64,
    pub levels: Vec<PyramidLevelReport>,
}

impl PyramidStage {
    pub fn from_pyramid(pyramid: &Pyramid, elapsed_ms: f64) -> Self {
        let levels = pyramid
            .levels
            .iter()
            .enumerate()
            .map(|(level_index, lvl)| PyramidLevelReport {
                level_index,
                width: lvl.w,
                height: lvl.h,
                mean_value: lvl.mean(),
            })
            .collect();
        Self { elapsed_ms, levels }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::ImageF32;

    #[test]
    fn per_level_report_matches_pyramid_shape() {
        let pyramid = Pyramid::build(ImageF32::from_vec(32, 32, vec![0.25; 32 * 32]));
        let stage = PyramidStage::from_pyramid(&pyramid, 1.0);
        assert_eq!(stage.levels.len(), pyramid.levels.len());
        assert_eq!(stage.levels[0].width, 32);
        assert!((stage.levels[3].mean_value - 0.25).abs() < 1e-5);
    }
}
