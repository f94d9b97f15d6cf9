use super::timing::TimingBreakdown;
use super::to_array;
use crate::pyramid::{Pyramid, PyramidLevel};
use serde::{Deserialize, Serialize};

/// Statistics for a single level of a decomposed pyramid.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LevelStatsReport {
    pub level_index: usize,
    pub resolution: usize,
    pub color_mean: [f32; 4],
    pub color_std: [f32; 4],
    pub delta_mean: [f32; 4],
    pub delta_std: [f32; 4],
}

impl LevelStatsReport {
    pub fn from_level(level_index: usize, level: &PyramidLevel) -> Self {
        Self {
            level_index,
            resolution: level.resolution,
            color_mean: to_array(&level.color.mean),
            color_std: to_array(&level.color.std),
            delta_mean: to_array(&level.delta.mean),
            delta_std: to_array(&level.delta.std),
        }
    }
}

/// Decomposition details captured by the engine for one upload.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecompositionReport {
    pub resolution: usize,
    pub global_mean: [f32; 4],
    pub levels: Vec<LevelStatsReport>,
    pub timing: TimingBreakdown,
}

impl DecompositionReport {
    pub fn from_pyramid(pyramid: &Pyramid, timing: TimingBreakdown) -> Self {
        let levels: Vec<LevelStatsReport> = pyramid
            .levels
            .iter()
            .enumerate()
            .map(|(i, level)| LevelStatsReport::from_level(i, level))
            .collect();
        let global_mean = levels.first().map_or([0.0; 4], |l| l.color_mean);
        Self {
            resolution: pyramid.resolution(),
            global_mean,
            levels,
            timing,
        }
    }
}
