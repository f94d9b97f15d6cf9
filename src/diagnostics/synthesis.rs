use serde::{Deserialize, Serialize};

/// Outcome of a single resynthesis call.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SynthesisReport {
    /// Detail value as requested by the caller.
    pub requested_detail: f64,
    /// Detail value after clamping into `[0, 1]`.
    pub detail: f64,
    pub level_index: usize,
    pub level_resolution: usize,
    pub elapsed_ms: f64,
}
