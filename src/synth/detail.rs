//! Mapping from a continuous detail value to a discrete pyramid level.

/// Clamp a detail value into `[0, 1]`; NaN maps to `0`.
pub fn clamp_detail(t: f64) -> f64 {
    if t.is_nan() {
        0.0
    } else {
        t.clamp(0.0, 1.0)
    }
}

/// Level index selected by detail value `t` for a pyramid of `level_count`
/// levels: `round_half_even(t × (level_count − 1))`, clamped to the valid
/// index range.
pub fn level_index_for_detail(t: f64, level_count: usize) -> usize {
    if level_count == 0 {
        return 0;
    }
    let max_index = (level_count - 1) as f64;
    let scaled = (clamp_detail(t) * max_index).round_ties_even();
    scaled.clamp(0.0, max_index) as usize
}
