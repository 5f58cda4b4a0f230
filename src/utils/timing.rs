//! Duration aggregation helpers.

use std::time::Duration;

/// Arithmetic mean of a set of duration samples.
///
/// Returns `Duration::ZERO` for an empty slice.
pub fn mean_duration(samples: &[Duration]) -> Duration {
    if samples.is_empty() {
        return Duration::ZERO;
    }
    samples.iter().sum::<Duration>() / samples.len() as u32
}

/// Converts a duration to milliseconds rounded half-up to two decimals.
pub fn duration_to_ms_rounded(duration: Duration) -> f64 {
    (duration.as_secs_f64() * 1000.0 * 100.0).round() / 100.0
}
