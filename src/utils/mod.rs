//! Shared helpers.

mod timing;

pub use timing::{duration_to_ms_rounded, mean_duration};
