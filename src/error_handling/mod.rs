//! Error handling: the crate's error taxonomy.

mod types;

pub use types::{InitializationError, ProbeError, ResolutionError};
