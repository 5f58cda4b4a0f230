//! Configuration: CLI options and named defaults.

pub mod constants;
mod types;

pub use constants::*;
pub use types::{AddressFamily, Config, LogFormat, LogLevel};
