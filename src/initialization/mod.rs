//! Startup wiring: logger and resolver construction.

mod logger;
mod resolver;

pub use logger::init_logger_with;
pub use resolver::init_resolver_for;
