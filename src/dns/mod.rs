//! DNS resolution against user-supplied servers.

mod resolution;
#[cfg(test)]
mod tests;

pub use resolution::resolve_with_server;
