//! Error type definitions.
//!
//! One error enum per failure domain: startup, DNS resolution, TCP probing.
//! Resolution and probe errors are recovered per server by the driver and
//! never terminate the run.

use std::io;
use std::time::Duration;

use hickory_resolver::error::ResolveError;
use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Failure to resolve a domain against one DNS server.
#[derive(Error, Debug)]
pub enum ResolutionError {
    /// The `-s` entry is not an IPv4 or IPv6 literal.
    #[error("invalid DNS server address '{0}'")]
    InvalidServer(String),

    /// The lookup itself failed: transport error, timeout, or an empty
    /// answer set (surfaced by the resolver as a no-records error).
    #[error(transparent)]
    Lookup(#[from] ResolveError),

    /// The server answered, but with no address of the requested family.
    #[error("no matching IP found")]
    NoMatchingIp,
}

/// Failure of a TCP latency probe.
///
/// Probing is fail-fast: the error names the attempt that failed, and no
/// further attempts were made after it.
#[derive(Error, Debug)]
pub enum ProbeError {
    /// A connection attempt was rejected (refused, unreachable, reset, ...).
    #[error("connect to {addr} failed on attempt {attempt}: {source}")]
    Connect {
        /// Endpoint in `ip:port` / `[ip]:port` form
        addr: String,
        /// 1-based attempt number that failed
        attempt: u32,
        /// Underlying socket error
        #[source]
        source: io::Error,
    },

    /// A connection attempt did not complete within the configured timeout.
    #[error("connect to {addr} timed out after {timeout:?} on attempt {attempt}")]
    Timeout {
        /// Endpoint in `ip:port` / `[ip]:port` form
        addr: String,
        /// 1-based attempt number that failed
        attempt: u32,
        /// Configured per-attempt connect timeout
        timeout: Duration,
    },
}

impl ProbeError {
    /// 1-based number of the attempt that aborted the probe.
    pub fn attempt(&self) -> u32 {
        match self {
            ProbeError::Connect { attempt, .. } | ProbeError::Timeout { attempt, .. } => *attempt,
        }
    }
}
