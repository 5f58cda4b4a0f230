//! Named defaults for the measurement knobs.
//!
//! Every value here used to be a bare literal in the measurement loops; they
//! are named so the CLI can override them and tests can exercise them
//! independently.

use std::time::Duration;

/// UDP port DNS servers are queried on.
pub const DNS_PORT: u16 = 53;

/// DNS query timeout in seconds.
///
/// Bounds the whole lookup against one server so an unresponsive server
/// cannot stall the run indefinitely. Overridable via `--dns-timeout-secs`.
pub const DNS_TIMEOUT_SECS: u64 = 5;

/// TCP port probed on the resolved address. Overridable via `--probe-port`.
pub const DEFAULT_PROBE_PORT: u16 = 80;

/// Number of TCP connection attempts averaged per probe.
pub const DEFAULT_PROBE_ATTEMPTS: u32 = 4;

/// TCP connection timeout in seconds for each probe attempt.
pub const TCP_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Pause between consecutive probe attempts (not applied after the last).
///
/// Keeps the probe from bursting connections at the target, which can trigger
/// rate limiting and skew the measured latencies.
pub const PROBE_PAUSE: Duration = Duration::from_millis(600);
