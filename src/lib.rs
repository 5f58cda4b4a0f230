//! dns_tcping library: DNS query timing and TCP connect-latency probing.
//!
//! Resolves a domain against each DNS server in a user-supplied list,
//! reporting the wall-clock latency of the query itself and the mean TCP
//! connection-establishment latency to the resolved address.
//!
//! # Example
//!
//! ```no_run
//! use dns_tcping::{run_diagnostics, Config, Parser};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     domain: Some("example.com".into()),
//!     servers: vec!["1.1.1.1".into(), "9.9.9.9".into()],
//!     ..Config::parse_from(["dns_tcping"])
//! };
//!
//! let report = run_diagnostics(config).await?;
//! println!("{} of {} servers answered", report.resolved, report.total_servers);
//! # Ok(())
//! # }
//! ```
//!
//! Requires a Tokio runtime.

#![warn(missing_docs)]

pub mod config;
mod dns;
mod error_handling;
pub mod initialization;
mod probe;
mod utils;

// Re-export public API
pub use clap::Parser;
pub use config::{AddressFamily, Config, LogFormat, LogLevel};
pub use error_handling::{InitializationError, ProbeError, ResolutionError};
pub use probe::{format_endpoint, tcping, ProbeConfig};
pub use run::{run_diagnostics, RunReport};

// Internal run module (contains the per-server driver loop)
mod run {
    use std::time::Duration;

    use anyhow::{Context, Result};
    use log::{debug, info};
    use tokio::time::Instant;

    use crate::config::Config;
    use crate::dns::resolve_with_server;
    use crate::probe::{tcping, ProbeConfig};

    /// Summary of a completed diagnostic run.
    #[derive(Debug, Clone)]
    pub struct RunReport {
        /// Number of servers in the input list
        pub total_servers: usize,
        /// Servers that answered with an address of the requested family
        pub resolved: usize,
        /// Resolved addresses whose latency probe completed
        pub probed: usize,
        /// Elapsed wall-clock time in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs the full diagnostic pass over the configured server list.
    ///
    /// Servers are processed sequentially in input order. For each one, the
    /// domain is resolved against that server (the query itself is timed),
    /// and on success the resolved address is TCPinged on the configured
    /// port. The per-server report is printed to stdout as it is produced.
    ///
    /// Resolution and probe failures are reported inline and never abort the
    /// run; the only error this function returns is a missing domain, which
    /// `main` rules out up front.
    pub async fn run_diagnostics(config: Config) -> Result<RunReport> {
        let domain = config
            .domain
            .as_deref()
            .context("domain is required")?
            .to_string();
        let family = config.family();
        let query_timeout = Duration::from_secs(config.dns_timeout_secs);
        let probe_config = ProbeConfig {
            attempts: config.probe_attempts,
            connect_timeout: Duration::from_secs(config.connect_timeout_secs),
            ..ProbeConfig::default()
        };

        info!(
            "querying {domain} ({family:?}) against {} server(s)",
            config.servers.len()
        );

        let started = Instant::now();
        let mut resolved = 0;
        let mut probed = 0;

        for server in &config.servers {
            // The query is timed whether or not it succeeds.
            let query_start = Instant::now();
            let result = resolve_with_server(&domain, server, family, query_timeout).await;
            let query_time = query_start.elapsed();

            let ip = match result {
                Ok(ip) => ip,
                Err(e) => {
                    println!("Error querying {domain} using {server}: {e}");
                    continue;
                }
            };
            resolved += 1;

            println!("DNS Server: {server}, Query time: {query_time:?}");
            println!("IP: {ip}");

            match tcping(&ip, config.probe_port, &probe_config).await {
                Ok(ms) => {
                    probed += 1;
                    println!("Average TCPing time: {ms:.2}ms");
                }
                Err(e) => println!("TCPing error: {e}"),
            }
            println!();
        }

        let report = RunReport {
            total_servers: config.servers.len(),
            resolved,
            probed,
            elapsed_seconds: started.elapsed().as_secs_f64(),
        };
        debug!(
            "run finished: {}/{} resolved, {} probed, {:.1}s",
            report.resolved, report.total_servers, report.probed, report.elapsed_seconds
        );
        Ok(report)
    }
}
