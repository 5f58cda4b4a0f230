//! Configuration types and CLI options.
//!
//! This module defines the command-line surface and the enums used for
//! argument parsing.

use std::net::IpAddr;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_PROBE_ATTEMPTS, DEFAULT_PROBE_PORT, DNS_TIMEOUT_SECS, TCP_CONNECT_TIMEOUT_SECS,
};

/// Logging level for the application.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Address family requested from the DNS servers.
///
/// Selected by the `-t` flag: the literal string `"6"` requests AAAA (IPv6)
/// answers; any other value, including the default `"4"`, requests A (IPv4).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddressFamily {
    /// 4-byte IPv4 addresses (A records)
    V4,
    /// 16-byte IPv6 addresses (AAAA records)
    V6,
}

impl AddressFamily {
    /// Maps the `-t` query-type string to a family.
    ///
    /// Deliberately permissive: only `"6"` selects IPv6, everything else
    /// falls back to IPv4.
    pub fn from_query_type(query_type: &str) -> Self {
        if query_type == "6" {
            AddressFamily::V6
        } else {
            AddressFamily::V4
        }
    }

    /// Whether `ip` belongs to this family.
    ///
    /// Matching is purely on the address representation: an IPv4-mapped IPv6
    /// answer still counts as IPv6.
    pub fn matches(&self, ip: &IpAddr) -> bool {
        match self {
            AddressFamily::V4 => ip.is_ipv4(),
            AddressFamily::V6 => ip.is_ipv6(),
        }
    }
}

/// Command-line configuration.
///
/// `domain` and `servers` are required for a run but are validated manually in
/// `main` rather than by clap, so the missing-parameter path can print the
/// full usage text to stdout and exit with status 1.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "dns_tcping",
    about = "Performs DNS queries for a domain using the provided DNS servers,\n\
             then TCPings the resolved IP address. Results include DNS query\n\
             time and TCPing latency for each server.",
    after_help = "Example:\n  dns_tcping -d www.example.com -s 1.1.1.1,8.8.8.8,223.5.5.5 -t 4"
)]
pub struct Config {
    /// Domain to query (required)
    #[arg(short = 'd', long = "domain")]
    pub domain: Option<String>,

    /// Comma-separated list of DNS servers (required)
    #[arg(short = 's', long = "servers", value_delimiter = ',')]
    pub servers: Vec<String>,

    /// Query type: 4 for A (IPv4), 6 for AAAA (IPv6)
    #[arg(short = 't', long = "query-type", default_value = "4")]
    pub query_type: String,

    /// TCP port probed on each resolved address
    #[arg(long, default_value_t = DEFAULT_PROBE_PORT)]
    pub probe_port: u16,

    /// TCP connection attempts averaged per probe (at least 1)
    #[arg(long, default_value_t = DEFAULT_PROBE_ATTEMPTS, value_parser = clap::value_parser!(u32).range(1..))]
    pub probe_attempts: u32,

    /// DNS query timeout in seconds, applied per transport attempt
    /// (two attempts are made per server)
    #[arg(long, default_value_t = DNS_TIMEOUT_SECS)]
    pub dns_timeout_secs: u64,

    /// TCP connection timeout in seconds per probe attempt
    #[arg(long, default_value_t = TCP_CONNECT_TIMEOUT_SECS)]
    pub connect_timeout_secs: u64,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Config {
    /// Whether both required parameters are present.
    ///
    /// Empty values count as missing: `-d ""` and `-s ""` behave like
    /// absent flags, not like a list containing an empty server.
    pub fn has_required_params(&self) -> bool {
        self.domain.as_deref().is_some_and(|d| !d.is_empty())
            && self.servers.iter().any(|s| !s.trim().is_empty())
    }

    /// The requested address family, derived from `query_type`.
    pub fn family(&self) -> AddressFamily {
        AddressFamily::from_query_type(&self.query_type)
    }
}
