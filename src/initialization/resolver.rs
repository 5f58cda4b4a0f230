//! DNS resolver construction.
//!
//! Builds a resolver pinned to a single user-supplied server instead of the
//! system configuration.

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use hickory_resolver::config::{
    LookupIpStrategy, NameServerConfig, Protocol, ResolverConfig, ResolverOpts,
};
use hickory_resolver::TokioAsyncResolver;

use crate::config::DNS_PORT;

/// Builds a resolver whose only nameserver is `server:53` over UDP.
///
/// The configuration starts empty (`ResolverConfig::new()`), so system
/// resolvers, search domains, and the hosts file are all bypassed; the query
/// goes to the given server and nowhere else. Both A and AAAA answers are
/// requested so the caller can filter by family.
///
/// `query_timeout` bounds each transport attempt; two attempts are made
/// before the lookup is reported as failed, so the worst case is roughly
/// twice the configured timeout.
pub fn init_resolver_for(server: IpAddr, query_timeout: Duration) -> TokioAsyncResolver {
    let mut config = ResolverConfig::new();
    config.add_name_server(NameServerConfig::new(
        SocketAddr::new(server, DNS_PORT),
        Protocol::Udp,
    ));

    let mut opts = ResolverOpts::default();
    opts.timeout = query_timeout;
    opts.attempts = 2;
    // No search domain appending; the domain is queried as given.
    opts.ndots = 0;
    opts.use_hosts_file = false;
    opts.ip_strategy = LookupIpStrategy::Ipv4AndIpv6;

    TokioAsyncResolver::tokio(config, opts)
}
