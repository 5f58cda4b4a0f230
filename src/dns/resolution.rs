//! Domain resolution against an explicit DNS server.

use std::net::IpAddr;
use std::time::Duration;

use crate::config::AddressFamily;
use crate::error_handling::ResolutionError;
use crate::initialization::init_resolver_for;

/// Resolves `domain` by querying exactly one DNS server.
///
/// The server string must be an IPv4 or IPv6 literal; it is queried directly
/// on UDP port 53, bypassing the system resolver configuration. Both A and
/// AAAA answers are requested, and the first one matching the requested
/// family is returned as a string.
///
/// A fresh resolver is built per call, so nothing is cached across calls.
///
/// # Errors
///
/// Returns [`ResolutionError`] when the server string is not an IP literal,
/// the lookup fails (transport error, timeout, empty answer set), or no
/// answer matches the requested family.
pub async fn resolve_with_server(
    domain: &str,
    server: &str,
    family: AddressFamily,
    query_timeout: Duration,
) -> Result<String, ResolutionError> {
    let server_ip: IpAddr = server
        .trim()
        .parse()
        .map_err(|_| ResolutionError::InvalidServer(server.to_string()))?;

    let resolver = init_resolver_for(server_ip, query_timeout);
    let response = resolver.lookup_ip(domain).await?;

    let ip = response
        .iter()
        .find(|ip| family.matches(ip))
        .ok_or(ResolutionError::NoMatchingIp)?;

    log::debug!("{server} answered {domain} with {ip}");
    Ok(ip.to_string())
}
