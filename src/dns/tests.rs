//! DNS module tests.

use std::time::Duration;

use super::*;
use crate::config::AddressFamily;
use crate::error_handling::ResolutionError;

/// Short timeout so failure-path tests don't hang on dead transports.
const TEST_TIMEOUT: Duration = Duration::from_secs(2);

#[tokio::test]
async fn rejects_server_that_is_not_an_ip_literal() {
    let result =
        resolve_with_server("example.com", "dns.google", AddressFamily::V4, TEST_TIMEOUT).await;
    match result {
        Err(ResolutionError::InvalidServer(s)) => assert_eq!(s, "dns.google"),
        other => panic!("expected InvalidServer, got {other:?}"),
    }
}

#[tokio::test]
async fn server_string_is_trimmed_before_parsing() {
    // Comma-split server lists may carry whitespace; " 203.0.113.1" must not
    // be rejected as malformed. 203.0.113.0/24 is TEST-NET-3, so the lookup
    // itself fails, but it must get past address parsing.
    let result =
        resolve_with_server("example.com", " 203.0.113.1", AddressFamily::V4, TEST_TIMEOUT).await;
    assert!(
        !matches!(result, Err(ResolutionError::InvalidServer(_))),
        "whitespace-padded IP literal should parse"
    );
}

#[tokio::test]
async fn unresponsive_server_fails_within_the_query_timeout() {
    // TEST-NET-3 address; nothing answers there.
    let started = std::time::Instant::now();
    let result =
        resolve_with_server("example.com", "203.0.113.1", AddressFamily::V4, TEST_TIMEOUT).await;
    assert!(matches!(result, Err(ResolutionError::Lookup(_))));
    // Each of the two transport attempts is bounded by the timeout.
    assert!(
        started.elapsed() < TEST_TIMEOUT * 2 + Duration::from_secs(3),
        "query must be bounded by the configured timeout"
    );
}

#[test]
fn no_matching_ip_error_has_the_documented_message() {
    assert_eq!(ResolutionError::NoMatchingIp.to_string(), "no matching IP found");
}

#[tokio::test]
#[ignore = "requires network access to 1.1.1.1"]
async fn resolves_ipv4_against_public_server() {
    let ip = resolve_with_server(
        "example.com",
        "1.1.1.1",
        AddressFamily::V4,
        Duration::from_secs(5),
    )
    .await
    .expect("example.com should resolve via 1.1.1.1");
    let parsed: std::net::IpAddr = ip.parse().expect("result should be an IP literal");
    assert!(parsed.is_ipv4());
}

#[tokio::test]
#[ignore = "requires network access to 1.1.1.1"]
async fn resolves_ipv6_against_public_server() {
    let ip = resolve_with_server(
        "example.com",
        "1.1.1.1",
        AddressFamily::V6,
        Duration::from_secs(5),
    )
    .await
    .expect("example.com should have AAAA records via 1.1.1.1");
    let parsed: std::net::IpAddr = ip.parse().expect("result should be an IP literal");
    assert!(parsed.is_ipv6());
}
