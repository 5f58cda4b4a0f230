//! TCP connection-latency probing ("TCPing").
//!
//! Measures how long it takes to establish a TCP connection to a resolved
//! address, averaged over a fixed number of attempts. No data is exchanged;
//! each connection is dropped as soon as it is established.

use std::time::Duration;

use tokio::net::TcpStream;
use tokio::time::{sleep, timeout, Instant};

use crate::config::{DEFAULT_PROBE_ATTEMPTS, PROBE_PAUSE, TCP_CONNECT_TIMEOUT_SECS};
use crate::error_handling::ProbeError;
use crate::utils::{duration_to_ms_rounded, mean_duration};

/// Tuning knobs for a latency probe.
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    /// Number of sequential connection attempts (default 4)
    pub attempts: u32,
    /// Per-attempt connection timeout (default 5 s)
    pub connect_timeout: Duration,
    /// Pause between attempts, skipped after the last (default 600 ms)
    pub pause_between: Duration,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        ProbeConfig {
            attempts: DEFAULT_PROBE_ATTEMPTS,
            connect_timeout: Duration::from_secs(TCP_CONNECT_TIMEOUT_SECS),
            pause_between: PROBE_PAUSE,
        }
    }
}

/// Formats an IP literal and port as a connectable endpoint.
///
/// IPv6 literals (anything containing `:`) are wrapped in brackets so the
/// port separator stays unambiguous; IPv4 literals are used as-is.
pub fn format_endpoint(ip: &str, port: u16) -> String {
    if ip.contains(':') {
        format!("[{ip}]:{port}")
    } else {
        format!("{ip}:{port}")
    }
}

/// Measures the mean TCP connection-establishment latency to `ip:port`.
///
/// Performs `config.attempts` sequential connects, pausing
/// `config.pause_between` between attempts. On full success, returns the
/// arithmetic mean in milliseconds, rounded half-up to two decimals.
///
/// # Errors
///
/// Fail-fast: the first attempt that is rejected or exceeds
/// `config.connect_timeout` aborts the probe with a [`ProbeError`] naming
/// that attempt. Timings from earlier successful attempts are discarded and
/// no further attempts are made. One transient failure therefore voids the
/// whole sample; this is deliberate, the probe measures sustained
/// reachability, not best-effort averages.
pub async fn tcping(ip: &str, port: u16, config: &ProbeConfig) -> Result<f64, ProbeError> {
    let addr = format_endpoint(ip, port);
    let mut samples = Vec::with_capacity(config.attempts as usize);

    for attempt in 1..=config.attempts {
        let start = Instant::now();
        let stream = timeout(config.connect_timeout, TcpStream::connect(&addr))
            .await
            .map_err(|_| ProbeError::Timeout {
                addr: addr.clone(),
                attempt,
                timeout: config.connect_timeout,
            })?
            .map_err(|source| ProbeError::Connect {
                addr: addr.clone(),
                attempt,
                source,
            })?;
        samples.push(start.elapsed());
        drop(stream);

        if attempt < config.attempts {
            sleep(config.pause_between).await;
        }
    }

    log::debug!("probe of {addr} completed {} attempts", samples.len());
    Ok(duration_to_ms_rounded(mean_duration(&samples)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tokio::net::TcpListener;

    fn fast_config(attempts: u32) -> ProbeConfig {
        ProbeConfig {
            attempts,
            connect_timeout: Duration::from_secs(1),
            pause_between: Duration::from_millis(20),
        }
    }

    #[test]
    fn ipv4_endpoint_is_unbracketed() {
        assert_eq!(format_endpoint("93.184.215.14", 80), "93.184.215.14:80");
    }

    #[test]
    fn ipv6_endpoint_is_bracketed() {
        assert_eq!(
            format_endpoint("2606:2800:21f::1", 80),
            "[2606:2800:21f::1]:80"
        );
        assert_eq!(format_endpoint("::1", 443), "[::1]:443");
    }

    #[tokio::test]
    async fn probe_makes_every_attempt_on_success() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let accepted = Arc::new(AtomicUsize::new(0));

        let counter = accepted.clone();
        let server = tokio::spawn(async move {
            loop {
                let (stream, _) = listener.accept().await.unwrap();
                counter.fetch_add(1, Ordering::SeqCst);
                drop(stream);
            }
        });

        let result = tcping("127.0.0.1", port, &fast_config(3)).await;

        // The last connect can complete via the accept backlog before the
        // server task observes it; give the counter a moment to catch up.
        for _ in 0..50 {
            if accepted.load(Ordering::SeqCst) == 3 {
                break;
            }
            sleep(Duration::from_millis(10)).await;
        }
        server.abort();

        let ms = result.expect("probe against live listener should succeed");
        assert!(ms >= 0.0);
        assert_eq!(accepted.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn probe_fails_fast_on_refused_port() {
        // Bind then drop to find a port with nothing listening on it.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let err = tcping("127.0.0.1", port, &fast_config(4))
            .await
            .expect_err("probe against closed port should fail");
        assert_eq!(err.attempt(), 1, "first attempt should abort the probe");
    }

    #[tokio::test]
    async fn probe_aborts_mid_sample_when_listener_goes_away() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();

        // Serve exactly two connections, then close the listener.
        let server = tokio::spawn(async move {
            for _ in 0..2 {
                let (stream, _) = listener.accept().await.unwrap();
                drop(stream);
            }
        });

        let err = tcping("127.0.0.1", port, &fast_config(4))
            .await
            .expect_err("probe should fail once the listener is gone");
        server.await.unwrap();

        // Two successes, third attempt refused; fourth never made.
        assert_eq!(err.attempt(), 3);
        assert!(matches!(err, ProbeError::Connect { .. }));
    }
}
