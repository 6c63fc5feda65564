//! SMTP connection probe
//!
//! Reachability check for a sending profile's host/port. The probe is
//! genuinely asynchronous and fallible: it opens a TCP connection under a
//! bounded timeout and reports a tagged failure instead of assuming
//! success.

use std::time::{Duration, Instant};

use thiserror::Error;
use tokio::net::TcpStream;
use tokio::time::timeout;

/// Default upper bound for a connection test
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConnectionTestError {
    #[error("Connection test timed out after {0:?}")]
    Timeout(Duration),

    // A bare TCP reach check cannot observe credential rejection; a full
    // SMTP handshake maps 535 replies here.
    #[error("Authentication rejected: {0}")]
    Auth(String),

    #[error("Network error: {0}")]
    Network(String),
}

/// Successful probe report
#[derive(Debug, Clone)]
pub struct ConnectionTest {
    pub latency: Duration,
}

/// Outcome of a connection test; a failed test is a reportable result,
/// never fatal to the caller
pub type ConnectionTestResult = Result<ConnectionTest, ConnectionTestError>;

/// Async reachability probe with a bounded timeout
#[derive(Debug, Clone)]
pub struct SmtpProbe {
    timeout: Duration,
}

impl SmtpProbe {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Attempt to reach the SMTP endpoint within the configured timeout
    pub async fn test_connection(&self, host: &str, port: u16) -> ConnectionTestResult {
        let addr = format!("{}:{}", host, port);
        let started = Instant::now();

        tracing::debug!(addr = %addr, timeout = ?self.timeout, "probing SMTP endpoint");

        match timeout(self.timeout, TcpStream::connect(&addr)).await {
            Err(_) => {
                tracing::warn!(addr = %addr, "SMTP connection test timed out");
                Err(ConnectionTestError::Timeout(self.timeout))
            }
            Ok(Err(e)) => {
                tracing::warn!(addr = %addr, error = %e, "SMTP connection test failed");
                Err(ConnectionTestError::Network(e.to_string()))
            }
            Ok(Ok(_stream)) => {
                let latency = started.elapsed();
                tracing::info!(addr = %addr, latency = ?latency, "SMTP endpoint reachable");
                Ok(ConnectionTest { latency })
            }
        }
    }
}

impl Default for SmtpProbe {
    fn default() -> Self {
        Self::new(DEFAULT_PROBE_TIMEOUT)
    }
}
