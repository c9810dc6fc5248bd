//! Transport layer abstraction for HTTP communication.
//!
//! The default implementation uses reqwest. Tests and alternative backends
//! can plug in their own [`Transport`].

use async_trait::async_trait;
use reqwest::{Client, Request, Response};
use std::time::Duration;

use crate::error::{SesError, SesResult};

/// Sends a fully built HTTP request.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send an HTTP request and return the response.
    ///
    /// # Errors
    ///
    /// Returns `SesError::Transport` or `SesError::Timeout` if the request
    /// cannot be completed.
    async fn send(&self, request: Request) -> SesResult<Response>;
}

/// Reqwest-based transport.
///
/// Connection reuse is left to reqwest's own pool.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Create a transport with the given timeouts.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::time::Duration;
    /// use integrations_aws_ses_query::http::ReqwestTransport;
    ///
    /// # fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let transport = ReqwestTransport::new(
    ///     Duration::from_secs(10),
    ///     Duration::from_secs(5)
    /// )?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(timeout: Duration, connect_timeout: Duration) -> SesResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .tcp_keepalive(Some(Duration::from_secs(60)))
            .build()
            .map_err(|e| SesError::Configuration {
                message: format!("Failed to create HTTP client: {}", e),
                source: Some(Box::new(e)),
            })?;

        Ok(Self { client })
    }

    /// Get a reference to the underlying reqwest client.
    pub fn client(&self) -> &Client {
        &self.client
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: Request) -> SesResult<Response> {
        self.client.execute(request).await.map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reqwest_transport_creation() {
        let transport = ReqwestTransport::new(Duration::from_secs(10), Duration::from_secs(5));
        assert!(transport.is_ok());
    }

    #[tokio::test]
    async fn test_connection_failure_is_transport_error() {
        let transport =
            ReqwestTransport::new(Duration::from_secs(2), Duration::from_secs(1)).unwrap();
        // Port 9 (discard) on localhost is not expected to accept connections.
        let url = reqwest::Url::parse("http://127.0.0.1:9/").unwrap();
        let request = Request::new(reqwest::Method::POST, url);

        let err = transport.send(request).await.unwrap_err();
        assert!(matches!(
            err,
            SesError::Transport { .. } | SesError::Timeout { .. }
        ));
        assert!(err.is_retryable());
    }
}
