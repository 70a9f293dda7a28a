use async_trait::async_trait;
use std::time::Duration;

use crate::error::{GeneratorError, Result};

/// A raw upstream exchange: whatever came back over the wire, before any
/// status or body interpretation.
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: u16,
    pub body: String,
}

impl UpstreamResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// One GET exchange against the generation service.
///
/// Implementations report transport-level problems only; interpreting the
/// status code and body is the caller's job.
#[async_trait]
pub trait UpstreamTransport: Send + Sync {
    async fn fetch(&self, url: &str, query: &[(&str, String)]) -> Result<UpstreamResponse>;
}

/// reqwest-backed transport with a per-attempt timeout.
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GeneratorError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl UpstreamTransport for HttpTransport {
    async fn fetch(&self, url: &str, query: &[(&str, String)]) -> Result<UpstreamResponse> {
        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| GeneratorError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| GeneratorError::Network(e.to_string()))?;

        Ok(UpstreamResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_covers_the_whole_2xx_range() {
        let response = UpstreamResponse {
            status: 204,
            body: String::new(),
        };
        assert!(response.is_success());

        let response = UpstreamResponse {
            status: 301,
            body: String::new(),
        };
        assert!(!response.is_success());
    }
}
