use std::env;
use std::time::Duration;

use crate::upstream::RetryPolicy;

/// Base URL of the hosted generation service.
pub const DEFAULT_API_URL: &str = "https://wc-guest-gen.vercel.app/";

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_RETRY_ATTEMPTS: usize = 3;
const DEFAULT_RETRY_DELAY_MS: u64 = 500;

/// Settings for talking to the generation service.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    pub api_url: String,
    pub timeout: Duration,
    pub retry_attempts: usize,
    pub retry_delay: Duration,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        UpstreamConfig {
            api_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            retry_attempts: DEFAULT_RETRY_ATTEMPTS,
            retry_delay: Duration::from_millis(DEFAULT_RETRY_DELAY_MS),
        }
    }
}

impl UpstreamConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let defaults = Self::default();

        let api_url = env::var("API_URL").unwrap_or(defaults.api_url);
        let timeout = env::var("API_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.timeout);
        let retry_attempts = env::var("API_RETRY_ATTEMPTS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.retry_attempts);
        let retry_delay = env::var("API_RETRY_DELAY_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.retry_delay);

        UpstreamConfig {
            api_url,
            timeout,
            retry_attempts,
            retry_delay,
        }
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_retries(mut self, attempts: usize, delay: Duration) -> Self {
        self.retry_attempts = attempts;
        self.retry_delay = delay;
        self
    }

    /// Full URL of the generation endpoint. A trailing slash on the base is
    /// honored; one is inserted when missing.
    pub fn endpoint(&self) -> String {
        if self.api_url.ends_with('/') {
            format!("{}gen", self.api_url)
        } else {
            format!("{}/gen", self.api_url)
        }
    }

    /// The retry budget this configuration asks for.
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.retry_attempts,
            delay: self.retry_delay,
        }
    }
}

/// Process-wide configuration, built once at startup and passed by reference
/// from then on.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: Option<u16>,
    pub upstream: UpstreamConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: None,
            upstream: UpstreamConfig::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let port = env::var("PORT").ok().and_then(|port| port.parse().ok());

        Config {
            port,
            upstream: UpstreamConfig::from_env(),
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn with_upstream(mut self, upstream: UpstreamConfig) -> Self {
        self.upstream = upstream;
        self
    }
}
