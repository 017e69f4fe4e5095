//! Client configuration: target environment, timeout, retry policy.

use std::time::Duration;

use url::Url;

use crate::constants::{
    DEFAULT_RETRY_DELAY, DEFAULT_RETRY_LIMIT, DEFAULT_TIMEOUT, LIVE_BASE_URL, PAPER_BASE_URL,
};
use crate::error::Result;

/// Which Alpaca deployment a client talks to.
///
/// Fixed at construction time; a client never switches environments.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Environment {
    /// Live trading (`https://api.alpaca.markets`).
    Live,
    /// Paper trading (`https://paper-api.alpaca.markets`).
    #[default]
    Paper,
    /// Any other base URL, e.g. a mock server in tests.
    Custom(Url),
}

impl Environment {
    /// Build a [`Environment::Custom`] from a string URL.
    pub fn custom(base_url: &str) -> Result<Self> {
        Ok(Self::Custom(Url::parse(base_url)?))
    }

    /// The base URL requests are resolved against.
    pub fn base_url(&self) -> Result<Url> {
        match self {
            Self::Live => Ok(Url::parse(LIVE_BASE_URL)?),
            Self::Paper => Ok(Url::parse(PAPER_BASE_URL)?),
            Self::Custom(url) => Ok(url.clone()),
        }
    }
}

/// Bounded linear retry applied to rate-limited (HTTP 429) responses.
///
/// Total attempts are at most `limit + 1`. No other status is retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Additional attempts after the first 429.
    pub limit: u32,
    /// Fixed pause before each additional attempt.
    pub delay: Duration,
}

impl RetryPolicy {
    /// Create a policy with the given limit and delay.
    pub fn new(limit: u32, delay: Duration) -> Self {
        Self { limit, delay }
    }

    /// A policy that returns the first 429 as-is.
    pub fn none() -> Self {
        Self {
            limit: 0,
            delay: Duration::ZERO,
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_RETRY_LIMIT, DEFAULT_RETRY_DELAY)
    }
}

/// Construction-time settings for an [`AlpacaClient`](crate::AlpacaClient).
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use alpaca_rs::config::{ClientConfig, Environment, RetryPolicy};
///
/// let config = ClientConfig::new(Environment::Paper)
///     .with_timeout(Duration::from_secs(5))
///     .with_retry(RetryPolicy::new(5, Duration::from_millis(500)))
///     .with_log_bodies(true);
/// assert_eq!(config.retry().limit, 5);
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    environment: Environment,
    timeout: Duration,
    retry: RetryPolicy,
    log_bodies: bool,
    user_agent: Option<String>,
}

impl ClientConfig {
    /// Defaults for the given environment.
    pub fn new(environment: Environment) -> Self {
        Self {
            environment,
            timeout: DEFAULT_TIMEOUT,
            retry: RetryPolicy::default(),
            log_bodies: false,
            user_agent: None,
        }
    }

    /// Per-request HTTP timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Rate-limit retry policy.
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Log request and response bodies at `debug` level.
    pub fn with_log_bodies(mut self, enabled: bool) -> Self {
        self.log_bodies = enabled;
        self
    }

    /// Override the `User-Agent` header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn retry(&self) -> RetryPolicy {
        self.retry
    }

    pub fn log_bodies(&self) -> bool {
        self.log_bodies
    }

    pub fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(Environment::default())
    }
}
