//! Retry policies for HTTP requests.

use std::time::Duration;

use crate::error::HttpError;

/// Retry policy for an HTTP request.
#[derive(Debug, Clone, Default)]
pub enum RetryPolicy {
    /// No retries.
    #[default]
    None,
    /// Retry once when the connection could not be established, i.e. the
    /// request never reached the server. Default for POST endpoints.
    ConnectOnly,
    /// Retry on transport failures and the configured statuses using the
    /// client's idempotent config. Default for GET endpoints.
    Idempotent,
    /// Caller-provided retry logic.
    Custom(RetryConfig),
}

/// Configuration for retry behavior.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of retry attempts (not counting the initial request).
    pub max_retries: u32,
    /// Delay before the first retry.
    pub initial_delay: Duration,
    /// Maximum delay between retries.
    pub max_delay: Duration,
    /// Multiplier applied to the delay after each retry.
    pub backoff_factor: f64,
    /// Whether to add ±25% jitter to the delay.
    pub jitter: bool,
    /// HTTP status codes that trigger a retry.
    pub retryable_statuses: Vec<u16>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self::idempotent()
    }
}

impl RetryConfig {
    /// Single retry on transport errors and 502/503/504.
    pub fn idempotent() -> Self {
        Self {
            max_retries: 1,
            initial_delay: Duration::from_millis(200),
            max_delay: Duration::from_secs(5),
            backoff_factor: 2.0,
            jitter: true,
            retryable_statuses: vec![502, 503, 504],
        }
    }

    /// No retries at all.
    pub fn disabled() -> Self {
        Self {
            max_retries: 0,
            ..Self::idempotent()
        }
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = delay;
        self
    }

    pub fn with_max_delay(mut self, delay: Duration) -> Self {
        self.max_delay = delay;
        self
    }

    pub fn with_jitter(mut self, jitter: bool) -> Self {
        self.jitter = jitter;
        self
    }

    pub fn with_retryable_statuses(mut self, statuses: Vec<u16>) -> Self {
        self.retryable_statuses = statuses;
        self
    }

    /// Calculate delay for a given attempt (0-indexed).
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let base = self.initial_delay.as_millis() as f64 * self.backoff_factor.powi(attempt as i32);
        let capped = base.min(self.max_delay.as_millis() as f64);

        let final_ms = if self.jitter {
            let jitter_range = capped * 0.25;
            let jitter = (rand::random::<f64>() - 0.5) * 2.0 * jitter_range;
            (capped + jitter).max(0.0)
        } else {
            capped
        };

        Duration::from_millis(final_ms as u64)
    }

    /// Whether `error` is worth another attempt under this config.
    pub(crate) fn should_retry(&self, error: &HttpError) -> bool {
        match error {
            HttpError::Transport(e) => e.is_connect() || e.is_timeout() || e.is_request(),
            HttpError::Api { status, .. } => self.retryable_statuses.contains(status),
            _ => false,
        }
    }
}

impl RetryPolicy {
    /// Resolve the policy against the client's idempotent config.
    pub(crate) fn resolve<'a>(&'a self, idempotent: &'a RetryConfig) -> Option<ResolvedRetry<'a>> {
        match self {
            Self::None => None,
            Self::ConnectOnly => Some(ResolvedRetry::ConnectOnly(idempotent)),
            Self::Idempotent => Some(ResolvedRetry::Config(idempotent)),
            Self::Custom(config) => Some(ResolvedRetry::Config(config)),
        }
    }
}

/// A policy bound to a concrete config.
pub(crate) enum ResolvedRetry<'a> {
    /// One retry on connect errors; delays from the borrowed config.
    ConnectOnly(&'a RetryConfig),
    Config(&'a RetryConfig),
}

impl ResolvedRetry<'_> {
    pub(crate) fn max_retries(&self) -> u32 {
        match self {
            Self::ConnectOnly(config) => config.max_retries.min(1),
            Self::Config(config) => config.max_retries,
        }
    }

    pub(crate) fn should_retry(&self, error: &HttpError) -> bool {
        match self {
            Self::ConnectOnly(_) => matches!(error, HttpError::Transport(e) if e.is_connect()),
            Self::Config(config) => config.should_retry(error),
        }
    }

    pub(crate) fn delay_for_attempt(&self, attempt: u32) -> Duration {
        match self {
            Self::ConnectOnly(config) | Self::Config(config) => config.delay_for_attempt(attempt),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retry_policy_default_is_none() {
        assert!(matches!(RetryPolicy::default(), RetryPolicy::None));
        assert!(RetryPolicy::None.resolve(&RetryConfig::idempotent()).is_none());
    }

    #[test]
    fn test_idempotent_is_single_retry() {
        let config = RetryConfig::idempotent();
        assert_eq!(config.max_retries, 1);
        assert_eq!(config.retryable_statuses, vec![502, 503, 504]);
    }

    #[test]
    fn test_connect_only_caps_at_one_retry() {
        let config = RetryConfig::idempotent().with_max_retries(5);
        let resolved = RetryPolicy::ConnectOnly.resolve(&config).unwrap();
        assert_eq!(resolved.max_retries(), 1);

        let disabled = RetryConfig::disabled();
        let resolved = RetryPolicy::ConnectOnly.resolve(&disabled).unwrap();
        assert_eq!(resolved.max_retries(), 0);
    }

    #[test]
    fn test_status_retry_decisions() {
        let config = RetryConfig::idempotent();
        let unavailable = HttpError::from_response(503, "Service Unavailable", b"");
        let not_found = HttpError::from_response(404, "Not Found", b"");

        assert!(config.should_retry(&unavailable));
        assert!(!config.should_retry(&not_found));

        let connect_only = RetryPolicy::ConnectOnly.resolve(&config).unwrap();
        assert!(!connect_only.should_retry(&unavailable));
    }

    #[test]
    fn test_retry_config_delay_for_attempt_no_jitter() {
        let config = RetryConfig::idempotent()
            .with_initial_delay(Duration::from_millis(100))
            .with_jitter(false);
        assert_eq!(config.delay_for_attempt(0).as_millis(), 100);
        assert_eq!(config.delay_for_attempt(1).as_millis(), 200);
        assert_eq!(config.delay_for_attempt(2).as_millis(), 400);
    }

    #[test]
    fn test_retry_config_delay_caps_at_max() {
        let config = RetryConfig {
            max_retries: 5,
            initial_delay: Duration::from_millis(1000),
            max_delay: Duration::from_millis(2000),
            backoff_factor: 10.0,
            jitter: false,
            retryable_statuses: vec![],
        };
        assert_eq!(config.delay_for_attempt(3).as_millis(), 2000);
    }

    #[test]
    fn test_retry_config_jitter_bounds() {
        let config = RetryConfig::idempotent().with_initial_delay(Duration::from_millis(400));
        for _ in 0..50 {
            let ms = config.delay_for_attempt(0).as_millis();
            assert!((300..=500).contains(&ms), "delay {} out of range", ms);
        }
    }
}
