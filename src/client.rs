//! High-level client — `AssetInsightClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, the shared token cache, and the
//! authenticated request path every sub-client goes through.

use crate::auth::client::Auth;
use crate::auth::token_cache::TokenCache;
use crate::auth::{AccessToken, Credentials};
use crate::domain::analysis::client::Analyses;
use crate::domain::asset::client::Assets;
use crate::domain::inspection::client::Inspections;
use crate::domain::user::client::Users;
use crate::error::SdkError;
use crate::http::{AssetInsightHttp, Endpoint, RetryConfig};
use crate::network;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::auth::client::Auth as AuthClient;
pub use crate::domain::analysis::client::Analyses as AnalysesClient;
pub use crate::domain::asset::client::Assets as AssetsClient;
pub use crate::domain::inspection::client::Inspections as InspectionsClient;
pub use crate::domain::user::client::Users as UsersClient;

/// Raw JSON returned by the `connect` health endpoint.
pub type ConnectionStatus = serde_json::Value;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// The primary entry point for the Asset Insight SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.assets()`, `client.users()`, etc. Clones share the connection
/// pool and the cached access token.
#[derive(Debug, Clone)]
pub struct AssetInsightClient {
    pub(crate) http: AssetInsightHttp,
    pub(crate) tokens: Arc<TokenCache>,
}

impl AssetInsightClient {
    pub fn builder() -> AssetInsightClientBuilder {
        AssetInsightClientBuilder::default()
    }

    /// Client with default settings for the given credentials.
    pub fn new(credentials: Credentials) -> Result<Self, SdkError> {
        Self::builder().credentials(credentials).build()
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn assets(&self) -> Assets<'_> {
        Assets { client: self }
    }

    pub fn inspections(&self) -> Inspections<'_> {
        Inspections { client: self }
    }

    pub fn users(&self) -> Users<'_> {
        Users { client: self }
    }

    pub fn analyses(&self) -> Analyses<'_> {
        Analyses { client: self }
    }

    pub fn auth(&self) -> Auth<'_> {
        Auth { client: self }
    }

    /// Test the connection. No credentials are needed.
    pub async fn connect(&self) -> Result<ConnectionStatus, SdkError> {
        Ok(self
            .http
            .execute(Endpoint::Connect, None::<&()>, None)
            .await?)
    }

    // ── Authenticated request path ───────────────────────────────────────

    /// Execute an endpoint, resolving the access token first when required.
    ///
    /// A 401/403 on a login-derived token drops it and repeats the call once
    /// with a fresh login.
    pub(crate) async fn request<T, P>(&self, endpoint: Endpoint, params: Option<&P>) -> Result<T, SdkError>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        if !endpoint.requires_auth() {
            return Ok(self.http.execute(endpoint, params, None).await?);
        }

        let token = self.tokens.get(&self.http).await?;
        match self.http.execute(endpoint, params, Some(&token)).await {
            Err(e) if e.is_auth_failure() && self.tokens.can_refresh() => {
                tracing::warn!(
                    endpoint = %endpoint,
                    status = ?e.status_code(),
                    "Access token rejected, logging in again"
                );
                self.tokens.invalidate_if(&token).await;
                let fresh = self.tokens.get(&self.http).await?;
                Ok(self.http.execute(endpoint, params, Some(&fresh)).await?)
            }
            other => Ok(other?),
        }
    }

    /// Execute an endpoint with an explicit token, bypassing the cache.
    pub async fn request_with_token<T, P>(
        &self,
        endpoint: Endpoint,
        params: Option<&P>,
        token: &AccessToken,
    ) -> Result<T, SdkError>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        Ok(self.http.execute(endpoint, params, Some(token)).await?)
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

/// Builder for configuring [`AssetInsightClient`].
#[derive(Debug, Clone)]
pub struct AssetInsightClientBuilder {
    base_url: String,
    credentials: Option<Credentials>,
    timeout: Duration,
    retry: RetryConfig,
    default_headers: Vec<(String, String)>,
    user_agent: Option<String>,
}

impl Default for AssetInsightClientBuilder {
    fn default() -> Self {
        Self {
            base_url: network::DEFAULT_API_URL.to_string(),
            credentials: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            retry: RetryConfig::idempotent(),
            default_headers: Vec::new(),
            user_agent: None,
        }
    }
}

impl AssetInsightClientBuilder {
    /// Builder seeded from `ASSET_INSIGHT_*` environment variables.
    ///
    /// Credential precedence: personal access token, then key pair, then
    /// username/password. Empty variables count as unset.
    pub fn from_env() -> Result<Self, SdkError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, SdkError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut builder = Self::default();

        if let Some(url) = get(network::ENV_API_URL) {
            builder.base_url = url;
        }

        let pair = |a: &str, b: &str| -> Result<Option<(String, String)>, SdkError> {
            match (get(a), get(b)) {
                (Some(x), Some(y)) => Ok(Some((x, y))),
                (None, None) => Ok(None),
                _ => Err(SdkError::Config(format!("{} and {} must be set together", a, b))),
            }
        };

        // Pairs are only checked once every higher-precedence source is unset.
        builder.credentials = if let Some(token) = get(network::ENV_TOKEN) {
            Some(Credentials::personal_access_token(token))
        } else if let Some((public_key, private_key)) =
            pair(network::ENV_PUBLIC_KEY, network::ENV_PRIVATE_KEY)?
        {
            Some(Credentials::key_pair(public_key, private_key))
        } else {
            pair(network::ENV_USERNAME, network::ENV_PASSWORD)?
                .map(|(username, password)| Credentials::username_password(username, password))
        };

        Ok(builder)
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    pub fn username_password(self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.credentials(Credentials::username_password(username, password))
    }

    pub fn personal_access_token(self, token: impl Into<String>) -> Self {
        self.credentials(Credentials::personal_access_token(token))
    }

    pub fn key_pair(self, public_key: impl Into<String>, private_key: impl Into<String>) -> Self {
        self.credentials(Credentials::key_pair(public_key, private_key))
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Retry config used by idempotent (GET) endpoints.
    pub fn retry(mut self, config: RetryConfig) -> Self {
        self.retry = config;
        self
    }

    /// Add a default header to all requests.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push((name.into(), value.into()));
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn build(self) -> Result<AssetInsightClient, SdkError> {
        if let Some(credentials) = &self.credentials {
            credentials.validate().map_err(SdkError::Config)?;
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(SdkError::Config(format!(
                "Base URL must be http(s): {}",
                self.base_url
            )));
        }

        let mut headers = HeaderMap::new();
        for (name, value) in &self.default_headers {
            let header_name = HeaderName::try_from(name.as_str())
                .map_err(|e| SdkError::Config(format!("Invalid header name '{}': {}", name, e)))?;
            let header_value = HeaderValue::from_str(value)
                .map_err(|e| SdkError::Config(format!("Invalid header value for '{}': {}", name, e)))?;
            headers.insert(header_name, header_value);
        }

        let user_agent = self.user_agent.unwrap_or_else(|| {
            format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
        });

        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .pool_max_idle_per_host(10)
            .default_headers(headers)
            .user_agent(user_agent)
            .build()
            .map_err(|e| SdkError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(AssetInsightClient {
            http: AssetInsightHttp::new(&self.base_url, client, self.retry),
            tokens: Arc::new(TokenCache::new(self.credentials)),
        })
    }
}
