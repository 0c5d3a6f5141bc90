//! Lifetime cache for the resolved access token.

use async_lock::Mutex;

use crate::auth::{AccessToken, Credentials, LoginResponse};
use crate::error::{AuthError, SdkError};
use crate::http::{AssetInsightHttp, Endpoint};

/// Resolves and caches the access token for one client (and its clones).
///
/// The mutex is held across the login round-trip, so concurrent first calls
/// wait for a single login instead of racing.
#[derive(Debug)]
pub(crate) struct TokenCache {
    credentials: Option<Credentials>,
    cached: Mutex<Option<AccessToken>>,
}

impl TokenCache {
    pub(crate) fn new(credentials: Option<Credentials>) -> Self {
        Self {
            credentials,
            cached: Mutex::new(None),
        }
    }

    pub(crate) fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// Whether a rejected token can be replaced by logging in again.
    pub(crate) fn can_refresh(&self) -> bool {
        self.credentials
            .as_ref()
            .is_some_and(Credentials::requires_login)
    }

    /// Cached token, resolving it on first use.
    pub(crate) async fn get(&self, http: &AssetInsightHttp) -> Result<AccessToken, SdkError> {
        let mut cached = self.cached.lock().await;
        if let Some(token) = cached.as_ref() {
            tracing::trace!("Using cached access token");
            return Ok(token.clone());
        }

        let credentials = self.credentials.as_ref().ok_or(AuthError::NoCredentials)?;
        let token = match credentials.static_token() {
            Some(token) => {
                tracing::debug!(scheme = %token.scheme(), "Using static credential");
                token
            }
            None => login(http, credentials).await?,
        };

        *cached = Some(token.clone());
        Ok(token)
    }

    /// Log in again regardless of the cached value.
    pub(crate) async fn refresh(&self, http: &AssetInsightHttp) -> Result<AccessToken, SdkError> {
        let credentials = self.credentials.as_ref().ok_or(AuthError::NoCredentials)?;
        if !credentials.requires_login() {
            return Err(AuthError::LoginUnsupported.into());
        }

        let mut cached = self.cached.lock().await;
        let token = login(http, credentials).await?;
        *cached = Some(token.clone());
        Ok(token)
    }

    /// Drop `stale` if it is still the cached token.
    ///
    /// A concurrent call may already have replaced it; that newer token is kept.
    pub(crate) async fn invalidate_if(&self, stale: &AccessToken) -> bool {
        let mut cached = self.cached.lock().await;
        if cached.as_ref() == Some(stale) {
            *cached = None;
            true
        } else {
            false
        }
    }

    pub(crate) async fn clear(&self) {
        *self.cached.lock().await = None;
    }

    pub(crate) async fn is_cached(&self) -> bool {
        self.cached.lock().await.is_some()
    }
}

async fn login(http: &AssetInsightHttp, credentials: &Credentials) -> Result<AccessToken, AuthError> {
    let request = credentials
        .login_request()
        .ok_or(AuthError::LoginUnsupported)?;

    tracing::debug!("Logging in with username and password");
    let response: LoginResponse = http
        .execute(Endpoint::Login, Some(&request), None)
        .await
        .map_err(AuthError::LoginFailed)?;

    tracing::debug!(
        token_type = ?response.token_type,
        expires_in = ?response.expires_in,
        "Logged in"
    );
    response.into_token()
}
