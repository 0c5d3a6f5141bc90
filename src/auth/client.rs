//! Auth sub-client — token resolution, forced login, cache control.

use crate::auth::{AccessToken, AuthScheme};
use crate::client::AssetInsightClient;
use crate::error::SdkError;

/// Sub-client for authentication operations.
pub struct Auth<'a> {
    pub(crate) client: &'a AssetInsightClient,
}

impl<'a> Auth<'a> {
    /// The token presented on authenticated requests.
    ///
    /// Static credentials (personal token, key pair) resolve without a network
    /// call. Username/password credentials log in on first use. The result is
    /// cached for the lifetime of the client.
    pub async fn access_token(&self) -> Result<AccessToken, SdkError> {
        self.client.tokens.get(&self.client.http).await
    }

    /// Log in again and replace the cached token.
    ///
    /// Only valid for username/password credentials.
    pub async fn login(&self) -> Result<AccessToken, SdkError> {
        self.client.tokens.refresh(&self.client.http).await
    }

    /// Drop the cached token; the next authenticated call resolves a new one.
    pub async fn invalidate(&self) {
        self.client.tokens.clear().await;
    }

    pub async fn has_cached_token(&self) -> bool {
        self.client.tokens.is_cached().await
    }

    /// Scheme of the configured credentials, if any.
    pub fn scheme(&self) -> Option<AuthScheme> {
        self.client.tokens.credentials().map(|c| c.scheme())
    }
}
