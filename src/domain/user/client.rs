//! Users sub-client — confirmation and account creation.

use crate::client::AssetInsightClient;
use crate::domain::user::convert::UserPayload;
use crate::domain::user::{ConfirmationQuery, NewAccountRequest, UserRecord};
use crate::error::SdkError;
use crate::http::Endpoint;

/// Sub-client for user account operations.
pub struct Users<'a> {
    pub(crate) client: &'a AssetInsightClient,
}

impl<'a> Users<'a> {
    /// Look up the account registered under `email`, if any.
    pub async fn confirmation(&self, email: &str) -> Result<Option<UserRecord>, SdkError> {
        let payload: UserPayload = self
            .client
            .request(Endpoint::UserConfirmation, Some(&ConfirmationQuery { email }))
            .await?;
        Ok(payload.0)
    }

    /// Create an account for `email`. The service returns the existing
    /// account when one is already registered.
    pub async fn create_account(&self, email: &str) -> Result<UserRecord, SdkError> {
        let payload: UserPayload = self
            .client
            .request(Endpoint::NewAccount, Some(&NewAccountRequest { email }))
            .await?;
        payload.0.ok_or_else(|| {
            SdkError::Validation(format!("No user record returned for {}", Endpoint::NewAccount))
        })
    }
}
