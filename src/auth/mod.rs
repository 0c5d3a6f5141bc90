//! Authentication — credentials, access tokens, login wire types.
//!
//! ## Strategies
//!
//! The API accepts two `Authorization` schemes, selected by the configured
//! [`Credentials`]:
//!
//! - **Bearer**: a personal access token used as-is, or a token obtained by
//!   `POST login` with the website username and password.
//! - **Basic**: an issued public/private key pair, sent as
//!   `base64(public_key:private_key)`.
//!
//! ## Token lifetime
//!
//! A token is resolved on the first authenticated call and cached for the
//! lifetime of the client (shared by all clones). Login-derived tokens are
//! dropped and re-fetched when the server answers 401/403; static tokens are
//! never refreshed. Tokens live in memory only.

#[cfg(feature = "http")]
pub mod client;

#[cfg(feature = "http")]
pub(crate) mod token_cache;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

use crate::error::AuthError;

// ============================================================================
// Credentials
// ============================================================================

/// Credentials used to authorize requests.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// Website username and password, exchanged for a bearer token at `login`.
    UsernamePassword { username: String, password: String },
    /// Pre-issued personal access token (bearer).
    PersonalAccessToken(String),
    /// Issued key pair (basic).
    KeyPair {
        public_key: String,
        private_key: String,
    },
}

impl Credentials {
    pub fn username_password(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::UsernamePassword {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn personal_access_token(token: impl Into<String>) -> Self {
        Self::PersonalAccessToken(token.into())
    }

    pub fn key_pair(public_key: impl Into<String>, private_key: impl Into<String>) -> Self {
        Self::KeyPair {
            public_key: public_key.into(),
            private_key: private_key.into(),
        }
    }

    /// The `Authorization` scheme these credentials produce.
    pub fn scheme(&self) -> AuthScheme {
        match self {
            Self::KeyPair { .. } => AuthScheme::Basic,
            _ => AuthScheme::Bearer,
        }
    }

    /// Whether a `login` round-trip is needed to obtain a token.
    pub fn requires_login(&self) -> bool {
        matches!(self, Self::UsernamePassword { .. })
    }

    /// The token for static credentials; `None` when a login is required.
    pub fn static_token(&self) -> Option<AccessToken> {
        match self {
            Self::UsernamePassword { .. } => None,
            Self::PersonalAccessToken(token) => Some(AccessToken::bearer(token.clone())),
            Self::KeyPair {
                public_key,
                private_key,
            } => Some(AccessToken::from_key_pair(public_key, private_key)),
        }
    }

    /// Login body for username/password credentials.
    pub fn login_request(&self) -> Option<LoginRequest<'_>> {
        match self {
            Self::UsernamePassword { username, password } => Some(LoginRequest {
                username,
                password,
            }),
            _ => None,
        }
    }

    /// Reject credentials with empty members.
    pub(crate) fn validate(&self) -> Result<(), String> {
        let empty = match self {
            Self::UsernamePassword { username, password } => {
                username.is_empty() || password.is_empty()
            }
            Self::PersonalAccessToken(token) => token.is_empty(),
            Self::KeyPair {
                public_key,
                private_key,
            } => public_key.is_empty() || private_key.is_empty(),
        };
        if empty {
            Err(format!("{} credentials must not be empty", self.kind()))
        } else {
            Ok(())
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::UsernamePassword { .. } => "username/password",
            Self::PersonalAccessToken(_) => "personal access token",
            Self::KeyPair { .. } => "key pair",
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UsernamePassword { username, .. } => f
                .debug_struct("UsernamePassword")
                .field("username", username)
                .field("password", &"<redacted>")
                .finish(),
            Self::PersonalAccessToken(_) => f
                .debug_tuple("PersonalAccessToken")
                .field(&"<redacted>")
                .finish(),
            Self::KeyPair { public_key, .. } => f
                .debug_struct("KeyPair")
                .field("public_key", public_key)
                .field("private_key", &"<redacted>")
                .finish(),
        }
    }
}

// ============================================================================
// Access token
// ============================================================================

/// `Authorization` header scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthScheme {
    Bearer,
    Basic,
}

impl AuthScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bearer => "Bearer",
            Self::Basic => "Basic",
        }
    }
}

impl std::fmt::Display for AuthScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A resolved credential presented on each authenticated request.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken {
    scheme: AuthScheme,
    value: String,
}

impl AccessToken {
    pub fn bearer(token: impl Into<String>) -> Self {
        Self {
            scheme: AuthScheme::Bearer,
            value: token.into(),
        }
    }

    /// Basic credential from an already-encoded value.
    pub fn basic(encoded: impl Into<String>) -> Self {
        Self {
            scheme: AuthScheme::Basic,
            value: encoded.into(),
        }
    }

    /// Basic credential `base64(public_key:private_key)`.
    pub fn from_key_pair(public_key: &str, private_key: &str) -> Self {
        Self::basic(STANDARD.encode(format!("{}:{}", public_key, private_key)))
    }

    pub fn scheme(&self) -> AuthScheme {
        self.scheme
    }

    /// The raw token (bearer string or base64 blob).
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Value for the `Authorization` header.
    pub fn header_value(&self) -> String {
        format!("{} {}", self.scheme, self.value)
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessToken")
            .field("scheme", &self.scheme)
            .field("value", &"<redacted>")
            .finish()
    }
}

// ============================================================================
// Wire types
// ============================================================================

/// Body of `POST login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Response of `POST login`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
    /// Lifetime in seconds, when the service reports one.
    #[serde(default, deserialize_with = "crate::shared::serde_util::id::option::deserialize")]
    pub expires_in: Option<u64>,
}

impl LoginResponse {
    /// Extract the bearer token; absent or empty is an error.
    pub fn into_token(self) -> Result<AccessToken, AuthError> {
        match self.access_token {
            Some(token) if !token.is_empty() => Ok(AccessToken::bearer(token)),
            _ => Err(AuthError::MissingAccessToken),
        }
    }
}
