//! Unified SDK error types.

use serde::Deserialize;
use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl SdkError {
    /// HTTP status of the failed response, if the server answered.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.status_code(),
            Self::Auth(AuthError::LoginFailed(e)) => e.status_code(),
            _ => None,
        }
    }

    /// The `message` field the server attached to an error response.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Http(e) => e.server_message(),
            Self::Auth(AuthError::LoginFailed(e)) => e.server_message(),
            _ => None,
        }
    }

    /// Whether the request never produced an HTTP response.
    pub fn is_transport(&self) -> bool {
        match self {
            Self::Http(e) => e.is_transport(),
            Self::Auth(AuthError::LoginFailed(e)) => e.is_transport(),
            _ => false,
        }
    }

    /// Whether the failure is an authentication problem (no token, or 401/403).
    pub fn is_auth_failure(&self) -> bool {
        match self {
            Self::Auth(_) => true,
            Self::Http(e) => e.is_auth_failure(),
            _ => false,
        }
    }
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    /// Connection, timeout or body-read failure; no usable response.
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx response.
    #[error("{status} ({reason}): {}", .message.as_deref().unwrap_or("no message"))]
    Api {
        status: u16,
        reason: String,
        message: Option<String>,
    },

    /// The response body was not the JSON shape the endpoint returns.
    #[error("Failed to decode response (HTTP {status}): {source}")]
    Decode {
        status: u16,
        source: serde_json::Error,
    },

    /// Request parameters could not be serialized.
    #[error("Failed to encode request: {0}")]
    Encode(String),
}

impl HttpError {
    /// Build an [`HttpError::Api`] from a non-2xx status and its raw body.
    ///
    /// The body is decoded as JSON first; `message` (or `error`) is used when
    /// present, otherwise the trimmed body text.
    pub fn from_response(status: u16, reason: impl Into<String>, body: &[u8]) -> Self {
        let message = match serde_json::from_slice::<ErrorResponse>(body) {
            Ok(parsed) => parsed.into_message(),
            Err(_) => {
                let text = String::from_utf8_lossy(body).trim().to_string();
                (!text.is_empty()).then_some(text)
            }
        };
        Self::Api {
            status,
            reason: reason.into(),
            message,
        }
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Decode { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Api { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        #[cfg(feature = "http")]
        if let Self::Transport(_) = self {
            return true;
        }
        false
    }

    /// 401 or 403.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, Self::Api { status: 401 | 403, .. })
    }
}

/// Authentication errors.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("No credentials configured")]
    NoCredentials,

    #[error("No access token was returned")]
    MissingAccessToken,

    #[error("Login failed: {0}")]
    LoginFailed(#[source] HttpError),

    #[error("Login requires username and password credentials")]
    LoginUnsupported,
}

/// Error body format returned by the API.
///
/// Login failures carry both `error` (a code) and `message` (the text).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorResponse {
    /// `message`, falling back to `error`.
    pub fn into_message(self) -> Option<String> {
        self.message.or(self.error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_response_uses_message_field() {
        let err = HttpError::from_response(404, "Not Found", br#"{"message": "not found"}"#);
        assert_eq!(err.status_code(), Some(404));
        assert_eq!(err.server_message(), Some("not found"));
        assert_eq!(err.to_string(), "404 (Not Found): not found");
    }

    #[test]
    fn test_from_response_accepts_error_alias() {
        let err = HttpError::from_response(400, "Bad Request", br#"{"error": "bad model"}"#);
        assert_eq!(err.server_message(), Some("bad model"));
    }

    #[test]
    fn test_from_response_prefers_message_over_error_code() {
        let err = HttpError::from_response(
            400,
            "Bad Request",
            br#"{"error":"invalid_grant","message":"The user credentials were incorrect."}"#,
        );
        assert_eq!(err.server_message(), Some("The user credentials were incorrect."));

        let err = HttpError::from_response(400, "Bad Request", br#"{"error":"invalid_grant","message":null}"#);
        assert_eq!(err.server_message(), Some("invalid_grant"));
    }

    #[test]
    fn test_from_response_non_json_body() {
        let err = HttpError::from_response(502, "Bad Gateway", b"  upstream down \n");
        assert_eq!(err.server_message(), Some("upstream down"));

        let err = HttpError::from_response(500, "Internal Server Error", b"");
        assert_eq!(err.server_message(), None);
        assert_eq!(err.to_string(), "500 (Internal Server Error): no message");
    }

    #[test]
    fn test_from_response_json_without_message() {
        let err = HttpError::from_response(500, "Internal Server Error", br#"{"code": 7}"#);
        assert_eq!(err.server_message(), None);
    }

    #[test]
    fn test_auth_failure_classification() {
        assert!(HttpError::from_response(401, "Unauthorized", b"").is_auth_failure());
        assert!(HttpError::from_response(403, "Forbidden", b"").is_auth_failure());
        assert!(!HttpError::from_response(404, "Not Found", b"").is_auth_failure());

        let err: SdkError = AuthError::MissingAccessToken.into();
        assert!(err.is_auth_failure());
        assert!(!err.is_transport());
        assert_eq!(err.status_code(), None);
    }

    #[test]
    fn test_login_failure_exposes_status() {
        let err: SdkError =
            AuthError::LoginFailed(HttpError::from_response(422, "Unprocessable Entity", br#"{"message":"bad password"}"#))
                .into();
        assert_eq!(err.status_code(), Some(422));
        assert_eq!(err.server_message(), Some("bad password"));
    }
}
