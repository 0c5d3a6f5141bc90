//! The fixed set of API endpoints.

use reqwest::Method;

use crate::http::retry::RetryPolicy;

/// One operation on the Asset Insight API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Connect,
    Login,
    AssetRequirements,
    Supported,
    Inspections,
    UserConfirmation,
    NewAccount,
    Analysis,
}

impl Endpoint {
    pub const ALL: [Endpoint; 8] = [
        Endpoint::Connect,
        Endpoint::Login,
        Endpoint::AssetRequirements,
        Endpoint::Supported,
        Endpoint::Inspections,
        Endpoint::UserConfirmation,
        Endpoint::NewAccount,
        Endpoint::Analysis,
    ];

    /// Path relative to the API base URL.
    pub fn path(&self) -> &'static str {
        match self {
            Self::Connect => "connect",
            Self::Login => "login",
            Self::AssetRequirements => "request/assetRequirements",
            Self::Supported => "request/supported",
            Self::Inspections => "request/inspections",
            Self::UserConfirmation => "request/userConfirmation",
            Self::NewAccount => "process/newAccount",
            Self::Analysis => "process/analysis",
        }
    }

    pub fn method(&self) -> Method {
        match self {
            Self::Login | Self::NewAccount | Self::Analysis => Method::POST,
            _ => Method::GET,
        }
    }

    /// `connect` and `login` are the only endpoints callable without a token.
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Self::Connect | Self::Login)
    }

    /// Default retry policy: GETs are idempotent, POSTs only retry when the
    /// request never left.
    pub fn retry_policy(&self) -> RetryPolicy {
        if self.method() == Method::GET {
            RetryPolicy::Idempotent
        } else {
            RetryPolicy::ConnectOnly
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}
