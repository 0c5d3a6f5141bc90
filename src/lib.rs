//! # Asset Insight SDK
//!
//! A Rust client for the Asset Insight REST API: aviation asset maintenance
//! analysis, supported models, inspection catalogues and user accounts.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Request and response payloads, serde helpers (always available)
//! 2. **Auth** — Credentials, access tokens, login and token cache
//! 3. **HTTP API** — `AssetInsightHttp` with per-endpoint retry policies
//! 4. **High-Level Client** — `AssetInsightClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use asset_insight_sdk::prelude::*;
//!
//! let client = AssetInsightClient::builder()
//!     .personal_access_token("...")
//!     .build()?;
//!
//! let supported = client.assets().supported().await?;
//! let asset = AssetInput::new(0, "cessna", 566, 1)
//!     .with_coverage(Coverage::new().airframe("msp"))
//!     .with_inspection(10, InspectionInput::new().hours(250).cycles(175));
//! let analysis = client.analyses().submit(&asset, None).await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared helpers used across all domains.
pub mod shared;

/// Domain modules: payload types, wire types, sub-clients.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL and environment constants.
pub mod network;

// ── Layer 2: Auth ────────────────────────────────────────────────────────────

/// Authentication: credentials, access tokens, login.
pub mod auth;

// ── Layer 3: HTTP API ────────────────────────────────────────────────────────

/// HTTP client with retry policies.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `AssetInsightClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Domain types
    pub use crate::domain::analysis::{AnalysisRequest, AnalysisResult};
    pub use crate::domain::asset::{
        AssetInput, AssetRequirements, Coverage, InspectionInput, InspectionRequirement,
        Modification, SupportedAsset,
    };
    pub use crate::domain::inspection::InspectionDefinition;
    pub use crate::domain::user::UserRecord;

    // Errors
    pub use crate::error::{AuthError, HttpError, SdkError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // Auth
    pub use crate::auth::{AccessToken, AuthScheme, Credentials};

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        AnalysesClient, AssetInsightClient, AssetInsightClientBuilder, AssetsClient, AuthClient,
        ConnectionStatus, InspectionsClient, UsersClient,
    };
    #[cfg(feature = "http")]
    pub use crate::http::retry::{RetryConfig, RetryPolicy};
}
