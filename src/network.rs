//! Network URL constants for the Asset Insight SDK.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://backend.assetinsight.com/api/v1/";

/// Environment variable overriding [`DEFAULT_API_URL`].
pub const ENV_API_URL: &str = "ASSET_INSIGHT_API_URL";

/// Environment variable holding a personal access token.
pub const ENV_TOKEN: &str = "ASSET_INSIGHT_TOKEN";

/// Environment variables holding website login credentials.
pub const ENV_USERNAME: &str = "ASSET_INSIGHT_USERNAME";
pub const ENV_PASSWORD: &str = "ASSET_INSIGHT_PASSWORD";

/// Environment variables holding an issued key pair.
pub const ENV_PUBLIC_KEY: &str = "ASSET_INSIGHT_PUBLIC_KEY";
pub const ENV_PRIVATE_KEY: &str = "ASSET_INSIGHT_PRIVATE_KEY";
