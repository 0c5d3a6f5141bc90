//! HTTP client layer — `AssetInsightHttp` with per-endpoint retry policies.

pub mod client;
pub mod endpoint;
pub mod retry;

pub use client::{build_url, AssetInsightHttp};
pub use endpoint::Endpoint;
pub use retry::{RetryConfig, RetryPolicy};
