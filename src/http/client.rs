//! Low-level HTTP client — `AssetInsightHttp`.
//!
//! Builds the URL for an [`Endpoint`], attaches headers, sends, and decodes the
//! JSON body into wire types. Knows nothing about token resolution; the
//! high-level client passes the token in.

use std::time::Instant;

use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::auth::AccessToken;
use crate::error::HttpError;
use crate::http::endpoint::Endpoint;
use crate::http::retry::{RetryConfig, RetryPolicy};

/// Low-level HTTP client for the Asset Insight REST API.
#[derive(Debug, Clone)]
pub struct AssetInsightHttp {
    base_url: String,
    client: Client,
    retry: RetryConfig,
}

impl AssetInsightHttp {
    pub(crate) fn new(base_url: &str, client: Client, retry: RetryConfig) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
            client,
            retry,
        }
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn retry_config(&self) -> &RetryConfig {
        &self.retry
    }

    /// Execute `endpoint` with its default retry policy.
    ///
    /// GET endpoints send `params` as a query string; POST endpoints send them
    /// as a JSON body (`{}` when `None`).
    pub async fn execute<T, P>(
        &self,
        endpoint: Endpoint,
        params: Option<&P>,
        token: Option<&AccessToken>,
    ) -> Result<T, HttpError>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        self.execute_with_policy(endpoint, params, token, endpoint.retry_policy())
            .await
    }

    pub async fn execute_with_policy<T, P>(
        &self,
        endpoint: Endpoint,
        params: Option<&P>,
        token: Option<&AccessToken>,
        policy: RetryPolicy,
    ) -> Result<T, HttpError>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        let method = endpoint.method();
        let (url, body) = if method == Method::GET {
            (build_url(&self.base_url, endpoint.path(), params)?, None)
        } else {
            let body = match params {
                Some(p) => serde_json::to_vec(p),
                None => serde_json::to_vec(&serde_json::json!({})),
            }
            .map_err(|e| HttpError::Encode(e.to_string()))?;
            (build_url::<()>(&self.base_url, endpoint.path(), None)?, Some(body))
        };

        let Some(retry) = policy.resolve(&self.retry) else {
            return self.do_request(&method, &url, body.as_deref(), token).await;
        };

        let mut attempt = 0;
        loop {
            match self.do_request(&method, &url, body.as_deref(), token).await {
                Ok(resp) => return Ok(resp),
                Err(e) if attempt < retry.max_retries() && retry.should_retry(&e) => {
                    let delay = retry.delay_for_attempt(attempt);
                    tracing::debug!(
                        endpoint = %endpoint,
                        attempt = attempt + 1,
                        max = retry.max_retries(),
                        delay_ms = delay.as_millis() as u64,
                        error = %e,
                        "Retrying request"
                    );
                    futures_timer::Delay::new(delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn do_request<T: DeserializeOwned>(
        &self,
        method: &Method,
        url: &str,
        body: Option<&[u8]>,
        token: Option<&AccessToken>,
    ) -> Result<T, HttpError> {
        let mut req = self
            .client
            .request(method.clone(), url)
            .header(ACCEPT, "application/json");

        if let Some(token) = token {
            req = req.header(AUTHORIZATION, token.header_value());
        }

        if let Some(b) = body {
            req = req
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(b.to_vec());
        }

        let started = Instant::now();
        let resp = req.send().await?;
        let status = resp.status();
        let bytes: Vec<u8> = if status.is_success() {
            resp.bytes().await?.to_vec()
        } else {
            resp.bytes().await.map(|b| b.to_vec()).unwrap_or_else(|e| {
                tracing::warn!(
                    status = status.as_u16(),
                    error = %e,
                    "Failed to read error response body"
                );
                Vec::new()
            })
        };

        tracing::debug!(
            method = %method,
            url = %url,
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Asset Insight request completed"
        );

        if status.is_success() {
            return decode_body(status.as_u16(), &bytes);
        }

        let reason = status.canonical_reason().unwrap_or("Unknown Status");
        Err(HttpError::from_response(status.as_u16(), reason, &bytes))
    }
}

/// Strip trailing slashes so paths can be joined with a single `/`.
pub(crate) fn normalize_base_url(base_url: &str) -> String {
    base_url.trim().trim_end_matches('/').to_string()
}

/// Join `base_url` and `path`, appending `query` as a URL-encoded query string.
pub fn build_url<Q: Serialize + ?Sized>(
    base_url: &str,
    path: &str,
    query: Option<&Q>,
) -> Result<String, HttpError> {
    let mut url = format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'));
    if let Some(q) = query {
        let encoded =
            serde_urlencoded::to_string(q).map_err(|e| HttpError::Encode(e.to_string()))?;
        if !encoded.is_empty() {
            url.push('?');
            url.push_str(&encoded);
        }
    }
    Ok(url)
}

/// Decode a 2xx body. An empty body decodes as JSON `null`.
fn decode_body<T: DeserializeOwned>(status: u16, bytes: &[u8]) -> Result<T, HttpError> {
    let input: &[u8] = if bytes.iter().all(u8::is_ascii_whitespace) {
        b"null"
    } else {
        bytes
    };
    serde_json::from_slice(input).map_err(|source| HttpError::Decode { status, source })
}
