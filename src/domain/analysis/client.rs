//! Analyses sub-client.

use serde::Serialize;

use crate::client::AssetInsightClient;
use crate::domain::analysis::{AnalysisRequest, AnalysisResult};
use crate::error::SdkError;
use crate::http::Endpoint;

/// Sub-client for analysis requests.
pub struct Analyses<'a> {
    pub(crate) client: &'a AssetInsightClient,
}

impl<'a> Analyses<'a> {
    /// Submit `asset` for analysis, optionally on behalf of user id `user`.
    ///
    /// `asset` is usually an [`AssetInput`](crate::domain::asset::AssetInput);
    /// any serializable value is sent as-is.
    pub async fn submit<A>(&self, asset: &A, user: Option<&str>) -> Result<AnalysisResult, SdkError>
    where
        A: Serialize + ?Sized,
    {
        let body = AnalysisRequest { user, asset };
        self.client.request(Endpoint::Analysis, Some(&body)).await
    }
}
