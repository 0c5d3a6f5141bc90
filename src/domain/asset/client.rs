//! Assets sub-client — supported models and their input requirements.

use crate::client::AssetInsightClient;
use crate::domain::asset::wire::{RequirementsQuery, SupportedQuery};
use crate::domain::asset::{AssetRequirements, SupportedAsset};
use crate::error::SdkError;
use crate::http::Endpoint;
use crate::shared::serde_util::KeyedList;

/// Sub-client for asset catalogue operations.
pub struct Assets<'a> {
    pub(crate) client: &'a AssetInsightClient,
}

impl<'a> Assets<'a> {
    /// Inputs needed to analyze model `asset_id` at version `version_id`.
    pub async fn requirements(
        &self,
        asset_id: u64,
        version_id: u64,
    ) -> Result<AssetRequirements, SdkError> {
        let query = RequirementsQuery {
            model: asset_id,
            version: version_id,
        };
        self.client
            .request(Endpoint::AssetRequirements, Some(&query))
            .await
    }

    /// Every model/version the service can analyze.
    pub async fn supported(&self) -> Result<Vec<SupportedAsset>, SdkError> {
        let list: KeyedList<SupportedAsset> = self
            .client
            .request(Endpoint::Supported, Some(&SupportedQuery::default()))
            .await?;
        Ok(list.into_inner())
    }
}
