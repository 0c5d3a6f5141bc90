//! Inspections sub-client.

use crate::client::AssetInsightClient;
use crate::domain::inspection::InspectionDefinition;
use crate::error::SdkError;
use crate::http::Endpoint;
use crate::shared::serde_util::KeyedList;

/// Sub-client for the inspection catalogue.
pub struct Inspections<'a> {
    pub(crate) client: &'a AssetInsightClient,
}

impl<'a> Inspections<'a> {
    /// All inspections the service recognises.
    pub async fn list(&self) -> Result<Vec<InspectionDefinition>, SdkError> {
        let list: KeyedList<InspectionDefinition> = self
            .client
            .request(Endpoint::Inspections, None::<&()>)
            .await?;
        Ok(list.into_inner())
    }

    /// Inspections that apply to model `asset_id`, including generic ones.
    pub async fn for_asset(&self, asset_id: u64) -> Result<Vec<InspectionDefinition>, SdkError> {
        let mut list = self.list().await?;
        list.retain(|i| i.applies_to(asset_id));
        Ok(list)
    }
}
