//! Inspection domain — the catalogue of recognised inspections.

#[cfg(feature = "http")]
pub mod client;

use serde::{Deserialize, Serialize};

use crate::shared::serde_util;

/// An inspection known to the service.
///
/// `hours`, `cycles` and `date` tell which interval kinds the inspection
/// accepts in an analysis input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InspectionDefinition {
    #[serde(deserialize_with = "serde_util::id::deserialize")]
    pub id: u64,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "serde_util::flag::deserialize")]
    pub hours: bool,
    #[serde(default, deserialize_with = "serde_util::flag::deserialize")]
    pub cycles: bool,
    #[serde(default, deserialize_with = "serde_util::flag::deserialize")]
    pub date: bool,
    /// Model the inspection belongs to, if model-specific.
    #[serde(
        default,
        deserialize_with = "serde_util::id::option::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub asset_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_name: Option<String>,
}

impl InspectionDefinition {
    pub fn applies_to(&self, asset_id: u64) -> bool {
        self.asset_id.map_or(true, |id| id == asset_id)
    }
}
