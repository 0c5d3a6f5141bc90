//! Asset domain — analysis inputs, supported models, input requirements.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::shared::unix_timestamp;

pub use wire::{AssetRequirements, InspectionRequirement, SupportedAsset};

// ─── AssetInput ──────────────────────────────────────────────────────────────

/// Inputs describing one asset to analyze (the `asset` member of
/// `POST process/analysis`).
///
/// Only `type`, `manufacturer`, `model` and `version` are always sent; the
/// rest are omitted from the JSON while unset. Use
/// [`AssetRequirements`] to find out which fields a model needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetInput {
    /// Asset category.
    #[serde(rename = "type")]
    pub asset_type: u32,
    /// Machine name of the manufacturer, e.g. `"cessna"`.
    pub manufacturer: String,
    /// Model id (the `asset_id` of a [`SupportedAsset`]).
    pub model: u64,
    /// Model sub-version id.
    pub version: u64,
    /// Date of manufacture (unix seconds).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacture: Option<i64>,
    /// Date of delivery (unix seconds).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial: Option<String>,
    /// Secondary identification (registration / tail number).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tail: Option<String>,
    /// Installed modifications keyed by modification id.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub modifications: BTreeMap<u64, Modification>,
    #[serde(default, skip_serializing_if = "Coverage::is_empty")]
    pub coverage: Coverage,
    /// Last known inspection completions keyed by inspection id.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub inspections: BTreeMap<u64, InspectionInput>,
}

impl AssetInput {
    /// Create an input with the required identification fields.
    pub fn new(asset_type: u32, manufacturer: impl Into<String>, model: u64, version: u64) -> Self {
        Self {
            asset_type,
            manufacturer: manufacturer.into(),
            model,
            version,
            manufacture: None,
            delivery: None,
            serial: None,
            tail: None,
            modifications: BTreeMap::new(),
            coverage: Coverage::default(),
            inspections: BTreeMap::new(),
        }
    }

    /// Input for a [`SupportedAsset`] listing.
    pub fn for_supported(asset: &SupportedAsset) -> Self {
        Self::new(
            asset.manufacturer_type,
            asset.manufacturer.clone(),
            asset.asset_id,
            asset.version_id,
        )
    }

    pub fn with_manufacture(mut self, timestamp: i64) -> Self {
        self.manufacture = Some(timestamp);
        self
    }

    pub fn with_manufacture_date(self, date: DateTime<Utc>) -> Self {
        self.with_manufacture(unix_timestamp(date))
    }

    pub fn with_delivery(mut self, timestamp: i64) -> Self {
        self.delivery = Some(timestamp);
        self
    }

    pub fn with_delivery_date(self, date: DateTime<Utc>) -> Self {
        self.with_delivery(unix_timestamp(date))
    }

    pub fn with_serial(mut self, serial: impl Into<String>) -> Self {
        self.serial = Some(serial.into());
        self
    }

    pub fn with_tail(mut self, tail: impl Into<String>) -> Self {
        self.tail = Some(tail.into());
        self
    }

    /// Add a modification, keyed by its id.
    pub fn with_modification(mut self, modification: Modification) -> Self {
        self.modifications.insert(modification.id, modification);
        self
    }

    pub fn with_coverage(mut self, coverage: Coverage) -> Self {
        self.coverage = coverage;
        self
    }

    pub fn with_inspection(mut self, inspection_id: u64, inspection: InspectionInput) -> Self {
        self.inspections.insert(inspection_id, inspection);
        self
    }
}

// ─── Modification ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modification {
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub installed: bool,
}

impl Modification {
    pub fn installed(id: u64) -> Self {
        Self {
            id,
            description: None,
            installed: true,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

// ─── Coverage ────────────────────────────────────────────────────────────────

/// Maintenance coverage program per component group.
///
/// Values are program names; machine names (e.g. `"msp"`) are preferred but
/// custom program names are accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coverage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub airframe: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engines: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apu: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avionics: Option<String>,
}

impl Coverage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn airframe(mut self, program: impl Into<String>) -> Self {
        self.airframe = Some(program.into());
        self
    }

    pub fn engines(mut self, program: impl Into<String>) -> Self {
        self.engines = Some(program.into());
        self
    }

    pub fn apu(mut self, program: impl Into<String>) -> Self {
        self.apu = Some(program.into());
        self
    }

    pub fn avionics(mut self, program: impl Into<String>) -> Self {
        self.avionics = Some(program.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.airframe.is_none()
            && self.engines.is_none()
            && self.apu.is_none()
            && self.avionics.is_none()
    }
}

// ─── InspectionInput ─────────────────────────────────────────────────────────

/// Last known completion (or current time) of one inspection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InspectionInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cycles: Option<u64>,
    /// Unix seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<i64>,
}

impl InspectionInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hours(mut self, hours: u64) -> Self {
        self.hours = Some(hours);
        self
    }

    pub fn cycles(mut self, cycles: u64) -> Self {
        self.cycles = Some(cycles);
        self
    }

    pub fn date(mut self, timestamp: i64) -> Self {
        self.date = Some(timestamp);
        self
    }

    pub fn on(self, date: DateTime<Utc>) -> Self {
        self.date(unix_timestamp(date))
    }
}
