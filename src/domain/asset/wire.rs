//! Wire types for asset requests and responses (REST).

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::shared::serde_util;

// ─── Query parameters ───────────────────────────────────────────────────────

/// Query for `GET request/assetRequirements`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RequirementsQuery {
    pub model: u64,
    pub version: u64,
}

/// Query for `GET request/supported`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SupportedQuery {
    #[serde(rename = "type")]
    pub kind: &'static str,
}

impl Default for SupportedQuery {
    fn default() -> Self {
        Self { kind: "model" }
    }
}

// ─── Responses ──────────────────────────────────────────────────────────────

/// One model/version the service can analyze.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportedAsset {
    #[serde(deserialize_with = "serde_util::id::deserialize")]
    pub asset_id: u64,
    pub name: String,
    pub manufacturer: String,
    /// Asset category of the manufacturer (the `type` of an analysis input).
    #[serde(default, deserialize_with = "serde_util::id::deserialize_u32")]
    pub manufacturer_type: u32,
    #[serde(deserialize_with = "serde_util::id::deserialize")]
    pub version_id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_name: Option<String>,
}

/// An inspection the model accepts, as listed by its requirements.
///
/// `hours`, `cycles` and `date` are passed through as sent: interval values,
/// timestamps or date strings depending on the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InspectionRequirement {
    #[serde(deserialize_with = "serde_util::id::deserialize")]
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub hours: Value,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub cycles: Value,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub date: Value,
}

/// Inputs a model needs for an analysis.
///
/// `inspections` and `coverage` are typed; every other member of the
/// response is kept as raw JSON in `fields`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetRequirements {
    #[serde(default, deserialize_with = "serde_util::keyed_or_list::deserialize")]
    pub inspections: Vec<InspectionRequirement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coverage: Option<Value>,
    #[serde(flatten)]
    pub fields: BTreeMap<String, Value>,
}

impl AssetRequirements {
    /// Raw value of any other response member.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Whether the response marks `name` as needed.
    ///
    /// A member counts as required when it is `true`, a non-zero number, or
    /// an object with a truthy `required` member.
    pub fn is_required(&self, name: &str) -> bool {
        match self.field(name) {
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0),
            Some(Value::String(s)) => matches!(s.trim(), "1" | "true"),
            Some(Value::Object(map)) => match map.get("required") {
                Some(Value::Bool(b)) => *b,
                Some(Value::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0),
                _ => false,
            },
            _ => false,
        }
    }

    pub fn inspection(&self, id: u64) -> Option<&InspectionRequirement> {
        self.inspections.iter().find(|i| i.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::serde_util::KeyedList;
    use serde_json::json;

    #[test]
    fn test_requirements_query_string() {
        let query = RequirementsQuery { model: 566, version: 1 };
        assert_eq!(serde_urlencoded::to_string(query).unwrap(), "model=566&version=1");
        assert_eq!(
            serde_urlencoded::to_string(SupportedQuery::default()).unwrap(),
            "type=model"
        );
    }

    #[test]
    fn test_supported_assets_from_keyed_object() {
        let raw = json!({
            "566": {
                "asset_id": "566",
                "name": "Citation Mustang",
                "manufacturer": "cessna",
                "manufacturer_type": 0,
                "version_id": 1,
                "version_name": "Base"
            },
            "12": {
                "asset_id": 12,
                "name": "G550",
                "manufacturer": "gulfstream",
                "manufacturer_type": "0",
                "version_id": "3"
            }
        });
        let assets = serde_json::from_value::<KeyedList<SupportedAsset>>(raw)
            .unwrap()
            .into_inner();
        assert_eq!(assets.len(), 2);
        assert_eq!(assets[0].asset_id, 12);
        assert_eq!(assets[0].version_id, 3);
        assert_eq!(assets[0].version_name, None);
        assert_eq!(assets[1].name, "Citation Mustang");
        assert_eq!(assets[1].version_name.as_deref(), Some("Base"));
    }

    #[test]
    fn test_supported_asset_missing_required_field() {
        let raw = json!([{"asset_id": 1, "manufacturer": "cessna", "version_id": 1}]);
        assert!(serde_json::from_value::<KeyedList<SupportedAsset>>(raw).is_err());
    }

    #[test]
    fn test_requirements_keeps_unknown_fields() {
        let raw = json!({
            "inspections": {
                "11": {"id": 11, "description": "Phase 2", "hours": 1, "cycles": "1", "date": 0},
                "10": {"id": "10", "description": "Phase 1", "hours": true}
            },
            "coverage": {"airframe": ["msp"]},
            "serial": true,
            "tail": {"required": 0},
            "manufacture": {"required": true},
            "delivery": 0
        });
        let req: AssetRequirements = serde_json::from_value(raw).unwrap();

        assert_eq!(req.inspections.iter().map(|i| i.id).collect::<Vec<_>>(), vec![10, 11]);
        let phase2 = req.inspection(11).unwrap();
        assert_eq!(
            (&phase2.hours, &phase2.cycles, &phase2.date),
            (&json!(1), &json!("1"), &json!(0))
        );
        assert!(req.inspection(10).unwrap().cycles.is_null());
        assert_eq!(req.coverage, Some(json!({"airframe": ["msp"]})));

        assert!(req.is_required("serial"));
        assert!(req.is_required("manufacture"));
        assert!(!req.is_required("tail"));
        assert!(!req.is_required("delivery"));
        assert!(!req.is_required("modifications"));
        assert!(req.field("inspections").is_none());
    }

    #[test]
    fn test_requirements_pass_interval_values_through() {
        let req: AssetRequirements = serde_json::from_value(json!({
            "inspections": {
                "10": {"id": 10, "description": "Phase 1", "hours": 250.5, "date": "2008-01-10"},
                "11": {"id": 11, "cycles": 175, "date": 1199923200}
            }
        }))
        .unwrap();

        let phase1 = req.inspection(10).unwrap();
        assert_eq!(phase1.hours, json!(250.5));
        assert_eq!(phase1.date, json!("2008-01-10"));
        assert_eq!(req.inspection(11).unwrap().date, json!(1199923200));
    }

    #[test]
    fn test_requirements_error_names_bad_inspection() {
        let err = serde_json::from_value::<AssetRequirements>(json!({
            "inspections": {"10": {"id": 10}, "12": {"description": "no id"}}
        }))
        .unwrap_err()
        .to_string();
        assert!(err.contains("\"12\""), "{}", err);
        assert!(err.contains("missing field `id`"), "{}", err);
    }

    #[test]
    fn test_requirements_empty_object() {
        let req: AssetRequirements = serde_json::from_value(json!({})).unwrap();
        assert_eq!(req, AssetRequirements::default());
    }
}
