//! Analysis domain — submitting an asset for maintenance analysis.

#[cfg(feature = "http")]
pub mod client;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::shared::serde_util;

/// Body of `POST process/analysis`.
///
/// `user` is always sent; it is `null` when the analysis is not tied to a
/// user account.
#[derive(Debug, Serialize)]
pub struct AnalysisRequest<'a, A: Serialize + ?Sized> {
    pub user: Option<&'a str>,
    pub asset: &'a A,
}

/// Outcome of an analysis request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Id of the stored analysis.
    #[serde(deserialize_with = "serde_util::id::deserialize")]
    pub analysis: u64,
    /// Time the service spent generating the analysis, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generation: Option<f64>,
    /// Assumptions the analysis was run with.
    #[serde(default)]
    pub inputs: Value,
    #[serde(default)]
    pub results: Value,
}

impl AnalysisResult {
    /// Look up a value in `results` by JSON pointer, e.g. `"/airframe/cost"`.
    pub fn result(&self, pointer: &str) -> Option<&Value> {
        self.results.pointer(pointer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::asset::AssetInput;
    use serde_json::json;

    #[test]
    fn test_request_without_user_sends_null() {
        let asset = AssetInput::new(0, "cessna", 566, 1);
        let body = serde_json::to_value(AnalysisRequest { user: None, asset: &asset }).unwrap();
        assert_eq!(
            body,
            json!({
                "user": null,
                "asset": {"type": 0, "manufacturer": "cessna", "model": 566, "version": 1}
            })
        );
    }

    #[test]
    fn test_request_accepts_raw_json_asset() {
        let asset = json!({"type": 0, "custom": [1, 2]});
        let body = serde_json::to_value(AnalysisRequest {
            user: Some("7"),
            asset: &asset,
        })
        .unwrap();
        assert_eq!(body, json!({"user": "7", "asset": {"type": 0, "custom": [1, 2]}}));
    }

    #[test]
    fn test_analysis_result_decoding() {
        let result: AnalysisResult = serde_json::from_value(json!({
            "analysis": "9001",
            "generation": 0.42,
            "inputs": {"model": 566},
            "results": {"airframe": {"cost": 125000}}
        }))
        .unwrap();
        assert_eq!(result.analysis, 9001);
        assert_eq!(result.generation, Some(0.42));
        assert_eq!(result.result("/airframe/cost"), Some(&json!(125000)));
        assert_eq!(result.result("/engines"), None);

        let bare: AnalysisResult = serde_json::from_value(json!({"analysis": 1})).unwrap();
        assert!(bare.inputs.is_null() && bare.results.is_null());

        assert!(serde_json::from_value::<AnalysisResult>(json!({"results": {}})).is_err());
    }
}
