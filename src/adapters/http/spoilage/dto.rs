//! HTTP DTOs for spoilage endpoints
//!
//! Field names are snake_case on the wire; camelCase aliases are accepted on
//! input so older dashboard clients keep working.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Confidence, RiskLevel};
use crate::domain::spoilage::{SensorHistory, SpoilageAssessment};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to analyze one batch
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default, alias = "batchId")]
    pub batch_id: Option<String>,
    #[serde(alias = "produceType", alias = "produce_type")]
    pub produce: String,
    pub temperature: f64,
    pub humidity: f64,
    #[serde(alias = "storageDays")]
    pub storage_days: u32,
}

/// Request for a priority decision
#[derive(Debug, Clone, Deserialize)]
pub struct DecideRequest {
    pub produce: String,
    #[serde(alias = "spoilageRisk", alias = "risk")]
    pub spoilage_risk: RiskLevel,
    #[serde(alias = "remainingDays")]
    pub remaining_days: f64,
}

/// Request to predict spoilage from sensor history
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PredictSpoilageRequest {
    #[serde(default, alias = "temperatureHistory")]
    pub temperature_history: Vec<f64>,
    #[serde(default, alias = "humidityHistory")]
    pub humidity_history: Vec<f64>,
    #[serde(default, alias = "produceType")]
    pub produce_type: String,
    #[serde(default, alias = "storageDurationDays")]
    pub storage_duration_days: u32,
}

impl From<PredictSpoilageRequest> for SensorHistory {
    fn from(req: PredictSpoilageRequest) -> Self {
        SensorHistory {
            temperature_history: req.temperature_history,
            humidity_history: req.humidity_history,
            produce_type: req.produce_type,
            storage_duration_days: req.storage_duration_days,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Service status
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub status: String,
    pub engine: String,
    pub decision_mode: String,
}

/// Spoilage prediction
#[derive(Debug, Clone, Serialize)]
pub struct PredictSpoilageResponse {
    pub spoilage_risk: RiskLevel,
    pub remaining_days: f64,
    pub confidence: Confidence,
}

impl From<SpoilageAssessment> for PredictSpoilageResponse {
    fn from(assessment: SpoilageAssessment) -> Self {
        Self {
            spoilage_risk: assessment.risk,
            remaining_days: assessment.remaining_days,
            confidence: assessment.confidence,
        }
    }
}

/// Standard error response
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
        }
    }

    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self {
            code: "UNPROCESSABLE_ENTITY".to_string(),
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_request_accepts_camel_case() {
        let json = r#"{"batchId":"B-1","produce":"Mango","temperature":21.5,"humidity":80,"storageDays":3}"#;
        let req: AnalyzeRequest = serde_json::from_str(json).unwrap();

        assert_eq!(req.batch_id.as_deref(), Some("B-1"));
        assert_eq!(req.storage_days, 3);
        assert_eq!(req.humidity, 80.0);
    }

    #[test]
    fn test_analyze_request_batch_id_optional() {
        let json = r#"{"produce":"Mango","temperature":21.5,"humidity":80,"storage_days":3}"#;
        let req: AnalyzeRequest = serde_json::from_str(json).unwrap();

        assert!(req.batch_id.is_none());
    }

    #[test]
    fn test_decide_request_keeps_unknown_risk_opaque() {
        let json = r#"{"produce":"Kale","spoilage_risk":"Critical","remaining_days":4}"#;
        let req: DecideRequest = serde_json::from_str(json).unwrap();

        assert_eq!(req.spoilage_risk, RiskLevel::Other("Critical".to_string()));
    }

    #[test]
    fn test_predict_request_defaults_missing_fields() {
        let req: PredictSpoilageRequest =
            serde_json::from_str(r#"{"produce_type":"Banana"}"#).unwrap();
        let history = SensorHistory::from(req);

        assert!(history.temperature_history.is_empty());
        assert_eq!(history.storage_duration_days, 0);
    }

    #[test]
    fn test_error_response_serializes_code_and_message() {
        let json = serde_json::to_value(ErrorResponse::bad_request("humidity out of range")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"code": "BAD_REQUEST", "message": "humidity out of range"})
        );
    }
}
