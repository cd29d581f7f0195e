//! HTTP handlers for spoilage endpoints
//!
//! These handlers connect Axum routes to application layer handlers.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::spoilage::{
    AnalyzeBatchCommand, AnalyzeBatchError, AnalyzeBatchHandler, DecidePriorityHandler,
    DecisionStrategy, GenerationOptions, PredictSpoilageHandler,
};
use crate::domain::decision::DecisionRequest;
use crate::domain::foundation::ValidationError;
use crate::domain::spoilage::{SensorHistory, SensorReading};
use crate::ports::{ScoringError, SpoilageScorer};

use super::dto::{
    AnalyzeRequest, DecideRequest, ErrorResponse, PredictSpoilageRequest,
    PredictSpoilageResponse, StatusResponse,
};

/// Reported by the status endpoint while the service is serving.
pub const STATUS_ONLINE: &str = "AI Service Online";

type ErrorReply = (StatusCode, Json<ErrorResponse>);

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct SpoilageAppState {
    pub scorer: Arc<dyn SpoilageScorer>,
    pub strategy: DecisionStrategy,
    pub options: GenerationOptions,
}

impl SpoilageAppState {
    pub fn new(
        scorer: Arc<dyn SpoilageScorer>,
        strategy: DecisionStrategy,
        options: GenerationOptions,
    ) -> Self {
        Self {
            scorer,
            strategy,
            options,
        }
    }

    pub fn decide_priority_handler(&self) -> DecidePriorityHandler {
        DecidePriorityHandler::new(self.strategy.clone(), self.options)
    }

    pub fn analyze_batch_handler(&self) -> AnalyzeBatchHandler {
        AnalyzeBatchHandler::new(self.scorer.clone(), self.decide_priority_handler())
    }

    pub fn predict_spoilage_handler(&self) -> PredictSpoilageHandler {
        PredictSpoilageHandler::new(self.scorer.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// Service status
///
/// GET /
pub async fn status(State(app_state): State<SpoilageAppState>) -> impl IntoResponse {
    Json(StatusResponse {
        status: STATUS_ONLINE.to_string(),
        engine: app_state.scorer.name().to_string(),
        decision_mode: app_state.strategy.mode().to_string(),
    })
}

/// Score a batch and decide its dispatch priority
///
/// POST /analyze
pub async fn analyze(
    State(app_state): State<SpoilageAppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<impl IntoResponse, impl IntoResponse> {
    let reading = SensorReading::new(req.produce, req.temperature, req.humidity, req.storage_days)
        .map_err(validation_error)?;

    let cmd = AnalyzeBatchCommand {
        batch_id: req.batch_id,
        reading,
    };

    let handler = app_state.analyze_batch_handler();
    let analysis = handler.handle(cmd).await.map_err(|e| match e {
        AnalyzeBatchError::Scoring(err) => scoring_error(err),
    })?;

    Ok::<_, ErrorReply>(Json(analysis))
}

/// Decide a dispatch priority for an already scored batch
///
/// POST /decide
pub async fn decide(
    State(app_state): State<SpoilageAppState>,
    Json(req): Json<DecideRequest>,
) -> Result<impl IntoResponse, impl IntoResponse> {
    let request = DecisionRequest::new(req.produce, req.spoilage_risk, req.remaining_days)
        .map_err(validation_error)?;

    let record = app_state.decide_priority_handler().handle(&request).await;

    Ok::<_, ErrorReply>(Json(record))
}

/// Predict spoilage from a sensor history
///
/// POST /predict/spoilage
pub async fn predict_spoilage(
    State(app_state): State<SpoilageAppState>,
    Json(req): Json<PredictSpoilageRequest>,
) -> Result<impl IntoResponse, impl IntoResponse> {
    let history = SensorHistory::from(req);

    let assessment = app_state
        .predict_spoilage_handler()
        .handle(&history)
        .map_err(scoring_error)?;

    Ok::<_, ErrorReply>(Json(PredictSpoilageResponse::from(assessment)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error mapping
// ════════════════════════════════════════════════════════════════════════════════

fn validation_error(err: ValidationError) -> ErrorReply {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::bad_request(err.to_string())),
    )
}

fn scoring_error(err: ScoringError) -> ErrorReply {
    match err {
        ScoringError::Invalid(err) => validation_error(err),
        ScoringError::UnknownProduce(_) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse::unprocessable(err.to_string())),
        ),
        ScoringError::ModelLoad { .. } | ScoringError::InvalidModel(_) => {
            tracing::error!(error = %err, "Spoilage scorer failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal(err.to_string())),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_produce_maps_to_unprocessable() {
        let (status, body) = scoring_error(ScoringError::UnknownProduce("Durian".into()));
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body.0.code, "UNPROCESSABLE_ENTITY");
    }

    #[test]
    fn test_invalid_reading_maps_to_bad_request() {
        let (status, _) = scoring_error(ScoringError::Invalid(ValidationError::empty_field(
            "produce",
        )));
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_model_failure_maps_to_internal() {
        let (status, body) = scoring_error(ScoringError::InvalidModel("no classes".into()));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.0.code, "INTERNAL_ERROR");
    }
}
