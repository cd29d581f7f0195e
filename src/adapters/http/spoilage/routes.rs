//! Route definitions for spoilage endpoints

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{analyze, decide, predict_spoilage, status, SpoilageAppState};

/// Create spoilage router with all endpoints
///
/// # Endpoints
///
/// - `GET /` - Service status
/// - `POST /analyze` - Score a batch and decide its priority
/// - `POST /decide` - Decide a priority from risk and remaining days
/// - `POST /predict/spoilage` - Score averaged sensor history
pub fn spoilage_router() -> Router<SpoilageAppState> {
    Router::new()
        .route("/", get(status))
        .route("/analyze", post(analyze))
        .route("/decide", post(decide))
        .route("/predict/spoilage", post(predict_spoilage))
}
