//! HTTP adapter for the spoilage endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    AnalyzeRequest, DecideRequest, ErrorResponse, PredictSpoilageRequest,
    PredictSpoilageResponse, StatusResponse,
};
pub use handlers::{SpoilageAppState, STATUS_ONLINE};
pub use routes::spoilage_router;
