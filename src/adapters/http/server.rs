//! Composition root for the HTTP server.
//!
//! Builds the ports from configuration once, wires them into the
//! application state and wraps the routes in the cross-cutting layers.

use std::sync::Arc;
use std::time::Duration;

use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, info_span};

use crate::adapters::ai::{HuggingFaceConfig, HuggingFaceProvider};
use crate::adapters::scoring::{ModelFileScorer, ThresholdScorer};
use crate::application::handlers::spoilage::{DecisionStrategy, GenerationOptions};
use crate::config::{AppConfig, DecisionMode, ServerConfig, ValidationError};
use crate::ports::{AIError, AIProvider, ScoringError, SpoilageScorer};

use super::spoilage::{spoilage_router, SpoilageAppState};

/// Errors that abort startup.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ValidationError),

    #[error("failed to build text generator client: {0}")]
    Ai(#[from] AIError),

    #[error("failed to load spoilage scorer: {0}")]
    Scoring(#[from] ScoringError),

    #[error("invalid CORS origin: {0}")]
    InvalidOrigin(String),
}

/// Builds the shared state from configuration.
///
/// The model file, when configured, is loaded here; a load failure aborts
/// startup instead of silently degrading to thresholds.
pub fn app_state(config: &AppConfig) -> Result<SpoilageAppState, StartupError> {
    let scorer: Arc<dyn SpoilageScorer> = match config.scoring.model_path() {
        Some(path) => Arc::new(ModelFileScorer::load(path)?),
        None => Arc::new(ThresholdScorer::new()),
    };

    let strategy = match config.ai.decision_mode {
        DecisionMode::Rules => DecisionStrategy::Rules,
        DecisionMode::Llm => {
            let token = config
                .ai
                .hf_token
                .clone()
                .filter(|t| !t.trim().is_empty())
                .ok_or(ValidationError::MissingRequired("HF_TOKEN"))?;
            let provider = HuggingFaceProvider::new(
                HuggingFaceConfig::new(token)
                    .with_model(config.ai.model.clone())
                    .with_base_url(config.ai.base_url.clone())
                    .with_timeout(config.ai.timeout()),
            )?;
            DecisionStrategy::Llm(Arc::new(provider) as Arc<dyn AIProvider>)
        }
    };

    let options = GenerationOptions {
        temperature: config.ai.temperature,
        max_tokens: config.ai.max_tokens,
        timeout: config.ai.timeout(),
    };

    info!(
        engine = scorer.name(),
        decision_mode = strategy.mode(),
        model = %config.ai.model,
        "Service state initialized"
    );

    Ok(SpoilageAppState::new(scorer, strategy, options))
}

/// Returns the [`Router`] of this application.
pub fn router(state: SpoilageAppState, server: &ServerConfig) -> Result<Router, StartupError> {
    let trace_layer = TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        },
    );

    let allowed_origins = server
        .cors_origins_list()
        .into_iter()
        .map(|origin| {
            HeaderValue::from_str(&origin).map_err(|_| StartupError::InvalidOrigin(origin))
        })
        .collect::<Result<Vec<HeaderValue>, _>>()?;

    debug!("Allowed origins: {:?}", allowed_origins);

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_origin(allowed_origins)
        .allow_headers([AUTHORIZATION, CONTENT_TYPE, ACCEPT])
        .allow_credentials(true);

    let router = spoilage_router()
        .layer(TimeoutLayer::new(Duration::from_secs(
            server.request_timeout_secs,
        )))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state);
    Ok(router)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AiConfig;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use std::io::Write;
    use tower::ServiceExt;

    fn rules_config() -> AppConfig {
        AppConfig {
            ai: AiConfig {
                decision_mode: DecisionMode::Rules,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn rules_mode_uses_thresholds_without_token() {
        let state = app_state(&rules_config()).unwrap();
        assert_eq!(state.scorer.name(), "thresholds");
        assert_eq!(state.strategy.mode(), "rules");
    }

    #[test]
    fn llm_mode_without_token_aborts() {
        let result = app_state(&AppConfig::default());
        assert!(matches!(
            result,
            Err(StartupError::Config(ValidationError::MissingRequired("HF_TOKEN")))
        ));
    }

    #[test]
    fn llm_mode_with_token_builds_provider() {
        let mut config = AppConfig::default();
        config.ai.hf_token = Some("hf_test".to_string());

        let state = app_state(&config).unwrap();

        assert_eq!(state.strategy.mode(), "llm");
        assert_eq!(state.options.max_tokens, 200);
    }

    #[test]
    fn missing_model_file_aborts() {
        let mut config = rules_config();
        config.scoring.model_path = Some("/nonexistent/spoilage.json".to_string());

        assert!(matches!(
            app_state(&config),
            Err(StartupError::Scoring(ScoringError::ModelLoad { .. }))
        ));
    }

    #[test]
    fn configured_model_file_is_used() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            br#"{
                "produce_classes": ["Banana"],
                "risk_classes": ["Low"],
                "classifier": {"coefficients": [[0, 0, 0, 0, 0]], "intercepts": [0]},
                "regressor": {"coefficients": [0, 0, 0, 0, 0], "intercept": 9}
            }"#,
        )
        .unwrap();
        let mut config = rules_config();
        config.scoring.model_path = Some(file.path().display().to_string());

        let state = app_state(&config).unwrap();

        assert_eq!(state.scorer.name(), "model");
    }

    #[test]
    fn invalid_origin_is_rejected() {
        let state = app_state(&rules_config()).unwrap();
        let server = ServerConfig {
            cors_origins: Some("http://ok.example.com,bad\norigin".to_string()),
            ..Default::default()
        };

        assert!(matches!(
            router(state, &server),
            Err(StartupError::InvalidOrigin(_))
        ));
    }

    #[tokio::test]
    async fn cors_preflight_allows_dev_origin() {
        let state = app_state(&rules_config()).unwrap();
        let app = router(state, &ServerConfig::default()).unwrap();

        let response = app
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri("/analyze")
                    .header(header::ORIGIN, "http://localhost:5500")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            "http://localhost:5500"
        );
    }
}
