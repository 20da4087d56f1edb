mod analysis;

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use sentiq_core::AppConfig;
use sentiq_engines::{EngineError, Engines};

use crate::middleware::request_id;

/// Shared handler state: the configuration and the readiness-gated engine
/// handle. The slot is `None` until initialization completes.
#[derive(Clone)]
pub struct AppState {
    pub engines: Arc<RwLock<Option<Arc<Engines>>>>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self {
            engines: Arc::new(RwLock::new(None)),
            config,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
            meta: ResponseMeta::new(request_id.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error.code.as_str() {
            "bad_request" | "validation_error" => StatusCode::BAD_REQUEST,
            "payload_too_large" => StatusCode::PAYLOAD_TOO_LARGE,
            "not_ready" => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct ReadyData {
    ready: bool,
}

/// Fetch the engine handle, or reject with the retryable `not_ready`
/// category while initialization is still in flight.
pub(super) async fn require_ready(
    state: &AppState,
    request_id: &str,
) -> Result<Arc<Engines>, ApiError> {
    state.engines.read().await.clone().ok_or_else(|| {
        ApiError::new(
            request_id.to_string(),
            "not_ready",
            "inference engines not loaded yet",
        )
    })
}

pub(super) fn map_engine_error(request_id: String, error: &EngineError) -> ApiError {
    tracing::error!(error = %error, "sentiment inference failed");
    ApiError::new(request_id, "internal_error", "sentiment inference failed")
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static("x-request-id"),
        ])
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .route("/score", post(analysis::score))
        .route("/batch/score", post(analysis::batch_score))
        .route("/analyze", post(analysis::analyze))
        .layer(
            ServiceBuilder::new()
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn healthz() -> impl IntoResponse {
    Json(HealthData { status: "ok" })
}

async fn readyz(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.engines.read().await.is_some();
    Json(ReadyData { ready })
}
