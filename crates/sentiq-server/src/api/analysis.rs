use axum::{extract::State, Extension, Json};
use serde::Deserialize;

use sentiq_analysis::{assemble, assemble_report, run_batch, AnalysisRecord, AnalysisReport};

use crate::middleware::RequestId;

use super::{map_engine_error, require_ready, ApiError, AppState};

#[derive(Debug, Deserialize)]
pub(super) struct ScoreRequest {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct BatchScoreRequest {
    #[serde(default)]
    texts: Option<Vec<String>>,
}

/// `POST /score` — analyze a single text.
pub(super) async fn score(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(payload): Json<ScoreRequest>,
) -> Result<Json<AnalysisRecord>, ApiError> {
    let engines = require_ready(&state, &req_id.0).await?;
    let text = require_text(payload.text, &req_id.0)?;

    let raw = engines
        .sentiment
        .classify(&text)
        .await
        .map_err(|e| map_engine_error(req_id.0.clone(), &e))?;
    let Some(classification) = raw.first() else {
        tracing::error!("classifier returned an empty output");
        return Err(ApiError::new(
            req_id.0,
            "internal_error",
            "classifier returned an empty output",
        ));
    };

    tracing::debug!(
        label = %classification.label,
        scheme = sentiq_analysis::scheme_for(&classification.label),
        "normalizing classifier output"
    );

    let entities = engines.entities.extract(&text);
    let record = assemble(classification, entities).into_record(engines.model.clone());
    Ok(Json(record))
}

/// `POST /batch/score` — analyze an ordered batch of texts.
pub(super) async fn batch_score(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(payload): Json<BatchScoreRequest>,
) -> Result<Json<Vec<AnalysisRecord>>, ApiError> {
    let engines = require_ready(&state, &req_id.0).await?;

    let texts = payload.texts.unwrap_or_default();
    if texts.is_empty() {
        return Err(ApiError::new(
            req_id.0,
            "bad_request",
            "texts[] is required",
        ));
    }
    if texts.len() > state.config.max_batch {
        return Err(ApiError::new(
            req_id.0,
            "payload_too_large",
            format!(
                "batch size {} exceeds maximum {}",
                texts.len(),
                state.config.max_batch
            ),
        ));
    }
    if let Some(index) = texts.iter().position(|t| t.trim().is_empty()) {
        return Err(ApiError::new(
            req_id.0,
            "bad_request",
            format!("texts[{index}] is empty"),
        ));
    }

    tracing::debug!(batch_size = texts.len(), "scoring batch");

    let raws = engines
        .sentiment
        .classify_batch(&texts)
        .await
        .map_err(|e| map_engine_error(req_id.0.clone(), &e))?;

    let assemblies =
        run_batch(&raws, &texts, |text| engines.entities.extract(text)).map_err(|e| {
            tracing::error!(error = %e, "batch assembly failed");
            ApiError::new(req_id.0.clone(), "internal_error", "batch assembly failed")
        })?;

    let records = assemblies
        .into_iter()
        .map(|assembly| assembly.into_record(engines.model.clone()))
        .collect();
    Ok(Json(records))
}

/// `POST /analyze` — single text, rescaled score plus rationale.
pub(super) async fn analyze(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(payload): Json<ScoreRequest>,
) -> Result<Json<AnalysisReport>, ApiError> {
    let engines = require_ready(&state, &req_id.0).await?;
    let text = require_text(payload.text, &req_id.0)?;

    let raw = engines
        .sentiment
        .classify(&text)
        .await
        .map_err(|e| map_engine_error(req_id.0.clone(), &e))?;
    let Some(classification) = raw.first() else {
        tracing::error!("classifier returned an empty output");
        return Err(ApiError::new(
            req_id.0,
            "internal_error",
            "classifier returned an empty output",
        ));
    };

    let entities = engines.entities.extract(&text);
    let report = assemble_report(classification, entities).into_report(engines.model.clone());
    Ok(Json(report))
}

/// Validate and trim the request text; absence or emptiness is a
/// client-input failure.
fn require_text(text: Option<String>, request_id: &str) -> Result<String, ApiError> {
    match text {
        Some(text) if !text.trim().is_empty() => Ok(text.trim().to_string()),
        _ => Err(ApiError::new(
            request_id.to_string(),
            "bad_request",
            "text is required",
        )),
    }
}
