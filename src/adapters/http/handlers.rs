//! HTTP handlers for the triage endpoints.
//!
//! These handlers connect axum routes to the analysis pipeline.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use uuid::Uuid;

use crate::application::{AnalysisError, AnalysisPipeline};
use crate::domain::triage::AnalysisRequest;

use super::dto::{AnalyzeMessageRequest, AnalyzeMessageResponse, ErrorResponse};

/// Shared application state for triage handlers.
#[derive(Clone)]
pub struct TriageAppState {
    pub pipeline: Arc<AnalysisPipeline>,
}

impl TriageAppState {
    /// Creates a new TriageAppState.
    pub fn new(pipeline: Arc<AnalysisPipeline>) -> Self {
        Self { pipeline }
    }
}

/// POST /analyze_message - Analyze one patient message.
///
/// # Errors
/// - 400 Bad Request: empty message body
/// - 502 Bad Gateway: model unreachable (`MODEL_UNAVAILABLE`) or model
///   output not coercible into JSON (`MODEL_OUTPUT_UNPARSEABLE`)
pub async fn analyze_message(
    State(state): State<TriageAppState>,
    Json(request): Json<AnalyzeMessageRequest>,
) -> Result<impl IntoResponse, TriageApiError> {
    let trace_id = Uuid::new_v4();

    let message = request
        .message
        .into_domain()
        .map_err(|e| TriageApiError::BadRequest(e.to_string()))?;

    tracing::debug!(%trace_id, message_id = message.message_id.as_deref().unwrap_or("-"), "analyze request accepted");

    let response = state
        .pipeline
        .analyze(AnalysisRequest::new(message))
        .await
        .map_err(|e| match e {
            AnalysisError::Model(err) => {
                tracing::error!(%trace_id, error = %err, "model call failed");
                TriageApiError::ModelUnavailable(err.to_string())
            }
            AnalysisError::Parse(err) => {
                tracing::error!(%trace_id, error = %err, "model output unparseable");
                TriageApiError::ModelOutputUnparseable(err.to_string())
            }
        })?;

    Ok((
        StatusCode::OK,
        Json(AnalyzeMessageResponse::from(response)),
    ))
}

/// GET /health - Liveness probe.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts pipeline failures to HTTP responses.
///
/// Both upstream failure kinds map to 502 - they are never the caller's
/// fault - but carry distinct codes so operators can tell "model down"
/// from "model misbehaving".
#[derive(Debug)]
pub enum TriageApiError {
    BadRequest(String),
    ModelUnavailable(String),
    ModelOutputUnparseable(String),
}

impl IntoResponse for TriageApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            TriageApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg))
            }
            TriageApiError::ModelUnavailable(msg) => {
                (StatusCode::BAD_GATEWAY, ErrorResponse::model_unavailable(msg))
            }
            TriageApiError::ModelOutputUnparseable(msg) => (
                StatusCode::BAD_GATEWAY,
                ErrorResponse::model_output_unparseable(msg),
            ),
        };

        (status, Json(error)).into_response()
    }
}
