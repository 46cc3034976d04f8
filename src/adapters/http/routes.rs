//! Axum routes for the triage endpoints.
//!
//! Endpoints:
//! - POST /analyze_message - Analyze one patient message
//! - GET /health - Liveness probe

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{analyze_message, health, TriageAppState};

/// Creates the triage routing table.
pub fn triage_routes() -> Router<TriageAppState> {
    Router::new()
        .route("/analyze_message", post(analyze_message))
        .route("/health", get(health))
}

/// Creates the full router with state applied.
pub fn triage_router(state: TriageAppState) -> Router {
    triage_routes().with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockModelClient;
    use crate::application::AnalysisPipeline;
    use std::sync::Arc;

    #[test]
    fn triage_router_creates_valid_router() {
        let pipeline = Arc::new(AnalysisPipeline::new(Arc::new(MockModelClient::new())));
        let _router = triage_router(TriageAppState::new(pipeline));
    }
}
