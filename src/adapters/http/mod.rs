//! HTTP adapter - axum routes, handlers, and DTOs for the triage API.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    AnalysisView, AnalyzeMessageRequest, AnalyzeMessageResponse, ErrorResponse, InboxMessageDto,
};
pub use handlers::{analyze_message, health, TriageApiError, TriageAppState};
pub use routes::{triage_router, triage_routes};
