//! HTTP DTOs for the triage endpoints.
//!
//! These types decouple the HTTP API from domain types. Field names are
//! snake_case on the wire, matching the inbox integration contract.

use serde::{Deserialize, Serialize};

use crate::domain::triage::{
    AnalysisResponse, InboxMessage, MessageCategory, MessageError, MessageUrgency, SafetyFlag,
};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request body for `POST /analyze_message`.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeMessageRequest {
    /// The message to analyze.
    pub message: InboxMessageDto,
}

/// Inbound view of a patient message.
#[derive(Debug, Clone, Deserialize)]
pub struct InboxMessageDto {
    /// Identifier from the source inbox system.
    #[serde(default)]
    pub message_id: Option<String>,
    /// Identifier for the patient.
    #[serde(default)]
    pub patient_id: Option<String>,
    /// Subject line of the thread.
    #[serde(default)]
    pub subject: Option<String>,
    /// The patient's message body.
    pub body: String,
    /// Concatenated previous messages in the thread.
    #[serde(default)]
    pub previous_thread: Option<String>,
}

impl InboxMessageDto {
    /// Converts to the validated domain message.
    pub fn into_domain(self) -> Result<InboxMessage, MessageError> {
        let mut message = InboxMessage::new(self.body)?;
        if let Some(message_id) = self.message_id {
            message = message.with_message_id(message_id);
        }
        if let Some(patient_id) = self.patient_id {
            message = message.with_patient_id(patient_id);
        }
        if let Some(subject) = self.subject {
            message = message.with_subject(subject);
        }
        if let Some(previous_thread) = self.previous_thread {
            message = message.with_previous_thread(previous_thread);
        }
        Ok(message)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Response body for `POST /analyze_message`.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeMessageResponse {
    /// Identifier of the analyzed message, null when the request had none.
    pub message_id: Option<String>,
    /// The triage analysis.
    pub analysis: AnalysisView,
}

/// Outbound view of one triage analysis.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisView {
    pub urgency: MessageUrgency,
    pub categories: Vec<MessageCategory>,
    pub clinician_summary: String,
    pub draft_patient_reply: String,
    pub safety_flags: Vec<SafetyFlag>,
    pub escalate: bool,
    pub raw_model_output: String,
}

impl From<AnalysisResponse> for AnalyzeMessageResponse {
    fn from(response: AnalysisResponse) -> Self {
        let analysis = response.analysis;
        Self {
            message_id: response.message_id,
            analysis: AnalysisView {
                urgency: analysis.urgency,
                categories: analysis.categories,
                clinician_summary: analysis.clinician_summary,
                draft_patient_reply: analysis.draft_patient_reply,
                safety_flags: analysis.safety_flags,
                escalate: analysis.escalate,
                raw_model_output: analysis.raw_model_output,
            },
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Response
// ════════════════════════════════════════════════════════════════════════════════

/// Standard error response.
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

    pub fn model_unavailable(message: impl Into<String>) -> Self {
        Self {
            code: "MODEL_UNAVAILABLE".to_string(),
            message: message.into(),
        }
    }

    pub fn model_output_unparseable(message: impl Into<String>) -> Self {
        Self {
            code: "MODEL_OUTPUT_UNPARSEABLE".to_string(),
            message: message.into(),
        }
    }
}
