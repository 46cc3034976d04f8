//! Analysis request/response records.

use serde::{Deserialize, Serialize};

use super::{InboxMessage, MessageCategory, MessageUrgency, SafetyFlag};

/// Request to analyze one inbox message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// The message to triage.
    pub message: InboxMessage,
}

impl AnalysisRequest {
    /// Creates a request for the given message.
    pub fn new(message: InboxMessage) -> Self {
        Self { message }
    }
}

/// Structured triage result for one message.
///
/// `categories` and `safety_flags` are never empty (the parser substitutes
/// `other` / `none`), and `raw_model_output` is always exactly what the
/// model returned, kept for audit and debugging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Triage urgency.
    pub urgency: MessageUrgency,
    /// One or more message categories, first-occurrence order.
    pub categories: Vec<MessageCategory>,
    /// Concise summary aimed at a clinician. May be empty if the model
    /// omitted it.
    pub clinician_summary: String,
    /// Patient-friendly draft reply for clinician review. May be empty.
    pub draft_patient_reply: String,
    /// One or more safety flags.
    pub safety_flags: Vec<SafetyFlag>,
    /// True if this message should be escalated for urgent review.
    pub escalate: bool,
    /// Unmodified raw text from the model.
    pub raw_model_output: String,
}

/// Response pairing the source message identifier with its analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    /// Identifier of the analyzed message, if the request carried one.
    pub message_id: Option<String>,
    /// The triage analysis.
    pub analysis: AnalysisResult,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> AnalysisResult {
        AnalysisResult {
            urgency: MessageUrgency::Urgent,
            categories: vec![MessageCategory::Clinical],
            clinician_summary: "Chest pain for 2 hours.".to_string(),
            draft_patient_reply: "Please seek urgent care.".to_string(),
            safety_flags: vec![SafetyFlag::PossibleEmergency],
            escalate: true,
            raw_model_output: "{}".to_string(),
        }
    }

    #[test]
    fn response_serializes_with_snake_case_keys() {
        let response = AnalysisResponse {
            message_id: Some("msg-1".to_string()),
            analysis: sample_result(),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["message_id"], "msg-1");
        assert_eq!(json["analysis"]["urgency"], "urgent");
        assert_eq!(json["analysis"]["categories"][0], "clinical");
        assert_eq!(json["analysis"]["safety_flags"][0], "possible_emergency");
        assert_eq!(json["analysis"]["escalate"], true);
        assert_eq!(json["analysis"]["raw_model_output"], "{}");
    }

    #[test]
    fn response_message_id_serializes_as_null_when_absent() {
        let response = AnalysisResponse {
            message_id: None,
            analysis: sample_result(),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert!(json["message_id"].is_null());
    }
}
