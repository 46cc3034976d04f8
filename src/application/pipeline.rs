//! Message analysis pipeline.
//!
//! Orchestrates one triage analysis: build the prompt, call the model
//! client once, parse its output, assemble the response. No retries, no
//! caching, no state shared between requests.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::triage::{
    build_analysis_prompt, parse_analysis, AnalysisRequest, AnalysisResponse, AnalysisResult,
    ParseError, SYSTEM_INSTRUCTIONS,
};
use crate::ports::{ModelClient, ModelError};

/// Errors from one analysis.
///
/// The two kinds are deliberately distinct so callers can tell "model
/// unreachable" from "model replied with garbage".
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The model client failed before producing any output.
    #[error("model generation failed: {0}")]
    Model(#[from] ModelError),

    /// The model produced output, but no JSON object could be recovered.
    #[error("could not parse model output: {0}")]
    Parse(#[from] ParseError),
}

/// Analyzes inbox messages through a model client.
///
/// Each call to [`analyze`](AnalysisPipeline::analyze) is independent and
/// reentrant; the pipeline can be shared across concurrent requests.
pub struct AnalysisPipeline {
    model_client: Arc<dyn ModelClient>,
}

impl AnalysisPipeline {
    /// Creates a pipeline over the given model client.
    pub fn new(model_client: Arc<dyn ModelClient>) -> Self {
        Self { model_client }
    }

    /// Runs one triage analysis.
    ///
    /// Makes exactly one model call. Transport failures surface as
    /// [`AnalysisError::Model`] without any parsing attempt; output the
    /// parser cannot recover a JSON object from surfaces as
    /// [`AnalysisError::Parse`].
    pub async fn analyze(
        &self,
        request: AnalysisRequest,
    ) -> Result<AnalysisResponse, AnalysisError> {
        let message = &request.message;
        let prompt = build_analysis_prompt(
            SYSTEM_INSTRUCTIONS,
            &message.body,
            message.previous_thread.as_deref(),
        );
        tracing::debug!(
            message_id = message.message_id.as_deref().unwrap_or("-"),
            prompt_chars = prompt.len(),
            "analyzing inbox message"
        );

        let raw_output = self.model_client.generate(&prompt).await?;
        let parsed = parse_analysis(&raw_output)?;

        let analysis = AnalysisResult {
            urgency: parsed.urgency,
            categories: parsed.categories,
            clinician_summary: parsed.clinician_summary,
            draft_patient_reply: parsed.draft_patient_reply,
            safety_flags: parsed.safety_flags,
            escalate: parsed.escalate,
            raw_model_output: raw_output,
        };
        tracing::info!(
            message_id = message.message_id.as_deref().unwrap_or("-"),
            urgency = %analysis.urgency,
            escalate = analysis.escalate,
            "analysis complete"
        );

        Ok(AnalysisResponse {
            message_id: message.message_id.clone(),
            analysis,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockModelClient;
    use crate::domain::triage::{InboxMessage, MessageCategory, MessageUrgency, SafetyFlag};

    fn request(body: &str) -> AnalysisRequest {
        AnalysisRequest::new(
            InboxMessage::new(body)
                .unwrap()
                .with_message_id("msg-1")
                .with_patient_id("patient-1"),
        )
    }

    #[tokio::test]
    async fn analyze_parses_valid_json_output() {
        let output = r#"
        {
          "urgency": "urgent",
          "categories": ["clinical"],
          "clinician_summary": "Patient reports chest pain and shortness of breath for 2 hours.",
          "draft_patient_reply": "Because chest pain can be serious, please seek urgent in-person evaluation.",
          "safety_flags": ["possible_emergency"],
          "escalate": true
        }
        "#;
        let client = MockModelClient::new().with_reply(output);
        let pipeline = AnalysisPipeline::new(Arc::new(client));

        let response = pipeline
            .analyze(request("I have chest pain and shortness of breath."))
            .await
            .unwrap();

        assert_eq!(response.message_id.as_deref(), Some("msg-1"));
        assert_eq!(response.analysis.urgency, MessageUrgency::Urgent);
        assert_eq!(response.analysis.categories, vec![MessageCategory::Clinical]);
        assert!(response
            .analysis
            .clinician_summary
            .to_lowercase()
            .contains("chest pain"));
        assert!(response.analysis.escalate);
        assert_eq!(
            response.analysis.safety_flags,
            vec![SafetyFlag::PossibleEmergency]
        );
    }

    #[tokio::test]
    async fn analyze_recovers_from_extra_text_around_json() {
        let output = r#"
        Here is the analysis:

        {
          "urgency": "soon",
          "categories": ["administrative"],
          "clinician_summary": "Patient asks about rescheduling an appointment.",
          "draft_patient_reply": "Thanks for reaching out. We can help reschedule your appointment.",
          "safety_flags": ["none"],
          "escalate": false
        }

        Thank you.
        "#;
        let client = MockModelClient::new().with_reply(output);
        let pipeline = AnalysisPipeline::new(Arc::new(client));

        let response = pipeline
            .analyze(request("Can I reschedule my appointment?"))
            .await
            .unwrap();

        assert_eq!(response.analysis.urgency, MessageUrgency::Soon);
        assert_eq!(
            response.analysis.categories,
            vec![MessageCategory::Administrative]
        );
        assert!(!response.analysis.escalate);
    }

    #[tokio::test]
    async fn analyze_keeps_raw_model_output_verbatim() {
        let output = "noise before {\"urgency\": \"soon\"} noise after";
        let client = MockModelClient::new().with_reply(output);
        let pipeline = AnalysisPipeline::new(Arc::new(client));

        let response = pipeline.analyze(request("Hello")).await.unwrap();

        assert_eq!(response.analysis.raw_model_output, output);
    }

    #[tokio::test]
    async fn analyze_sends_body_and_context_in_prompt() {
        let client = MockModelClient::new().with_reply("{}");
        let pipeline = AnalysisPipeline::new(Arc::new(client.clone()));

        let message = InboxMessage::new("Still dizzy today.")
            .unwrap()
            .with_previous_thread("Yesterday: patient reported dizziness.");
        pipeline
            .analyze(AnalysisRequest::new(message))
            .await
            .unwrap();

        let prompts = client.recorded_prompts();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("Still dizzy today."));
        assert!(prompts[0].contains("Yesterday: patient reported dizziness."));
        assert!(prompts[0].contains("---- PREVIOUS THREAD CONTEXT ----"));
    }

    #[tokio::test]
    async fn analyze_propagates_model_failure_without_parsing() {
        let client = MockModelClient::new().with_error(ModelError::network("connection refused"));
        let pipeline = AnalysisPipeline::new(Arc::new(client));

        let err = pipeline.analyze(request("Hello")).await.unwrap_err();

        assert!(matches!(err, AnalysisError::Model(ModelError::Network(_))));
    }

    #[tokio::test]
    async fn analyze_surfaces_unparseable_output_as_parse_error() {
        let client = MockModelClient::new().with_reply("I cannot answer in JSON, sorry.");
        let pipeline = AnalysisPipeline::new(Arc::new(client));

        let err = pipeline.analyze(request("Hello")).await.unwrap_err();

        assert!(matches!(err, AnalysisError::Parse(_)));
    }

    #[tokio::test]
    async fn analyze_response_has_null_message_id_when_request_had_none() {
        let client = MockModelClient::new().with_reply("{}");
        let pipeline = AnalysisPipeline::new(Arc::new(client));

        let message = InboxMessage::new("No id on this one.").unwrap();
        let response = pipeline
            .analyze(AnalysisRequest::new(message))
            .await
            .unwrap();

        assert!(response.message_id.is_none());
    }
}
