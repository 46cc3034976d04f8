//! Prompt assembly for the triage model call.
//!
//! `build_analysis_prompt` is a pure function: the same instructions,
//! body, and context always produce the same prompt string.

/// Fixed system instructions sent with every analysis.
///
/// Enumerates the permitted urgency/category/safety-flag values, forbids
/// extra keys or commentary, and tells the model to err on the side of
/// escalation rather than issue definitive diagnoses.
pub const SYSTEM_INSTRUCTIONS: &str = r#"You are a clinical inbox assistant helping clinicians manage patient portal messages.

Goals:
- Help clinicians triage and summarize messages efficiently.
- Always prioritize patient safety and err on the side of escalation when in doubt.
- Do NOT provide definitive diagnoses or treatment plans; instead, suggest clinician review.

Steps for each message:
1. Determine urgency: "routine", "soon", or "urgent".
2. Determine one or more categories, such as "clinical", "administrative", "medication_refill", "appointment", or "other".
3. Write a concise summary aimed at a clinician, highlighting key facts and any red flags.
4. Draft a short, patient-friendly reply that is empathetic and clear. Include appropriate disclaimers, e.g., that this does not replace urgent or emergency care.
5. Identify any safety flags such as potential emergency symptoms, self-harm, or high-risk medication issues.
6. Decide whether this should be escalated for urgent clinician review (true/false).

Return JSON ONLY with the following keys:
- "urgency": one of ["routine", "soon", "urgent"]
- "categories": list of one or more of ["clinical", "administrative", "medication_refill", "appointment", "other"]
- "clinician_summary": string
- "draft_patient_reply": string
- "safety_flags": list of zero or more of ["none", "possible_emergency", "self_harm", "high_risk_medication_issue", "unclear_but_concerning"]
- "escalate": boolean

Do not include any additional keys or commentary."#;

/// Section header introducing the patient message.
const PATIENT_MESSAGE_HEADER: &str = "---- PATIENT MESSAGE ----";

/// Section header introducing prior thread context.
const THREAD_CONTEXT_HEADER: &str = "---- PREVIOUS THREAD CONTEXT ----";

/// Closing line reminding the model of the expected output shape.
const OUTPUT_FORMAT_REMINDER: &str = "Return a concise analysis in structured JSON with keys: \
     urgency, categories, clinician_summary, draft_patient_reply, \
     safety_flags, escalate.";

/// Builds the single prompt string for one analysis.
///
/// Sections appear in a fixed order: trimmed instructions, the patient
/// message, the prior thread context (only when present and non-empty),
/// and the output format reminder.
pub fn build_analysis_prompt(
    system_instructions: &str,
    message_body: &str,
    thread_context: Option<&str>,
) -> String {
    let mut parts = vec![
        system_instructions.trim().to_string(),
        String::new(),
        PATIENT_MESSAGE_HEADER.to_string(),
        message_body.trim().to_string(),
    ];
    if let Some(context) = thread_context.filter(|c| !c.is_empty()) {
        parts.push(String::new());
        parts.push(THREAD_CONTEXT_HEADER.to_string());
        parts.push(context.trim().to_string());
    }
    parts.push(String::new());
    parts.push(OUTPUT_FORMAT_REMINDER.to_string());
    parts.join("\n")
}
