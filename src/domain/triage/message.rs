//! InboxMessage - a single patient portal message plus optional context.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when constructing an [`InboxMessage`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MessageError {
    /// The message body is empty or whitespace only.
    #[error("message body cannot be empty")]
    EmptyBody,
}

/// A single patient message, immutable once constructed.
///
/// Only the body is required; identifiers, subject, and prior thread
/// context are carried through when the source inbox system provides them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboxMessage {
    /// Identifier from the source inbox system, if available.
    pub message_id: Option<String>,
    /// Identifier for the patient, if available.
    pub patient_id: Option<String>,
    /// Subject line of the thread.
    pub subject: Option<String>,
    /// The patient's message body.
    pub body: String,
    /// Concatenated previous messages in the thread, for context.
    pub previous_thread: Option<String>,
}

impl InboxMessage {
    /// Creates a message from its body.
    ///
    /// # Errors
    ///
    /// Returns [`MessageError::EmptyBody`] if the body is empty or
    /// whitespace only.
    pub fn new(body: impl Into<String>) -> Result<Self, MessageError> {
        let body = body.into();
        if body.trim().is_empty() {
            return Err(MessageError::EmptyBody);
        }
        Ok(Self {
            message_id: None,
            patient_id: None,
            subject: None,
            body,
            previous_thread: None,
        })
    }

    /// Sets the source inbox message identifier.
    pub fn with_message_id(mut self, message_id: impl Into<String>) -> Self {
        self.message_id = Some(message_id.into());
        self
    }

    /// Sets the patient identifier.
    pub fn with_patient_id(mut self, patient_id: impl Into<String>) -> Self {
        self.patient_id = Some(patient_id.into());
        self
    }

    /// Sets the subject line.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Sets the prior thread context.
    pub fn with_previous_thread(mut self, previous_thread: impl Into<String>) -> Self {
        self.previous_thread = Some(previous_thread.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_non_empty_body() {
        let message = InboxMessage::new("I have a question about my refill.").unwrap();
        assert_eq!(message.body, "I have a question about my refill.");
        assert!(message.message_id.is_none());
        assert!(message.patient_id.is_none());
        assert!(message.subject.is_none());
        assert!(message.previous_thread.is_none());
    }

    #[test]
    fn new_rejects_empty_body() {
        assert_eq!(InboxMessage::new(""), Err(MessageError::EmptyBody));
    }

    #[test]
    fn new_rejects_whitespace_only_body() {
        assert_eq!(InboxMessage::new("   \n\t "), Err(MessageError::EmptyBody));
    }

    #[test]
    fn builder_sets_optional_fields() {
        let message = InboxMessage::new("Chest pain since this morning.")
            .unwrap()
            .with_message_id("msg-1")
            .with_patient_id("patient-1")
            .with_subject("Chest pain")
            .with_previous_thread("Earlier: patient reported mild discomfort.");

        assert_eq!(message.message_id.as_deref(), Some("msg-1"));
        assert_eq!(message.patient_id.as_deref(), Some("patient-1"));
        assert_eq!(message.subject.as_deref(), Some("Chest pain"));
        assert_eq!(
            message.previous_thread.as_deref(),
            Some("Earlier: patient reported mild discomfort.")
        );
    }

    #[test]
    fn serializes_optional_fields_as_null() {
        let message = InboxMessage::new("body text").unwrap();
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json["body"], "body text");
        assert!(json["message_id"].is_null());
    }
}
