//! MessageUrgency enum - triage urgency of a patient message.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How quickly a patient message needs clinician attention.
///
/// Ordered informally from least to most pressing; the type itself carries
/// no numeric ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageUrgency {
    Routine,
    Soon,
    Urgent,
}

impl MessageUrgency {
    /// Returns all urgency levels, least pressing first.
    pub fn all() -> &'static [MessageUrgency] {
        &[
            MessageUrgency::Routine,
            MessageUrgency::Soon,
            MessageUrgency::Urgent,
        ]
    }

    /// Returns the wire keyword for this urgency.
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageUrgency::Routine => "routine",
            MessageUrgency::Soon => "soon",
            MessageUrgency::Urgent => "urgent",
        }
    }

    /// Parses a lower-cased keyword. Unknown keywords yield `None`.
    pub fn from_keyword(s: &str) -> Option<MessageUrgency> {
        Self::all().iter().copied().find(|u| u.as_str() == s)
    }
}

impl fmt::Display for MessageUrgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_returns_3_levels() {
        assert_eq!(MessageUrgency::all().len(), 3);
    }

    #[test]
    fn from_keyword_accepts_every_wire_value() {
        assert_eq!(
            MessageUrgency::from_keyword("routine"),
            Some(MessageUrgency::Routine)
        );
        assert_eq!(
            MessageUrgency::from_keyword("soon"),
            Some(MessageUrgency::Soon)
        );
        assert_eq!(
            MessageUrgency::from_keyword("urgent"),
            Some(MessageUrgency::Urgent)
        );
    }

    #[test]
    fn from_keyword_rejects_unknown_values() {
        assert_eq!(MessageUrgency::from_keyword("critical"), None);
        assert_eq!(MessageUrgency::from_keyword("URGENT"), None);
        assert_eq!(MessageUrgency::from_keyword(""), None);
    }

    #[test]
    fn serializes_to_snake_case_json() {
        let json = serde_json::to_string(&MessageUrgency::Routine).unwrap();
        assert_eq!(json, "\"routine\"");
    }

    #[test]
    fn deserializes_from_snake_case_json() {
        let u: MessageUrgency = serde_json::from_str("\"urgent\"").unwrap();
        assert_eq!(u, MessageUrgency::Urgent);
    }

    #[test]
    fn display_uses_wire_keyword() {
        assert_eq!(format!("{}", MessageUrgency::Soon), "soon");
    }
}
