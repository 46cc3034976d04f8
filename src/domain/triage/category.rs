//! MessageCategory enum - what a patient message is about.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Topic classification for a patient message.
///
/// A message may carry one or more categories; an analysis with no
/// recognizable category falls back to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageCategory {
    Clinical,
    Administrative,
    MedicationRefill,
    Appointment,
    Other,
}

impl MessageCategory {
    /// Returns all categories.
    pub fn all() -> &'static [MessageCategory] {
        &[
            MessageCategory::Clinical,
            MessageCategory::Administrative,
            MessageCategory::MedicationRefill,
            MessageCategory::Appointment,
            MessageCategory::Other,
        ]
    }

    /// Returns the wire keyword for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageCategory::Clinical => "clinical",
            MessageCategory::Administrative => "administrative",
            MessageCategory::MedicationRefill => "medication_refill",
            MessageCategory::Appointment => "appointment",
            MessageCategory::Other => "other",
        }
    }

    /// Parses a lower-cased keyword. Unknown keywords yield `None`.
    pub fn from_keyword(s: &str) -> Option<MessageCategory> {
        Self::all().iter().copied().find(|c| c.as_str() == s)
    }
}

impl fmt::Display for MessageCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
