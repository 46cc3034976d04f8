//! SafetyFlag enum - specific risk indicators in a patient message.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A specific risk indicator, independent of general urgency.
///
/// An analysis with no recognizable flag falls back to `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SafetyFlag {
    None,
    PossibleEmergency,
    SelfHarm,
    HighRiskMedicationIssue,
    UnclearButConcerning,
}

impl SafetyFlag {
    /// Returns all safety flags.
    pub fn all() -> &'static [SafetyFlag] {
        &[
            SafetyFlag::None,
            SafetyFlag::PossibleEmergency,
            SafetyFlag::SelfHarm,
            SafetyFlag::HighRiskMedicationIssue,
            SafetyFlag::UnclearButConcerning,
        ]
    }

    /// Returns the wire keyword for this flag.
    pub fn as_str(&self) -> &'static str {
        match self {
            SafetyFlag::None => "none",
            SafetyFlag::PossibleEmergency => "possible_emergency",
            SafetyFlag::SelfHarm => "self_harm",
            SafetyFlag::HighRiskMedicationIssue => "high_risk_medication_issue",
            SafetyFlag::UnclearButConcerning => "unclear_but_concerning",
        }
    }

    /// Parses a lower-cased keyword. Unknown keywords yield `None`.
    pub fn from_keyword(s: &str) -> Option<SafetyFlag> {
        Self::all().iter().copied().find(|f| f.as_str() == s)
    }
}

impl fmt::Display for SafetyFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
