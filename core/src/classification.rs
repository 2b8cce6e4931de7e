//! Per-position comparison results and their presentation styles.

use serde::{Deserialize, Serialize};

/// How one typed position relates to the reference at the same position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    /// The typed character matches the reference (or legitimately carries
    /// its trailing consonant over to the next syllable).
    Equal,
    /// The typed character is a correct, still-incomplete composition.
    Intermediate,
    /// The typed character cannot become the reference character.
    Unequal,
}

impl Classification {
    /// Map the classification to the style a presentation layer should use.
    pub fn style(self) -> Style {
        match self {
            Classification::Equal => Style::Correct,
            Classification::Intermediate => Style::Pending,
            Classification::Unequal => Style::Error,
        }
    }

    pub fn is_equal(self) -> bool {
        self == Classification::Equal
    }
}

/// Presentation style for a run of classified text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// Neutral / correct text
    Correct,
    /// Text the user is still composing
    Pending,
    /// Mistyped text
    Error,
}
