//! # libhangul
//!
//! Hangul typing-practice comparison built on libtyping-core.
//!
//! ```
//! use libhangul::{diff, Classification};
//!
//! // "머" typed against "먹" is correct when the next syllable is "고":
//! // the ㄱ moved over to start the next syllable.
//! let segments = diff("머", "먹", "먹고", true);
//! assert_eq!(segments.len(), 1);
//! assert_eq!(segments[0].state, Classification::Equal);
//! ```

pub mod config;
pub mod drill;
pub mod hangul;

// Re-export the engine types from core
pub use libtyping_core::{
    joined_text, Classification, Config, DiffStats, Differ, Segment, Style,
};

pub use config::HangulConfig;
pub use drill::{DrillError, DrillFeedback, SyllableDrill};
pub use hangul::{decompose, is_compatibility_jamo, is_syllable, syllable_indices, HangulDecomposer};

/// A differ that spells characters as Hangul jamo.
pub fn differ() -> Differ<HangulDecomposer> {
    Differ::new(HangulDecomposer)
}

/// Compare typed Hangul against a reference.
///
/// See [`Differ::diff`] for the classification rules.
pub fn diff(typed: &str, reference: &str, full_reference: &str, preserve_typed: bool) -> Vec<Segment> {
    differ().diff(typed, reference, full_reference, preserve_typed)
}

/// Compare typed Hangul against the matching window of `full_reference`.
pub fn diff_window(typed: &str, full_reference: &str, preserve_typed: bool) -> Vec<Segment> {
    differ().diff_window(typed, full_reference, preserve_typed)
}

/// Check one typed character against one target syllable.
pub fn check_syllable(input: char, target: char) -> Classification {
    differ().check_syllable(input, target)
}
