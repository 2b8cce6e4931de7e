//! Classified runs of text produced by the diff engine.
//!
//! A diff result is an ordered list of segments. Each segment is a maximal
//! run of characters that share one [`Classification`], so a presentation
//! layer can style each run and place a caret by summing segment lengths.

use serde::{Deserialize, Serialize};

use crate::Classification;

/// A run of text that shares one classification.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Segment {
    /// The characters of this run (never empty in a diff result)
    pub text: String,
    /// Classification shared by every character in `text`
    pub state: Classification,
}

impl Segment {
    /// Create a segment from owned text.
    pub fn new(text: String, state: Classification) -> Self {
        Self { text, state }
    }

    /// Number of characters (not bytes) in the segment.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Concatenate the text of every segment in order.
pub fn joined_text(segments: &[Segment]) -> String {
    segments.iter().map(|seg| seg.text.as_str()).collect()
}

/// Character offset where the first non-`Equal` segment starts.
///
/// This is the position of the first keystroke that still needs attention,
/// or the total length when everything matched.
pub fn first_mismatch_offset(segments: &[Segment]) -> usize {
    let mut offset = 0;
    for seg in segments {
        if !seg.state.is_equal() {
            return offset;
        }
        offset += seg.char_len();
    }
    offset
}
