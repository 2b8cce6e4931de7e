// core/src/differ.rs
//
// Generic comparison engine that works with any decomposer.

use tracing::{debug, trace};

use crate::{Classification, Decomposer, Segment};

/// Compares typed text against a reference, position by position.
///
/// Type parameter D is the decomposer (e.g. `HangulDecomposer`). The differ
/// keeps no state between calls, so a single instance can be shared across
/// threads whenever `D` allows it.
#[derive(Debug, Clone, Default)]
pub struct Differ<D> {
    decomposer: D,
}

impl<D: Decomposer> Differ<D> {
    pub fn new(decomposer: D) -> Self {
        Self { decomposer }
    }

    /// Get the decomposer this differ spells characters with.
    pub fn decomposer(&self) -> &D {
        &self.decomposer
    }

    /// Classify one aligned pair of characters.
    ///
    /// `next_reference` is the character following `reference` in the
    /// untruncated reference text, if any. It is only consulted when the
    /// typed spelling is a strict prefix of a reference syllable that has a
    /// trailing consonant: in that case the typed character counts as
    /// `Equal` when the omitted consonant begins the next syllable (liaison),
    /// and `Unequal` otherwise.
    pub fn classify_pair(
        &self,
        typed: char,
        reference: char,
        next_reference: Option<char>,
    ) -> Classification {
        let typed_spelling = self.decomposer.decompose(typed);
        let reference_spelling = self.decomposer.decompose(reference);

        // Opaque on either side: literal comparison only
        if typed_spelling.is_empty() || reference_spelling.is_empty() {
            return if typed == reference {
                Classification::Equal
            } else {
                Classification::Unequal
            };
        }

        if typed_spelling == reference_spelling {
            return Classification::Equal;
        }

        if typed_spelling.len() < reference_spelling.len() {
            let is_prefix = reference_spelling.starts_with(&typed_spelling);

            // NOTE: any shorter prefix triggers the lookahead, not only one
            // that is exactly one component short.
            if let Some(next) = next_reference {
                if is_prefix && reference_spelling.len() >= 3 {
                    let next_spelling = self.decomposer.decompose(next);
                    let carried = next_spelling
                        .first()
                        .is_some_and(|first| reference_spelling.last() == Some(first));
                    trace!(%typed, %reference, %next, carried, "liaison lookahead");
                    return if carried {
                        Classification::Equal
                    } else {
                        Classification::Unequal
                    };
                }
            }

            return if is_prefix {
                Classification::Intermediate
            } else {
                Classification::Unequal
            };
        }

        // Typed spelling is longer (or the same length but different).
        // No lookahead in this direction.
        if typed_spelling.len() > reference_spelling.len()
            && typed_spelling.starts_with(&reference_spelling)
        {
            Classification::Intermediate
        } else {
            Classification::Unequal
        }
    }

    /// Compare `typed` against `reference` and return classified segments.
    ///
    /// `full_reference` is the untruncated reference text; it supplies one
    /// character of lookahead past each compared position and may be the
    /// same string as `reference`. When a classification changes, the new
    /// run starts with the typed character if `preserve_typed` is set, and
    /// with the reference character otherwise.
    ///
    /// When the inputs differ in length, the remainder of the longer one is
    /// Unequal. It is appended as its own segment, or joined onto the last
    /// segment when that one is already Unequal, so the final segment may
    /// hold compared characters as well as the remainder.
    ///
    /// Returns an empty list when either `typed` or `reference` is empty.
    pub fn diff(
        &self,
        typed: &str,
        reference: &str,
        full_reference: &str,
        preserve_typed: bool,
    ) -> Vec<Segment> {
        if typed.is_empty() || reference.is_empty() {
            return Vec::new();
        }

        let typed_chars: Vec<char> = typed.chars().collect();
        let reference_chars: Vec<char> = reference.chars().collect();
        let full_chars: Vec<char> = full_reference.chars().collect();
        let compared = typed_chars.len().min(reference_chars.len());

        let mut segments = Vec::new();
        let mut buffer = String::new();
        let mut current: Option<Classification> = None;

        for i in 0..compared {
            let (typed_ch, reference_ch) = (typed_chars[i], reference_chars[i]);
            let state = self.classify_pair(typed_ch, reference_ch, full_chars.get(i + 1).copied());

            match current {
                Some(run) if run == state => buffer.push(typed_ch),
                Some(run) => {
                    segments.push(Segment::new(std::mem::take(&mut buffer), run));
                    current = Some(state);
                    buffer.push(if preserve_typed { typed_ch } else { reference_ch });
                }
                None => {
                    current = Some(state);
                    buffer.push(typed_ch);
                }
            }
        }

        if let Some(run) = current {
            if !buffer.is_empty() {
                segments.push(Segment::new(buffer, run));
            }
        }

        // Excess length on either side is always a mismatch
        if typed_chars.len() != reference_chars.len() {
            let longer = if typed_chars.len() > reference_chars.len() {
                &typed_chars
            } else {
                &reference_chars
            };
            let tail: String = longer[compared..].iter().collect();
            match segments.last_mut() {
                Some(last) if last.state == Classification::Unequal => last.text.push_str(&tail),
                _ => segments.push(Segment::new(tail, Classification::Unequal)),
            }
        }

        debug!(
            typed_len = typed_chars.len(),
            reference_len = reference_chars.len(),
            segments = segments.len(),
            "diff complete"
        );
        segments
    }

    /// Compare `typed` against the window of `full_reference` it covers.
    ///
    /// This is the per-keystroke call of a practice screen: the reference
    /// is truncated to as many characters as have been typed, while the
    /// full text still provides liaison lookahead.
    pub fn diff_window(
        &self,
        typed: &str,
        full_reference: &str,
        preserve_typed: bool,
    ) -> Vec<Segment> {
        let typed_len = typed.chars().count();
        let window_end = full_reference
            .char_indices()
            .nth(typed_len)
            .map_or(full_reference.len(), |(idx, _)| idx);
        self.diff(typed, &full_reference[..window_end], full_reference, preserve_typed)
    }

    /// Check a single typed character against a single target syllable.
    ///
    /// - `Equal` when both spell the same components
    /// - `Intermediate` when the input is a non-empty prefix of the target
    /// - `Unequal` otherwise
    ///
    /// Opaque characters only match themselves.
    pub fn check_syllable(&self, input: char, target: char) -> Classification {
        let input_spelling = self.decomposer.decompose(input);
        let target_spelling = self.decomposer.decompose(target);

        if input_spelling.is_empty() || target_spelling.is_empty() {
            return if input == target {
                Classification::Equal
            } else {
                Classification::Unequal
            };
        }

        if input_spelling == target_spelling {
            Classification::Equal
        } else if target_spelling.starts_with(&input_spelling) {
            Classification::Intermediate
        } else {
            Classification::Unequal
        }
    }
}
