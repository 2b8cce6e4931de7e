//! Single-syllable drill session.
//!
//! The drill shows one syllable at a time. The user's input box is fed to
//! [`SyllableDrill::feed`] after every change; a finished syllable advances
//! the drill, a correct partial composition stays pending, and anything else
//! is flagged as incorrect.

use libtyping_core::{Classification, Differ};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;
use tracing::debug;

use crate::hangul::{is_syllable, HangulDecomposer};

/// Errors raised when building a drill.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DrillError {
    /// The syllable list was empty (after removing whitespace).
    #[error("drill needs at least one syllable")]
    Empty,

    /// A drill entry is not a composed Hangul syllable.
    #[error("not a Hangul syllable: {0:?}")]
    NotASyllable(char),
}

/// Outcome of feeding the input box to the drill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrillFeedback {
    /// Input box is empty
    Cleared,
    /// The syllable was typed; the drill moved on
    Advanced,
    /// The input is a correct, unfinished composition
    Pending,
    /// The input cannot become the current syllable
    Incorrect,
}

/// Drill over a fixed list of practice syllables, visited in random order.
#[derive(Debug, Clone)]
pub struct SyllableDrill {
    syllables: Vec<char>,
    current: usize,
    completed: usize,
    differ: Differ<HangulDecomposer>,
    rng: StdRng,
}

impl SyllableDrill {
    /// Create a drill from a string of syllables. Whitespace is ignored.
    pub fn new(syllables: &str) -> Result<Self, DrillError> {
        Self::with_rng(syllables, StdRng::from_entropy())
    }

    /// Create a drill whose syllable order is reproducible from `seed`.
    pub fn with_seed(syllables: &str, seed: u64) -> Result<Self, DrillError> {
        Self::with_rng(syllables, StdRng::seed_from_u64(seed))
    }

    fn with_rng(syllables: &str, rng: StdRng) -> Result<Self, DrillError> {
        let syllables: Vec<char> = syllables.chars().filter(|c| !c.is_whitespace()).collect();
        if syllables.is_empty() {
            return Err(DrillError::Empty);
        }
        if let Some(&bad) = syllables.iter().find(|&&c| !is_syllable(c)) {
            return Err(DrillError::NotASyllable(bad));
        }

        Ok(Self {
            syllables,
            current: 0,
            completed: 0,
            differ: Differ::new(HangulDecomposer),
            rng,
        })
    }

    /// The syllable the user should type now.
    pub fn current(&self) -> char {
        self.syllables[self.current]
    }

    /// Number of syllables completed so far.
    pub fn completed(&self) -> usize {
        self.completed
    }

    pub fn syllables(&self) -> &[char] {
        &self.syllables
    }

    /// Feed the whole content of the input box.
    pub fn feed(&mut self, input: &str) -> DrillFeedback {
        let mut chars = input.chars();
        let feedback = match (chars.next(), chars.next()) {
            (None, _) => DrillFeedback::Cleared,
            (Some(ch), None) => match self.differ.check_syllable(ch, self.current()) {
                Classification::Equal => {
                    self.completed += 1;
                    self.advance();
                    DrillFeedback::Advanced
                }
                Classification::Intermediate => DrillFeedback::Pending,
                Classification::Unequal => DrillFeedback::Incorrect,
            },
            // A second character means the syllable was overrun
            _ => DrillFeedback::Incorrect,
        };
        debug!(input, ?feedback, "drill input");
        feedback
    }

    /// Move to a randomly drawn syllable other than the current one.
    pub fn advance(&mut self) -> char {
        let start = self.rng.gen_range(0..self.syllables.len());
        self.advance_with(move |_| start)
    }

    /// Move to the syllable chosen by `pick`.
    ///
    /// `pick` receives the list length and returns an index (taken modulo
    /// the length). The new syllable never equals the current one unless the
    /// list holds a single distinct syllable; a pick that lands on the current
    /// syllable moves forward to the next different entry.
    pub fn advance_with<F>(&mut self, mut pick: F) -> char
    where
        F: FnMut(usize) -> usize,
    {
        let len = self.syllables.len();
        let current = self.current();
        if self.syllables.iter().all(|&s| s == current) {
            return current;
        }

        let start = pick(len) % len;
        let next = (0..len)
            .map(|offset| (start + offset) % len)
            .find(|&idx| self.syllables[idx] != current)
            .unwrap_or(self.current);
        self.current = next;
        self.current()
    }
}
