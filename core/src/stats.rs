//! Character counts per classification over a diff result.

use serde::{Deserialize, Serialize};

use crate::{Classification, Segment};

/// Summary of a diff result, counted in characters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct DiffStats {
    pub equal: usize,
    pub intermediate: usize,
    pub unequal: usize,
}

impl DiffStats {
    /// Count the characters of each classification in `segments`.
    pub fn from_segments(segments: &[Segment]) -> Self {
        let mut stats = Self::default();
        for seg in segments {
            let n = seg.char_len();
            match seg.state {
                Classification::Equal => stats.equal += n,
                Classification::Intermediate => stats.intermediate += n,
                Classification::Unequal => stats.unequal += n,
            }
        }
        stats
    }

    pub fn total(&self) -> usize {
        self.equal + self.intermediate + self.unequal
    }

    /// Fraction of characters classified `Equal`; 1.0 when nothing was compared.
    pub fn accuracy(&self) -> f64 {
        match self.total() {
            0 => 1.0,
            total => self.equal as f64 / total as f64,
        }
    }
}
