// core/src/decomposer.rs
//
// Seam between the generic diff engine and a script's spelling tables.

/// Trait that script-specific decomposers implement to work with the
/// generic [`Differ`](crate::Differ).
///
/// A decomposer maps one character to the ordered sequence of components a
/// learner types to produce it. An empty sequence marks the character as
/// opaque: the engine then compares it by literal equality only.
pub trait Decomposer {
    /// Spell `ch` as the components typed to produce it.
    fn decompose(&self, ch: char) -> Vec<char>;
}

impl<F> Decomposer for F
where
    F: Fn(char) -> Vec<char>,
{
    fn decompose(&self, ch: char) -> Vec<char> {
        self(ch)
    }
}
