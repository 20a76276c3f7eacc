use thiserror::Error;

/// Errors surfaced by corpus and scoring operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScorerError {
    /// Document index outside `[0, len)`. Never clamped.
    #[error("document index {index} out of range (corpus holds {len} documents)")]
    InvalidIndex { index: usize, len: usize },
}
