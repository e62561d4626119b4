// Sortscope Engine - Sorting Errors

use sortscope_utils::algorithm::Algorithm;
use std::fmt;

/// Errors produced by the sorting core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    /// A distribution sort (radix, bucket, counting) received a negative
    /// value. The input is scanned before any mutation, so the sequence is
    /// left exactly as it was.
    NegativeInput {
        algorithm: Algorithm,
        index: usize,
        value: i32,
    },
}

impl fmt::Display for SortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeInput {
                algorithm,
                index,
                value,
            } => {
                write!(
                    f,
                    "{} requires non-negative input, found {} at index {}",
                    algorithm, value, index
                )
            }
        }
    }
}

impl std::error::Error for SortError {}

/// Result type for sorting operations.
pub type SortResult<T> = Result<T, SortError>;
