//! Structural error types
//!
//! This module defines [`StructureError`], which represents every way an
//! operation request can be rejected before a trace is produced.
//!
//! Semantic non-events (inserting a duplicate key, removing a missing value)
//! are *not* errors: the algorithm library represents them as a degenerate
//! one-step trace whose finalize is a no-op.

use std::fmt;

/// Errors raised at the input boundary, before any trace is generated
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructureError {
    /// Index outside `[0, len)` for read/remove/swap, `[0, len]` for insert
    InvalidIndex { index: usize, len: usize },

    /// Pop/dequeue/remove on a structure with no elements
    EmptyStructure { structure: &'static str },

    /// Swap requested with both indices equal
    IndicesEqual { index: usize },

    /// Value-addressed replace where old and new are the same
    ValuesEqual { value: super::Value },
}

impl fmt::Display for StructureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructureError::InvalidIndex { index, len } => {
                write!(f, "Index {} out of bounds for length {}", index, len)
            }
            StructureError::EmptyStructure { structure } => {
                write!(f, "{} is empty", structure)
            }
            StructureError::IndicesEqual { index } => {
                write!(f, "Indices must be different (both are {})", index)
            }
            StructureError::ValuesEqual { value } => {
                write!(f, "Old and new values are the same ({})", value)
            }
        }
    }
}

impl std::error::Error for StructureError {}
