//! Error type shared by the element-taking disjoint-set operations.

use std::fmt;

/// Errors produced when an element id falls outside a structure's universe.
///
/// The universe `[0, n)` is fixed at construction time, so the only way a
/// caller can fail an operation is by supplying an id at or beyond `n`.
/// Every fallible operation validates its ids before touching any internal
/// state; a returned error guarantees the structure is unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementError {
    /// An element id outside `[0, len)` was passed to an operation.
    OutOfRange {
        /// The offending element id.
        id: usize,
        /// The universe size of the structure that rejected it.
        len: usize,
    },
}

impl fmt::Display for ElementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { id, len } => {
                write!(f, "element id {id} out of range for a universe of {len} elements")
            }
        }
    }
}

impl std::error::Error for ElementError {}
