#![forbid(unsafe_code)]

//! Error taxonomy and the coarse OK/ERR status boundary.
//!
//! Mutation operations return `Result<(), GridError>` internally. Callers
//! that only need the classic success/failure answer convert the result
//! into a [`Status`], which deliberately carries no richer payload.

use std::fmt;

/// Errors surfaced by the grid mutation engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridError {
    /// An argument failed eager validation: an absent row, an out-of-range
    /// start column, or a rejected count. Nothing was mutated.
    InvalidArgument,
    /// A lower-level single-cell operation failed partway through a
    /// sequence. Cells written before the failing step remain in place.
    OperationFailed,
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument => write!(f, "invalid argument"),
            Self::OperationFailed => write!(f, "operation failed"),
        }
    }
}

impl std::error::Error for GridError {}

/// Success/failure status exposed at the compatibility boundary.
///
/// Mirrors the two-valued return convention of classic text-UI libraries:
/// callers learn whether an operation succeeded, never why it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use]
pub enum Status {
    /// The operation completed.
    Ok,
    /// The operation was rejected or aborted.
    Err,
}

impl Status {
    /// Check for success.
    #[inline]
    pub const fn is_ok(self) -> bool {
        matches!(self, Self::Ok)
    }
}

impl From<Result<(), GridError>> for Status {
    #[inline]
    fn from(result: Result<(), GridError>) -> Self {
        match result {
            Ok(()) => Self::Ok,
            Err(_) => Self::Err,
        }
    }
}
