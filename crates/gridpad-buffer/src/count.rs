#![forbid(unsafe_code)]

//! The maximum-count convention for source consumption.
//!
//! Classic text-UI APIs overload one integer parameter: a non-negative
//! value bounds how much of the source is consumed, and `-1` means "as
//! much as fits". [`Count`] makes that choice explicit; the raw integer
//! convention survives only at the compatibility boundary through
//! [`Count::try_from_raw`].

use gridpad_core::GridError;

/// How much of a source sequence an operation may consume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Count {
    /// Consume the whole source, clipped only by the line width.
    Unbounded,
    /// Consume at most this many elements.
    Bounded(u32),
}

impl Count {
    /// Raw sentinel meaning "unbounded" at the compatibility boundary.
    pub const UNBOUNDED_RAW: i32 = -1;

    /// Decode the raw integer convention.
    ///
    /// `-1` is unbounded; any other negative value is rejected before any
    /// operation runs.
    ///
    /// # Errors
    ///
    /// [`GridError::InvalidArgument`] for negative values other than `-1`.
    pub fn try_from_raw(n: i32) -> Result<Self, GridError> {
        match n {
            Self::UNBOUNDED_RAW => Ok(Self::Unbounded),
            n if n < 0 => Err(GridError::InvalidArgument),
            n => Ok(Self::Bounded(n as u32)),
        }
    }

    /// Resolve against an available element count.
    ///
    /// `Unbounded` resolves to exactly `limit`; a bound is clipped to it.
    #[inline]
    pub(crate) fn clip(self, limit: usize) -> usize {
        match self {
            Self::Unbounded => limit,
            Self::Bounded(n) => limit.min(n as usize),
        }
    }
}
