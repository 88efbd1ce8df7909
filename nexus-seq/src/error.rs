//! Error types for sequence operations.

use thiserror::Error;

/// Errors returned by sequence operations.
///
/// Every operation either completes or fails before any visible mutation,
/// so a store is always in its prior valid state after an `Err`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SeqError {
    /// Position outside `[0, len]` for insertion or `[0, len)` otherwise.
    #[error("index {index} out of range for length {len}")]
    OutOfRange {
        /// The rejected position.
        index: usize,
        /// Length of the sequence at the time of the call.
        len: usize,
    },

    /// A buffer, slot array or node could not be allocated.
    #[error("allocation of {requested} slots failed")]
    AllocationFailure {
        /// Capacity (in elements) that was requested.
        requested: usize,
    },

    /// No element satisfied the search predicate.
    #[error("element not found")]
    NotFound,

    /// A raw strategy tag that names none of the stores.
    #[error("invalid sequence variant tag {0}")]
    InvalidVariant(u8),
}

impl SeqError {
    /// Returns the numeric return code for this error.
    ///
    /// `1` out of range, `2` allocation failure, `-1` not found,
    /// `3` invalid variant. Success is `0` by convention.
    #[inline]
    pub const fn code(&self) -> i32 {
        match self {
            Self::OutOfRange { .. } => 1,
            Self::AllocationFailure { .. } => 2,
            Self::NotFound => -1,
            Self::InvalidVariant(_) => 3,
        }
    }

    #[inline]
    pub(crate) const fn out_of_range(index: usize, len: usize) -> Self {
        Self::OutOfRange { index, len }
    }
}

/// Result type for sequence operations.
pub type Result<T> = core::result::Result<T, SeqError>;
