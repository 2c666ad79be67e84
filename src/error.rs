//! Error kinds returned by the public API. See `SPEC_FULL.md` §7.

use thiserror::Error;

/// Errors returned by [`crate::KdTree`] operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KdError {
    /// `K < 1`, `N_leaf < 1`, or a negative `k` was passed to a KNN query.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Human-readable description of which value was invalid.
        reason: String,
    },

    /// A supplied coordinate or box has a different dimension than the tree's `K`.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// The tree's configured dimension.
        expected: usize,
        /// The dimension actually observed on the offending argument.
        actual: usize,
    },
}

/// Convenience alias for fallible `KdTree` operations.
pub type Result<T> = std::result::Result<T, KdError>;

impl KdError {
    pub(crate) fn invalid_config(reason: impl Into<String>) -> Self {
        KdError::InvalidConfig {
            reason: reason.into(),
        }
    }
}
