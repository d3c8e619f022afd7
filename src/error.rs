//! Error types for deque operations.

use thiserror::Error;

/// Result type for fallible deque operations.
pub type DequeResult<T> = Result<T, DequeError>;

/// Errors reported by [`Deque`](crate::Deque) and [`DequeConfig`](crate::DequeConfig).
///
/// The panicking operations (`front`, `pop_back`, `push_back`, ...) panic with the
/// `Display` text of these variants; the `try_*` forms hand them back instead.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DequeError {
    /// An element was requested from a deque with no live elements.
    #[error("deque: {op}() called on empty deque")]
    EmptyContainer {
        /// Name of the operation that was called.
        op: &'static str,
    },

    /// A resize could not reserve its new backing buffer.
    ///
    /// The deque is left exactly as it was before the call.
    #[error("deque: failed to allocate {requested} slots")]
    AllocationFailure {
        /// Number of slots that were requested.
        requested: usize,
    },

    /// A capacity hint has no power-of-two rounding representable in `usize`.
    #[error("deque: capacity {requested} overflows when rounded to a power of two")]
    CapacityOverflow {
        /// The hint as supplied by the caller.
        requested: usize,
    },
}

impl DequeError {
    /// Create an empty-container error for `op`.
    pub const fn empty(op: &'static str) -> Self {
        Self::EmptyContainer { op }
    }

    /// Returns `true` for [`DequeError::EmptyContainer`].
    pub const fn is_empty_container(&self) -> bool {
        matches!(self, Self::EmptyContainer { .. })
    }
}
