//! Error types and error handling strategy for the container family.
//!
//! Every fallible operation in the crate returns a value of the single
//! closed taxonomy defined here. Error handling follows these principles:
//!
//! - Errors are explicit and typed (no stringly-typed errors)
//! - Every error is returned to the immediate caller; nothing is swallowed
//!   or retried internally (a failed allocation is never retried)
//! - No core operation panics or aborts the process; allocator exhaustion
//!   surfaces as a value like any other failure
//! - A failed growth leaves the store untouched; a removal is never rolled
//!   back by what happens to capacity afterwards

use thiserror::Error;

/// A specialized result type for container operations.
pub type Result<T> = core::result::Result<T, StorageError>;

/// Errors produced by the growable store and the views over it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum StorageError {
    /// Position argument outside the valid range for the requested
    /// operation.
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds {
        /// The requested position.
        index: usize,
        /// The number of live elements at the time of the call.
        len: usize,
    },

    /// Operation attempted on a store with no backing allocation, either
    /// released or never constructed.
    #[error("storage has been released")]
    Uninitialized,

    /// Zero-sized element types are rejected at construction; they carry
    /// no bytes to store and make capacity accounting meaningless.
    #[error("zero-sized element types are not supported")]
    ZeroSizedElement,

    /// The backing store could not be obtained at construction.
    #[error("allocation of {slots} slots failed")]
    AllocationFailed {
        /// The number of slots requested.
        slots: usize,
    },

    /// Growth failed after construction.
    #[error("resize to {slots} slots failed")]
    ResizeFailed {
        /// The capacity the store attempted to reach.
        slots: usize,
    },

    /// Pop or dequeue attempted with zero live elements.
    #[error("container is empty")]
    Empty,
}

impl StorageError {
    /// Returns true when the error reports an allocator failure.
    ///
    /// [`AllocationFailed`](Self::AllocationFailed) and
    /// [`ResizeFailed`](Self::ResizeFailed) describe the same underlying
    /// condition and differ only in context: the former happens at
    /// construction, the latter during a later growth.
    #[must_use]
    pub const fn is_allocator_failure(&self) -> bool {
        matches!(
            self,
            Self::AllocationFailed { .. } | Self::ResizeFailed { .. }
        )
    }

    /// Returns true when the error reports a caller-side contract
    /// violation (a bad position or an unsupported element type) rather
    /// than a resource problem.
    #[must_use]
    pub const fn is_usage_error(&self) -> bool {
        matches!(
            self,
            Self::IndexOutOfBounds { .. } | Self::ZeroSizedElement
        )
    }
}
