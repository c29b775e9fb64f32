//! Trivec: one growable store, three container disciplines.
//!
//! # Overview
//!
//! Trivec provides a homogeneous, contiguous, growable element store and
//! three thin views over it: an indexable array, a LIFO stack, and a FIFO
//! queue. All allocation, growth, and shrink decisions live in the store;
//! the views differ only in which position they operate on and in the error
//! they surface for it.
//!
//! # Core Guarantees
//!
//! - **Bounded bookkeeping**: `len() <= capacity()` after every operation,
//!   and capacity is either `0` (released) or at least [`INITIAL_CAPACITY`]
//! - **Amortized O(1) growth**: capacity doubles exactly when the store is
//!   full, so appending `N` elements triggers `O(log N)` reallocations
//! - **Shrink with hysteresis**: capacity halves only once the live count
//!   falls below half of it, and never below [`INITIAL_CAPACITY`], so the
//!   store cannot thrash at a boundary
//! - **No partial mutation**: a failed growth leaves the element count and
//!   the backing allocation exactly as they were
//! - **Clean lifetime**: [`Storage::release`] is idempotent, and every
//!   operation after it reports [`StorageError::Uninitialized`] instead of
//!   touching freed memory
//!
//! # Module Structure
//!
//! - [`storage`]: the growable core — capacity bookkeeping, positional
//!   insert/remove, grow/shrink policy
//! - [`array`]: random-access view (get/set/insert/remove by index)
//! - [`stack`]: LIFO view (push/pop at the logical end)
//! - [`queue`]: FIFO view (push at the end, pop from the front)
//! - [`error`]: the closed error taxonomy
//! - [`tracing_compat`]: structured logging shim, active with the
//!   `tracing-integration` feature
//!
//! # Example
//!
//! ```
//! use trivec::Stack;
//!
//! let mut stack = Stack::new()?;
//! stack.push(1)?;
//! stack.push(2)?;
//! assert_eq!(stack.pop()?, 2);
//! assert_eq!(stack.pop()?, 1);
//! # Ok::<(), trivec::StorageError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::missing_errors_doc)]

pub mod array;
pub mod error;
pub mod queue;
pub mod stack;
pub mod storage;
pub mod tracing_compat;

// Re-exports for convenient access to the container family
pub use array::Array;
pub use error::{Result, StorageError};
pub use queue::Queue;
pub use stack::Stack;
pub use storage::{Storage, INITIAL_CAPACITY, RESIZE_FACTOR};
