//! The growable element store underlying every container view.
//!
//! # Design
//!
//! [`Storage`] owns one contiguous allocation and tracks two quantities
//! explicitly: the live element count and the logical slot capacity. The
//! capacity field — not the allocator's opinion — drives every policy
//! decision:
//!
//! - **Growth**: exactly when the store is full at the start of a push or
//!   insert, capacity doubles. A failed growth returns
//!   [`StorageError::ResizeFailed`] and leaves count, capacity, and the
//!   allocation untouched.
//! - **Shrink**: exactly when a removal leaves the count below half the
//!   capacity, capacity halves, clamped to [`INITIAL_CAPACITY`]. The
//!   shrink threshold sits strictly below the growth threshold, so
//!   alternating insert/remove at a boundary cannot thrash.
//! - **Lifetime**: [`Storage::release`] frees the allocation and moves the
//!   store to the released state (`capacity == 0`). Release is idempotent,
//!   and every later operation fails with
//!   [`StorageError::Uninitialized`]. Dropping a store releases it
//!   implicitly; re-initialization is assigning a fresh value.
//!
//! Reads are copy-out: [`Storage::get`] clones the element rather than
//! handing out a reference, so a value obtained from the store stays valid
//! across any later mutation or reallocation.
//!
//! The backing memory is held as a `Vec<T>` whose length is the live
//! count. The `Vec` is only ever asked for room via fallible reservation,
//! so allocator refusal surfaces as an error value instead of an abort.
//! The allocation may hold more than `capacity` slots in the released-then
//! -shrunk corner of the allocator API; the logical capacity is the
//! contract, and it follows the doubling/halving arithmetic exactly.

use core::mem::size_of;

use crate::error::{Result, StorageError};
use crate::tracing_compat::{debug, trace};

/// Capacity given to a freshly constructed store, and the floor below
/// which shrinking never goes.
pub const INITIAL_CAPACITY: usize = 4;

/// Multiplicative step by which capacity grows when full and shrinks when
/// sparse.
pub const RESIZE_FACTOR: usize = 2;

/// A contiguous growable store for elements of a single type.
///
/// # Examples
///
/// ```
/// use trivec::Storage;
///
/// let mut store = Storage::new()?;
/// store.push("a")?;
/// store.push("b")?;
/// store.insert(1, "between")?;
///
/// assert_eq!(store.get(1)?, "between");
/// assert_eq!(store.remove(1)?, "between");
/// assert_eq!(store.len(), 2);
/// # Ok::<(), trivec::StorageError>(())
/// ```
#[derive(Debug)]
pub struct Storage<T> {
    /// Live elements, in logical order. `slots.len()` is the element count.
    slots: Vec<T>,
    /// Logical slot capacity. `0` only in the released state.
    capacity: usize,
}

impl<T> Storage<T> {
    /// Creates a store with [`INITIAL_CAPACITY`] slots allocated eagerly.
    ///
    /// Fails with [`StorageError::ZeroSizedElement`] for zero-sized element
    /// types and [`StorageError::AllocationFailed`] if the allocator
    /// refuses the initial block, in which case nothing is allocated.
    pub fn new() -> Result<Self> {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    /// Creates a store with at least `initial` slots allocated eagerly.
    ///
    /// The request is raised to [`INITIAL_CAPACITY`] if below it. The
    /// shrink floor remains [`INITIAL_CAPACITY`] regardless of the value
    /// passed here.
    pub fn with_capacity(initial: usize) -> Result<Self> {
        if size_of::<T>() == 0 {
            return Err(StorageError::ZeroSizedElement);
        }
        let capacity = initial.max(INITIAL_CAPACITY);
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(capacity)
            .map_err(|_| StorageError::AllocationFailed { slots: capacity })?;
        Ok(Self { slots, capacity })
    }

    /// Returns the number of live elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if the store holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the logical slot capacity.
    ///
    /// `0` means the store has been released.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns true if the store has been released and holds no backing
    /// allocation.
    #[must_use]
    pub fn is_released(&self) -> bool {
        self.capacity == 0
    }

    /// Returns a copy of the element at `index`.
    ///
    /// The copy is an independent value; it stays valid however the store
    /// is mutated afterwards. No reference into the store is ever handed
    /// out.
    pub fn get(&self, index: usize) -> Result<T>
    where
        T: Clone,
    {
        self.ensure_initialized()?;
        self.slots
            .get(index)
            .cloned()
            .ok_or(StorageError::IndexOutOfBounds {
                index,
                len: self.slots.len(),
            })
    }

    /// Overwrites the element at `index`, dropping the previous value.
    ///
    /// Never resizes; the index must address a live element.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        self.ensure_initialized()?;
        let len = self.slots.len();
        match self.slots.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(StorageError::IndexOutOfBounds { index, len }),
        }
    }

    /// Appends `value` at the logical end, growing first if full.
    ///
    /// On a failed growth the count is unchanged and `value` is dropped
    /// with the error returned.
    pub fn push(&mut self, value: T) -> Result<()> {
        self.ensure_initialized()?;
        if self.slots.len() == self.capacity {
            self.grow()?;
        }
        self.slots.push(value);
        Ok(())
    }

    /// Inserts `value` at `index`, shifting elements at `[index, len)` one
    /// slot toward higher indices.
    ///
    /// `index == len()` is accepted and equivalent to [`push`](Self::push).
    /// The shift is overlap-safe; growth, if needed, happens before any
    /// element moves.
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        self.ensure_initialized()?;
        let len = self.slots.len();
        if index > len {
            return Err(StorageError::IndexOutOfBounds { index, len });
        }
        if len == self.capacity {
            self.grow()?;
        }
        self.slots.insert(index, value);
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting elements at
    /// `[index + 1, len)` one slot toward lower indices.
    ///
    /// After the removal the shrink policy runs; shrinking releases excess
    /// memory in place and never undoes the removal.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        self.ensure_initialized()?;
        let len = self.slots.len();
        if index >= len {
            return Err(StorageError::IndexOutOfBounds { index, len });
        }
        let value = self.slots.remove(index);
        self.shrink_if_sparse();
        Ok(value)
    }

    /// Removes and returns the last element.
    ///
    /// Fails with [`StorageError::Empty`] when no elements are live. The
    /// decrement and the shrink check happen exactly once.
    pub fn pop(&mut self) -> Result<T> {
        self.ensure_initialized()?;
        let value = self.slots.pop().ok_or(StorageError::Empty)?;
        self.shrink_if_sparse();
        Ok(value)
    }

    /// Frees the backing allocation and resets the store to the released
    /// state.
    ///
    /// Idempotent: releasing an already-released store is a no-op. Any
    /// remaining elements are dropped. Subsequent operations fail with
    /// [`StorageError::Uninitialized`]; to reuse the binding, assign a
    /// fresh [`Storage::new`] value.
    pub fn release(&mut self) {
        if self.capacity == 0 {
            return;
        }
        debug!(capacity = self.capacity, len = self.slots.len(), "storage released");
        self.slots = Vec::new();
        self.capacity = 0;
    }

    fn ensure_initialized(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(StorageError::Uninitialized);
        }
        Ok(())
    }

    /// Doubles the logical capacity, reserving the room fallibly.
    fn grow(&mut self) -> Result<()> {
        let new_capacity = self.capacity.saturating_mul(RESIZE_FACTOR);
        let additional = new_capacity - self.slots.len();
        self.slots
            .try_reserve_exact(additional)
            .map_err(|_| StorageError::ResizeFailed {
                slots: new_capacity,
            })?;
        trace!(
            old_capacity = self.capacity,
            new_capacity,
            "storage grew"
        );
        self.capacity = new_capacity;
        Ok(())
    }

    /// Halves the logical capacity once the count falls below half of it,
    /// never going under [`INITIAL_CAPACITY`].
    fn shrink_if_sparse(&mut self) {
        if self.slots.len() >= self.capacity / RESIZE_FACTOR {
            return;
        }
        let new_capacity = (self.capacity / RESIZE_FACTOR).max(INITIAL_CAPACITY);
        if new_capacity == self.capacity {
            return;
        }
        self.slots.shrink_to(new_capacity);
        trace!(
            old_capacity = self.capacity,
            new_capacity,
            "storage shrank"
        );
        self.capacity = new_capacity;
    }
}
