//! FIFO view over the growable store.
//!
//! [`Queue`] pushes at the logical end and removes from the front.
//! Removing the front shifts every remaining element one slot left, so
//! dequeue costs O(n) in the live count. That is a deliberate trade for
//! implementation simplicity over a ring buffer, and it is part of the
//! view's observable complexity contract — see `DESIGN.md`. Capacity
//! follows the store's usual grow/shrink arithmetic.

use crate::error::{Result, StorageError};
use crate::storage::Storage;

/// A first-in, first-out queue.
///
/// # Examples
///
/// ```
/// use trivec::Queue;
///
/// let mut queue = Queue::new()?;
/// queue.enqueue(1)?;
/// queue.enqueue(2)?;
///
/// assert_eq!(queue.dequeue()?, 1);
/// assert_eq!(queue.dequeue()?, 2);
/// # Ok::<(), trivec::StorageError>(())
/// ```
#[derive(Debug)]
pub struct Queue<T> {
    store: Storage<T>,
}

impl<T> Queue<T> {
    /// Creates an empty queue with the default initial capacity.
    pub fn new() -> Result<Self> {
        Ok(Self {
            store: Storage::new()?,
        })
    }

    /// Creates an empty queue with at least `initial` slots.
    pub fn with_capacity(initial: usize) -> Result<Self> {
        Ok(Self {
            store: Storage::with_capacity(initial)?,
        })
    }

    /// Returns the number of queued elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns true if the queue holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Returns the current slot capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }

    /// Appends `value` at the back of the queue.
    pub fn enqueue(&mut self, value: T) -> Result<()> {
        self.store.push(value)
    }

    /// Removes and returns the front element, shifting the rest forward.
    ///
    /// Fails with [`StorageError::Empty`] on an empty queue.
    pub fn dequeue(&mut self) -> Result<T> {
        if self.store.is_released() {
            return Err(StorageError::Uninitialized);
        }
        if self.store.is_empty() {
            return Err(StorageError::Empty);
        }
        self.store.remove(0)
    }

    /// Returns a copy of the front element without removing it.
    pub fn front(&self) -> Result<T>
    where
        T: Clone,
    {
        if self.store.is_released() {
            return Err(StorageError::Uninitialized);
        }
        if self.store.is_empty() {
            return Err(StorageError::Empty);
        }
        self.store.get(0)
    }

    /// Frees the backing allocation. Idempotent; see
    /// [`Storage::release`].
    pub fn release(&mut self) {
        self.store.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enqueue_dequeue_is_fifo() {
        let mut queue = Queue::new().unwrap();
        for n in 1..=5 {
            queue.enqueue(n).unwrap();
        }
        for n in 1..=5 {
            assert_eq!(queue.dequeue().unwrap(), n);
        }
    }

    #[test]
    fn test_dequeue_empty_reports_empty_not_index() {
        let mut queue = Queue::<u8>::new().unwrap();
        assert_eq!(queue.dequeue().unwrap_err(), StorageError::Empty);
    }

    #[test]
    fn test_front_leaves_queue_intact() {
        let mut queue = Queue::new().unwrap();
        queue.enqueue(7).unwrap();
        queue.enqueue(8).unwrap();
        assert_eq!(queue.front().unwrap(), 7);
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_front_empty_and_released() {
        let mut queue = Queue::<u8>::new().unwrap();
        assert_eq!(queue.front().unwrap_err(), StorageError::Empty);
        queue.release();
        assert_eq!(queue.front().unwrap_err(), StorageError::Uninitialized);
        assert_eq!(queue.dequeue().unwrap_err(), StorageError::Uninitialized);
    }

    #[test]
    fn test_interleaved_operations_preserve_order() {
        let mut queue = Queue::new().unwrap();
        queue.enqueue(1).unwrap();
        queue.enqueue(2).unwrap();
        assert_eq!(queue.dequeue().unwrap(), 1);
        queue.enqueue(3).unwrap();
        assert_eq!(queue.dequeue().unwrap(), 2);
        assert_eq!(queue.dequeue().unwrap(), 3);
    }

    #[test]
    fn test_capacity_follows_store_policy() {
        let mut queue = Queue::new().unwrap();
        for n in 1..=5 {
            queue.enqueue(n).unwrap();
        }
        assert_eq!(queue.capacity(), 8);
        queue.dequeue().unwrap();
        queue.dequeue().unwrap();
        assert_eq!(queue.capacity(), 4);
    }
}
