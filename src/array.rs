//! Random-access view over the growable store.
//!
//! [`Array`] is the store used directly: every position in the live range
//! is addressable, in insertion order. It adds no policy of its own — each
//! method delegates to the matching [`Storage`] operation.

use crate::error::Result;
use crate::storage::Storage;

/// A growable array of elements, indexable at any live position.
///
/// # Examples
///
/// ```
/// use trivec::Array;
///
/// let mut array = Array::new()?;
/// array.push(10)?;
/// array.push(30)?;
/// array.insert(1, 20)?;
///
/// assert_eq!(array.get(1)?, 20);
/// assert_eq!(array.remove(0)?, 10);
/// # Ok::<(), trivec::StorageError>(())
/// ```
#[derive(Debug)]
pub struct Array<T> {
    store: Storage<T>,
}

impl<T> Array<T> {
    /// Creates an empty array with the default initial capacity.
    pub fn new() -> Result<Self> {
        Ok(Self {
            store: Storage::new()?,
        })
    }

    /// Creates an empty array with at least `initial` slots.
    pub fn with_capacity(initial: usize) -> Result<Self> {
        Ok(Self {
            store: Storage::with_capacity(initial)?,
        })
    }

    /// Returns the number of live elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns true if the array holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Returns the current slot capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }

    /// Returns a copy of the element at `index`.
    pub fn get(&self, index: usize) -> Result<T>
    where
        T: Clone,
    {
        self.store.get(index)
    }

    /// Overwrites the element at `index`.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        self.store.set(index, value)
    }

    /// Appends `value` at the end.
    pub fn push(&mut self, value: T) -> Result<()> {
        self.store.push(value)
    }

    /// Inserts `value` at `index`, shifting later elements right.
    ///
    /// `index == len()` appends.
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        self.store.insert(index, value)
    }

    /// Removes and returns the element at `index`, shifting later
    /// elements left.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        self.store.remove(index)
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
    use crate::error::StorageError;

    fn live<T: Clone>(array: &Array<T>) -> Vec<T> {
        (0..array.len()).map(|i| array.get(i).unwrap()).collect()
    }

    #[test]
    fn test_insert_remove_round_trip() {
        let mut array = Array::new().unwrap();
        for n in [10, 20, 30, 40] {
            array.push(n).unwrap();
        }

        array.insert(2, 99).unwrap();
        assert_eq!(live(&array), [10, 20, 99, 30, 40]);

        assert_eq!(array.remove(2).unwrap(), 99);
        assert_eq!(live(&array), [10, 20, 30, 40]);
    }

    #[test]
    fn test_set_then_get() {
        let mut array = Array::new().unwrap();
        array.push(1).unwrap();
        array.set(0, 2).unwrap();
        assert_eq!(array.get(0).unwrap(), 2);
    }

    #[test]
    fn test_out_of_range_index_is_reported() {
        let mut array = Array::<i32>::new().unwrap();
        assert_eq!(
            array.get(0).unwrap_err(),
            StorageError::IndexOutOfBounds { index: 0, len: 0 }
        );
        assert_eq!(
            array.remove(0).unwrap_err(),
            StorageError::IndexOutOfBounds { index: 0, len: 0 }
        );
    }

    #[test]
    fn test_release_then_use() {
        let mut array = Array::new().unwrap();
        array.push(1).unwrap();
        array.release();
        array.release();
        assert_eq!(array.push(2).unwrap_err(), StorageError::Uninitialized);
    }
}
