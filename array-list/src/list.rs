//! List capability traits.

use crate::{Cursor, Error};

/// Read access to an ordered, index-addressable collection.
pub trait List<T> {
    /// Returns the number of live elements.
    fn len(&self) -> usize;

    /// Returns true if the list holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a reference to the element at `idx`.
    ///
    /// # Errors
    /// Returns [`Error::OutOfRange`] if `idx >= self.len()`.
    fn get(&self, idx: usize) -> Result<&T, Error>;

    /// Returns true if any element is equal to `element`.
    ///
    /// Elements are scanned in index order and the scan stops at the first match.
    fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        Cursor::new(self).any(|item| item == element)
    }

    /// Returns a fresh cursor positioned at index 0.
    fn iter(&self) -> Cursor<'_, T, Self>
    where
        Self: Sized,
    {
        Cursor::new(self)
    }
}

/// Write access on top of [`List`].
pub trait MutableList<T>: List<T> {
    /// Appends `element` to the end of the list.
    fn add(&mut self, element: T);

    /// Removes the first element equal to `element`, shifting later elements down by one.
    ///
    /// Returns false, and leaves the list untouched, if no element matches.
    fn remove(&mut self, element: &T) -> bool
    where
        T: PartialEq;

    /// Removes every element. Implementations may keep their allocated capacity.
    fn clear(&mut self);
}
