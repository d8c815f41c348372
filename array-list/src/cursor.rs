use std::{fmt, iter::FusedIterator, marker::PhantomData};

use crate::{Error, List};

/// Single-pass forward cursor over a [`List`].
///
/// Created by [`List::iter`]. The cursor reads the list's current length on every step rather
/// than capturing it up front; the shared borrow it holds keeps the list from being mutated
/// while it is alive.
pub struct Cursor<'a, T, L: ?Sized> {
    list: &'a L,
    idx: usize,
    _item: PhantomData<&'a T>,
}

impl<'a, T, L> Cursor<'a, T, L>
where
    L: List<T> + ?Sized,
{
    pub(crate) fn new(list: &'a L) -> Self {
        Self {
            list,
            idx: 0,
            _item: PhantomData,
        }
    }

    /// Returns true if another call to [`try_next`](Self::try_next) will yield an element.
    pub fn has_next(&self) -> bool {
        self.idx < self.list.len()
    }

    /// Yields the next element and advances the cursor.
    ///
    /// # Errors
    /// Returns [`Error::Exhausted`] once every element has been yielded.
    pub fn try_next(&mut self) -> Result<&'a T, Error> {
        if !self.has_next() {
            return Err(Error::Exhausted);
        }

        let item = self.list.get(self.idx)?;
        self.idx += 1;

        Ok(item)
    }
}

impl<'a, T, L> Iterator for Cursor<'a, T, L>
where
    L: List<T> + ?Sized,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.try_next().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len().saturating_sub(self.idx);
        (remaining, Some(remaining))
    }
}

impl<T, L> ExactSizeIterator for Cursor<'_, T, L> where L: List<T> + ?Sized {}

impl<T, L> FusedIterator for Cursor<'_, T, L> where L: List<T> + ?Sized {}

impl<T, L: ?Sized> Clone for Cursor<'_, T, L> {
    fn clone(&self) -> Self {
        Self {
            list: self.list,
            idx: self.idx,
            _item: PhantomData,
        }
    }
}

impl<T, L: ?Sized> fmt::Debug for Cursor<'_, T, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("idx", &self.idx)
            .finish_non_exhaustive()
    }
}
