use std::{fmt, iter};

use crate::{Cursor, Error, List, MutableList, DEFAULT_CAPACITY, GROWTH_FACTOR};

/// Growable list backed by a contiguous, doubling buffer of slots.
///
/// Live elements always occupy slots `0..len()` in the order they were added. Every slot past
/// the end is empty, so removing or clearing an element drops it immediately instead of leaving
/// a stale value behind in the buffer.
///
/// The buffer starts with [`DEFAULT_CAPACITY`] slots and is multiplied by [`GROWTH_FACTOR`]
/// whenever an append finds it full. It never shrinks.
///
/// # Examples
/// ```
/// use array_list::{DynamicArrayList, List as _, MutableList as _};
///
/// let mut list = DynamicArrayList::new();
/// list.add(10);
/// list.add(20);
/// list.add(30);
///
/// assert_eq!(list.get(1), Ok(&20));
/// assert!(list.remove(&20));
/// assert_eq!(list.get(1), Ok(&30));
/// assert!(!list.contains(&20));
/// ```
#[derive(Clone)]
pub struct DynamicArrayList<T> {
    slots: Box<[Option<T>]>,
    len: usize,
}

impl<T> DynamicArrayList<T> {
    /// Constructs an empty list with a capacity of [`DEFAULT_CAPACITY`].
    pub fn new() -> Self {
        Self {
            slots: iter::repeat_with(|| None).take(DEFAULT_CAPACITY).collect(),
            len: 0,
        }
    }

    /// Returns the number of slots in the backing buffer.
    ///
    /// Always at least 1 and never less than [`len`](List::len).
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Appends `element`, reporting growth failures instead of panicking.
    ///
    /// On error the list is unchanged and `element` is dropped.
    ///
    /// # Errors
    /// Returns [`Error::CapacityOverflow`] if the grown capacity would not fit in a `usize` and
    /// [`Error::AllocFailed`] if the allocator refuses the grown buffer.
    pub fn try_add(&mut self, element: T) -> Result<(), Error> {
        self.try_add_with(element, next_capacity)
    }

    fn try_add_with(
        &mut self,
        element: T,
        next_capacity: impl FnOnce(usize) -> Result<usize, Error>,
    ) -> Result<(), Error> {
        if self.len == self.slots.len() {
            if let Err(err) = self.grow(next_capacity) {
                tracing::debug!(len = self.len, "could not append element: {err}");
                return Err(err);
            }
        }

        self.slots[self.len] = Some(element);
        self.len += 1;

        Ok(())
    }

    fn grow(
        &mut self,
        next_capacity: impl FnOnce(usize) -> Result<usize, Error>,
    ) -> Result<(), Error> {
        let old_capacity = self.slots.len();
        let new_capacity = next_capacity(old_capacity)?;

        let mut slots = alloc_slots(new_capacity)?;
        for (new_slot, old_slot) in slots.iter_mut().zip(self.slots.iter_mut()) {
            *new_slot = old_slot.take();
        }
        self.slots = slots;

        tracing::trace!(from = old_capacity, to = new_capacity, "grew backing buffer");

        Ok(())
    }

    fn position(&self, element: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.slots[..self.len]
            .iter()
            .position(|slot| slot.as_ref() == Some(element))
    }

    /// Closes the gap at `idx` by shifting the tail left, then empties the freed last slot.
    fn remove_at(&mut self, idx: usize) {
        debug_assert!(idx < self.len);

        self.slots[idx..self.len].rotate_left(1);
        self.len -= 1;
        self.slots[self.len] = None;
    }
}

fn next_capacity(capacity: usize) -> Result<usize, Error> {
    capacity
        .checked_mul(GROWTH_FACTOR)
        .ok_or(Error::CapacityOverflow { capacity })
}

fn alloc_slots<T>(capacity: usize) -> Result<Box<[Option<T>]>, Error> {
    let mut slots = Vec::new();
    slots
        .try_reserve_exact(capacity)
        .map_err(|_| Error::AllocFailed { capacity })?;
    slots.resize_with(capacity, || None);

    Ok(slots.into_boxed_slice())
}

impl<T> List<T> for DynamicArrayList<T> {
    fn len(&self) -> usize {
        self.len
    }

    fn get(&self, idx: usize) -> Result<&T, Error> {
        self.slots[..self.len]
            .get(idx)
            .and_then(Option::as_ref)
            .ok_or(Error::OutOfRange {
                index: idx,
                size: self.len,
            })
    }
}

impl<T> MutableList<T> for DynamicArrayList<T> {
    /// # Panics
    /// Panics if the backing buffer cannot be grown. See [`try_add`](DynamicArrayList::try_add)
    /// for a non-panicking alternative.
    fn add(&mut self, element: T) {
        if let Err(err) = self.try_add(element) {
            panic!("{err}");
        }
    }

    fn remove(&mut self, element: &T) -> bool
    where
        T: PartialEq,
    {
        match self.position(element) {
            Some(idx) => {
                self.remove_at(idx);
                true
            }
            None => false,
        }
    }

    fn clear(&mut self) {
        let released = self.len;

        for slot in &mut self.slots[..self.len] {
            *slot = None;
        }
        self.len = 0;

        tracing::trace!(released, capacity = self.slots.len(), "cleared list");
    }
}

impl<T> Default for DynamicArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Lists are equal when they hold equal elements in the same order; capacity is ignored.
impl<T: PartialEq> PartialEq for DynamicArrayList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DynamicArrayList<T> {}

impl<'a, T> IntoIterator for &'a DynamicArrayList<T> {
    type Item = &'a T;
    type IntoIter = Cursor<'a, T, DynamicArrayList<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
