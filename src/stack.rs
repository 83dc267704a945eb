//! Fixed-capacity LIFO stack backed by a pre-sized slot array.
//!
//! [`BoundedStack`] allocates its `capacity` slots once, at construction, and never
//! grows.  `push`, `pop` and `peek` are O(1).  A popped slot is reset to `None`, so the
//! stack never keeps a value alive after handing it back to the caller.
//!
//! [`AnyStack`] is the interop trait implemented by `BoundedStack` and `Vec` so callers
//! can be written against either.

use crate::error::{CollectionError, Result};
use core::fmt;
use core::iter::Rev;
use core::slice;
use tracing::debug;

/// A trait for abstraction over LIFO containers (bounded or growable).
pub trait AnyStack<T> {
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    fn push(&mut self, item: T) -> Result<()>;
    fn pop(&mut self) -> Result<T>;
    fn peek(&self) -> Result<&T>;
}

impl<T> AnyStack<T> for Vec<T> {
    fn len(&self) -> usize {
        self.len()
    }
    fn push(&mut self, item: T) -> Result<()> {
        Vec::push(self, item);
        Ok(())
    }
    fn pop(&mut self) -> Result<T> {
        Vec::pop(self).ok_or(CollectionError::EmptyContainer)
    }
    fn peek(&self) -> Result<&T> {
        self.last().ok_or(CollectionError::EmptyContainer)
    }
}

/// A LIFO stack holding at most `capacity` elements.
///
/// # Invariants
/// * `len <= slots.len()` (the capacity).
/// * `slots[..len]` are all `Some`, `slots[len..]` are all `None`.
///
/// # Cloning
/// `Clone` duplicates every element with `T::clone`, so for owned element types the
/// copy shares nothing with the source.  When duplication can fail, use
/// [`try_clone_with`](BoundedStack::try_clone_with), which returns the first error
/// and discards the partially built copy.
pub struct BoundedStack<T> {
    slots: Box<[Option<T>]>,
    len: usize,
}

impl<T> BoundedStack<T> {
    /// Creates an empty stack able to hold `capacity` elements.
    ///
    /// Fails with [`CollectionError::InvalidCapacity`] when `capacity` is negative.
    pub fn new(capacity: isize) -> Result<Self> {
        let capacity = usize::try_from(capacity).map_err(|_| {
            debug!(capacity, "rejected negative stack capacity");
            CollectionError::InvalidCapacity(capacity)
        })?;
        Ok(Self::with_capacity(capacity))
    }

    /// Creates an empty stack from an already validated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: core::iter::repeat_with(|| None).take(capacity).collect(),
            len: 0,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Pushes `value` on top.
    ///
    /// Fails with [`CollectionError::CapacityExceeded`] when the stack is full; the stack
    /// is left untouched and `value` is dropped.  Use [`try_push`](BoundedStack::try_push)
    /// to get the value back instead.
    pub fn push(&mut self, value: T) -> Result<()> {
        self.try_push(value).map_err(|_| CollectionError::CapacityExceeded {
            capacity: self.capacity(),
        })
    }

    /// Pushes `value` on top, or returns `Err(value)` if the stack is full.
    pub fn try_push(&mut self, value: T) -> core::result::Result<(), T> {
        if self.is_full() {
            debug!(capacity = self.capacity(), "rejected push on full stack");
            return Err(value);
        }
        self.slots[self.len] = Some(value);
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the top element, clearing its slot.
    pub fn pop(&mut self) -> Result<T> {
        let Some(top) = self.len.checked_sub(1) else {
            debug!("rejected pop on empty stack");
            return Err(CollectionError::EmptyContainer);
        };
        let value = self.slots[top]
            .take()
            .ok_or(CollectionError::EmptyContainer)?;
        self.len = top;
        Ok(value)
    }

    /// Returns the top element without removing it.
    pub fn peek(&self) -> Result<&T> {
        self.len
            .checked_sub(1)
            .and_then(|top| self.slots[top].as_ref())
            .ok_or_else(|| {
                debug!("rejected peek on empty stack");
                CollectionError::EmptyContainer
            })
    }

    /// Returns a mutable reference to the top element.
    pub fn peek_mut(&mut self) -> Result<&mut T> {
        match self.len.checked_sub(1) {
            Some(top) => self.slots[top]
                .as_mut()
                .ok_or(CollectionError::EmptyContainer),
            None => {
                debug!("rejected peek_mut on empty stack");
                Err(CollectionError::EmptyContainer)
            }
        }
    }

    /// Drops every element. The capacity is unchanged.
    pub fn clear(&mut self) {
        for slot in &mut self.slots[..self.len] {
            *slot = None;
        }
        self.len = 0;
    }

    /// Iterates from the top (most recently pushed) to the bottom.
    ///
    /// Each call starts a fresh pass.  The borrow keeps the stack immutable for as long
    /// as the iterator is alive.
    pub fn iter(&self) -> StackIter<'_, T> {
        StackIter {
            inner: self.slots[..self.len].iter().rev(),
        }
    }

    /// Duplicates the stack with a fallible per-element copy function.
    ///
    /// Elements are duplicated bottom to top.  The first `Err` returned by `duplicate`
    /// aborts the whole clone and is handed back unchanged.
    pub fn try_clone_with<E, F>(&self, mut duplicate: F) -> core::result::Result<Self, E>
    where
        F: FnMut(&T) -> core::result::Result<T, E>,
    {
        let mut slots = Vec::with_capacity(self.capacity());
        for value in self.slots[..self.len].iter().flatten() {
            slots.push(Some(duplicate(value)?));
        }
        slots.resize_with(self.capacity(), || None);
        Ok(Self {
            slots: slots.into_boxed_slice(),
            len: self.len,
        })
    }
}

impl<T> AnyStack<T> for BoundedStack<T> {
    fn len(&self) -> usize {
        self.len()
    }
    fn push(&mut self, item: T) -> Result<()> {
        BoundedStack::push(self, item)
    }
    fn pop(&mut self) -> Result<T> {
        BoundedStack::pop(self)
    }
    fn peek(&self) -> Result<&T> {
        BoundedStack::peek(self)
    }
}

// --- Traits ---

impl<T: Clone> Clone for BoundedStack<T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
            len: self.len,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for BoundedStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedStack")
            .field("capacity", &self.capacity())
            .field("top_to_bottom", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

impl<T: PartialEq> PartialEq for BoundedStack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.capacity() == other.capacity() && self.slots[..self.len] == other.slots[..other.len]
    }
}

impl<T: Eq> Eq for BoundedStack<T> {}

pub struct StackIter<'a, T> {
    inner: Rev<slice::Iter<'a, Option<T>>>,
}

impl<'a, T> Iterator for StackIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().and_then(Option::as_ref)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for StackIter<'_, T> {}

impl<'a, T> IntoIterator for &'a BoundedStack<T> {
    type Item = &'a T;
    type IntoIter = StackIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator, top to bottom.
pub struct IntoIter<T> {
    inner: Rev<std::vec::IntoIter<Option<T>>>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().flatten()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for BoundedStack<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let mut slots = self.slots.into_vec();
        slots.truncate(self.len);
        IntoIter {
            inner: slots.into_iter().rev(),
        }
    }
}
