use core::ptr;

use allocator_api2::alloc::{Allocator, Global};

use crate::ChunkList;

/// A cursor over a `ChunkList`.
///
/// A cursor is a position in the list: either bound to the element at a
/// logical index, or the single "end" position past the last element. It
/// never caches the element it points at; every read resolves the index
/// through the list again, so a cursor stays meaningful as long as the
/// list's shape at that index is unchanged.
///
/// The end position is absorbing: moving a cursor that reached it, in
/// either direction, is a no-op. Likewise, moving backwards from the first
/// element is a no-op.
pub struct Cursor<'a, T, const N: usize, A: Allocator = Global> {
    list: &'a ChunkList<T, N, A>,
    // None is the end position
    index: Option<usize>,
}

impl<'a, T, const N: usize, A: Allocator> Cursor<'a, T, N, A> {
    pub(crate) fn from_front(list: &'a ChunkList<T, N, A>) -> Self {
        Self {
            list,
            index: if list.is_empty() { None } else { Some(0) },
        }
    }

    pub(crate) fn from_back(list: &'a ChunkList<T, N, A>) -> Self {
        Self {
            list,
            index: list.len().checked_sub(1),
        }
    }

    pub(crate) fn from_index(list: &'a ChunkList<T, N, A>, index: usize) -> Self {
        assert!(
            index <= list.len(),
            "cursor index (is {index}) should be <= len (is {})",
            list.len()
        );

        Self {
            list,
            index: (index < list.len()).then_some(index),
        }
    }

    /// The list this cursor reads through.
    pub fn as_list(&self) -> &'a ChunkList<T, N, A> {
        self.list
    }

    /// The logical index this cursor is bound to, or `None` for the end
    /// position.
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// The element this cursor is bound to, resolved through the list, or
    /// `None` for the end position.
    pub fn current(&self) -> Option<&'a T> {
        self.list.get(self.index?)
    }

    /// The first element of the underlying list.
    pub fn front(&self) -> Option<&'a T> {
        self.list.front()
    }

    /// The last element of the underlying list.
    pub fn back(&self) -> Option<&'a T> {
        self.list.back()
    }

    /// Moves the cursor one element towards the back; moving off the last
    /// element reaches the end position.
    pub fn move_next(&mut self) {
        if let Some(index) = self.index {
            self.index = (index + 1 < self.list.len()).then_some(index + 1);
        }
    }

    /// Moves the cursor one element towards the front. At the first
    /// element or the end position this is a no-op.
    pub fn move_prev(&mut self) {
        if let Some(index) = self.index {
            if index > 0 {
                self.index = Some(index - 1);
            }
        }
    }

    /// Jumps `steps` elements towards the back.
    ///
    /// # Panics
    /// Panics when the cursor is at the end position or the target index
    /// does not address an element.
    pub fn seek_forward(&mut self, steps: usize) {
        match self.index {
            Some(index) if index + steps < self.list.len() => self.index = Some(index + steps),
            Some(index) => panic!(
                "seek of {steps} steps from index {index} is out of bounds (len={})",
                self.list.len()
            ),
            None => panic!("cannot seek the end cursor"),
        }
    }

    /// Jumps `steps` elements towards the front.
    ///
    /// # Panics
    /// Panics when the cursor is at the end position or the target index
    /// does not address an element.
    pub fn seek_backward(&mut self, steps: usize) {
        match self.index {
            Some(index) if steps <= index => self.index = Some(index - steps),
            Some(index) => panic!("seek of {steps} steps back from index {index} is out of bounds"),
            None => panic!("cannot seek the end cursor"),
        }
    }

    /// The element right behind the cursor, if any.
    pub fn peek_next(&self) -> Option<&'a T> {
        self.list.get(self.index? + 1)
    }

    /// The element right in front of the cursor, if any.
    pub fn peek_prev(&self) -> Option<&'a T> {
        match self.index {
            Some(index) if index > 0 => self.list.get(index - 1),
            _ => None,
        }
    }
}

impl<T, const N: usize, A: Allocator> PartialEq for Cursor<'_, T, N, A> {
    /// Cursors compare equal when they resolve to the same element slot,
    /// not when their indices agree; end cursors, which resolve nothing,
    /// only compare equal to each other.
    fn eq(&self, other: &Self) -> bool {
        match (self.current(), other.current()) {
            (Some(lhs), Some(rhs)) => ptr::eq(lhs, rhs),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T, const N: usize, A: Allocator> Clone for Cursor<'_, T, N, A> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<T, const N: usize, A: Allocator> core::fmt::Debug for Cursor<'_, T, N, A>
where
    T: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Cursor")
            .field(self.list)
            .field(&self.index)
            .finish()
    }
}

unsafe impl<T, const N: usize, A> Send for Cursor<'_, T, N, A>
where
    T: Sync,
    A: Allocator + Sync,
{
}

unsafe impl<T, const N: usize, A> Sync for Cursor<'_, T, N, A>
where
    T: Sync,
    A: Allocator + Sync,
{
}
