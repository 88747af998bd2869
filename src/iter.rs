// This file is part of bounded-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`BoundedStackVec`](crate::BoundedStackVec).
//!
//! - `IntoIter<T, N>` yields by value and supports `DoubleEndedIterator`,
//!   `ExactSizeIterator`, and `FusedIterator`; unconsumed elements are
//!   dropped when the iterator is dropped.
//! - `&BoundedStackVec` and `&mut BoundedStackVec` iterate as slices.

// Crate imports
use crate::vec::BoundedStackVec;

// Core imports
use core::{
    iter::FusedIterator,
    mem::{ManuallyDrop, MaybeUninit},
    ptr,
};

/// Owned iterator returned by `BoundedStackVec::into_iter()`.
///
/// Yields elements by value from front to back and supports double-ended
/// iteration via [`DoubleEndedIterator`]. Elements not consumed before the
/// iterator is dropped are dropped with it.
pub struct IntoIter<T, const N: usize> {
    // Invariants: `front <= back <= N`; slots in `buf[front..back]` are
    // initialized and owned by the iterator, everything else has already
    // been yielded or was never live.
    pub(crate) buf: [MaybeUninit<T>; N],
    pub(crate) front: usize,
    pub(crate) back: usize, // exclusive
}

impl<T, const N: usize> Iterator for IntoIter<T, N> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        if self.front < self.back {
            let i = self.front;
            self.front += 1;
            // SAFETY: `i` was within `[front, back)`, so `buf[i]` is
            // initialized and owned by the iterator. `front` was advanced
            // past it first, so it is read out exactly once.
            Some(unsafe { self.buf[i].assume_init_read() })
        } else {
            None
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.back - self.front;
        (rem, Some(rem))
    }
}

impl<T, const N: usize> DoubleEndedIterator for IntoIter<T, N> {
    fn next_back(&mut self) -> Option<T> {
        if self.front < self.back {
            self.back -= 1;
            // SAFETY: After the decrement, `back` is within `[front, old_back)`,
            // so `buf[back]` is initialized and owned by the iterator; the
            // slot leaves the live window before being read, so it is read
            // out exactly once.
            Some(unsafe { self.buf[self.back].assume_init_read() })
        } else {
            None
        }
    }
}
impl<T, const N: usize> FusedIterator for IntoIter<T, N> {}
impl<T, const N: usize> ExactSizeIterator for IntoIter<T, N> {}

impl<T, const N: usize> Drop for IntoIter<T, N> {
    fn drop(&mut self) {
        // SAFETY: `buf[front..back]` holds the elements not yet yielded;
        // each is initialized and owned by the iterator. The window is
        // emptied before dropping so a re-entrant drop cannot see it.
        let front = self.front;
        let rem = self.back - self.front;
        self.front = self.back;
        unsafe {
            let tail =
                ptr::slice_from_raw_parts_mut((self.buf.as_mut_ptr() as *mut T).add(front), rem);
            ptr::drop_in_place(tail);
        }
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a BoundedStackVec<T, N> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
impl<'a, T, const N: usize> IntoIterator for &'a mut BoundedStackVec<T, N> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
impl<T, const N: usize> IntoIterator for BoundedStackVec<T, N> {
    type Item = T;
    type IntoIter = IntoIter<T, N>;
    fn into_iter(self) -> Self::IntoIter {
        let v = ManuallyDrop::new(self);
        // SAFETY: `v` is never dropped, so ownership of the initialized
        // prefix `buf[..len]` transfers to the iterator without a double
        // drop. The buffer is moved out bitwise; the original is forgotten.
        let buf = unsafe { ptr::read(&v.buf) };
        IntoIter {
            buf,
            front: 0,
            back: v.len,
        }
    }
}

impl<T, const N: usize> FromIterator<T> for BoundedStackVec<T, N> {
    /// Collecting into `BoundedStackVec<T, N>` takes at most the first `N`
    /// elements from the iterator and does not consume any further elements.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut v = Self::new();
        v.extend(iter);
        v
    }
}
