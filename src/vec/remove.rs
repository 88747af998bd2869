// This file is part of bounded-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::BoundedStackVec};

// Core imports
use core::ptr;

impl<T, const N: usize> BoundedStackVec<T, N> {
    /// Removes and returns the element at `index`, shifting subsequent
    /// elements one slot to the left (order-preserving, O(len − index)).
    ///
    /// Returns `None` if `index >= len`.
    #[inline]
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        let len = self.len;

        // SAFETY: `index < len`, so `buf[index]` is within the initialized
        // prefix and contains a valid `T`. After reading it out, the shift
        // moves `buf[index + 1..len]` to `buf[index..len - 1]` (overlapping
        // `ptr::copy`), re-initializing slot `index` and leaving the old last
        // slot logically uninitialized. `len` is then decremented to match.
        let out = unsafe {
            let p = self.as_mut_ptr().add(index);
            let out = ptr::read(p);
            ptr::copy(p.add(1), p, len - index - 1);
            out
        };

        self.len = len - 1;
        Some(out)
    }

    /// Removes and returns the element at `index` by swapping in the last
    /// element, O(1) but not order-preserving.
    ///
    /// Returns `None` when `index >= len`. Removing the last element avoids
    /// the swap.
    #[inline]
    pub fn swap_remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        self.len -= 1;
        let last = self.len;

        // SAFETY: Before the decrement, `index < old_len` and
        // `last == old_len - 1`, so both slots are within the initialized
        // prefix. `buf[index]` is read out; if it is not the last slot, the
        // last element is moved into the hole, leaving only `buf[last]`
        // logically uninitialized, which matches the new `len`.
        unsafe {
            let base = self.as_mut_ptr();
            let out = ptr::read(base.add(index));
            if index != last {
                ptr::copy_nonoverlapping(base.add(last), base.add(index), 1);
            }
            Some(out)
        }
    }

    /// Fallible variant of [`remove`](Self::remove), returning
    /// [`Error::OutOfBounds`] when `index >= len`.
    #[inline]
    pub fn try_remove(&mut self, index: usize) -> Result<T, Error> {
        self.remove(index).ok_or(Error::OutOfBounds)
    }

    /// Fallible variant of [`swap_remove`](Self::swap_remove), returning
    /// [`Error::OutOfBounds`] when `index >= len`.
    #[inline]
    pub fn try_swap_remove(&mut self, index: usize) -> Result<T, Error> {
        self.swap_remove(index).ok_or(Error::OutOfBounds)
    }
}
