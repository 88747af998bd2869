// This file is part of bounded-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::BoundedStackVec};

// Core imports
use core::ptr;

impl<T, const N: usize> BoundedStackVec<T, N> {
    /// Drops all live elements in index order and resets `len` to 0.
    #[inline]
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Shrinks to `new_len` if `new_len < len`, dropping the removed suffix
    /// in index order; otherwise a no-op.
    #[inline]
    pub fn truncate(&mut self, new_len: usize) {
        if new_len >= self.len {
            return;
        }
        let old_len = self.len;
        // The length is updated before dropping so that an unwinding element
        // `Drop` cannot lead to a second drop of the same suffix.
        self.len = new_len;
        // SAFETY: `new_len < old_len <= N`, so `buf[new_len..old_len]` is a
        // fully initialized range that is no longer part of the live prefix.
        // Each element in it is dropped exactly once.
        unsafe {
            let tail = ptr::slice_from_raw_parts_mut(
                self.as_mut_ptr().add(new_len),
                old_len - new_len,
            );
            ptr::drop_in_place(tail);
        }
    }

    /// Resizes to `new_len`, filling with clones of `value` when growing.
    ///
    /// Returns [`Error::Full`] if `new_len > N`; the vector is unchanged in
    /// that case. Shrinking drops the removed suffix.
    #[inline]
    pub fn resize(&mut self, new_len: usize, value: T) -> Result<(), Error>
    where
        T: Clone,
    {
        if new_len > N {
            return Err(Error::Full);
        }
        if new_len <= self.len {
            self.truncate(new_len);
            return Ok(());
        }
        while self.len < new_len {
            // Cannot fail: new_len <= N was checked above.
            self.push(value.clone())?;
        }
        Ok(())
    }
}
