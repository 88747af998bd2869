// This file is part of bounded-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::BoundedStackVec;

impl<T, const N: usize> BoundedStackVec<T, N> {
    /// Pops the last element if any, transferring ownership to the caller.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            self.len -= 1;
            // SAFETY: Before decrementing, all elements in `buf[..old_len]`
            // are initialized by invariant, so `buf[self.len]` (the old last
            // slot) contains an initialized `T`. The length was decremented
            // first, so the slot is no longer part of the live prefix and
            // will not be read or dropped again.
            let out = unsafe { self.buf[self.len].assume_init_read() };
            Some(out)
        }
    }
}
