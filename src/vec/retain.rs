// This file is part of bounded-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate import
use crate::vec::BoundedStackVec;

// Core imports
use core::ptr;

impl<T, const N: usize> BoundedStackVec<T, N> {
    /// Retains only the elements specified by the predicate `f`, preserving
    /// order. Rejected elements are dropped.
    ///
    /// The predicate is applied to each element in iteration order. If the
    /// predicate unwinds, the elements already decided stay in the vector
    /// and any elements not yet visited are leaked (never double-dropped).
    #[inline]
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, mut f: F) {
        let len = self.len;
        let base = self.buf.as_mut_ptr() as *mut T;

        // `len` tracks only the compacted kept prefix while the scan runs,
        // so an unwind in `f` cannot expose or re-drop the unscanned tail.
        self.len = 0;
        let mut write = 0;
        for read in 0..len {
            // SAFETY: `read < len` and every slot in `buf[..len]` started out
            // initialized. Each slot is read out exactly once; kept values
            // are written to `write <= read`, which was already vacated.
            let value = unsafe { ptr::read(base.add(read)) };
            if f(&value) {
                // SAFETY: see above; `write` is either the slot just read or
                // one vacated earlier in the scan.
                unsafe { ptr::write(base.add(write), value) };
                write += 1;
                self.len = write;
            }
            // A rejected `value` is dropped here as it goes out of scope.
        }
    }
}
