// This file is part of bounded-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::BoundedStackVec;

impl<T, const N: usize> BoundedStackVec<T, N> {
    /// Returns a raw pointer to the start of the backing storage.
    ///
    /// Only the first `len` elements are logically initialized as `T`. Code
    /// that dereferences this pointer must:
    ///
    /// - treat `self.len` as the number of initialized elements, and
    /// - avoid reading from `ptr.add(i)` for any `i >= self.len`.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.buf.as_ptr() as *const T
    }

    /// Returns a mutable raw pointer to the start of the backing storage.
    ///
    /// Only the first `len` elements are logically initialized as `T`.
    /// Writing to the memory beyond `len` does **not** update `len`, and such
    /// writes will not be reflected in the logical contents of the vector;
    /// overwriting a slot below `len` without dropping it first leaks the old
    /// element.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_mut_ptr() as *mut T
    }
}
