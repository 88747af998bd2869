// This file is part of bounded-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::BoundedStackVec;

impl<T, const N: usize> BoundedStackVec<T, N> {
    /// Returns the live elements as a shared slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: By invariant, all elements in `buf[..self.len]` are
        // initialized and `self.len <= N`, so this is a valid shared slice of
        // initialized `T`.
        unsafe { core::slice::from_raw_parts(self.buf.as_ptr() as *const T, self.len) }
    }

    /// Returns the live elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: By invariant, all elements in `buf[..self.len]` are
        // initialized and `self.len <= N`. We have exclusive access via
        // `&mut self`, so a mutable slice over `buf[..self.len]` is sound.
        unsafe { core::slice::from_raw_parts_mut(self.buf.as_mut_ptr() as *mut T, self.len) }
    }

    /// Constructs from at most `N` elements of `src`, truncating if necessary.
    #[inline]
    pub fn from_slice_truncated(src: &[T]) -> Self
    where
        T: Clone,
    {
        let mut v = Self::new();
        let _ = v.extend_from_slice_truncated(src);
        v
    }
}
