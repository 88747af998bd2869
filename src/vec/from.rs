// This file is part of bounded-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate import
use crate::vec::BoundedStackVec;

impl<T, const N: usize> From<[T; N]> for BoundedStackVec<T, N> {
    /// Moves the array's elements into a full vector.
    fn from(src: [T; N]) -> Self {
        let mut v = Self::new();
        for item in src {
            v.buf[v.len].write(item);
            v.len += 1;
        }
        v
    }
}

impl<T: Clone, const N: usize> From<&[T; N]> for BoundedStackVec<T, N> {
    fn from(src: &[T; N]) -> Self {
        let mut v = Self::new();
        // Cannot overflow: the array length equals the capacity.
        for item in src {
            v.buf[v.len].write(item.clone());
            v.len += 1;
        }
        v
    }
}
