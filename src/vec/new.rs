// This file is part of bounded-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::BoundedStackVec;

// Core imports
use core::mem::MaybeUninit;

impl<T, const N: usize> BoundedStackVec<T, N> {
    /// Constructs an empty vector. No element constructors run.
    #[inline]
    pub const fn new() -> Self {
        Self {
            buf: [const { MaybeUninit::uninit() }; N],
            len: 0,
        }
    }
}

impl<T, const N: usize> Default for BoundedStackVec<T, N> {
    fn default() -> Self {
        Self::new()
    }
}
