// This file is part of bounded-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{BoundedStackVec, Error};

// Core imports
use core::{mem::ManuallyDrop, ptr};

impl<T, const N: usize> BoundedStackVec<T, N> {
    /// Converts to `[T; N]` when **full** (`len == N`), otherwise returns
    /// [`Error::InvalidLen`].
    ///
    /// On success the elements are moved out; on error the vector is dropped
    /// normally (its elements are destroyed).
    #[inline]
    pub fn try_into_array(self) -> Result<[T; N], Error> {
        if self.len != N {
            return Err(Error::InvalidLen);
        }

        let this = ManuallyDrop::new(self);

        // SAFETY: `len == N`, so every slot of `buf` is initialized and the
        // buffer has the layout of `[T; N]`. Ownership of all elements moves
        // into the returned array; `this` is never dropped, so nothing is
        // dropped twice.
        let out = unsafe { ptr::read(this.buf.as_ptr() as *const [T; N]) };
        Ok(out)
    }
}
