// This file is part of bounded-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::BoundedStackVec};

impl<T, const N: usize> BoundedStackVec<T, N> {
    /// Pushes `v` if not full; returns [`Error::Full`] otherwise.
    ///
    /// The capacity check happens before anything else, so on `Err` the
    /// vector is unchanged; the rejected value is dropped.
    #[inline]
    pub fn push(&mut self, v: T) -> Result<(), Error> {
        if self.len == N {
            return Err(Error::Full);
        }

        self.buf[self.len].write(v);

        self.len += 1;
        Ok(())
    }
}
