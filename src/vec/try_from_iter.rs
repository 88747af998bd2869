// This file is part of bounded-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::BoundedStackVec;

impl<T, const N: usize> BoundedStackVec<T, N> {
    /// Tries to construct from an iterator, erroring with
    /// [`Error::Full`](crate::Error::Full) if it would overflow.
    ///
    /// Semantics:
    /// - Elements are pushed in iterator order.
    /// - On the first element that would exceed capacity `N`, this returns
    ///   `Err(Error::Full)`; elements pushed before the overflow are dropped.
    /// - The source iterator may be left partially consumed (it stops at the
    ///   first overflow).
    #[inline]
    pub fn try_from_iter<I: IntoIterator<Item = T>>(iter: I) -> Result<Self, crate::Error> {
        let mut v = Self::new();
        for item in iter {
            v.push(item)?;
        }
        Ok(v)
    }
}
