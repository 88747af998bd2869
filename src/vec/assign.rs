// This file is part of bounded-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Cross-capacity construction and assignment.
//!
//! `BoundedStackVec<T, N>` and `BoundedStackVec<T, M>` are unrelated types,
//! but their contents interoperate through a conversion rule: an operation is
//! feasible iff the source's *runtime* length fits the destination's
//! compile-time capacity. The capacity check always happens before any
//! element of the destination is torn down, so a rejected operation leaves
//! the destination untouched.

// Crate imports
use crate::{error::Error, vec::BoundedStackVec};

impl<T, const N: usize> BoundedStackVec<T, N> {
    /// Replaces the contents of `self` with clones of `src`'s elements.
    ///
    /// Fails with [`Error::Full`] iff `src.len() > N`; the check happens
    /// **before** the existing elements are dropped, so on `Err` the
    /// destination is unchanged. On success the old elements are dropped in
    /// index order, then the source elements are cloned in index order.
    ///
    /// If `T::clone` unwinds mid-assignment the destination is left valid
    /// but holding only the elements cloned so far; callers should treat its
    /// contents as unspecified in that case.
    #[inline]
    pub fn assign_from_slice(&mut self, src: &[T]) -> Result<(), Error>
    where
        T: Clone,
    {
        if src.len() > N {
            return Err(Error::Full);
        }

        self.clear();
        for item in src {
            // `len` is bumped per element so an unwinding `clone` leaves
            // the vector valid.
            self.buf[self.len].write(item.clone());
            self.len += 1;
        }
        Ok(())
    }

    /// Replaces the contents of `self` with clones of another vector's
    /// elements, for any source capacity `M`.
    ///
    /// Same contract as [`assign_from_slice`](Self::assign_from_slice):
    /// feasible iff `src.len() <= N`, destination unchanged on `Err`.
    #[inline]
    pub fn assign_from<const M: usize>(&mut self, src: &BoundedStackVec<T, M>) -> Result<(), Error>
    where
        T: Clone,
    {
        self.assign_from_slice(src.as_slice())
    }
}

impl<T: Clone, const N: usize, const M: usize> TryFrom<&BoundedStackVec<T, M>>
    for BoundedStackVec<T, N>
{
    type Error = Error;

    /// Capacity-crossing copy construction: clones the source's elements
    /// into a fresh vector of capacity `N`, failing with [`Error::Full`] iff
    /// `src.len() > N`.
    fn try_from(src: &BoundedStackVec<T, M>) -> Result<Self, Error> {
        let mut v = Self::new();
        v.extend_from_slice(src.as_slice())?;
        Ok(v)
    }
}
