// This file is part of bounded-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::BoundedStackVec};

// Core imports
use core::ptr;

impl<T, const N: usize> BoundedStackVec<T, N> {
    /// Splits the vector into two at index `at`.
    ///
    /// On success:
    /// - `self` is left containing the prefix `[0..at)`,
    /// - the returned vector contains the tail `[at..len)` (moved, not
    ///   cloned).
    ///
    /// Returns [`Error::OutOfBounds`] if `at > self.len()`. On error, `self`
    /// is left unchanged.
    #[inline]
    pub fn split_off(&mut self, at: usize) -> Result<Self, Error> {
        let len = self.len;
        if at > len {
            return Err(Error::OutOfBounds);
        }

        let tail_len = len - at;
        let mut other: BoundedStackVec<T, N> = BoundedStackVec::new();

        if tail_len > 0 {
            // SAFETY: `buf[at..len]` is fully initialized and `tail_len <= N`
            // fits `other`'s buffer. Ownership of the tail moves into
            // `other` (disjoint buffers); both length updates happen
            // immediately after with no unwind point in between, so each
            // element stays owned by exactly one vector.
            unsafe {
                ptr::copy_nonoverlapping(self.as_ptr().add(at), other.as_mut_ptr(), tail_len);
            }
            other.len = tail_len;
        }

        self.len = at;

        Ok(other)
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::BoundedStackVec;

    #[test]
    fn test_split_off_basic() {
        let mut v: BoundedStackVec<i32, 5> =
            BoundedStackVec::try_from(&[10, 20, 30, 40][..]).unwrap();
        let tail = v.split_off(2).unwrap();

        assert_eq!(v.as_slice(), &[10, 20]);
        assert_eq!(tail.as_slice(), &[30, 40]);
    }

    #[test]
    fn test_split_off_at_len_and_empty() {
        let mut v: BoundedStackVec<i32, 4> = BoundedStackVec::try_from(&[1, 2, 3][..]).unwrap();
        let tail = v.split_off(v.len()).unwrap();
        assert_eq!(v.as_slice(), &[1, 2, 3]);
        assert!(tail.is_empty());

        let mut empty: BoundedStackVec<i32, 4> = BoundedStackVec::new();
        let tail2 = empty.split_off(0).unwrap();
        assert!(empty.is_empty());
        assert!(tail2.is_empty());
    }

    #[test]
    fn test_split_off_out_of_bounds_errors_and_is_noop() {
        let mut v: BoundedStackVec<i32, 3> = BoundedStackVec::try_from(&[1, 2][..]).unwrap();
        let err = v.split_off(3).unwrap_err();
        assert_eq!(err, crate::Error::OutOfBounds);
        assert_eq!(v.as_slice(), &[1, 2]);
    }

    #[test]
    fn test_split_off_moves_rather_than_clones() {
        use crate::vec::test_probe::Probe;
        use core::cell::Cell;

        let clones = Cell::new(0);
        let drops = Cell::new(0);
        let mut v: BoundedStackVec<Probe<'_>, 4> = BoundedStackVec::new();
        for i in 0..4 {
            v.push(Probe::new(i, &clones, &drops)).unwrap();
        }

        let tail = v.split_off(2).unwrap();
        assert_eq!(clones.get(), 0);
        assert_eq!(drops.get(), 0);
        assert_eq!(v.len(), 2);
        assert_eq!(tail.len(), 2);
        assert_eq!(tail[0].value, 2);

        drop(tail);
        assert_eq!(drops.get(), 2);
        drop(v);
        assert_eq!(drops.get(), 4);
    }
}
