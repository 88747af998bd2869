// This file is part of bounded-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing support for [`BoundedStackVec`](crate::BoundedStackVec).
//!
//! This module provides `Index` and `IndexMut` impls that mirror slice
//! behavior:
//! - panics on out-of-bounds;
//! - supports all standard range forms, including inclusive ranges;
//! - views are restricted to the live prefix `[0..len)`.

// Crate imports
use crate::vec::BoundedStackVec;

// Core imports
use core::ops::{
    Index, IndexMut, Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive,
};

impl<T, const N: usize> Index<usize> for BoundedStackVec<T, N> {
    type Output = T;
    fn index(&self, i: usize) -> &Self::Output {
        &self.as_slice()[i]
    }
}

// Read-only ranges
impl<T, const N: usize> Index<Range<usize>> for BoundedStackVec<T, N> {
    type Output = [T];
    fn index(&self, r: Range<usize>) -> &Self::Output {
        &self.as_slice()[r]
    }
}
impl<T, const N: usize> Index<RangeFrom<usize>> for BoundedStackVec<T, N> {
    type Output = [T];
    fn index(&self, r: RangeFrom<usize>) -> &Self::Output {
        &self.as_slice()[r]
    }
}
impl<T, const N: usize> Index<RangeTo<usize>> for BoundedStackVec<T, N> {
    type Output = [T];
    fn index(&self, r: RangeTo<usize>) -> &Self::Output {
        &self.as_slice()[r]
    }
}
impl<T, const N: usize> Index<RangeToInclusive<usize>> for BoundedStackVec<T, N> {
    type Output = [T];
    fn index(&self, r: RangeToInclusive<usize>) -> &Self::Output {
        &self.as_slice()[r]
    }
}
impl<T, const N: usize> Index<RangeInclusive<usize>> for BoundedStackVec<T, N> {
    type Output = [T];
    fn index(&self, r: RangeInclusive<usize>) -> &Self::Output {
        &self.as_slice()[r]
    }
}
impl<T, const N: usize> Index<RangeFull> for BoundedStackVec<T, N> {
    type Output = [T];
    fn index(&self, _: RangeFull) -> &Self::Output {
        self.as_slice()
    }
}

// Mutable ranges
impl<T, const N: usize> IndexMut<usize> for BoundedStackVec<T, N> {
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        &mut self.as_mut_slice()[i]
    }
}
impl<T, const N: usize> IndexMut<Range<usize>> for BoundedStackVec<T, N> {
    fn index_mut(&mut self, r: Range<usize>) -> &mut Self::Output {
        &mut self.as_mut_slice()[r]
    }
}
impl<T, const N: usize> IndexMut<RangeFrom<usize>> for BoundedStackVec<T, N> {
    fn index_mut(&mut self, r: RangeFrom<usize>) -> &mut Self::Output {
        &mut self.as_mut_slice()[r]
    }
}
impl<T, const N: usize> IndexMut<RangeTo<usize>> for BoundedStackVec<T, N> {
    fn index_mut(&mut self, r: RangeTo<usize>) -> &mut Self::Output {
        &mut self.as_mut_slice()[r]
    }
}
impl<T, const N: usize> IndexMut<RangeToInclusive<usize>> for BoundedStackVec<T, N> {
    fn index_mut(&mut self, r: RangeToInclusive<usize>) -> &mut Self::Output {
        &mut self.as_mut_slice()[r]
    }
}
impl<T, const N: usize> IndexMut<RangeInclusive<usize>> for BoundedStackVec<T, N> {
    fn index_mut(&mut self, r: RangeInclusive<usize>) -> &mut Self::Output {
        &mut self.as_mut_slice()[r]
    }
}
impl<T, const N: usize> IndexMut<RangeFull> for BoundedStackVec<T, N> {
    fn index_mut(&mut self, _: RangeFull) -> &mut Self::Output {
        self.as_mut_slice()
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::BoundedStackVec;

    #[test]
    fn test_indexing_and_ranges_full_suite() {
        let mut v: BoundedStackVec<i32, 6> =
            BoundedStackVec::try_from(&[0, 1, 2, 3, 4][..]).unwrap();

        assert_eq!(v[0], 0);
        assert_eq!(&v[1..3], &[1, 2]);
        assert_eq!(&v[2..], &[2, 3, 4]);
        assert_eq!(&v[..3], &[0, 1, 2]);
        assert_eq!(&v[..=2], &[0, 1, 2]);
        assert_eq!(&v[1..=3], &[1, 2, 3]);
        assert_eq!(&v[..], &[0, 1, 2, 3, 4]);

        v[1..3].copy_from_slice(&[10, 20]);
        assert_eq!(v.as_slice(), &[0, 10, 20, 3, 4]);
    }

    #[test]
    #[should_panic]
    fn test_oob_panics() {
        let v: BoundedStackVec<i32, 2> = BoundedStackVec::new();
        let _ = v[0];
    }

    #[test]
    #[should_panic]
    fn test_index_beyond_len_within_capacity_panics() {
        // Capacity 4, but only 2 live elements: index 2 is out of bounds.
        let v: BoundedStackVec<i32, 4> = BoundedStackVec::try_from(&[1, 2][..]).unwrap();
        let _ = v[2];
    }

    #[test]
    fn test_empty_ranges_work() {
        let v: BoundedStackVec<i32, 5> = BoundedStackVec::try_from(&[1, 2, 3][..]).unwrap();
        assert_eq!(&v[1..1], &[] as &[i32]);
        assert_eq!(&v[..0], &[] as &[i32]);
        assert_eq!(&v[3..3], &[] as &[i32]);
    }

    #[test]
    #[should_panic]
    #[allow(clippy::reversed_empty_ranges)]
    fn test_inverted_range_panics() {
        let v: BoundedStackVec<i32, 3> = BoundedStackVec::try_from(&[1, 2, 3][..]).unwrap();
        let _ = &v[2..1];
    }

    #[test]
    #[should_panic]
    fn test_inclusive_upper_oob_panics() {
        let v: BoundedStackVec<i32, 3> = BoundedStackVec::try_from(&[1, 2, 3][..]).unwrap();
        let _ = &v[..=3]; // out-of-bounds: upper bound == len
    }

    #[test]
    fn test_index_mut_single_element() {
        let mut v: BoundedStackVec<i32, 4> = BoundedStackVec::try_from(&[1, 2, 3, 4][..]).unwrap();
        v[1] = 10;
        v[3] = 40;
        assert_eq!(v.as_slice(), &[1, 10, 3, 40]);
    }

    #[test]
    fn test_index_mut_ranges() {
        let mut v: BoundedStackVec<i32, 5> =
            BoundedStackVec::try_from(&[1, 2, 3, 4, 5][..]).unwrap();

        {
            let tail: &mut [i32] = &mut v[2..];
            tail.copy_from_slice(&[30, 40, 50]);
        }
        assert_eq!(v.as_slice(), &[1, 2, 30, 40, 50]);

        {
            let head: &mut [i32] = &mut v[..2];
            head.copy_from_slice(&[10, 20]);
        }
        assert_eq!(v.as_slice(), &[10, 20, 30, 40, 50]);

        {
            let all: &mut [i32] = &mut v[..];
            all.reverse();
        }
        assert_eq!(v.as_slice(), &[50, 40, 30, 20, 10]);
    }

    #[test]
    fn test_mut_inclusive_range() {
        let mut v: BoundedStackVec<i32, 6> = BoundedStackVec::try_from(&[0, 1, 2, 3][..]).unwrap();
        v[1..=2].copy_from_slice(&[9, 8]);
        assert_eq!(v.as_slice(), &[0, 9, 8, 3]);
    }
}
