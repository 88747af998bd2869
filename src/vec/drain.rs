// This file is part of bounded-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{iter::IntoIter, vec::BoundedStackVec};

// Core imports
use core::{
    iter::FusedIterator,
    ops::{Bound, RangeBounds},
    ptr,
};

/// Owned iterator returned by [`BoundedStackVec::drain`].
///
/// - Holds a mutable borrow of the parent vector for the iterator's lifetime.
/// - Internally wraps an [`IntoIter`] over a temporary `BoundedStackVec`
///   holding the drained elements; unconsumed elements are dropped with it.
pub struct Drain<'a, T, const N: usize> {
    pub(crate) _parent: &'a mut BoundedStackVec<T, N>,
    pub(crate) iter: IntoIter<T, N>,
}

impl<T, const N: usize> Iterator for Drain<'_, T, N> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}
impl<T, const N: usize> DoubleEndedIterator for Drain<'_, T, N> {
    fn next_back(&mut self) -> Option<T> {
        self.iter.next_back()
    }
}
impl<T, const N: usize> ExactSizeIterator for Drain<'_, T, N> {}
impl<T, const N: usize> FusedIterator for Drain<'_, T, N> {}

impl<T, const N: usize> BoundedStackVec<T, N> {
    /// Removes the half-open range `[start, end)` and returns the removed
    /// elements as an iterator.
    ///
    /// The elements are moved out of the vector **immediately**: the tail is
    /// shifted left to close the gap (forward compaction, order-preserving)
    /// and `len` is reduced by the range length before the iterator is
    /// returned. After the call, index `start` names the element that
    /// followed the erased range (or the end of the sequence). Dropping the
    /// iterator without consuming it drops the removed elements.
    ///
    /// This matches the behavior of `Vec::drain`.
    ///
    /// # Panics
    ///
    /// Panics if the specified range is invalid:
    /// - `start > end`
    /// - `end > self.len()`
    ///
    /// (A range with `start == end` yields an empty iterator and leaves the
    /// vector unchanged.)
    ///
    /// # Examples
    /// ```
    /// # use bounded_stack_vec::BoundedStackVec;
    /// let mut v: BoundedStackVec<_, 4> = [1, 2, 3, 4].into();
    /// let drained: BoundedStackVec<_, 4> = v.drain(1..3).collect();
    /// assert_eq!(drained.as_slice(), &[2, 3]);
    /// assert_eq!(v.as_slice(), &[1, 4]);
    /// ```
    pub fn drain<R>(&mut self, range: R) -> Drain<'_, T, N>
    where
        R: RangeBounds<usize>,
    {
        let len = self.len();

        let start = match range.start_bound() {
            Bound::Included(&i) => i,
            Bound::Excluded(&i) => i + 1,
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&i) => i + 1,
            Bound::Excluded(&i) => i,
            Bound::Unbounded => len,
        };

        if start > end {
            panic!("drain range start > end: {} > {}", start, end);
        }
        if end > len {
            panic!("drain range end {} exceeds length {}", end, len);
        }

        let range_len = end - start;
        let mut tmp: BoundedStackVec<T, N> = BoundedStackVec::new();

        if range_len > 0 {
            // SAFETY: `start <= end <= len`, so `buf[start..end]` is fully
            // initialized. Ownership of those elements moves into `tmp`
            // (disjoint buffers, nonoverlapping copy), then the initialized
            // tail `buf[end..len]` is shifted down to `buf[start..]` with an
            // overlap-safe copy. Both length updates make the live prefixes
            // match what was actually moved; nothing in between can unwind.
            unsafe {
                let base = self.as_mut_ptr();
                ptr::copy_nonoverlapping(base.add(start), tmp.as_mut_ptr(), range_len);
                tmp.len = range_len;

                ptr::copy(base.add(end), base.add(start), len - end);
                self.len = len - range_len;
            }
        }

        Drain {
            _parent: self,
            iter: tmp.into_iter(),
        }
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::BoundedStackVec;

    #[test]
    fn test_drain_middle_range() {
        let mut v: BoundedStackVec<i32, 8> =
            BoundedStackVec::try_from(&[1, 2, 3, 4, 5][..]).unwrap();

        let drained: BoundedStackVec<i32, 8> = v.drain(1..4).collect();
        assert_eq!(drained.as_slice(), &[2, 3, 4]);
        assert_eq!(v.as_slice(), &[1, 5]);
        assert_eq!(v.len(), 2);
    }

    #[test]
    fn test_drain_full_range() {
        let mut v: BoundedStackVec<i32, 4> =
            BoundedStackVec::try_from(&[10, 20, 30, 40][..]).unwrap();

        let drained: BoundedStackVec<i32, 4> = v.drain(..).collect();
        assert_eq!(drained.as_slice(), &[10, 20, 30, 40]);
        assert!(v.is_empty());
    }

    #[test]
    fn test_drain_empty_range_is_noop_on_data() {
        let mut v: BoundedStackVec<i32, 5> =
            BoundedStackVec::try_from(&[1, 2, 3, 4, 5][..]).unwrap();

        let drained: BoundedStackVec<i32, 5> = v.drain(2..2).collect();
        assert!(drained.is_empty());
        assert_eq!(v.as_slice(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_drain_prefix_and_suffix() {
        let mut v: BoundedStackVec<i32, 6> =
            BoundedStackVec::try_from(&[1, 2, 3, 4, 5][..]).unwrap();

        let drained_prefix: BoundedStackVec<i32, 6> = v.drain(..2).collect();
        assert_eq!(drained_prefix.as_slice(), &[1, 2]);
        assert_eq!(v.as_slice(), &[3, 4, 5]);

        let drained_suffix: BoundedStackVec<i32, 6> = v.drain(1..).collect();
        assert_eq!(drained_suffix.as_slice(), &[4, 5]);
        assert_eq!(v.as_slice(), &[3]);
    }

    #[test]
    fn test_drain_double_ended_iteration() {
        let mut v: BoundedStackVec<i32, 8> =
            BoundedStackVec::try_from(&[1, 2, 3, 4, 5][..]).unwrap();
        {
            let mut it = v.drain(1..4); // drains [2,3,4]
            assert_eq!(it.next_back(), Some(4));
            assert_eq!(it.next(), Some(2));
            assert_eq!(it.next(), Some(3));
            assert_eq!(it.next_back(), None);
        }
        assert_eq!(v.as_slice(), &[1, 5]);
    }

    #[test]
    fn test_drain_size_hint_tracks_consumption() {
        let mut v: BoundedStackVec<i32, 8> =
            BoundedStackVec::try_from(&[1, 2, 3, 4, 5][..]).unwrap();

        {
            let mut it = v.drain(1..4);
            assert_eq!(it.size_hint(), (3, Some(3)));
            assert_eq!(it.next(), Some(2));
            assert_eq!(it.size_hint(), (2, Some(2)));
            assert_eq!(it.next_back(), Some(4));
            assert_eq!(it.size_hint(), (1, Some(1)));
            assert_eq!(it.next(), Some(3));
            assert_eq!(it.size_hint(), (0, Some(0)));
            assert_eq!(it.next(), None);
        }
        assert_eq!(v.as_slice(), &[1, 5]);
    }

    #[test]
    #[should_panic]
    fn test_drain_end_out_of_bounds_panics() {
        let mut v: BoundedStackVec<i32, 4> = BoundedStackVec::try_from(&[1, 2, 3, 4][..]).unwrap();
        let _ = v.drain(2..10);
    }

    #[test]
    #[should_panic]
    #[allow(clippy::reversed_empty_ranges)]
    fn test_drain_start_greater_than_end_panics() {
        let mut v: BoundedStackVec<i32, 4> = BoundedStackVec::try_from(&[1, 2, 3, 4][..]).unwrap();
        let _ = v.drain(3..1);
    }

    #[test]
    fn test_drain_inclusive_end_uses_bound_included_branch() {
        let mut v: BoundedStackVec<i32, 8> =
            BoundedStackVec::try_from(&[1, 2, 3, 4, 5][..]).unwrap();

        let drained: BoundedStackVec<i32, 8> = v.drain(..=2).collect();
        assert_eq!(drained.as_slice(), &[1, 2, 3]);
        assert_eq!(v.as_slice(), &[4, 5]);
    }

    #[test]
    fn test_drain_unconsumed_elements_are_dropped() {
        use crate::vec::test_probe::Probe;
        use core::cell::Cell;

        let clones = Cell::new(0);
        let drops = Cell::new(0);
        let mut v: BoundedStackVec<Probe<'_>, 6> = BoundedStackVec::new();
        for i in 0..5 {
            v.push(Probe::new(i, &clones, &drops)).unwrap();
        }

        {
            let mut it = v.drain(1..4); // moves out probes 1, 2, 3
            let first = it.next().unwrap();
            assert_eq!(first.value, 1);
            // `first` dropped here, then the two unconsumed drained probes.
        }
        assert_eq!(drops.get(), 3);
        assert_eq!(v.len(), 2);
        assert_eq!(v[0].value, 0);
        assert_eq!(v[1].value, 4);
    }

    #[test]
    fn test_drain_non_copy_elements_preserve_tail_order() {
        use alloc::string::{String, ToString};

        let mut v: BoundedStackVec<String, 6> = BoundedStackVec::new();
        for s in ["a", "b", "c", "d", "e"] {
            v.push(s.to_string()).unwrap();
        }

        let drained: alloc::vec::Vec<String> = v.drain(1..3).collect();
        assert_eq!(drained, ["b", "c"]);
        assert_eq!(v.as_slice(), &["a", "d", "e"]);
    }

    #[test]
    fn test_drain_zero_capacity_vec() {
        let mut v: BoundedStackVec<u8, 0> = BoundedStackVec::new();
        {
            let mut it = v.drain(..);
            assert_eq!(it.size_hint(), (0, Some(0)));
            assert_eq!(it.next(), None);
        }
        assert_eq!(v.len(), 0);
        assert!(v.is_full());
    }
}
