// This file is part of bounded-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::BoundedStackVec;

impl<T, const N: usize> Extend<T> for BoundedStackVec<T, N> {
    /// Appends at most `spare_capacity()` elements from `iter`, then stops
    /// consuming it.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let remaining = N - self.len;
        if remaining == 0 {
            return;
        }

        for item in iter.into_iter().take(remaining) {
            self.buf[self.len].write(item);
            self.len += 1;
        }
    }
}

impl<T, const N: usize> BoundedStackVec<T, N> {
    /// Appends clones of `src` if they all fit; otherwise no-op and returns
    /// [`Error::Full`](crate::Error::Full).
    #[inline]
    pub fn extend_from_slice(&mut self, src: &[T]) -> Result<(), crate::Error>
    where
        T: Clone,
    {
        let avail = N - self.len;
        if src.len() > avail {
            return Err(crate::Error::Full);
        }

        // `len` is bumped per element so an unwinding `clone` leaves the
        // vector valid with the elements appended so far.
        for item in src {
            self.buf[self.len].write(item.clone());
            self.len += 1;
        }

        Ok(())
    }

    /// Appends clones of as many elements from `src` as will fit and returns
    /// the count appended.
    #[inline]
    pub fn extend_from_slice_truncated(&mut self, src: &[T]) -> usize
    where
        T: Clone,
    {
        let avail = N - self.len;
        let take = avail.min(src.len());

        for item in src.iter().take(take) {
            self.buf[self.len].write(item.clone());
            self.len += 1;
        }

        take
    }

    /// Tries to extend `self` from an iterator **without truncation**.
    ///
    /// Semantics:
    /// - All-or-nothing:
    ///   - If the iterator yields at most `spare_capacity()` items, they are
    ///     appended in order and `Ok(())` is returned.
    ///   - If it yields more than `spare_capacity()`, this returns
    ///     `Err(Error::Full)` and `self` is left unchanged.
    /// - The source iterator may be partially consumed on error, and the
    ///   items buffered before the overflow are dropped.
    #[inline]
    pub fn try_extend_from_iter<I: IntoIterator<Item = T>>(
        &mut self,
        iter: I,
    ) -> Result<(), crate::Error> {
        let spare = N - self.len;

        // Stage into a temporary so `self` is unchanged on error.
        let mut tmp: BoundedStackVec<T, N> = BoundedStackVec::new();
        for item in iter {
            if tmp.len() == spare {
                return Err(crate::Error::Full);
            }
            tmp.push(item)?;
        }

        for item in tmp {
            // Cannot fail: tmp.len() <= spare was enforced above.
            self.push(item)?;
        }
        Ok(())
    }
}
