// This file is part of bounded-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::BoundedStackVec};

// Core imports
use core::ptr;

impl<T, const N: usize> BoundedStackVec<T, N> {
    /// Inserts `value` at `index`, shifting `[index..len)` one slot to the
    /// right (order-preserving, O(len − index)).
    ///
    /// - Returns [`Error::OutOfBounds`] if `index > len`.
    /// - Returns [`Error::Full`] if at capacity.
    ///
    /// Both checks happen before any element is moved, so on `Err` the
    /// vector is unchanged.
    #[inline]
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), Error> {
        if index > self.len {
            return Err(Error::OutOfBounds);
        }
        if self.len == N {
            return Err(Error::Full);
        }
        let len = self.len;

        // SAFETY: `index <= len < N`. The shift moves the initialized range
        // `buf[index..len]` to `buf[index + 1..len + 1]`, which stays within
        // the buffer. `ptr::copy` handles the overlap. Afterwards slot
        // `index` is logically uninitialized (its old value now lives one
        // slot to the right), so writing `value` there initializes exactly
        // the range `buf[..len + 1]`. No step in between can unwind.
        unsafe {
            let p = self.as_mut_ptr().add(index);
            ptr::copy(p, p.add(1), len - index);
            ptr::write(p, value);
        }

        self.len = len + 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::BoundedStackVec;

    #[test]
    fn test_insert_at_bounds_and_shift_correctly() {
        let mut v: BoundedStackVec<i32, 4> = BoundedStackVec::new();
        v.insert(0, 1).unwrap(); // insert at front into empty
        v.insert(1, 3).unwrap(); // tail
        v.insert(1, 2).unwrap(); // middle, shifts right
        assert_eq!(v.as_slice(), &[1, 2, 3]);
        v.insert(3, 4).unwrap(); // exactly at len
        assert_eq!(v.as_slice(), &[1, 2, 3, 4]);
        assert_eq!(v.insert(0, 9), Err(crate::Error::Full)); // full
    }

    #[test]
    fn test_insert_err_is_noop() {
        let mut v: BoundedStackVec<i32, 2> = BoundedStackVec::try_from(&[10, 20][..]).unwrap();
        assert_eq!(v.insert(3, 99), Err(crate::Error::OutOfBounds));
        assert_eq!(v.as_slice(), &[10, 20]);
        assert_eq!(v.insert(0, 1), Err(crate::Error::Full));
        assert_eq!(v.as_slice(), &[10, 20]);
    }

    #[test]
    fn test_insert_preserves_relative_order_of_shifted_tail() {
        let mut v: BoundedStackVec<i32, 6> = BoundedStackVec::try_from(&[0, 1, 2, 3][..]).unwrap();
        v.insert(1, 4).unwrap();
        assert_eq!(v.as_slice(), &[0, 4, 1, 2, 3]);
        assert_eq!(v.len(), 5);
    }

    #[test]
    fn test_insert_non_copy_elements() {
        use alloc::string::{String, ToString};

        let mut v: BoundedStackVec<String, 4> = BoundedStackVec::new();
        v.push("a".to_string()).unwrap();
        v.push("c".to_string()).unwrap();
        v.insert(1, "b".to_string()).unwrap();
        assert_eq!(v.as_slice(), &["a", "b", "c"]);
    }
}
