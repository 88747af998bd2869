// This file is part of bounded-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::BoundedStackVec};

impl<T: Clone, const N: usize> TryFrom<&[T]> for BoundedStackVec<T, N> {
    type Error = Error;
    fn try_from(src: &[T]) -> Result<Self, Error> {
        let mut v = Self::new();
        v.extend_from_slice(src)?;
        Ok(v)
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::BoundedStackVec;

    #[test]
    fn test_try_from_slice_within_capacity() {
        let v = <BoundedStackVec<u8, 4>>::try_from(&[1, 2, 3][..]).unwrap();
        assert_eq!(v.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_try_from_slice_over_capacity_errors() {
        let err = <BoundedStackVec<u8, 2>>::try_from(&[1, 2, 3][..]).unwrap_err();
        assert_eq!(err, crate::Error::Full);
    }
}
