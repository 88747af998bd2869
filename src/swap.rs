// This file is part of bounded-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Content exchange between vectors of possibly different capacities.

// Crate imports
use crate::{error::Error, vec::BoundedStackVec};

/// Exchanges the contents of two vectors holding the same element type but
/// possibly different capacities.
///
/// Feasible iff each side's capacity can hold the other's current length:
/// `a.len() <= M` and `b.len() <= N`. Both checks happen **before** either
/// side is modified, so on [`Error::Full`] both vectors are unchanged.
///
/// This is expressed purely through the clone/assign contract: a temporary
/// clone of `a`, then `b`'s elements are assigned into `a` and the temporary
/// is assigned into `b`. Same-capacity vectors can use `core::mem::swap`
/// instead, which moves the buffers and never fails.
///
/// # Examples
/// ```
/// # use bounded_stack_vec::{try_swap, BoundedStackVec};
/// let mut a: BoundedStackVec<i32, 6> = BoundedStackVec::try_from(&[1, 2, 3][..]).unwrap();
/// let mut b: BoundedStackVec<i32, 5> = BoundedStackVec::try_from(&[9][..]).unwrap();
/// try_swap(&mut a, &mut b).unwrap();
/// assert_eq!(a.as_slice(), &[9]);
/// assert_eq!(b.as_slice(), &[1, 2, 3]);
/// ```
pub fn try_swap<T: Clone, const N: usize, const M: usize>(
    a: &mut BoundedStackVec<T, N>,
    b: &mut BoundedStackVec<T, M>,
) -> Result<(), Error> {
    if a.len() > M || b.len() > N {
        return Err(Error::Full);
    }

    // Cannot fail from here on: both lengths were checked against the
    // opposite capacity, and the temporary has `a`'s own capacity.
    let tmp: BoundedStackVec<T, N> = BoundedStackVec::try_from(&*a)?;
    a.assign_from(b)?;
    b.assign_from(&tmp)?;
    Ok(())
}
