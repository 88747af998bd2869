// This file is part of bounded-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `BoundedStackVec` type and its inherent API.
//!
//! `BoundedStackVec<T, N>` is a fixed-capacity vector for arbitrary element
//! types. It stores elements inline in a fixed-size backing buffer and tracks
//! a logical length. Methods generally mirror slice/vector semantics, with
//! explicit capacity checks and fallible variants where appropriate.
//!
//! No heap allocations are performed.

mod as_ptr;
mod assign;
mod drain;
mod extend;
mod from;
mod insert;
mod into_array;
mod new;
mod pop;
mod push;
mod remove;
mod retain;
mod slice;
mod split_off;
mod truncate;
mod try_from;
mod try_from_iter;

pub use drain::Drain;

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    fmt,
    hash::{Hash, Hasher},
    mem::MaybeUninit,
    ops::{Deref, DerefMut},
};

/// A fixed-capacity, stack-allocated vector with full drop semantics.
///
/// `BoundedStackVec<T, N>` stores its elements inline in a buffer of capacity
/// `N` and tracks a logical length `len ∈ 0..=N`. Conceptually, it is a
/// slice-like view into a fixed-capacity backing array:
///
/// - capacity is known at compile time (`N`);
/// - the buffer is stored inline (typically on the stack);
/// - elements may be any type, including ones with destructors;
/// - many methods mirror `Vec`/slice semantics where they make sense;
/// - no heap allocations are performed.
///
/// # Layout and invariants
///
/// Internally, `BoundedStackVec<T, N>` maintains:
///
/// - a backing buffer `[MaybeUninit<T>; N]`; and
/// - a logical length `len` with `0 <= len <= N`.
///
/// Only the prefix `buf[..len]` holds live, initialized elements, and it is
/// the only part visible through safe APIs. Methods such as [`as_slice`],
/// [`as_mut_slice`], indexing, and iteration are all restricted to this
/// prefix. Elements are constructed in place by `push`/`insert` and dropped
/// in place by `pop`/`remove`/`clear`/`truncate` and the container's own
/// `Drop`, so every element that was ever live is dropped exactly once.
///
/// [`as_slice`]: BoundedStackVec::as_slice
/// [`as_mut_slice`]: BoundedStackVec::as_mut_slice
///
/// # Cross-capacity operations
///
/// Two instantiations `BoundedStackVec<T, N>` and `BoundedStackVec<T, M>` are
/// unrelated types, but their *contents* interoperate: construction
/// ([`TryFrom<&BoundedStackVec<T, M>>`](TryFrom)), assignment
/// ([`assign_from`](BoundedStackVec::assign_from)), and exchange
/// ([`try_swap`](crate::try_swap)) are feasible whenever the source's runtime
/// length fits the destination's capacity, and fail with
/// [`Error::Full`](crate::Error::Full) otherwise — checked *before* any
/// destructive work, so a rejected operation changes nothing.
///
/// # Complexity characteristics
///
/// - The type size is roughly `N * size_of::<T>() + O(1)`.
/// - Moving a `BoundedStackVec<T, N>` moves the entire backing buffer, not
///   just the initialized prefix. This is `O(N)` in the capacity, *not* in
///   `len`, so you generally want to pass it by reference in hot code.
/// - `push`/`pop` are `O(1)`; `insert`/`remove`/`drain` are `O(len)` due to
///   the order-preserving shift; `clear`/`truncate`/`Drop` run the removed
///   elements' destructors.
///
/// # Fallible vs truncating operations
///
/// Capacity-sensitive operations are fallible by default: they return
/// [`Error::Full`](crate::Error::Full) when the operation would exceed
/// capacity and leave the vector unchanged ([`push`](BoundedStackVec::push),
/// [`insert`](BoundedStackVec::insert),
/// [`extend_from_slice`](BoundedStackVec::extend_from_slice),
/// [`resize`](BoundedStackVec::resize), [`TryFrom<&[T]>`](TryFrom),
/// [`try_from_iter`](BoundedStackVec::try_from_iter),
/// [`try_extend_from_iter`](BoundedStackVec::try_extend_from_iter),
/// [`assign_from`](BoundedStackVec::assign_from)).
///
/// The truncating entry points are explicitly named
/// ([`extend_from_slice_truncated`](BoundedStackVec::extend_from_slice_truncated),
/// [`from_slice_truncated`](BoundedStackVec::from_slice_truncated)) or follow
/// established std conventions ([`FromIterator`]/[`Extend`] take the first `N`
/// elements and stop consuming the iterator).
///
/// # Examples
///
/// ```rust
/// use bounded_stack_vec::BoundedStackVec;
///
/// let mut v: BoundedStackVec<String, 4> = BoundedStackVec::new();
/// v.push("a".to_string()).unwrap();
/// v.push("b".to_string()).unwrap();
/// assert_eq!(v.len(), 2);
/// assert_eq!(v[0], "a");
/// v.clear(); // both strings are dropped here
/// assert!(v.is_empty());
/// ```
///
/// # Limitations and trade-offs
///
/// - Moving a `BoundedStackVec` is `O(N)` in the capacity, not in the current
///   length.
/// - Capacity is compile-time fixed. If you need dynamic growth, prefer `Vec`
///   (in `std`) or another growable container.
/// - Assignment clones the source elements; there is no move-optimized
///   assignment between containers.
///
/// For a higher-level overview and feature discussion, see the crate-level
/// documentation in [`lib`](crate).
pub struct BoundedStackVec<T, const N: usize> {
    // Invariants:
    // - `0 <= len <= N` always holds.
    // - Elements in `buf[..len]` are initialized `T` values.
    // - Elements in `buf[len..N]` are logically uninitialized and must never
    //   be read as `T` or dropped.
    // - All methods maintain these invariants, including on unwind.
    pub(crate) buf: [MaybeUninit<T>; N],
    pub(crate) len: usize,
}

impl<T, const N: usize> BoundedStackVec<T, N> {
    /// The fixed capacity of this vector.
    pub const CAPACITY: usize = N;

    /// Returns the capacity of this vector (always `N`).
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns the current logical length (`0..=N`).
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if `len == N`.
    #[inline]
    pub const fn is_full(&self) -> bool {
        self.len == N
    }

    /// Returns `N - len`, the number of additional elements that can be pushed.
    #[inline]
    pub const fn spare_capacity(&self) -> usize {
        N - self.len
    }

    /// Returns `Some(&T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        self.as_slice().get(i)
    }

    /// Returns `Some(&mut T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(i)
    }

    // iterators
    /// Shorthand for `self.as_slice().iter()`.
    ///
    /// The returned iterator is double-ended, so `v.iter().rev()` gives the
    /// reverse sequence.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Shorthand for `self.as_mut_slice().iter_mut()`.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Returns the first element, if any.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Returns the last element, if any.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Returns the first element mutably, if any.
    #[inline]
    pub fn first_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().first_mut()
    }

    /// Returns the last element mutably, if any.
    #[inline]
    pub fn last_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }

    /// Returns `true` if the vector contains `x` (linear search on the live prefix).
    #[inline]
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().contains(x)
    }
}

impl<T, const N: usize> Drop for BoundedStackVec<T, N> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone, const N: usize> Clone for BoundedStackVec<T, N> {
    fn clone(&self) -> Self {
        let mut out = Self::new();
        for item in self.as_slice() {
            // Cannot overflow: `out` has the same capacity as `self`.
            // `len` is bumped per element so an unwinding `clone` leaves
            // `out` valid with the elements cloned so far.
            out.buf[out.len].write(item.clone());
            out.len += 1;
        }
        out
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for BoundedStackVec<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedStackVec")
            .field("len", &self.len)
            .field("capacity", &N)
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T: PartialEq, const N: usize> PartialEq for BoundedStackVec<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: Eq, const N: usize> Eq for BoundedStackVec<T, N> {}
impl<T: Ord, const N: usize> Ord for BoundedStackVec<T, N> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}
impl<T: PartialOrd, const N: usize> PartialOrd for BoundedStackVec<T, N> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}
impl<T: Hash, const N: usize> Hash for BoundedStackVec<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T, const N: usize> Deref for BoundedStackVec<T, N> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
impl<T, const N: usize> DerefMut for BoundedStackVec<T, N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T, const N: usize> AsRef<[T]> for BoundedStackVec<T, N> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T, const N: usize> AsMut<[T]> for BoundedStackVec<T, N> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

// Borrow ergonomics (treat as a slice)
impl<T, const N: usize> Borrow<[T]> for BoundedStackVec<T, N> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T, const N: usize> BorrowMut<[T]> for BoundedStackVec<T, N> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

#[cfg(test)]
pub(crate) mod test_probe {
    //! An observably constructed/destroyed element type for drop-accounting
    //! tests. `Probe` is deliberately not `Copy`.

    use core::cell::Cell;

    /// Counts clone-constructions and drops through shared cells.
    #[derive(Debug)]
    pub(crate) struct Probe<'a> {
        pub(crate) value: i32,
        pub(crate) clones: &'a Cell<usize>,
        pub(crate) drops: &'a Cell<usize>,
    }

    impl<'a> Probe<'a> {
        pub(crate) fn new(value: i32, clones: &'a Cell<usize>, drops: &'a Cell<usize>) -> Self {
            Probe {
                value,
                clones,
                drops,
            }
        }
    }

    impl Clone for Probe<'_> {
        fn clone(&self) -> Self {
            self.clones.set(self.clones.get() + 1);
            Probe {
                value: self.value,
                clones: self.clones,
                drops: self.drops,
            }
        }
    }

    impl Drop for Probe<'_> {
        fn drop(&mut self) {
            self.drops.set(self.drops.get() + 1);
        }
    }

    impl PartialEq for Probe<'_> {
        fn eq(&self, other: &Self) -> bool {
            self.value == other.value
        }
    }
    impl Eq for Probe<'_> {}
}
