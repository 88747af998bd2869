// This file is part of bounded-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `bounded-stack-vec`
//!
//! A `no_std`, fixed-capacity, stack-based vector type with full drop
//! semantics and **cross-capacity assignment**.
//!
//! The core type, [`BoundedStackVec<T, N>`], stores up to `N` elements inline
//! and tracks a logical length `len ∈ 0..=N`. It provides a small, predictable,
//! allocation-free buffer with familiar slice/`Vec`-like semantics where they
//! make sense, for **any** element type — including types that own resources
//! and need their destructors run.
//!
//! ## When to use this crate
//!
//! This crate may be useful when:
//!
//! - You are in a `no_std` or embedded environment.
//! - You know capacities at compile time.
//! - You want predictable, allocation-free behavior and can work with a fixed
//!   maximum length.
//! - You need to copy contents between buffers of *different* compile-time
//!   capacities, checked at runtime against the actual element count.
//!
//! It may not be the best fit if:
//!
//! - You need very large capacities or large element types (the whole buffer
//!   lives inline, so moving a `BoundedStackVec` moves `N` slots).
//! - You need dynamic growth — prefer `Vec` or a small-vec type.
//!
//! ## Storage and safety
//!
//! Storage is `[MaybeUninit<T>; N]` plus a length. Only the prefix
//! `buf[..len]` is ever treated as initialized; elements are written in place
//! on push/insert and dropped in place on pop/remove/clear/drop. A small
//! amount of internal `unsafe` maintains this invariant; the **public API is
//! fully safe**.
//!
//! ## High-level semantics
//!
//! - Capacity is fixed at compile time (`BoundedStackVec::<T, N>::CAPACITY == N`).
//! - Length is a logical prefix: only indices `< len` hold live elements.
//! - No heap allocations are performed.
//! - Capacity-sensitive operations are **fallible**: they return
//!   [`Error::Full`] on overflow and leave the vector unchanged
//!   (e.g. [`BoundedStackVec::push`], [`BoundedStackVec::insert`],
//!   [`BoundedStackVec::extend_from_slice`], [`BoundedStackVec::assign_from`],
//!   [`try_swap`]). The only truncating entry points are the standard
//!   [`FromIterator`]/[`Extend`] impls and the explicitly named
//!   [`extend_from_slice_truncated`](BoundedStackVec::extend_from_slice_truncated).
//!
//! ## Cross-capacity operations
//!
//! A `BoundedStackVec<T, N>` can be constructed from, assigned from, or
//! swapped with a `BoundedStackVec<T, M>` for any `M`, as long as the runtime
//! element count fits the destination capacity:
//!
//! - construction: [`TryFrom<&BoundedStackVec<T, M>>`](TryFrom);
//! - assignment: [`BoundedStackVec::assign_from`] /
//!   [`BoundedStackVec::assign_from_slice`];
//! - exchange: [`try_swap`].
//!
//! The capacity check always happens **before** any element of the destination
//! is torn down, so a rejected operation leaves both sides unchanged.
//!
//! ## Range and indexing behavior
//!
//! `BoundedStackVec` follows Rust slice and `Vec` semantics for all indexing
//! and range-based operations:
//!
//! - Indexing (`v[i]`, `v[start..end]`, …) **panics** on out-of-bounds or
//!   inverted ranges, exactly like built-in slices. Use
//!   [`get`](BoundedStackVec::get) / [`get_mut`](BoundedStackVec::get_mut)
//!   for non-panicking access.
//! - [`drain`](BoundedStackVec::drain) behaves like `Vec::drain`: invalid
//!   ranges panic, `start == end` yields an empty iterator, valid ranges
//!   remove the elements immediately and shift the tail left.
//!
//! Only range/index errors panic. Capacity failures never panic: they return
//! [`Error::Full`].
//!
//! ## Features
//!
//! - `serde` — enables `Serialize` / `Deserialize` for `BoundedStackVec<T, N>`
//!   as a plain sequence, rejecting inputs longer than `N`.
//!
//! ## Example
//!
//! ```rust
//! use bounded_stack_vec::{try_swap, BoundedStackVec};
//!
//! let mut a: BoundedStackVec<i32, 5> = BoundedStackVec::new();
//! for x in [0, 1, 2, 3] {
//!     a.push(x).unwrap();
//! }
//! a.as_mut_slice().sort_unstable();
//! a.insert(1, 4).unwrap();
//! assert_eq!(a.as_slice(), &[0, 4, 1, 2, 3]);
//!
//! let mut b: BoundedStackVec<i32, 6> = BoundedStackVec::new();
//! b.assign_from(&a).unwrap();
//! b.push(1).unwrap();
//! assert_eq!(b.as_slice(), &[0, 4, 1, 2, 3, 1]);
//!
//! // An exchange must fit both ways: six elements cannot enter a
//! // capacity-5 vector, so the swap is rejected and nothing changes.
//! assert!(try_swap(&mut a, &mut b).is_err());
//! assert_eq!(b.len(), 6);
//!
//! b.pop();
//! try_swap(&mut a, &mut b).unwrap();
//! ```
//!
//! See [`BoundedStackVec`] for detailed behavior, including iterator behavior
//! and complexity notes.

#![cfg_attr(not(test), no_std)]

#[cfg(test)]
extern crate alloc;

// Modules
mod error;
mod index;
mod iter;
#[cfg(feature = "serde")]
mod serde;
mod swap;
mod vec;

// Public exports (crate API surface)
pub use error::Error;
pub use iter::IntoIter;
pub use swap::try_swap;
pub use vec::{BoundedStackVec, Drain};
