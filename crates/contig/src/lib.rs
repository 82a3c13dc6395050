// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Growable contiguous array with value semantics and manual storage
//! management.
//!
//! `DynArray<T>` owns exactly one exclusively held heap buffer
//! (see `contig-buffer`) and layers a logical length, amortized-growth
//! append, positional insert/erase, and copy-and-swap cloning on top of
//! it.
//!
//! # Core Guarantees
//!
//! - **`len <= capacity` at all times**; capacity describes only the
//!   backing allocation and is never reduced by shrinking operations.
//! - **Strong copy safety**: assignment-style copying builds the full
//!   copy in isolation and swaps it in; a failed element clone leaves the
//!   destination exactly as it was.
//! - **No leaks**: every allocation is owned by exactly one buffer, on
//!   every path including mid-growth panics.
//! - **Amortized O(1) append** under the growth policy
//!   `max(2 * capacity, slots needed)`.
//!
//! # Construction Forms
//!
//! ```rust
//! use contig::{CapacityRequest, DynArray};
//!
//! // Empty, no allocation.
//! let empty = DynArray::<u32>::new();
//! assert_eq!((empty.len(), empty.capacity()), (0, 0));
//!
//! // n default-valued elements.
//! let zeroes = DynArray::<u32>::with_size(3);
//! assert_eq!(zeroes.as_slice(), &[0, 0, 0]);
//!
//! // n clones of a value.
//! let sevens = DynArray::filled(3, 7u32);
//! assert_eq!(sevens.as_slice(), &[7, 7, 7]);
//!
//! // A literal sequence, moved in.
//! let literal = DynArray::from([1u32, 2, 3]);
//! assert_eq!(literal.as_slice(), &[1, 2, 3]);
//!
//! // Pre-reserved and empty.
//! let reserved = DynArray::<u32>::with_reserved(CapacityRequest::new(10));
//! assert_eq!((reserved.len(), reserved.capacity()), (0, 10));
//! ```
//!
//! # Element Access
//!
//! Three paths, from safest to fastest:
//!
//! ```rust
//! use contig::{ArrayError, DynArray};
//!
//! let array = DynArray::from([10u32, 20, 30]);
//!
//! // Checked: out-of-range is a recoverable error.
//! assert_eq!(array.at(1), Ok(&20));
//! assert_eq!(
//!     array.at(3),
//!     Err(ArrayError::IndexOutOfRange { index: 3, len: 3 })
//! );
//!
//! // Panicking slice indexing through Deref.
//! assert_eq!(array[1], 20);
//!
//! // Unchecked: zero-cost, caller guarantees index < len.
//! let last = unsafe { array.get_unchecked(2) };
//! assert_eq!(*last, 30);
//! ```
//!
//! # Ordering
//!
//! Arrays compare lexicographically over their element sequences:
//!
//! ```rust
//! use contig::DynArray;
//!
//! assert!(DynArray::from([1, 2, 3]) < DynArray::from([1, 2, 4]));
//! assert!(DynArray::from([1, 2]) < DynArray::from([1, 2, 3]));
//! assert!(DynArray::<i32>::new() < DynArray::from([1]));
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
mod tests;

mod capacity;
mod dyn_array;
mod error;

pub use capacity::CapacityRequest;
pub use dyn_array::DynArray;
pub use error::ArrayError;
