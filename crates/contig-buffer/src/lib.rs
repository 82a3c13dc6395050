// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Exclusive-ownership contiguous heap buffers.
//!
//! This crate provides [`HeapBuffer`], a move-only wrapper around a single
//! contiguous heap allocation holding a fixed number of element slots.
//!
//! # Ownership Model
//!
//! Exactly one `HeapBuffer` owns a given allocation at any time:
//!
//! - No `Clone` impl exists; ownership transfers only by move.
//! - [`HeapBuffer::release`] hands the raw allocation to the caller and
//!   resets the buffer to empty.
//! - [`HeapBuffer::from_raw_parts`] adopts an allocation the caller owns.
//! - Dropping a buffer drops every slot and frees the allocation.
//!
//! # Slot Invariant
//!
//! Every slot in `[0, capacity)` holds an initialized value at all times.
//! [`HeapBuffer::allocate`] default-initializes the whole allocation, so
//! the full-capacity slice views ([`HeapBuffer::as_slice`],
//! [`HeapBuffer::as_mut_slice`]) are safe to hand out. Layers above decide
//! which slots are logically live; the buffer itself has no notion of a
//! logical length.
//!
//! # Example
//!
//! ```rust
//! use contig_buffer::HeapBuffer;
//!
//! let mut buffer = HeapBuffer::<u32>::allocate(4);
//!
//! assert_eq!(buffer.capacity(), 4);
//! assert_eq!(buffer.as_slice(), &[0, 0, 0, 0]);
//!
//! buffer.as_mut_slice()[0] = 42;
//! assert_eq!(buffer.as_slice()[0], 42);
//!
//! // Allocation is freed on drop
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod heap_buffer;

pub use heap_buffer::HeapBuffer;
