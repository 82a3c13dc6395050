// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! CapacityRequest - tag value selecting pre-reserving construction.

/// An immutable capacity value used to select the pre-reserving
/// constructor [`DynArray::with_reserved`] over the sized-fill
/// constructor [`DynArray::with_size`].
///
/// [`DynArray::with_reserved`]: crate::DynArray::with_reserved
/// [`DynArray::with_size`]: crate::DynArray::with_size
///
/// # Example
///
/// ```rust
/// use contig::{CapacityRequest, DynArray};
///
/// let array = DynArray::<u32>::with_reserved(CapacityRequest::new(10));
///
/// assert_eq!(array.len(), 0);
/// assert_eq!(array.capacity(), 10);
/// ```
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct CapacityRequest(usize);

impl CapacityRequest {
    /// Creates a request for the given number of element slots.
    pub const fn new(capacity: usize) -> Self {
        Self(capacity)
    }

    /// Returns the requested number of element slots.
    pub const fn get(self) -> usize {
        self.0
    }
}
