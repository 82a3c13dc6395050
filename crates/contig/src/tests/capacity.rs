// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{CapacityRequest, DynArray};

// =============================================================================
// new() / get()
// =============================================================================

#[test]
fn test_new_and_get() {
    let request = CapacityRequest::new(32);

    assert_eq!(request.get(), 32);
}

#[test]
fn test_is_copy() {
    let request = CapacityRequest::new(8);
    let duplicate = request;

    assert_eq!(request, duplicate);
    assert_eq!(request.get(), 8);
}

// =============================================================================
// Selecting the pre-reserving constructor
// =============================================================================

#[test]
fn test_selects_pre_reserved_construction() {
    let sized = DynArray::<u32>::with_size(10);
    let reserved = DynArray::<u32>::with_reserved(CapacityRequest::new(10));

    assert_eq!(sized.len(), 10);
    assert_eq!(sized.capacity(), 10);

    assert_eq!(reserved.len(), 0);
    assert_eq!(reserved.capacity(), 10);
}
