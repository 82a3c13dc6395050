// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for contig.

use thiserror::Error;

/// Errors from checked `DynArray` accessors.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum ArrayError {
    /// The requested index lies at or beyond the live length of the
    /// array.
    #[error("index {index} out of range (len {len})")]
    IndexOutOfRange {
        /// The index that was requested.
        index: usize,
        /// The live length of the array at the time of the call.
        len: usize,
    },
}
