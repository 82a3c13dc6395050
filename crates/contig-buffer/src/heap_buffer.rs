// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HeapBuffer - move-only owner of one contiguous heap allocation.
//!
//! Invariant: `capacity == 0` iff the pointer is the dangling sentinel,
//! and every slot in `[0, capacity)` is initialized.

use alloc::alloc::{alloc, dealloc, handle_alloc_error};
use core::alloc::Layout;
use core::mem;
use core::ptr::{self, NonNull};

/// A move-only wrapper around a single contiguous heap allocation of
/// `capacity` element slots, all of them initialized.
///
/// The buffer has no notion of a logical length; it owns storage, not a
/// sequence. See the crate docs for the ownership model.
pub struct HeapBuffer<T> {
    ptr: NonNull<T>,
    capacity: usize,
}

/// Drops the initialized prefix and frees the allocation if a default
/// fill panics partway through.
struct FillGuard<T> {
    ptr: NonNull<T>,
    layout: Layout,
    initialized: usize,
}

impl<T> Drop for FillGuard<T> {
    fn drop(&mut self) {
        unsafe {
            // SAFETY: slots [0, initialized) were written by the fill
            // loop; the allocation came from `alloc` with this layout.
            for offset in 0..self.initialized {
                ptr::drop_in_place(self.ptr.as_ptr().add(offset));
            }
            if self.layout.size() > 0 {
                dealloc(self.ptr.as_ptr().cast(), self.layout);
            }
        }
    }
}

impl<T> HeapBuffer<T> {
    /// Creates an empty buffer owning no allocation.
    pub const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            capacity: 0,
        }
    }

    fn layout_for(capacity: usize) -> Layout {
        match Layout::array::<T>(capacity) {
            Ok(layout) => layout,
            Err(_) => panic!("capacity overflow"),
        }
    }

    /// Allocates storage for exactly `capacity` elements and
    /// default-initializes every slot.
    ///
    /// A `capacity` of zero yields the empty buffer without allocating.
    /// Allocation failure is fatal via [`handle_alloc_error`]; a
    /// `T::default()` panic partway through the fill drops the
    /// initialized prefix and frees the allocation before propagating.
    pub fn allocate(capacity: usize) -> Self
    where
        T: Default,
    {
        if capacity == 0 {
            return Self::new();
        }

        let layout = Self::layout_for(capacity);

        let ptr = if layout.size() > 0 {
            // SAFETY: layout has non-zero size.
            let raw = unsafe { alloc(layout) };
            match NonNull::new(raw.cast::<T>()) {
                Some(ptr) => ptr,
                None => handle_alloc_error(layout),
            }
        } else {
            // Zero-sized element type: slots need no storage.
            NonNull::dangling()
        };

        let mut guard = FillGuard {
            ptr,
            layout,
            initialized: 0,
        };

        for offset in 0..capacity {
            unsafe {
                // SAFETY: offset < capacity, so the slot lies within the
                // allocation (or is a valid zero-sized write).
                ptr::write(ptr.as_ptr().add(offset), T::default());
            }
            guard.initialized = offset + 1;
        }

        mem::forget(guard);

        Self { ptr, capacity }
    }

    /// Adopts an allocation the caller owns, typically one obtained from
    /// [`HeapBuffer::release`].
    ///
    /// # Safety
    ///
    /// - `ptr` must point to an allocation of exactly `capacity` slots of
    ///   `T`, laid out as by [`HeapBuffer::allocate`], with every slot
    ///   initialized.
    /// - No other owner of the allocation may exist; the new buffer
    ///   assumes sole responsibility for dropping and freeing it.
    /// - If `capacity` is zero, `ptr` must be the dangling sentinel.
    pub unsafe fn from_raw_parts(ptr: NonNull<T>, capacity: usize) -> Self {
        Self { ptr, capacity }
    }

    /// Relinquishes ownership, returning the raw parts and resetting the
    /// buffer to empty.
    ///
    /// The caller becomes responsible for the allocation; reconstructing
    /// a buffer with [`HeapBuffer::from_raw_parts`] is the usual way to
    /// eventually drop and free it.
    pub fn release(&mut self) -> (NonNull<T>, usize) {
        let parts = (self.ptr, self.capacity);
        self.ptr = NonNull::dangling();
        self.capacity = 0;
        parts
    }

    /// Exchanges the owned allocation with `other` in constant time.
    ///
    /// Never allocates, never fails.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Returns the number of element slots in the owned allocation.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if the buffer owns no slots.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.capacity == 0
    }

    /// Returns a view over all `capacity` slots.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: every slot in [0, capacity) is initialized; the pointer
        // is dangling only when capacity is 0, which is a valid empty
        // slice.
        unsafe { core::slice::from_raw_parts(self.ptr.as_ptr(), self.capacity) }
    }

    /// Returns a mutable view over all `capacity` slots.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as for `as_slice`, plus exclusive access through &mut.
        unsafe { core::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.capacity) }
    }

    /// Returns a reference to the slot at `offset` without a bounds
    /// check.
    ///
    /// # Safety
    ///
    /// `offset < capacity` is a caller obligation; violating it is
    /// undefined behavior.
    #[inline]
    pub unsafe fn get_unchecked(&self, offset: usize) -> &T {
        debug_assert!(offset < self.capacity);
        // SAFETY: caller guarantees offset < capacity, and the slot is
        // initialized by the buffer invariant.
        unsafe { &*self.ptr.as_ptr().add(offset) }
    }

    /// Returns a mutable reference to the slot at `offset` without a
    /// bounds check.
    ///
    /// # Safety
    ///
    /// `offset < capacity` is a caller obligation; violating it is
    /// undefined behavior.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, offset: usize) -> &mut T {
        debug_assert!(offset < self.capacity);
        // SAFETY: as for `get_unchecked`, plus exclusive access through
        // &mut.
        unsafe { &mut *self.ptr.as_ptr().add(offset) }
    }
}

impl<T> Drop for HeapBuffer<T> {
    fn drop(&mut self) {
        if self.capacity == 0 {
            return;
        }

        let layout = Self::layout_for(self.capacity);

        unsafe {
            // SAFETY: every slot in [0, capacity) is initialized and
            // owned exclusively by this buffer.
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.ptr.as_ptr(),
                self.capacity,
            ));
            if layout.size() > 0 {
                dealloc(self.ptr.as_ptr().cast(), layout);
            }
        }
    }
}

impl<T> Default for HeapBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Safety: HeapBuffer exclusively owns its allocation; sending it transfers
// that ownership, and shared access only hands out &T.
unsafe impl<T: Send> Send for HeapBuffer<T> {}
unsafe impl<T: Sync> Sync for HeapBuffer<T> {}

impl<T> core::fmt::Debug for HeapBuffer<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HeapBuffer")
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}
