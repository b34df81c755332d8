// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — Brine Sodium Layer
// Licensed under the MIT License

use std::alloc::{alloc_zeroed, dealloc, Layout};
use std::ptr::NonNull;

use crate::check;
use crate::types::{BrineError, BrineResult};

// libsodium declares its incremental states with CRYPTO_ALIGN(64)
// (the BLAKE2b state is the strictest); every region uses that alignment.
const STATE_ALIGN: usize = 64;

/// A fixed-size raw memory region whose internal layout is owned by libsodium.
///
/// The blob is allocated zeroed at the size the algorithm declares via its
/// `*_statebytes()` query, passed by pointer into every init/update/finalize
/// call, and never interpreted by this layer. On drop the region is wiped
/// with `sodium_memzero` before being freed, so spent hash and MAC states do
/// not linger in the allocator.
pub struct StateBlob {
    ptr: NonNull<u8>,
    len: usize,
}

impl StateBlob {
    /// Allocates a zeroed region of `len` bytes with the alignment libsodium
    /// states require.
    ///
    /// # Errors
    ///
    /// Returns [`BrineError::Native`] if the allocation fails.
    pub fn new(len: usize) -> BrineResult<Self> {
        check::min_len("state length", len, 1)?;
        let layout = Layout::from_size_align(len, STATE_ALIGN)
            .map_err(|_| BrineError::Native { op: "state layout" })?;
        // SAFETY: layout has non-zero size, checked above.
        let raw = unsafe { alloc_zeroed(layout) };
        let ptr = NonNull::new(raw).ok_or(BrineError::Native { op: "state alloc" })?;
        Ok(Self { ptr, len })
    }

    /// Size of the region in bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the region is empty (never the case for a live blob).
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Raw pointer for passing into a native call that reads the state.
    pub fn as_ptr(&self) -> *const u8 {
        self.ptr.as_ptr()
    }

    /// Raw pointer for passing into a native call that mutates the state.
    pub fn as_mut_ptr(&mut self) -> *mut u8 {
        self.ptr.as_ptr()
    }

    /// Deep-copies the region so a streaming computation can be resumed from
    /// a checkpoint.
    ///
    /// # Errors
    ///
    /// Returns [`BrineError::Native`] if the allocation for the copy fails.
    pub fn duplicate(&self) -> BrineResult<Self> {
        let mut copy = Self::new(self.len)?;
        // SAFETY: Both regions are valid, distinct allocations of `len` bytes.
        unsafe {
            std::ptr::copy_nonoverlapping(self.ptr.as_ptr(), copy.as_mut_ptr(), self.len);
        }
        Ok(copy)
    }
}

impl Drop for StateBlob {
    fn drop(&mut self) {
        // SAFETY: ptr/len describe the live allocation made in `new`; the
        // layout matches the one it was allocated with.
        unsafe {
            libsodium_sys::sodium_memzero(self.ptr.as_ptr() as *mut _, self.len);
            let layout = Layout::from_size_align_unchecked(self.len, STATE_ALIGN);
            dealloc(self.ptr.as_ptr(), layout);
        }
    }
}

// SAFETY: StateBlob uniquely owns its allocation; moving it between threads
// moves the only handle to the region.
unsafe impl Send for StateBlob {}
