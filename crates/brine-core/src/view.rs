// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — Brine Sodium Layer
// Licensed under the MIT License

//! Sized buffer views and boundary normalization.
//!
//! A [`BufView`] is a cursor over a caller-supplied byte region: a current
//! position, a limit, and a writability flag. Everything the layer consumes
//! is the window `[position, limit)`; its size must pass the contract checks
//! in [`crate::check`] before any native call sees the memory.
//!
//! Normalization is what makes a view safe to hand across the native
//! boundary. Rust slices are always contiguous and directly addressable, so
//! the read path is zero-copy; the write path additionally rejects read-only
//! views, and [`BufView::detach`] produces an owned private copy for callers
//! that need a stable scratch region (writes to a detached copy never
//! propagate back to the original).

use crate::check;
use crate::types::{BrineError, BrineResult, SecureBytes};

enum Repr<'a> {
    Ro(&'a [u8]),
    Rw(&'a mut [u8]),
}

impl Repr<'_> {
    fn len(&self) -> usize {
        match self {
            Repr::Ro(b) => b.len(),
            Repr::Rw(b) => b.len(),
        }
    }
}

/// A region of memory with a current position, a limit, and a writability flag.
///
/// Invariant: `position <= limit <= capacity`. The bytes available for
/// consumption are `limit - position`.
pub struct BufView<'a> {
    data: Repr<'a>,
    position: usize,
    limit: usize,
}

impl<'a> BufView<'a> {
    /// Wraps a read-only slice; position 0, limit at the end.
    pub fn from_slice(data: &'a [u8]) -> Self {
        let limit = data.len();
        Self {
            data: Repr::Ro(data),
            position: 0,
            limit,
        }
    }

    /// Wraps a writable slice; position 0, limit at the end.
    pub fn from_mut_slice(data: &'a mut [u8]) -> Self {
        let limit = data.len();
        Self {
            data: Repr::Rw(data),
            position: 0,
            limit,
        }
    }

    /// Wraps the `[offset, offset + len)` window of a read-only slice.
    ///
    /// # Errors
    ///
    /// Returns [`BrineError::OffsetWindow`] if the window does not fit.
    pub fn window(data: &'a [u8], offset: usize, len: usize) -> BrineResult<Self> {
        check::offset_window(data.len(), offset, len)?;
        Ok(Self {
            data: Repr::Ro(data),
            position: offset,
            limit: offset + len,
        })
    }

    /// Wraps the `[offset, offset + len)` window of a writable slice.
    ///
    /// # Errors
    ///
    /// Returns [`BrineError::OffsetWindow`] if the window does not fit.
    pub fn window_mut(data: &'a mut [u8], offset: usize, len: usize) -> BrineResult<Self> {
        check::offset_window(data.len(), offset, len)?;
        Ok(Self {
            data: Repr::Rw(data),
            position: offset,
            limit: offset + len,
        })
    }

    /// Total capacity of the underlying region.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Current read/write position.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Exclusive end of the consumable window.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Number of bytes available for consumption (`limit - position`).
    pub fn remaining(&self) -> usize {
        self.limit - self.position
    }

    /// Returns `true` if native code may write through this view.
    pub fn is_writable(&self) -> bool {
        matches!(self.data, Repr::Rw(_))
    }

    /// Moves the position forward by `n` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`BrineError::OffsetWindow`] if fewer than `n` bytes remain.
    pub fn advance(&mut self, n: usize) -> BrineResult<()> {
        check::offset_window(self.remaining(), 0, n)?;
        self.position += n;
        Ok(())
    }

    /// The remaining window as a slice, safe to pass to a read-side native call.
    ///
    /// Zero-copy: slices are contiguous memory with a stable address for the
    /// duration of the borrow, which is exactly what the native boundary
    /// requires.
    pub fn remaining_bytes(&self) -> &[u8] {
        match &self.data {
            Repr::Ro(b) => &b[self.position..self.limit],
            Repr::Rw(b) => &b[self.position..self.limit],
        }
    }

    /// The remaining window as a mutable slice, safe to pass to a write-side
    /// native call.
    ///
    /// # Errors
    ///
    /// Returns [`BrineError::ReadOnly`] for a read-only view.
    pub fn remaining_mut(&mut self) -> BrineResult<&mut [u8]> {
        match &mut self.data {
            Repr::Ro(_) => Err(BrineError::ReadOnly),
            Repr::Rw(b) => Ok(&mut b[self.position..self.limit]),
        }
    }

    /// Copies the remaining window into an owned, zeroize-on-drop buffer.
    ///
    /// The copy has the same remaining byte count and contents as the view at
    /// the time of the call; later writes to the copy do not reach the
    /// original.
    pub fn detach(&self) -> SecureBytes {
        SecureBytes::from_slice(self.remaining_bytes())
    }
}
