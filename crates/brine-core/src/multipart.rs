// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — Brine Sodium Layer
// Licensed under the MIT License

//! Generic incremental (init/update/finalize) protocol wrapper.
//!
//! Hash and MAC families share the same three-phase native shape; a
//! [`Multipart`] session couples one algorithm-supplied [`MultipartSpec`]
//! strategy with one opaque [`StateBlob`] and enforces the state machine
//! `Initialized -> (Updated)* -> Finalized`. A session is `Send` but holds
//! mutable state, so concurrent use of a single session requires external
//! serialization; distinct sessions are independent.

use crate::check;
use crate::mem;
use crate::state::StateBlob;
use crate::types::{BrineError, BrineResult, SecureBytes};
use crate::view::BufView;

/// The update/finalize strategy an algorithm supplies to drive a session.
///
/// Implementations hold whatever per-session configuration the native init
/// call needs (a copied key, a requested output length) and perform the raw
/// native calls against the state region. They never retain the region
/// itself.
pub trait MultipartSpec: Send {
    /// Primitive name used in error reports.
    fn name(&self) -> &'static str;
    /// Size of the opaque native state region, from the `*_statebytes()` query.
    fn state_len(&self) -> usize;
    /// Length of the finalized output in bytes.
    fn output_len(&self) -> usize;
    /// Runs the native init call against a freshly allocated state region.
    fn init(&self, state: &mut StateBlob) -> BrineResult<()>;
    /// Feeds `input` into the state region.
    fn update(&self, state: &mut StateBlob, input: &[u8]) -> BrineResult<()>;
    /// Computes the result into `out`, which is exactly `output_len` bytes.
    fn finalize(&self, state: &mut StateBlob, out: &mut [u8]) -> BrineResult<()>;
    /// Whether the state region may be deep-copied to checkpoint the session.
    fn supports_duplicate(&self) -> bool {
        true
    }
    /// Clones the strategy for a duplicated session.
    fn duplicate_spec(&self) -> Box<dyn MultipartSpec>;
}

/// One incremental computation: a strategy plus its opaque native state.
///
/// Created by the owning algorithm's `stream` constructor. Feeding input in
/// any number of `update` calls is equivalent to feeding the concatenation
/// in one call. After `finalize` the session is terminal: further use is a
/// precondition violation, never a silent no-op.
pub struct Multipart {
    spec: Box<dyn MultipartSpec>,
    state: StateBlob,
    finalized: bool,
}

impl Multipart {
    /// Allocates the state region at the strategy's declared size and runs
    /// the native init call.
    ///
    /// # Errors
    ///
    /// Returns [`BrineError::Native`] if allocation or the init call fails.
    pub fn new(spec: Box<dyn MultipartSpec>) -> BrineResult<Self> {
        let mut state = StateBlob::new(spec.state_len())?;
        spec.init(&mut state)?;
        Ok(Self {
            spec,
            state,
            finalized: false,
        })
    }

    /// Primitive name of the underlying strategy.
    pub fn name(&self) -> &'static str {
        self.spec.name()
    }

    /// Length of the finalized output in bytes.
    pub fn output_len(&self) -> usize {
        self.spec.output_len()
    }

    /// Feeds additional bytes into the computation.
    ///
    /// # Errors
    ///
    /// Returns [`BrineError::SessionFinalized`] if `finalize` already ran.
    pub fn update(&mut self, input: &[u8]) -> BrineResult<()> {
        if self.finalized {
            return Err(BrineError::SessionFinalized);
        }
        self.spec.update(&mut self.state, input)
    }

    /// Consumes the remaining window of `view` and advances its position.
    pub fn update_view(&mut self, view: &mut BufView<'_>) -> BrineResult<()> {
        let n = view.remaining();
        self.update(view.remaining_bytes())?;
        view.advance(n)
    }

    /// Computes the result into `out` and moves the session to its terminal
    /// state.
    ///
    /// # Errors
    ///
    /// Returns [`BrineError::SessionFinalized`] on a second finalize,
    /// [`BrineError::LengthRange`] if `out` is shorter than the declared
    /// output length, or [`BrineError::Native`] if the native call fails.
    pub fn finalize_into(&mut self, out: &mut [u8]) -> BrineResult<()> {
        if self.finalized {
            return Err(BrineError::SessionFinalized);
        }
        check::min_len(self.spec.name(), out.len(), self.spec.output_len())?;
        self.finalized = true;
        self.spec
            .finalize(&mut self.state, &mut out[..self.spec.output_len()])
    }

    /// Allocating convenience around [`Multipart::finalize_into`].
    pub fn finalize_vec(&mut self) -> BrineResult<Vec<u8>> {
        let mut out = vec![0u8; self.spec.output_len()];
        self.finalize_into(&mut out)?;
        Ok(out)
    }

    /// Finalizes into a scratch buffer and compares against `expected` with
    /// the constant-time comparator.
    ///
    /// The comparison never goes through a native boolean-verify entry point;
    /// the streaming form of a primitive does not always expose one, and the
    /// comparator's timing behavior is known.
    ///
    /// Returns `Ok(false)` on mismatch, including a length mismatch.
    pub fn verify_finalize(&mut self, expected: &[u8]) -> BrineResult<bool> {
        let mut scratch = SecureBytes::new(self.spec.output_len());
        self.finalize_into(scratch.data_mut())?;
        Ok(mem::constant_time_eq(scratch.data(), expected))
    }

    /// Deep-copies the session, state region included, so the caller can
    /// finalize at several points without repeating prior updates.
    ///
    /// # Errors
    ///
    /// Returns [`BrineError::Unsupported`] if the strategy rejects
    /// duplication (the result would otherwise be a stale or shared state),
    /// and [`BrineError::SessionFinalized`] for a terminal session.
    pub fn duplicate(&self) -> BrineResult<Self> {
        if self.finalized {
            return Err(BrineError::SessionFinalized);
        }
        if !self.spec.supports_duplicate() {
            return Err(BrineError::Unsupported {
                op: "stream duplication",
            });
        }
        Ok(Self {
            spec: self.spec.duplicate_spec(),
            state: self.state.duplicate()?,
            finalized: false,
        })
    }
}
