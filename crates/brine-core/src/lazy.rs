// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — Brine Sodium Layer
// Licensed under the MIT License

use std::sync::{Arc, Mutex, PoisonError};

use crate::types::{BrineError, BrineResult};

enum Slot<T> {
    Empty,
    Ready(Arc<T>),
    Unavailable(BrineError),
}

/// A thread-safe, one-time-initialization holder for an algorithm instance.
///
/// The cell moves from uninitialized to initialized exactly once; the
/// transition is guarded by a mutex so concurrent first access from many
/// threads runs the constructor a single time and every caller observes the
/// same `Arc`. There is no de-initialization path: the cache lives for the
/// process.
///
/// A transient constructor failure leaves the cell empty so the next access
/// retries. A [`BrineError::Unavailable`] failure is stable for the process
/// (a missing CPU instruction set does not come back) and is cached
/// terminally: later accesses return the same error without re-running the
/// constructor.
pub struct LazyCache<T> {
    slot: Mutex<Slot<T>>,
}

impl<T> LazyCache<T> {
    /// Creates an empty cache. Usable in `static` position.
    pub const fn new() -> Self {
        Self {
            slot: Mutex::new(Slot::Empty),
        }
    }

    /// Returns the cached instance, constructing it on first access.
    ///
    /// # Errors
    ///
    /// Propagates the constructor's error. [`BrineError::Unavailable`] is
    /// cached and returned on every later call; any other error is not
    /// cached, so the constructor runs again on the next access.
    pub fn get_or_init<F>(&self, ctor: F) -> BrineResult<Arc<T>>
    where
        F: FnOnce() -> BrineResult<T>,
    {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        match &*slot {
            Slot::Ready(instance) => Ok(Arc::clone(instance)),
            Slot::Unavailable(err) => Err(*err),
            Slot::Empty => match ctor() {
                Ok(value) => {
                    let instance = Arc::new(value);
                    *slot = Slot::Ready(Arc::clone(&instance));
                    Ok(instance)
                }
                Err(err @ BrineError::Unavailable { .. }) => {
                    *slot = Slot::Unavailable(err);
                    Err(err)
                }
                Err(err) => Err(err),
            },
        }
    }
}

impl<T> Default for LazyCache<T> {
    fn default() -> Self {
        Self::new()
    }
}
