//! Entity state containers.
//!
//! Each store owns one slice of application state behind a shared cell
//! and exposes fire-and-settle actions: set `loading`, call the API,
//! merge the outcome, clear `loading`. Stores are explicit values that
//! get passed to whoever needs them; there is no global singleton.

mod session;
mod users;

pub use session::{SessionSlice, SessionStore};
pub use users::{UsersSlice, UsersStore};

use std::sync::Arc;

use parking_lot::RwLock;

struct Tracked<S> {
    slice: S,
    generation: u64,
}

/// Shared holder for one state slice.
///
/// The generation counter guards against stale completions: `begin`
/// bumps it when an action starts, and `settle` only applies an outcome
/// whose captured generation is still current. An in-flight request is
/// never aborted, but a superseded one can no longer overwrite the
/// state a newer action produced.
pub(crate) struct SliceCell<S> {
    inner: Arc<RwLock<Tracked<S>>>,
}

impl<S> Clone for SliceCell<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: Clone> SliceCell<S> {
    pub(crate) fn new(slice: S) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Tracked {
                slice,
                generation: 0,
            })),
        }
    }

    /// Mark the start of an action and return its generation.
    pub(crate) fn begin(&self, prepare: impl FnOnce(&mut S)) -> u64 {
        let mut guard = self.inner.write();
        guard.generation += 1;
        prepare(&mut guard.slice);
        guard.generation
    }

    /// Apply an action's outcome unless a newer action has started.
    pub(crate) fn settle(&self, generation: u64, apply: impl FnOnce(&mut S)) {
        let mut guard = self.inner.write();
        if guard.generation != generation {
            tracing::debug!(
                stale = generation,
                current = guard.generation,
                "dropping stale completion"
            );
            return;
        }
        apply(&mut guard.slice);
    }

    /// Clone of the current slice, for rendering.
    pub(crate) fn snapshot(&self) -> S {
        self.inner.read().slice.clone()
    }

    /// Replace the slice outright, invalidating in-flight actions.
    pub(crate) fn replace(&self, slice: S) {
        let mut guard = self.inner.write();
        guard.generation += 1;
        guard.slice = slice;
    }
}
