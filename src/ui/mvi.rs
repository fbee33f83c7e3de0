//! Model-View-Intent primitives for pure UI state.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Remote-facing state lives in the store containers; these traits cover
//! the purely local slices (form input, focus, scrolling), where every
//! transition is a pure `(State, Intent) -> State` function.

/// Marker trait for UI state objects.
///
/// States are cloned to produce new values and compared to detect
/// changes; they carry everything their view needs to render.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Marker trait for intents: user actions or system events a reducer
/// consumes.
pub trait Intent: Send + 'static {}

/// Transforms state based on intents. The only place local UI state
/// transitions happen; no side effects.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
