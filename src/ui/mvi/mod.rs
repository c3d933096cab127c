//! Model-View-Intent primitives for the form and browse screens.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Reducers are pure. Side effects a transition implies (marking the
//! session, requesting navigation) belong to the controller that owns the
//! state and runs around the reducer call.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
