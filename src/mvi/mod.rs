//! Model-View-Intent primitives.
//!
//! State flows one way: the view binding turns gestures into intents, a
//! reducer folds them into the current state, and the view re-renders from a
//! snapshot of that state. The reducer never queries the view.
//!
//! ```text
//! Gesture ──→ Intent ──→ Reducer ──→ State ──→ Snapshot ──→ View
//!                ↑                                           │
//!                └───────────────────────────────────────────┘
//! ```

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
