//! Model-View-Intent primitives.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──── controller effects ──────┘
//! ```
//!
//! Async work (wallet calls, contract reads) lives in the controller; its
//! outcomes come back as intents, and only the reducer changes state.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
