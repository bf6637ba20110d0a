//! Model-View-Intent primitives for the client state layer.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ Subscribers
//!    ↑                                  │
//!    └──────────────────────────────────┘
//! ```
//!
//! - **State**: Immutable snapshot of auth or feedback state
//! - **Intent**: Service events (request started, login succeeded, ...)
//! - **Reducer**: Pure function that transforms state based on intents
//! - **StateStore**: Owns the current state and notifies subscribers

mod intent;
mod reducer;
mod state;
mod store;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
pub use store::{Listener, StateStore, SubscriptionId};
