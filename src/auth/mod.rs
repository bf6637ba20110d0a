//! Authentication state: who, if anyone, is signed in.

mod intent;
mod reducer;
mod service;
mod state;

pub use intent::AuthIntent;
pub use reducer::AuthReducer;
pub use service::{AuthService, AuthServiceBuilder, DEFAULT_AUTH_LATENCY_MS};
pub use state::AuthState;
