//! Feedback state: the session's complaint collection and its views.

mod filter;
mod intent;
mod reducer;
mod service;
mod state;

pub use filter::FeedbackFilter;
pub use intent::FeedbackIntent;
pub use reducer::FeedbackReducer;
pub use service::{FeedbackService, DEFAULT_SUBMIT_LATENCY_MS};
pub use state::FeedbackState;
