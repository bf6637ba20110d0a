//! Domain records shared by the store, the services and the CLI.

mod catalog;
mod feedback;
mod user;

pub use catalog::{BusLine, FeedbackType};
pub use feedback::{Feedback, Location, NewFeedback};
pub use user::User;
