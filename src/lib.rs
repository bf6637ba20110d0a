//! Client state layer for collecting passenger complaints about Olinda bus
//! lines.
//!
//! [`auth::AuthService`] owns the signed-in user and its durable session
//! slot, [`feedback::FeedbackService`] owns the submitted feedback, and both
//! talk to the repositories in [`store`]. [`app::App`] wires them together
//! for the `busvoz` binary.

pub mod app;
pub mod auth;
pub mod cli;
pub mod config;
pub mod feedback;
pub mod latency;
pub mod logging;
pub mod model;
pub mod mvi;
pub mod session;
pub mod store;
pub mod validation;
