use async_trait::async_trait;
use thiserror::Error;

use crate::model::{BusLine, Feedback, FeedbackType, NewFeedback, User};

/// Errors reported by store writes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Email '{email}' is already registered")]
    EmailTaken { email: String },
}

/// Registered users.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Option<User>;

    async fn find_by_id(&self, id: &str) -> Option<User>;

    /// Create a user with a freshly generated id.
    ///
    /// The email check and the insert happen atomically, so two concurrent
    /// registrations with the same email cannot both succeed.
    async fn create(&self, name: &str, email: &str) -> Result<User, StoreError>;

    async fn count(&self) -> usize;
}

/// Submitted feedback, newest first.
#[async_trait]
pub trait FeedbackRepository: Send + Sync {
    async fn list(&self) -> Vec<Feedback>;

    /// Assign `id` and `created_at`, then store the record as the newest.
    async fn append(&self, feedback: NewFeedback) -> Feedback;

    async fn by_user(&self, user_id: &str) -> Vec<Feedback>;

    async fn by_bus_line(&self, bus_line_id: &str) -> Vec<Feedback>;

    async fn by_type(&self, feedback_type_id: &str) -> Vec<Feedback>;
}

/// Static reference data.
pub trait Catalog: Send + Sync {
    fn bus_lines(&self) -> &[BusLine];

    fn feedback_types(&self) -> &[FeedbackType];

    fn bus_line(&self, id: &str) -> Option<&BusLine> {
        self.bus_lines().iter().find(|line| line.id == id)
    }

    fn feedback_type(&self, id: &str) -> Option<&FeedbackType> {
        self.feedback_types().iter().find(|kind| kind.id == id)
    }
}
