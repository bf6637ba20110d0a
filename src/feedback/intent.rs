use crate::model::Feedback;
use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum FeedbackIntent {
    /// Store contents loaded, newest first.
    Loaded { feedbacks: Vec<Feedback> },
    SubmitStarted,
    Submitted { feedback: Feedback },
}

impl Intent for FeedbackIntent {}
