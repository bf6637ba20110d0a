use crate::model::Feedback;
use crate::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeedbackState {
    /// Newest first.
    pub feedbacks: Vec<Feedback>,
    /// Set once the store contents have been loaded.
    pub loaded: bool,
    /// Submissions still waiting on the simulated request.
    pub in_flight: usize,
}

impl UiState for FeedbackState {}

impl FeedbackState {
    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    /// Records submitted by `user_id`; empty for `None`.
    pub fn by_user(&self, user_id: Option<&str>) -> Vec<Feedback> {
        match user_id {
            Some(id) => self
                .feedbacks
                .iter()
                .filter(|feedback| feedback.user_id == id)
                .cloned()
                .collect(),
            None => Vec::new(),
        }
    }
}
