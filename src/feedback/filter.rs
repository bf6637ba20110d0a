//! List filtering for the feedback view.

use crate::model::Feedback;

/// Filter selections of the feedback list.
///
/// `None` or an empty string means "all" for the line and type filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackFilter {
    pub bus_line_id: Option<String>,
    pub feedback_type_id: Option<String>,
    pub only_mine: bool,
}

impl FeedbackFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bus_line(mut self, id: impl Into<String>) -> Self {
        self.bus_line_id = Some(id.into());
        self
    }

    pub fn feedback_type(mut self, id: impl Into<String>) -> Self {
        self.feedback_type_id = Some(id.into());
        self
    }

    pub fn mine(mut self) -> Self {
        self.only_mine = true;
        self
    }

    pub fn toggle_only_mine(&mut self) {
        self.only_mine = !self.only_mine;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_active(&self) -> bool {
        selected(&self.bus_line_id).is_some()
            || selected(&self.feedback_type_id).is_some()
            || self.only_mine
    }

    /// Whether `feedback` passes every active filter.
    ///
    /// `viewer_id` is the signed-in user's id. With "only mine" set and no
    /// viewer, nothing matches.
    pub fn matches(&self, feedback: &Feedback, viewer_id: Option<&str>) -> bool {
        if let Some(line) = selected(&self.bus_line_id) {
            if feedback.bus_line_id != line {
                return false;
            }
        }

        if let Some(kind) = selected(&self.feedback_type_id) {
            if feedback.feedback_type_id != kind {
                return false;
            }
        }

        if self.only_mine && viewer_id != Some(feedback.user_id.as_str()) {
            return false;
        }

        true
    }

    /// Matching records in their original order.
    pub fn apply<'a>(&self, feedbacks: &'a [Feedback], viewer_id: Option<&str>) -> Vec<&'a Feedback> {
        feedbacks
            .iter()
            .filter(|feedback| self.matches(feedback, viewer_id))
            .collect()
    }
}

fn selected(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
