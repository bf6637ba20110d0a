use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Geographic position optionally attached to a complaint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

/// A submitted complaint about a bus line.
///
/// `id` and `created_at` are assigned by the store exactly once; records
/// are never edited or removed afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub id: String,
    pub user_id: String,
    pub bus_line_id: String,
    pub feedback_type_id: String,
    pub comment: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

/// Feedback payload before the store assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewFeedback {
    pub user_id: String,
    pub bus_line_id: String,
    pub feedback_type_id: String,
    pub comment: String,
    pub location: Option<Location>,
}

impl NewFeedback {
    pub fn new(
        user_id: impl Into<String>,
        bus_line_id: impl Into<String>,
        feedback_type_id: impl Into<String>,
        comment: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            bus_line_id: bus_line_id.into(),
            feedback_type_id: feedback_type_id.into(),
            comment: comment.into(),
            location: None,
        }
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// Stamp the payload into a full record.
    pub(crate) fn into_feedback(self, id: String, created_at: DateTime<Utc>) -> Feedback {
        Feedback {
            id,
            user_id: self.user_id,
            bus_line_id: self.bus_line_id,
            feedback_type_id: self.feedback_type_id,
            comment: self.comment,
            created_at,
            location: self.location,
        }
    }
}
