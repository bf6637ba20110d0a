//! Plain-text rendering of store records.

use crate::model::{BusLine, Feedback, FeedbackType, User};
use crate::store::Catalog;

pub fn bus_line(line: &BusLine) -> String {
    format!("[{}] {}", line.id, line.label())
}

pub fn feedback_type(kind: &FeedbackType) -> String {
    format!("[{}] {}: {}", kind.id, kind.name, kind.description)
}

pub fn user(user: &User) -> String {
    format!("{} <{}>", user.name, user.email)
}

/// One line per record: date, line, category, comment, location if any.
pub fn feedback(catalog: &dyn Catalog, feedback: &Feedback, viewer_id: Option<&str>) -> String {
    let line = catalog
        .bus_line(&feedback.bus_line_id)
        .map(BusLine::short_label)
        .unwrap_or_else(|| format!("linha {}", feedback.bus_line_id));
    let kind = catalog
        .feedback_type(&feedback.feedback_type_id)
        .map(|kind| kind.name.clone())
        .unwrap_or_else(|| format!("tipo {}", feedback.feedback_type_id));

    let mut out = format!(
        "{} | {} | {} | {}",
        feedback.created_at.format("%d/%m/%Y %H:%M"),
        line,
        kind,
        feedback.comment
    );
    if let Some(location) = feedback.location {
        out.push_str(&format!(" @ {:.5},{:.5}", location.latitude, location.longitude));
    }
    if viewer_id == Some(feedback.user_id.as_str()) {
        out.push_str(" (seu)");
    }
    out
}
