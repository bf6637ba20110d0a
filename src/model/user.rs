use serde::{Deserialize, Serialize};

/// A registered citizen.
///
/// Users are immutable once created. The JSON form (`id`, `name`, `email`)
/// is also what gets mirrored into the session slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
        }
    }
}
