use std::sync::Arc;

use super::storage::{KeyValueStore, StorageError};
use crate::model::User;

/// Storage key holding the signed-in user.
pub const USER_KEY: &str = "user";

/// Typed access to the `"user"` slot of a [`KeyValueStore`].
#[derive(Clone)]
pub struct SessionSlot {
    store: Arc<dyn KeyValueStore>,
}

impl SessionSlot {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn save(&self, user: &User) -> Result<(), StorageError> {
        let json = serde_json::to_string(user)?;
        self.store.set(USER_KEY, &json)
    }

    /// `Ok(None)` when the slot is empty. A value that is not a user record
    /// comes back as [`StorageError::Encode`].
    pub fn load(&self) -> Result<Option<User>, StorageError> {
        match self.store.get(USER_KEY)? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    pub fn clear(&self) -> Result<(), StorageError> {
        self.store.remove(USER_KEY)
    }
}
