//! Session persistence and password checking.

mod slot;
mod storage;
mod verifier;

pub use slot::{SessionSlot, USER_KEY};
pub use storage::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore, StorageError};
pub use verifier::{AcceptAnyPassword, PasswordVerifier};
