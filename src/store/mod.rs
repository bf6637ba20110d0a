//! Mock data store.
//!
//! Callers talk to the repository traits; [`MemoryStore`] is the only
//! implementation and keeps everything in process memory.

mod memory;
pub mod seed;
mod traits;

pub use memory::MemoryStore;
pub use traits::{Catalog, FeedbackRepository, StoreError, UserRepository};
