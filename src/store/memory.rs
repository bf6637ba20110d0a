//! In-memory store.
//!
//! One owned table set behind a read-write lock: many concurrent readers,
//! exclusive writers. Catalogue data is immutable after construction.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Duration;
use parking_lot::RwLock;
use uuid::Uuid;

use super::seed;
use super::traits::{Catalog, FeedbackRepository, StoreError, UserRepository};
use crate::latency::{Clock, SystemClock};
use crate::model::{BusLine, Feedback, FeedbackType, NewFeedback, User};

#[derive(Clone)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
    catalog: Arc<CatalogData>,
    clock: Arc<dyn Clock>,
}

struct Tables {
    users: Vec<User>,
    /// Newest first.
    feedbacks: Vec<Feedback>,
}

struct CatalogData {
    bus_lines: Vec<BusLine>,
    feedback_types: Vec<FeedbackType>,
}

impl MemoryStore {
    /// Store loaded with the seed catalogue, seed user and sample feedback.
    pub fn seeded() -> Self {
        Self::seeded_with_clock(Arc::new(SystemClock))
    }

    pub fn seeded_with_clock(clock: Arc<dyn Clock>) -> Self {
        let feedbacks = seed::feedbacks(clock.now());
        Self::from_parts(seed::users(), feedbacks, clock)
    }

    /// Store with the seed catalogue but no users or feedback.
    pub fn empty(clock: Arc<dyn Clock>) -> Self {
        Self::from_parts(Vec::new(), Vec::new(), clock)
    }

    /// Store with explicit contents. `feedbacks` must be newest first.
    pub fn from_parts(users: Vec<User>, feedbacks: Vec<Feedback>, clock: Arc<dyn Clock>) -> Self {
        Self {
            tables: Arc::new(RwLock::new(Tables { users, feedbacks })),
            catalog: Arc::new(CatalogData {
                bus_lines: seed::bus_lines(),
                feedback_types: seed::feedback_types(),
            }),
            clock,
        }
    }

    fn filter_feedbacks(&self, predicate: impl Fn(&Feedback) -> bool) -> Vec<Feedback> {
        self.tables
            .read()
            .feedbacks
            .iter()
            .filter(|feedback| predicate(feedback))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_by_email(&self, email: &str) -> Option<User> {
        self.tables
            .read()
            .users
            .iter()
            .find(|user| user.email == email)
            .cloned()
    }

    async fn find_by_id(&self, id: &str) -> Option<User> {
        self.tables
            .read()
            .users
            .iter()
            .find(|user| user.id == id)
            .cloned()
    }

    async fn create(&self, name: &str, email: &str) -> Result<User, StoreError> {
        let mut tables = self.tables.write();
        if tables.users.iter().any(|user| user.email == email) {
            return Err(StoreError::EmailTaken {
                email: email.to_string(),
            });
        }

        let user = User::new(Uuid::new_v4().to_string(), name, email);
        tables.users.push(user.clone());
        tracing::debug!(user_id = %user.id, "User created");
        Ok(user)
    }

    async fn count(&self) -> usize {
        self.tables.read().users.len()
    }
}

#[async_trait]
impl FeedbackRepository for MemoryStore {
    async fn list(&self) -> Vec<Feedback> {
        self.tables.read().feedbacks.clone()
    }

    async fn append(&self, feedback: NewFeedback) -> Feedback {
        let mut tables = self.tables.write();

        // Keep timestamps strictly increasing so newest-first order and
        // creation time never disagree.
        let mut created_at = self.clock.now();
        if let Some(newest) = tables.feedbacks.first() {
            if created_at <= newest.created_at {
                created_at = newest.created_at + Duration::microseconds(1);
            }
        }

        let record = feedback.into_feedback(Uuid::new_v4().to_string(), created_at);
        tables.feedbacks.insert(0, record.clone());
        tracing::debug!(feedback_id = %record.id, bus_line_id = %record.bus_line_id, "Feedback stored");
        record
    }

    async fn by_user(&self, user_id: &str) -> Vec<Feedback> {
        self.filter_feedbacks(|feedback| feedback.user_id == user_id)
    }

    async fn by_bus_line(&self, bus_line_id: &str) -> Vec<Feedback> {
        self.filter_feedbacks(|feedback| feedback.bus_line_id == bus_line_id)
    }

    async fn by_type(&self, feedback_type_id: &str) -> Vec<Feedback> {
        self.filter_feedbacks(|feedback| feedback.feedback_type_id == feedback_type_id)
    }
}

impl Catalog for MemoryStore {
    fn bus_lines(&self) -> &[BusLine] {
        &self.catalog.bus_lines
    }

    fn feedback_types(&self) -> &[FeedbackType] {
        &self.catalog.feedback_types
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::latency::FixedClock;
    use chrono::{TimeZone, Utc};

    fn fixed_clock() -> Arc<FixedClock> {
        Arc::new(FixedClock::new(
            Utc.with_ymd_and_hms(2024, 3, 10, 8, 0, 0).unwrap(),
        ))
    }

    #[tokio::test]
    async fn seeded_store_has_seed_user_and_feedback() {
        let store = MemoryStore::seeded();
        assert_eq!(store.count().await, 1);
        assert_eq!(store.list().await.len(), 3);
        assert!(store.find_by_email("joao@exemplo.com").await.is_some());
        assert_eq!(store.find_by_id("1").await.map(|u| u.name), Some("João Silva".to_string()));
    }

    #[tokio::test]
    async fn create_rejects_taken_email() {
        let store = MemoryStore::seeded();
        let err = store.create("Outro João", "joao@exemplo.com").await.unwrap_err();
        assert_eq!(
            err,
            StoreError::EmailTaken {
                email: "joao@exemplo.com".to_string()
            }
        );
        assert_eq!(store.count().await, 1);
    }

    #[tokio::test]
    async fn create_assigns_unique_ids() {
        let store = MemoryStore::empty(fixed_clock());
        let a = store.create("Ana", "ana@x.com").await.unwrap();
        let b = store.create("Bia", "bia@x.com").await.unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(store.count().await, 2);
    }

    #[tokio::test]
    async fn append_puts_newest_first() {
        let clock = fixed_clock();
        let store = MemoryStore::seeded_with_clock(clock.clone());

        let record = store
            .append(NewFeedback::new("1", "4", "2", "Lotado de novo hoje"))
            .await;

        let all = store.list().await;
        assert_eq!(all.len(), 4);
        assert_eq!(all[0], record);
        assert_eq!(record.created_at, clock.now());
    }

    #[tokio::test]
    async fn append_keeps_timestamps_strictly_increasing() {
        let clock = fixed_clock();
        let store = MemoryStore::empty(clock.clone());

        let first = store.append(NewFeedback::new("1", "1", "1", "primeiro registro")).await;
        let second = store.append(NewFeedback::new("1", "1", "1", "segundo registro")).await;

        assert!(second.created_at > first.created_at);
        assert_ne!(second.id, first.id);
    }

    #[tokio::test]
    async fn queries_filter_by_field() {
        let store = MemoryStore::seeded();
        store.append(NewFeedback::new("7", "1", "5", "Assalto no ponto final")).await;

        assert_eq!(store.by_user("1").await.len(), 3);
        assert_eq!(store.by_user("7").await.len(), 1);
        assert_eq!(store.by_bus_line("1").await.len(), 2);
        assert_eq!(store.by_type("5").await.len(), 1);
        assert!(store.by_type("6").await.is_empty());
    }

    #[test]
    fn catalog_lookups() {
        let store = MemoryStore::seeded();
        assert_eq!(store.bus_line("8").map(|l| l.number.as_str()), Some("108"));
        assert_eq!(
            store.feedback_type("2").map(|k| k.name.as_str()),
            Some("Superlotação")
        );
        assert!(store.bus_line("99").is_none());
    }
}
