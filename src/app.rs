//! Wiring of store, session and services for one client process.

use std::sync::Arc;

use crate::auth::AuthService;
use crate::config::Config;
use crate::feedback::FeedbackService;
use crate::latency::{FixedLatency, Latency};
use crate::session::{FileKeyValueStore, KeyValueStore, SessionSlot};
use crate::store::MemoryStore;

pub struct App {
    pub store: Arc<MemoryStore>,
    pub auth: AuthService,
    pub feedback: FeedbackService,
}

impl App {
    /// Seeded store, file-backed session (unless disabled) and the
    /// configured delays.
    pub fn from_config(config: &Config) -> Self {
        let session: Option<Arc<dyn KeyValueStore>> = if config.session.persist {
            Some(Arc::new(FileKeyValueStore::new(config.session.resolved_path())))
        } else {
            None
        };

        Self::from_parts(
            Arc::new(MemoryStore::seeded()),
            session,
            Arc::new(FixedLatency::from_millis(config.latency.auth_ms)),
            Arc::new(FixedLatency::from_millis(config.latency.submit_ms)),
        )
    }

    pub fn from_parts(
        store: Arc<MemoryStore>,
        session: Option<Arc<dyn KeyValueStore>>,
        auth_latency: Arc<dyn Latency>,
        submit_latency: Arc<dyn Latency>,
    ) -> Self {
        let mut builder = AuthService::builder(store.clone()).latency(auth_latency);
        if let Some(kv) = session {
            builder = builder.session(SessionSlot::new(kv));
        }
        let auth = builder.build();
        let feedback = FeedbackService::with_latency(store.clone(), auth.clone(), submit_latency);

        Self {
            store,
            auth,
            feedback,
        }
    }

    /// Rehydrate the session and load the feedback collection.
    pub async fn start(&self) {
        if let Some(user) = self.auth.restore() {
            tracing::info!(user_id = %user.id, "Resuming session");
        }
        self.feedback.activate().await;
    }
}
