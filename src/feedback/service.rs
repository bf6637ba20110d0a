use std::sync::Arc;

use crate::auth::AuthService;
use crate::feedback::filter::FeedbackFilter;
use crate::feedback::intent::FeedbackIntent;
use crate::feedback::reducer::FeedbackReducer;
use crate::feedback::state::FeedbackState;
use crate::latency::{FixedLatency, Latency};
use crate::model::{Feedback, NewFeedback};
use crate::mvi::{StateStore, SubscriptionId};
use crate::store::FeedbackRepository;

/// Simulated round-trip of a feedback submission.
pub const DEFAULT_SUBMIT_LATENCY_MS: u64 = 1000;

/// Feedback collection of the session plus the signed-in user's subset.
#[derive(Clone)]
pub struct FeedbackService {
    inner: Arc<FeedbackInner>,
}

struct FeedbackInner {
    state: StateStore<FeedbackReducer>,
    feedbacks: Arc<dyn FeedbackRepository>,
    auth: AuthService,
    latency: Arc<dyn Latency>,
}

impl FeedbackService {
    pub fn new(feedbacks: Arc<dyn FeedbackRepository>, auth: AuthService) -> Self {
        Self::with_latency(
            feedbacks,
            auth,
            Arc::new(FixedLatency::from_millis(DEFAULT_SUBMIT_LATENCY_MS)),
        )
    }

    pub fn with_latency(
        feedbacks: Arc<dyn FeedbackRepository>,
        auth: AuthService,
        latency: Arc<dyn Latency>,
    ) -> Self {
        Self {
            inner: Arc::new(FeedbackInner {
                state: StateStore::default(),
                feedbacks,
                auth,
                latency,
            }),
        }
    }

    /// Load the store contents into state. Only the first call does work.
    pub async fn activate(&self) {
        if self.inner.state.with(|state| state.loaded) {
            return;
        }
        let feedbacks = self.inner.feedbacks.list().await;
        tracing::debug!(count = feedbacks.len(), "Feedback loaded");
        self.inner.state.dispatch(FeedbackIntent::Loaded { feedbacks });
    }

    /// Submit a complaint. Referenced ids are not checked.
    pub async fn add_feedback(&self, feedback: NewFeedback) -> Feedback {
        self.inner.state.dispatch(FeedbackIntent::SubmitStarted);
        self.inner.latency.wait().await;

        let record = self.inner.feedbacks.append(feedback).await;
        tracing::info!(
            feedback_id = %record.id,
            user_id = %record.user_id,
            bus_line_id = %record.bus_line_id,
            "Feedback submitted"
        );
        self.inner.state.dispatch(FeedbackIntent::Submitted {
            feedback: record.clone(),
        });
        record
    }

    /// Every record, newest first.
    pub fn feedbacks(&self) -> Vec<Feedback> {
        self.inner.state.with(|state| state.feedbacks.clone())
    }

    /// Records of the signed-in user; empty when signed out.
    pub fn user_feedbacks(&self) -> Vec<Feedback> {
        let user_id = self.inner.auth.current_user_id();
        self.inner.state.with(|state| state.by_user(user_id.as_deref()))
    }

    /// Records passing `filter`, with "only mine" resolved against the
    /// signed-in user.
    pub fn filtered(&self, filter: &FeedbackFilter) -> Vec<Feedback> {
        let user_id = self.inner.auth.current_user_id();
        self.inner.state.with(|state| {
            filter
                .apply(&state.feedbacks, user_id.as_deref())
                .into_iter()
                .cloned()
                .collect()
        })
    }

    pub fn state(&self) -> FeedbackState {
        self.inner.state.get()
    }

    pub fn is_loading(&self) -> bool {
        self.inner.state.with(FeedbackState::is_loading)
    }

    pub fn subscribe(&self, listener: impl Fn(&FeedbackState) + Send + Sync + 'static) -> SubscriptionId {
        self.inner.state.subscribe(listener)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.inner.state.unsubscribe(id)
    }
}
