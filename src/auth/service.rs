//! Session management for a single client.

use std::sync::Arc;

use crate::auth::intent::AuthIntent;
use crate::auth::reducer::AuthReducer;
use crate::auth::state::AuthState;
use crate::latency::{FixedLatency, Latency};
use crate::model::User;
use crate::mvi::{StateStore, SubscriptionId};
use crate::session::{AcceptAnyPassword, PasswordVerifier, SessionSlot};
use crate::store::{StoreError, UserRepository};

/// Simulated round-trip of the login and register calls.
pub const DEFAULT_AUTH_LATENCY_MS: u64 = 1000;

/// Login, registration and logout against a [`UserRepository`].
///
/// Cloning is cheap; clones share the same session. None of the operations
/// return errors: failures come back as `false`, and session slot write
/// problems are logged and otherwise ignored.
#[derive(Clone)]
pub struct AuthService {
    inner: Arc<AuthInner>,
}

struct AuthInner {
    state: StateStore<AuthReducer>,
    users: Arc<dyn UserRepository>,
    verifier: Arc<dyn PasswordVerifier>,
    session: Option<SessionSlot>,
    latency: Arc<dyn Latency>,
}

pub struct AuthServiceBuilder {
    users: Arc<dyn UserRepository>,
    verifier: Arc<dyn PasswordVerifier>,
    session: Option<SessionSlot>,
    latency: Arc<dyn Latency>,
}

impl AuthServiceBuilder {
    pub fn verifier(mut self, verifier: Arc<dyn PasswordVerifier>) -> Self {
        self.verifier = verifier;
        self
    }

    /// Mirror the signed-in user into this slot.
    pub fn session(mut self, session: SessionSlot) -> Self {
        self.session = Some(session);
        self
    }

    pub fn latency(mut self, latency: Arc<dyn Latency>) -> Self {
        self.latency = latency;
        self
    }

    pub fn build(self) -> AuthService {
        AuthService {
            inner: Arc::new(AuthInner {
                state: StateStore::default(),
                users: self.users,
                verifier: self.verifier,
                session: self.session,
                latency: self.latency,
            }),
        }
    }
}

impl AuthService {
    pub fn builder(users: Arc<dyn UserRepository>) -> AuthServiceBuilder {
        AuthServiceBuilder {
            users,
            verifier: Arc::new(AcceptAnyPassword),
            session: None,
            latency: Arc::new(FixedLatency::from_millis(DEFAULT_AUTH_LATENCY_MS)),
        }
    }

    /// Sign in by email. The password only goes to the configured
    /// [`PasswordVerifier`].
    pub async fn login(&self, email: &str, password: &str) -> bool {
        self.inner.state.dispatch(AuthIntent::RequestStarted);
        self.inner.latency.wait().await;

        let user = self
            .inner
            .users
            .find_by_email(email)
            .await
            .filter(|user| self.inner.verifier.verify(user, password));

        match user {
            Some(user) => {
                tracing::info!(user_id = %user.id, "Logged in");
                self.sign_in(user);
                true
            }
            None => {
                tracing::info!("Login rejected");
                self.inner.state.dispatch(AuthIntent::RequestFailed);
                false
            }
        }
    }

    /// Create an account and sign it in. `false` if the email is taken.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> bool {
        self.inner.state.dispatch(AuthIntent::RequestStarted);
        self.inner.latency.wait().await;

        match self.inner.users.create(name, email).await {
            Ok(user) => {
                self.inner.verifier.enroll(&user, password);
                tracing::info!(user_id = %user.id, "Registered");
                self.sign_in(user);
                true
            }
            Err(StoreError::EmailTaken { .. }) => {
                tracing::info!("Registration rejected: email already in use");
                self.inner.state.dispatch(AuthIntent::RequestFailed);
                false
            }
        }
    }

    pub fn logout(&self) {
        let previous = self.current_user_id();
        self.inner.state.dispatch(AuthIntent::LoggedOut);
        if let Some(session) = &self.inner.session {
            if let Err(e) = session.clear() {
                tracing::warn!(error = %e, "Failed to clear session slot");
            }
        }
        if let Some(user_id) = previous {
            tracing::info!(user_id = %user_id, "Logged out");
        }
    }

    /// Rehydrate the session from the durable slot.
    ///
    /// An unreadable slot is logged, cleared and treated as empty.
    pub fn restore(&self) -> Option<User> {
        let session = self.inner.session.as_ref()?;
        match session.load() {
            Ok(Some(user)) => {
                tracing::debug!(user_id = %user.id, "Session restored");
                self.inner.state.dispatch(AuthIntent::Restored { user: user.clone() });
                Some(user)
            }
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(error = %e, "Discarding unreadable session slot");
                if let Err(e) = session.clear() {
                    tracing::warn!(error = %e, "Failed to clear session slot");
                }
                None
            }
        }
    }

    pub fn state(&self) -> AuthState {
        self.inner.state.get()
    }

    pub fn current_user(&self) -> Option<User> {
        self.inner.state.with(|state| state.user.clone())
    }

    pub fn current_user_id(&self) -> Option<String> {
        self.inner.state.with(|state| state.user_id().map(str::to_string))
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.state.with(AuthState::is_authenticated)
    }

    pub fn is_loading(&self) -> bool {
        self.inner.state.with(AuthState::is_loading)
    }

    pub fn subscribe(&self, listener: impl Fn(&AuthState) + Send + Sync + 'static) -> SubscriptionId {
        self.inner.state.subscribe(listener)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.inner.state.unsubscribe(id)
    }

    fn sign_in(&self, user: User) {
        self.inner.state.dispatch(AuthIntent::SignedIn { user: user.clone() });
        if let Some(session) = &self.inner.session {
            if let Err(e) = session.save(&user) {
                tracing::warn!(user_id = %user.id, error = %e, "Failed to persist session");
            }
        }
    }
}
