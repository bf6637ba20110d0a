use crate::model::User;
use crate::mvi::UiState;

/// The single active session of this client.
///
/// There is no separate "authenticated" flag: a session is authenticated
/// exactly when a user is set.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AuthState {
    pub user: Option<User>,
    /// Login/register calls still waiting on the simulated request.
    pub in_flight: usize,
}

impl UiState for AuthState {}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user.as_ref().map(|user| user.id.as_str())
    }
}
