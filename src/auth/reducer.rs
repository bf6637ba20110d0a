use crate::auth::intent::AuthIntent;
use crate::auth::state::AuthState;
use crate::mvi::Reducer;

pub struct AuthReducer;

impl Reducer for AuthReducer {
    type State = AuthState;
    type Intent = AuthIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            AuthIntent::RequestStarted => AuthState {
                in_flight: state.in_flight + 1,
                ..state
            },
            AuthIntent::SignedIn { user } => AuthState {
                user: Some(user),
                in_flight: state.in_flight.saturating_sub(1),
            },
            // A rejected attempt keeps whatever session was already there.
            AuthIntent::RequestFailed => AuthState {
                in_flight: state.in_flight.saturating_sub(1),
                ..state
            },
            AuthIntent::Restored { user } => AuthState {
                user: Some(user),
                ..state
            },
            AuthIntent::LoggedOut => AuthState::default(),
        }
    }
}
