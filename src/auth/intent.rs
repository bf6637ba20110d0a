use crate::model::User;
use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum AuthIntent {
    /// A login or register call began waiting on the simulated request.
    RequestStarted,
    /// Login or registration finished with this user signed in.
    SignedIn { user: User },
    /// Login or registration finished without a session change.
    RequestFailed,
    /// Session rehydrated from the durable slot.
    Restored { user: User },
    LoggedOut,
}

impl Intent for AuthIntent {}
