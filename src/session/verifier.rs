use crate::model::User;

/// Decides whether a password is valid for a user found by email.
///
/// The store keeps no password material, so the default implementation
/// accepts anything. A real check plugs in here without touching the
/// auth service.
pub trait PasswordVerifier: Send + Sync {
    fn verify(&self, user: &User, password: &str) -> bool;

    /// Called once after a user registers with `password`.
    fn enroll(&self, _user: &User, _password: &str) {}
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAnyPassword;

impl PasswordVerifier for AcceptAnyPassword {
    fn verify(&self, _user: &User, _password: &str) -> bool {
        true
    }
}
