//! Session store port.
//!
//! Holds the signed-in user and the life context they last submitted.
//! There is at most one active session: signing in replaces it.

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::foundation::{AuthError, AuthenticatedUser};
use crate::domain::patient::LifeContext;

/// The active session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActiveSession {
    /// Bearer token handed out at sign-in.
    pub token: String,
    pub user: AuthenticatedUser,
    /// Life context submitted during this session, if any.
    pub life_context: Option<LifeContext>,
}

impl ActiveSession {
    pub fn new(token: impl Into<String>, user: AuthenticatedUser) -> Self {
        Self {
            token: token.into(),
            user,
            life_context: None,
        }
    }
}

/// Stores the single active session.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Start a session for `user`, replacing any active one.
    async fn begin(&self, user: AuthenticatedUser) -> Result<ActiveSession, AuthError>;

    /// End the session identified by `token`.
    ///
    /// # Errors
    ///
    /// - `InvalidToken` if `token` is not the active session's token
    async fn end(&self, token: &str) -> Result<(), AuthError>;

    /// The session identified by `token`.
    ///
    /// # Errors
    ///
    /// - `InvalidToken` if `token` is not the active session's token
    async fn current(&self, token: &str) -> Result<ActiveSession, AuthError>;

    /// Record the life context the session's user just submitted.
    ///
    /// # Errors
    ///
    /// - `InvalidToken` if `token` is not the active session's token
    async fn record_life_context(
        &self,
        token: &str,
        life_context: LifeContext,
    ) -> Result<(), AuthError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_store_is_object_safe() {
        fn _accepts_dyn(_store: &dyn SessionStore) {}
    }
}
