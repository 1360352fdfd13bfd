use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};

/// Resolves a Bearer token to the signed-in user.
///
/// Only the single active session's token resolves. A token replaced by a
/// newer login, or ended by logout, yields `AuthError::InvalidToken`.
#[async_trait]
pub trait SessionValidator: Send + Sync {
    /// `token` is the raw value after `Bearer `.
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}
