//! Identity provider port.
//!
//! Turns a sign-in request into an `AuthenticatedUser`. The shipped adapter
//! is a mock with one fixed identity per role; a credential-checking
//! provider plugs in here without touching the session store or handlers.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser, Role};

/// Produces the identity a user signs in as.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Sign in with the given role.
    ///
    /// # Errors
    ///
    /// - `UnknownRole` if no identity is configured for `role`
    /// - `ServiceUnavailable` if the provider cannot be reached
    async fn sign_in(&self, role: Role) -> Result<AuthenticatedUser, AuthError>;
}
