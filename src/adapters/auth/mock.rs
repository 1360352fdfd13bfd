//! Mock identity provider.
//!
//! Implements the `IdentityProvider` port with one fixed identity per role,
//! so anyone can sign in as the demo patient or the demo doctor without
//! credentials.
//!
//! # Example
//!
//! ```ignore
//! use carefit::adapters::auth::MockIdentityProvider;
//! use carefit::domain::foundation::Role;
//!
//! let provider = MockIdentityProvider::new();
//! let doctor = provider.sign_in(Role::Doctor).await?;
//! assert_eq!(doctor.name, "Dr. Priya Sharma");
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{AuthError, AuthenticatedUser, Role, UserId, ValidationError};
use crate::ports::IdentityProvider;

/// Identity provider that always succeeds for configured roles.
#[derive(Debug, Clone)]
pub struct MockIdentityProvider {
    identities: HashMap<Role, AuthenticatedUser>,
    /// Optional error returned for every sign-in (for error testing)
    force_error: Arc<RwLock<Option<AuthError>>>,
}

impl MockIdentityProvider {
    /// Provider with the demo patient (p1) and demo doctor (d1).
    pub fn new() -> Result<Self, ValidationError> {
        let provider = Self::empty()
            .with_identity(AuthenticatedUser::new(
                UserId::new("p1")?,
                "Arjun Mehta",
                "arjun@example.com",
                Role::Patient,
            ))
            .with_identity(AuthenticatedUser::new(
                UserId::new("d1")?,
                "Dr. Priya Sharma",
                "drpriya@example.com",
                Role::Doctor,
            ));
        Ok(provider)
    }

    /// Provider with no identities; every sign-in fails with `UnknownRole`.
    pub fn empty() -> Self {
        Self {
            identities: HashMap::new(),
            force_error: Arc::new(RwLock::new(None)),
        }
    }

    /// Sets the identity handed out for `user.role`.
    pub fn with_identity(mut self, user: AuthenticatedUser) -> Self {
        self.identities.insert(user.role, user);
        self
    }

    /// Forces every sign-in to return the specified error.
    pub async fn fail_with(&self, error: AuthError) {
        *self.force_error.write().await = Some(error);
    }

    /// Clears the forced error and returns to normal operation.
    pub async fn clear_error(&self) {
        *self.force_error.write().await = None;
    }
}

#[async_trait]
impl IdentityProvider for MockIdentityProvider {
    async fn sign_in(&self, role: Role) -> Result<AuthenticatedUser, AuthError> {
        if let Some(error) = self.force_error.read().await.clone() {
            return Err(error);
        }

        self.identities
            .get(&role)
            .cloned()
            .ok_or(AuthError::UnknownRole(role))
    }
}
