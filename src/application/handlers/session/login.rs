//! LoginHandler - Command handler for signing in by role.

use std::sync::Arc;

use crate::domain::foundation::{AuthError, Role};
use crate::ports::{ActiveSession, IdentityProvider, SessionStore};

/// Command to sign in as the mock identity for a role.
#[derive(Debug, Clone, Copy)]
pub struct LoginCommand {
    pub role: Role,
}

/// Handler for signing in. A new sign-in replaces any active session.
pub struct LoginHandler {
    identity: Arc<dyn IdentityProvider>,
    sessions: Arc<dyn SessionStore>,
}

impl LoginHandler {
    pub fn new(identity: Arc<dyn IdentityProvider>, sessions: Arc<dyn SessionStore>) -> Self {
        Self { identity, sessions }
    }

    pub async fn handle(&self, cmd: LoginCommand) -> Result<ActiveSession, AuthError> {
        let user = self.identity.sign_in(cmd.role).await?;
        let session = self.sessions.begin(user).await?;

        tracing::info!(
            user_id = %session.user.id,
            role = %cmd.role,
            "signed in"
        );

        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::auth::MockIdentityProvider;
    use crate::adapters::session::InMemorySessionStore;

    fn handler(identity: MockIdentityProvider) -> (LoginHandler, Arc<InMemorySessionStore>) {
        let sessions = Arc::new(InMemorySessionStore::new());
        (
            LoginHandler::new(Arc::new(identity), sessions.clone()),
            sessions,
        )
    }

    #[tokio::test]
    async fn patient_login_starts_session_for_mock_patient() {
        let (handler, sessions) = handler(MockIdentityProvider::new().unwrap());

        let session = handler
            .handle(LoginCommand {
                role: Role::Patient,
            })
            .await
            .unwrap();

        assert_eq!(session.user.id.as_str(), "p1");
        assert_eq!(session.user.name, "Arjun Mehta");
        assert!(session.life_context.is_none());
        assert!(sessions.is_active().await);
    }

    #[tokio::test]
    async fn doctor_login_replaces_patient_session() {
        let (handler, sessions) = handler(MockIdentityProvider::new().unwrap());

        let first = handler
            .handle(LoginCommand {
                role: Role::Patient,
            })
            .await
            .unwrap();
        let second = handler
            .handle(LoginCommand { role: Role::Doctor })
            .await
            .unwrap();

        assert_eq!(second.user.email, "drpriya@example.com");
        assert_eq!(
            sessions.current(&first.token).await,
            Err(AuthError::InvalidToken)
        );
        assert!(sessions.current(&second.token).await.is_ok());
    }

    #[tokio::test]
    async fn unknown_role_leaves_no_session() {
        let (handler, sessions) = handler(MockIdentityProvider::empty());

        let result = handler.handle(LoginCommand { role: Role::Doctor }).await;

        assert_eq!(result, Err(AuthError::UnknownRole(Role::Doctor)));
        assert!(!sessions.is_active().await);
    }
}
