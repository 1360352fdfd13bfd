//! LogoutHandler - Command handler for ending the active session.

use std::sync::Arc;

use crate::domain::foundation::AuthError;
use crate::ports::SessionStore;

/// Command to sign out.
#[derive(Debug, Clone)]
pub struct LogoutCommand {
    pub token: String,
}

pub struct LogoutHandler {
    sessions: Arc<dyn SessionStore>,
}

impl LogoutHandler {
    pub fn new(sessions: Arc<dyn SessionStore>) -> Self {
        Self { sessions }
    }

    /// Clears identity and the life context captured during the session.
    /// Patient records are untouched.
    pub async fn handle(&self, cmd: LogoutCommand) -> Result<(), AuthError> {
        self.sessions.end(&cmd.token).await?;
        tracing::info!("signed out");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::session::InMemorySessionStore;
    use crate::domain::foundation::{AuthenticatedUser, Role, UserId};

    fn doctor() -> AuthenticatedUser {
        AuthenticatedUser::new(
            UserId::new("d1").unwrap(),
            "Dr. Priya Sharma",
            "drpriya@example.com",
            Role::Doctor,
        )
    }

    #[tokio::test]
    async fn logout_ends_active_session() {
        let sessions = Arc::new(InMemorySessionStore::new());
        let session = sessions.begin(doctor()).await.unwrap();
        let handler = LogoutHandler::new(sessions.clone());

        handler
            .handle(LogoutCommand {
                token: session.token.clone(),
            })
            .await
            .unwrap();

        assert!(!sessions.is_active().await);
    }

    #[tokio::test]
    async fn logout_with_stale_token_is_rejected() {
        let sessions = Arc::new(InMemorySessionStore::new());
        sessions.begin(doctor()).await.unwrap();
        let handler = LogoutHandler::new(sessions.clone());

        let result = handler
            .handle(LogoutCommand {
                token: "stale".to_string(),
            })
            .await;

        assert_eq!(result, Err(AuthError::InvalidToken));
        assert!(sessions.is_active().await);
    }
}
