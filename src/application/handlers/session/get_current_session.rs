//! GetCurrentSessionHandler - Query handler for the signed-in identity.

use std::sync::Arc;

use crate::domain::foundation::AuthError;
use crate::ports::{ActiveSession, SessionStore};

#[derive(Debug, Clone)]
pub struct GetCurrentSessionQuery {
    pub token: String,
}

/// Returns the identity and, once intake is submitted, the captured life context.
pub struct GetCurrentSessionHandler {
    sessions: Arc<dyn SessionStore>,
}

impl GetCurrentSessionHandler {
    pub fn new(sessions: Arc<dyn SessionStore>) -> Self {
        Self { sessions }
    }

    pub async fn handle(&self, query: GetCurrentSessionQuery) -> Result<ActiveSession, AuthError> {
        self.sessions.current(&query.token).await
    }
}
