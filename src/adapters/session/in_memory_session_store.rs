//! In-Memory Session Store Adapter
//!
//! Holds the one active session. Signing in issues a fresh random token and
//! replaces whatever session was active; signing out clears it.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::foundation::{AuthError, AuthenticatedUser};
use crate::domain::patient::LifeContext;
use crate::ports::{ActiveSession, SessionStore, SessionValidator};

#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    active: Arc<RwLock<Option<ActiveSession>>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true while someone is signed in.
    pub async fn is_active(&self) -> bool {
        self.active.read().await.is_some()
    }
}

fn matching<'a>(
    active: &'a Option<ActiveSession>,
    token: &str,
) -> Result<&'a ActiveSession, AuthError> {
    active
        .as_ref()
        .filter(|session| session.token == token)
        .ok_or(AuthError::InvalidToken)
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn begin(&self, user: AuthenticatedUser) -> Result<ActiveSession, AuthError> {
        let session = ActiveSession::new(Uuid::new_v4().to_string(), user);
        *self.active.write().await = Some(session.clone());
        Ok(session)
    }

    async fn end(&self, token: &str) -> Result<(), AuthError> {
        let mut active = self.active.write().await;
        matching(&active, token)?;
        *active = None;
        Ok(())
    }

    async fn current(&self, token: &str) -> Result<ActiveSession, AuthError> {
        let active = self.active.read().await;
        matching(&active, token).cloned()
    }

    async fn record_life_context(
        &self,
        token: &str,
        life_context: LifeContext,
    ) -> Result<(), AuthError> {
        let mut active = self.active.write().await;
        match active.as_mut() {
            Some(session) if session.token == token => {
                session.life_context = Some(life_context);
                Ok(())
            }
            _ => Err(AuthError::InvalidToken),
        }
    }
}

#[async_trait]
impl SessionValidator for InMemorySessionStore {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        self.current(token).await.map(|session| session.user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{Role, UserId};
    use crate::domain::patient::{
        CommuteTime, FoodAccess, LivingSituation, SleepHours, StressLevel, WorkSchedule,
    };

    fn patient() -> AuthenticatedUser {
        AuthenticatedUser::new(
            UserId::new("p1").unwrap(),
            "Arjun Mehta",
            "arjun@example.com",
            Role::Patient,
        )
    }

    fn doctor() -> AuthenticatedUser {
        AuthenticatedUser::new(
            UserId::new("d1").unwrap(),
            "Dr. Priya Sharma",
            "drpriya@example.com",
            Role::Doctor,
        )
    }

    #[tokio::test]
    async fn begin_issues_token_that_validates() {
        let store = InMemorySessionStore::new();
        let session = store.begin(patient()).await.unwrap();

        assert!(!session.token.is_empty());
        assert_eq!(store.validate(&session.token).await.unwrap(), patient());
        assert!(session.life_context.is_none());
    }

    #[tokio::test]
    async fn new_sign_in_replaces_previous_session() {
        let store = InMemorySessionStore::new();
        let first = store.begin(patient()).await.unwrap();
        let second = store.begin(doctor()).await.unwrap();

        assert_ne!(first.token, second.token);
        assert_eq!(
            store.validate(&first.token).await,
            Err(AuthError::InvalidToken)
        );
        assert!(store.validate(&second.token).await.unwrap().is_doctor());
    }

    #[tokio::test]
    async fn end_clears_session() {
        let store = InMemorySessionStore::new();
        let session = store.begin(patient()).await.unwrap();

        assert_eq!(store.end("wrong").await, Err(AuthError::InvalidToken));
        assert!(store.is_active().await);

        store.end(&session.token).await.unwrap();
        assert!(!store.is_active().await);
        assert!(store.current(&session.token).await.is_err());
    }

    #[tokio::test]
    async fn records_life_context_on_active_session() {
        let store = InMemorySessionStore::new();
        let session = store.begin(patient()).await.unwrap();
        let context = LifeContext::new(
            WorkSchedule::WorkFromHome,
            CommuteTime::NoCommute,
            FoodAccess::Easy,
            SleepHours::SixToEight,
            StressLevel::Mildly,
            LivingSituation::WithFamily,
        );

        store
            .record_life_context(&session.token, context)
            .await
            .unwrap();

        let current = store.current(&session.token).await.unwrap();
        assert_eq!(current.life_context, Some(context));
        assert_eq!(
            store.record_life_context("stale", context).await,
            Err(AuthError::InvalidToken)
        );
    }
}
