//! HTTP DTOs for session endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AuthenticatedUser, Role};
use crate::domain::patient::LifeContext;
use crate::ports::ActiveSession;

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub role: Role,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub first_name: String,
    pub email: String,
    pub role: Role,
}

impl From<&AuthenticatedUser> for UserResponse {
    fn from(user: &AuthenticatedUser) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name.clone(),
            first_name: user.first_name().to_string(),
            email: user.email.clone(),
            role: user.role,
        }
    }
}

/// Returned by login. The token goes in `Authorization: Bearer` afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserResponse,
}

impl From<ActiveSession> for LoginResponse {
    fn from(session: ActiveSession) -> Self {
        Self {
            user: UserResponse::from(&session.user),
            token: session.token,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionResponse {
    pub user: UserResponse,
    pub life_context: Option<LifeContext>,
}

impl From<ActiveSession> for SessionResponse {
    fn from(session: ActiveSession) -> Self {
        Self {
            user: UserResponse::from(&session.user),
            life_context: session.life_context,
        }
    }
}
