//! HTTP handlers for session endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::handle_auth_error;
use crate::adapters::http::middleware::{RequireAuth, SessionToken};
use crate::application::handlers::session::{
    GetCurrentSessionHandler, GetCurrentSessionQuery, LoginCommand, LoginHandler, LogoutCommand,
    LogoutHandler,
};

use super::dto::{LoginRequest, LoginResponse, SessionResponse};

#[derive(Clone)]
pub struct SessionHandlers {
    login_handler: Arc<LoginHandler>,
    logout_handler: Arc<LogoutHandler>,
    current_handler: Arc<GetCurrentSessionHandler>,
}

impl SessionHandlers {
    pub fn new(
        login_handler: Arc<LoginHandler>,
        logout_handler: Arc<LogoutHandler>,
        current_handler: Arc<GetCurrentSessionHandler>,
    ) -> Self {
        Self {
            login_handler,
            logout_handler,
            current_handler,
        }
    }
}

/// POST /api/session/login - Sign in as the mock identity for a role
pub async fn login(
    State(handlers): State<SessionHandlers>,
    Json(req): Json<LoginRequest>,
) -> Response {
    match handlers
        .login_handler
        .handle(LoginCommand { role: req.role })
        .await
    {
        Ok(session) => (StatusCode::OK, Json(LoginResponse::from(session))).into_response(),
        Err(e) => handle_auth_error(e),
    }
}

/// POST /api/session/logout - End the active session
pub async fn logout(
    State(handlers): State<SessionHandlers>,
    RequireAuth(_user): RequireAuth,
    SessionToken(token): SessionToken,
) -> Response {
    match handlers.logout_handler.handle(LogoutCommand { token }).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => handle_auth_error(e),
    }
}

/// GET /api/session - Current identity and captured life context
pub async fn current_session(
    State(handlers): State<SessionHandlers>,
    SessionToken(token): SessionToken,
) -> Response {
    match handlers
        .current_handler
        .handle(GetCurrentSessionQuery { token })
        .await
    {
        Ok(session) => (StatusCode::OK, Json(SessionResponse::from(session))).into_response(),
        Err(e) => handle_auth_error(e),
    }
}
