//! HTTP routes for session endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{current_session, login, logout, SessionHandlers};

/// Creates the session router, nested under `/api/session`.
pub fn session_routes(handlers: SessionHandlers) -> Router {
    Router::new()
        .route("/", get(current_session))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .with_state(handlers)
}
