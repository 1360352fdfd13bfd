//! Bearer-token authentication for the API router.
//!
//! `auth_middleware` resolves `Authorization: Bearer <token>` against the
//! single active session. On success the request carries the
//! [`AuthenticatedUser`] and its [`SessionToken`] in its extensions, where
//! the `RequireAuth` and `SessionToken` extractors pick them up.
//!
//! Requests without the header pass through untouched, so login, the
//! questionnaire and `/health` live on the same router as protected routes.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::adapters::http::error::{error_response, handle_auth_error, ErrorResponse};
use crate::domain::foundation::AuthenticatedUser;
use crate::ports::SessionValidator;

pub type AuthState = Arc<dyn SessionValidator>;

/// The raw token of the session that authenticated this request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionToken(pub String);

fn bearer_token(request: &Request) -> Option<&str> {
    let value = request.headers().get(AUTHORIZATION)?.to_str().ok()?;
    value.strip_prefix("Bearer ").map(str::trim)
}

pub async fn auth_middleware(
    State(validator): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Response {
    let Some(token) = bearer_token(&request).map(str::to_owned) else {
        return next.run(request).await;
    };

    let user = match validator.validate(&token).await {
        Ok(user) => user,
        Err(e) => {
            tracing::debug!(error = %e, "bearer token rejected");
            return handle_auth_error(e);
        }
    };

    let extensions = request.extensions_mut();
    extensions.insert(user);
    extensions.insert(SessionToken(token));
    next.run(request).await
}

/// The signed-in user; 401 when the request carried no valid token.
#[derive(Debug, Clone)]
pub struct RequireAuth(pub AuthenticatedUser);

fn from_extensions<T: Clone + Send + Sync + 'static>(parts: &Parts) -> Result<T, AuthRejection> {
    parts
        .extensions
        .get::<T>()
        .cloned()
        .ok_or(AuthRejection::Unauthenticated)
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for RequireAuth {
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        from_extensions(parts).map(RequireAuth)
    }
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for SessionToken {
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        from_extensions(parts)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthRejection {
    Unauthenticated,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            AuthRejection::Unauthenticated => error_response(
                StatusCode::UNAUTHORIZED,
                ErrorResponse::unauthorized("Sign in to continue"),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::session::InMemorySessionStore;
    use crate::domain::foundation::{Role, UserId};
    use crate::ports::SessionStore;
    use axum::{body::Body, middleware, routing::get, Router};
    use tower::ServiceExt;

    fn doctor() -> AuthenticatedUser {
        AuthenticatedUser::new(
            UserId::new("d1").unwrap(),
            "Dr. Priya Sharma",
            "drpriya@example.com",
            Role::Doctor,
        )
    }

    async fn whoami(RequireAuth(user): RequireAuth, SessionToken(token): SessionToken) -> String {
        format!("{}:{}", user.id, token.len())
    }

    fn app(store: Arc<InMemorySessionStore>) -> Router {
        let validator: AuthState = store;
        Router::new()
            .route("/whoami", get(whoami))
            .route("/open", get(|| async { "open" }))
            .layer(middleware::from_fn_with_state(validator, auth_middleware))
    }

    fn get_request(uri: &str, token: Option<&str>) -> axum::http::Request<Body> {
        let mut builder = axum::http::Request::builder().uri(uri);
        if let Some(token) = token {
            builder = builder.header(AUTHORIZATION, format!("Bearer {}", token));
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn valid_token_injects_user_and_token() {
        let store = Arc::new(InMemorySessionStore::new());
        let session = store.begin(doctor()).await.unwrap();

        let response = app(store)
            .oneshot(get_request("/whoami", Some(&session.token)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(
            String::from_utf8(body.to_vec()).unwrap(),
            format!("d1:{}", session.token.len())
        );
    }

    #[tokio::test]
    async fn stale_token_is_rejected_by_middleware() {
        let store = Arc::new(InMemorySessionStore::new());
        store.begin(doctor()).await.unwrap();

        let response = app(store)
            .oneshot(get_request("/open", Some("not-the-token")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn missing_header_passes_through_public_routes() {
        let store = Arc::new(InMemorySessionStore::new());

        let open = app(store.clone())
            .oneshot(get_request("/open", None))
            .await
            .unwrap();
        assert_eq!(open.status(), StatusCode::OK);

        let protected = app(store)
            .oneshot(get_request("/whoami", None))
            .await
            .unwrap();
        assert_eq!(protected.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn extractor_rejects_request_without_user() {
        let (mut parts, ()) = axum::http::Request::builder()
            .uri("/patients")
            .body(())
            .unwrap()
            .into_parts();

        let result = RequireAuth::from_request_parts(&mut parts, &()).await;

        assert!(matches!(result, Err(AuthRejection::Unauthenticated)));
    }

    #[test]
    fn bearer_prefix_is_required() {
        let request = axum::http::Request::builder()
            .header(AUTHORIZATION, "Basic dXNlcjpwYXNz")
            .body(Body::empty())
            .unwrap();
        assert_eq!(bearer_token(&request), None);

        let request = axum::http::Request::builder()
            .header(AUTHORIZATION, "Bearer abc")
            .body(Body::empty())
            .unwrap();
        assert_eq!(bearer_token(&request), Some("abc"));
    }

    #[test]
    fn missing_user_maps_to_401() {
        let response = AuthRejection::Unauthenticated.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
