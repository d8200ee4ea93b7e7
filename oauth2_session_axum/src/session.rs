use axum::{
    extract::{FromRequestParts, OptionalFromRequestParts},
    response::{IntoResponse, Response},
};
use http::{StatusCode, request::Parts};

use oauth2_session::{Auth, Session, User};

/// Authenticated user information, available as an Axum extractor.
///
/// Requires the `load_auth` middleware, which resolves the session cookie
/// once per request and stores the result in the request extensions. Using
/// the extractor on a route outside that middleware is a wiring bug and
/// surfaces as a 500.
///
/// An anonymous request is rejected with 401; use `OptionalAuthUser` on
/// routes that serve both audiences.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub user: User,
    pub session: Session,
}

/// Like `AuthUser`, but anonymous requests extract as `None` instead of
/// being rejected.
#[derive(Clone, Debug)]
pub struct OptionalAuthUser(pub Option<AuthUser>);

fn auth_from_extensions(parts: &Parts) -> Result<Auth, Response> {
    parts.extensions.get::<Auth>().cloned().ok_or_else(|| {
        tracing::error!("AuthUser extractor used without the load_auth middleware");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
    })
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let auth = auth_from_extensions(parts)?;
        match (auth.user, auth.session) {
            (Some(user), Some(session)) => Ok(AuthUser { user, session }),
            _ => Err((StatusCode::UNAUTHORIZED, "Unauthorized").into_response()),
        }
    }
}

impl<S> OptionalFromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> Result<Option<Self>, Self::Rejection> {
        let auth = auth_from_extensions(parts)?;
        match (auth.user, auth.session) {
            (Some(user), Some(session)) => Ok(Some(AuthUser { user, session })),
            _ => Ok(None),
        }
    }
}

impl<S> FromRequestParts<S> for OptionalAuthUser
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let user =
            <AuthUser as OptionalFromRequestParts<S>>::from_request_parts(parts, state).await?;
        Ok(OptionalAuthUser(user))
    }
}
