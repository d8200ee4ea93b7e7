use axum::{
    Extension, Json,
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use serde_json::json;

use oauth2_session::{Auth, ErrorCode, ProcedureError, call_protected, call_public};
use oauth2_session_axum::AUTH_ROUTE_PREFIX;

use crate::posts;

#[derive(Deserialize)]
pub(crate) struct CreatePostInput {
    title: String,
    body: Option<String>,
}

pub(crate) async fn index(Extension(auth): Extension<Auth>) -> Json<serde_json::Value> {
    let user = auth.user.map(|u| json!({"id": u.id, "name": u.name}));
    Json(json!({
        "user": user,
        "login": format!("{}/github", AUTH_ROUTE_PREFIX.as_str()),
    }))
}

pub(crate) async fn list_posts(Extension(auth): Extension<Auth>) -> Response {
    let result = call_public(auth, |ctx| async move {
        let posts = posts::list_posts(&ctx.db).await?;
        Ok(Json(posts))
    })
    .await;

    procedure_response(result)
}

pub(crate) async fn post_by_id(
    Extension(auth): Extension<Auth>,
    Path(id): Path<i64>,
) -> Response {
    let result = call_public(auth, |ctx| async move {
        let post = posts::get_post(&ctx.db, id)
            .await?
            .ok_or_else(|| ProcedureError::not_found(format!("No post with id {id}")))?;
        Ok(Json(post))
    })
    .await;

    procedure_response(result)
}

pub(crate) async fn create_post(
    Extension(auth): Extension<Auth>,
    Json(input): Json<CreatePostInput>,
) -> Response {
    let result = call_protected(auth, |ctx| async move {
        let id = posts::create_post(&ctx.db, &input.title, input.body.as_deref(), &ctx.user.id)
            .await?;
        Ok(Json(json!({"id": id})))
    })
    .await;

    procedure_response(result)
}

pub(crate) async fn delete_post(
    Extension(auth): Extension<Auth>,
    Path(id): Path<i64>,
) -> Response {
    let result = call_protected(auth, |ctx| async move {
        let deleted = posts::delete_post_for_user(&ctx.db, id, &ctx.user.id).await?;
        if !deleted {
            return Err(ProcedureError::not_found(format!("No post with id {id}")));
        }
        Ok(Json(json!({"deleted": id})))
    })
    .await;

    procedure_response(result)
}

/// Map a procedure outcome onto an HTTP response. Navigation signals become
/// their routing action; coded errors become a JSON error body.
fn procedure_response<T: IntoResponse>(result: Result<T, ProcedureError>) -> Response {
    match result {
        Ok(value) => value.into_response(),
        Err(ProcedureError::Redirect(target)) => Redirect::to(&target).into_response(),
        Err(ProcedureError::PageNotFound) => {
            (StatusCode::NOT_FOUND, "Not found").into_response()
        }
        Err(ProcedureError::Rpc { code, message }) => {
            let status = match code {
                ErrorCode::BadRequest => StatusCode::BAD_REQUEST,
                ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
                ErrorCode::NotFound => StatusCode::NOT_FOUND,
                ErrorCode::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
            };
            (
                status,
                Json(json!({"code": code.as_str(), "message": message})),
            )
                .into_response()
        }
    }
}
