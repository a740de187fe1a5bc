//! Bearer authentication for `/api`.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;
use serde_json::json;

use crate::{error::AppError, state::AppState};

/// Lets the request through only with `Authorization: Bearer <admin token>`.
///
/// The token is checked by [`crate::application::services::AuthService`],
/// the same way the admin login checks it. Rejections are `401` with
/// `WWW-Authenticate: Bearer`, before any upstream call is made.
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let token = bearer_token(&mut parts).await.inspect_err(|_| {
        tracing::debug!(path = %parts.uri.path(), "API request without bearer token");
    })?;

    st.auth_service.authenticate(&token).await?;

    Ok(next.run(Request::from_parts(parts, body)).await)
}

async fn bearer_token(parts: &mut Parts) -> Result<String, AppError> {
    AuthBearer::from_request_parts(parts, &())
        .await
        .map(|AuthBearer(token)| token)
        .map_err(|_| {
            AppError::unauthorized(
                "Unauthorized",
                json!({"reason": "Authorization header is missing or invalid"}),
            )
        })
}
