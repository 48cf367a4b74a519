pub use crate::{
    auth::{require_admin, USER_EMAIL_HEADER},
    error::{ApiError, ApiResult},
    sheets::now_rfc3339,
    startup::AppState,
};

pub use anyhow::Context as _;
pub use axum::{
    extract::{
        rejection::JsonRejection,
        Json, Path, Query, State, TypedHeader,
    },
    headers::{authorization::Bearer, Authorization},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
pub use serde::{Deserialize, Serialize};

/// Resolves the caller's email from the request: a bearer id token when
/// present (verified if a tokeninfo endpoint is configured), otherwise the
/// advisory `x-user-email` header.
pub async fn resolve_caller(
    state: &AppState,
    maybe_bearer: &Option<TypedHeader<Authorization<Bearer>>>,
    headers: &HeaderMap,
) -> Option<String> {
    let token = maybe_bearer
        .as_ref()
        .map(|TypedHeader(Authorization(bearer))| bearer.token().to_owned());

    let client_email = headers
        .get(USER_EMAIL_HEADER)
        .and_then(|value| value.to_str().ok());

    state
        .verifier
        .resolve_email(token.as_deref(), client_email)
        .await
}
