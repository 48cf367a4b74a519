use crate::routes::imports::*;
use interfacing::{Event, EventForm, EventsResponse};

#[derive(Deserialize)]
pub struct EmailQuery {
    pub email: Option<String>,
}

/// Listing never requires auth; `is_admin` in the response reflects the
/// optional caller identity so the client can decide whether to draw the
/// editing controls.
#[axum_macros::debug_handler]
pub async fn event_list(
    State(state): State<AppState>,
    maybe_bearer: Option<TypedHeader<Authorization<Bearer>>>,
    headers: HeaderMap,
    Query(query): Query<EmailQuery>,
) -> Json<EventsResponse> {
    let caller = match resolve_caller(&state, &maybe_bearer, &headers).await {
        Some(email) => Some(email),
        None => query.email.map(|email| email.trim().to_lowercase()),
    };

    let is_admin = match &caller {
        Some(email) => state.sheets.is_admin(email).await,
        None => false,
    };

    Json(EventsResponse {
        success: true,
        events: state.sheets.events().await,
        is_admin,
        timestamp: now_rfc3339(),
    })
}

#[axum_macros::debug_handler]
pub async fn create_event(
    State(state): State<AppState>,
    maybe_bearer: Option<TypedHeader<Authorization<Bearer>>>,
    headers: HeaderMap,
    payload: Result<Json<EventForm>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Event>)> {
    let caller = resolve_caller(&state, &maybe_bearer, &headers).await;
    let email = require_admin(&state.sheets, caller).await?;

    let Json(form) = payload?;
    let event = state.sheets.add_event(&form).await?;

    tracing::info!("Event {} added by {}", event.id, email);
    Ok((StatusCode::CREATED, Json(event)))
}

#[axum_macros::debug_handler]
pub async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
    maybe_bearer: Option<TypedHeader<Authorization<Bearer>>>,
    headers: HeaderMap,
    payload: Result<Json<EventForm>, JsonRejection>,
) -> ApiResult<Json<Event>> {
    let caller = resolve_caller(&state, &maybe_bearer, &headers).await;
    let email = require_admin(&state.sheets, caller).await?;

    let Json(form) = payload?;
    let event = state.sheets.update_event(&id, &form).await?;

    tracing::info!("Event {} updated by {}", event.id, email);
    Ok(Json(event))
}

#[axum_macros::debug_handler]
pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
    maybe_bearer: Option<TypedHeader<Authorization<Bearer>>>,
    headers: HeaderMap,
) -> ApiResult<Json<Event>> {
    let caller = resolve_caller(&state, &maybe_bearer, &headers).await;
    let email = require_admin(&state.sheets, caller).await?;

    let event = state.sheets.delete_event(&id).await?;

    tracing::info!("Event {} deleted by {}", event.id, email);
    Ok(Json(event))
}
