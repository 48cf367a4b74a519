use crate::routes::imports::*;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use futures_util::{
    sink::SinkExt,
    stream::{SplitSink, SplitStream, StreamExt},
};
use interfacing::{Festival, ThemeChangeForm, ThemeConfig};

#[axum_macros::debug_handler]
pub async fn current_theme(State(state): State<AppState>) -> Json<ThemeConfig> {
    Json(state.sheets.theme().await)
}

/// Accepts a validated festival id, stamps it and fans it out. Last write
/// wins; racing admins are resolved by whatever lands in the store last.
#[axum_macros::debug_handler]
pub async fn set_theme(
    State(state): State<AppState>,
    maybe_bearer: Option<TypedHeader<Authorization<Bearer>>>,
    headers: HeaderMap,
    payload: Result<Json<ThemeChangeForm>, JsonRejection>,
) -> ApiResult<Json<ThemeConfig>> {
    let caller = resolve_caller(&state, &maybe_bearer, &headers).await;
    let email = require_admin(&state.sheets, caller).await?;

    let Json(form) = payload?;

    let festival = Festival::try_from(form.theme.as_str())
        .map_err(|()| ApiError::UnsupportedTheme(form.theme.clone()))?;

    let config = ThemeConfig {
        theme: festival.as_str().to_owned(),
        mode: form.mode,
        timestamp: Some(now_rfc3339()),
        changed_by: Some(form.changed_by.unwrap_or_else(|| email.clone())),
    };

    state.sheets.set_theme(config.clone()).await?;
    state.theme_hub.publish(config.clone()).await;

    tracing::info!("Theme set to {} by {}", config.theme, email);
    Ok(Json(config))
}

#[axum_macros::debug_handler]
pub async fn ws_theme(
    maybe_ws: Result<WebSocketUpgrade, axum::extract::ws::rejection::WebSocketUpgradeRejection>,
    State(state): State<AppState>,
) -> Response {
    let ws = match maybe_ws {
        Ok(ws) => ws,
        Err(e) => {
            tracing::error!("{}", &e);
            return e.into_response();
        }
    };

    ws.on_upgrade(|socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: AppState) {
    tracing::info!("Theme subscriber connected");

    // attach before reading the replay record: a publish landing in between
    // then shows up in the receiver, and the client's idempotent re-apply
    // absorbs the duplicate
    let updates = state.theme_hub.subscribe();
    let replay = state.sheets.theme().await;

    let (sender, receiver) = socket.split();
    let rh = tokio::spawn(read(receiver));
    let wh = tokio::spawn(write(sender, replay, updates));

    // as soon as a closed channel error returns from any of these procedures,
    // cancel the other
    let () = tokio::select! {
        _ = rh => (),
        _ = wh => (),
    };

    tracing::info!("Theme subscriber disconnected");
}

async fn read(mut receiver: SplitStream<WebSocket>) {
    loop {
        match receiver.next().await {
            Some(Ok(msg)) => {
                tracing::info!("Received message: {msg:?}");
            }
            Some(Err(_)) | None => {
                tracing::info!("Client disconnected");
                return;
            }
        }
    }
}

async fn write(
    mut sender: SplitSink<WebSocket, Message>,
    replay: ThemeConfig,
    mut updates: async_broadcast::Receiver<ThemeConfig>,
) {
    if send(&mut sender, replay).await.is_err() {
        tracing::info!("Client disconnected before replay");
        return;
    }

    loop {
        match updates.recv().await {
            Ok(config) => {
                if send(&mut sender, config).await.is_err() {
                    tracing::info!("Client disconnected");
                    return;
                }
            }
            Err(async_broadcast::RecvError::Overflowed(_)) => {}
            Err(async_broadcast::RecvError::Closed) => return,
        }
    }
}

async fn send(
    sender: &mut SplitSink<WebSocket, Message>,
    config: ThemeConfig,
) -> Result<(), axum::Error> {
    let text = serde_json::to_string(&config).expect("theme record serializes");
    sender.send(Message::Text(text)).await
}
