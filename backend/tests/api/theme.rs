use crate::helpers::{spawn_app, AsUser, ADMIN_EMAIL};
use futures_util::StreamExt;
use hyper::StatusCode;
use interfacing::{Mode, ThemeConfig};
use static_routes::*;
use tokio_tungstenite::tungstenite::Message;

#[tokio::test]
async fn theme_record_starts_at_the_default() {
    let app = spawn_app().await;

    let body = app
        .get(routes().api.theme.current)
        .send()
        .await
        .unwrap()
        .json::<ThemeConfig>()
        .await
        .unwrap();

    assert_eq!(body, ThemeConfig::default());
}

#[tokio::test]
async fn admin_sets_a_theme_and_the_record_is_stamped() {
    let app = spawn_app().await;

    let response = app
        .post(routes().api.theme.current)
        .as_admin()
        .json(&serde_json::json!({"theme": "diwali", "mode": "dark"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = app
        .get(routes().api.theme.current)
        .send()
        .await
        .unwrap()
        .json::<ThemeConfig>()
        .await
        .unwrap();

    assert_eq!(body.theme, "diwali");
    assert_eq!(body.mode, Mode::Dark);
    assert_eq!(body.changed_by.as_deref(), Some(ADMIN_EMAIL));
    assert!(body.timestamp.is_some());
}

#[tokio::test]
async fn unsupported_theme_is_rejected_and_record_unchanged() {
    let app = spawn_app().await;

    let response = app
        .post(routes().api.theme.current)
        .as_admin()
        .json(&serde_json::json!({"theme": "halloween"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = app
        .get(routes().api.theme.current)
        .send()
        .await
        .unwrap()
        .json::<ThemeConfig>()
        .await
        .unwrap();
    assert_eq!(body, ThemeConfig::default());
}

type Socket =
    tokio_tungstenite::WebSocketStream<tokio_tungstenite::MaybeTlsStream<tokio::net::TcpStream>>;

async fn next_config(socket: &mut Socket) -> ThemeConfig {
    let frame = tokio::time::timeout(std::time::Duration::from_secs(5), socket.next())
        .await
        .expect("theme feed delivery timed out")
        .expect("theme feed closed")
        .expect("theme feed errored");

    match frame {
        Message::Text(text) => serde_json::from_str(&text).unwrap(),
        other => panic!("unexpected frame: {other:?}"),
    }
}

#[tokio::test]
async fn ws_subscriber_gets_the_replay_then_live_pushes() {
    let app = spawn_app().await;

    // set a theme before anyone subscribes; note that this must complete
    // with zero websocket clients connected
    let response = app
        .post(routes().api.theme.current)
        .as_admin()
        .json(&serde_json::json!({"theme": "pongal"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let ws_url = format!(
        "{}{}",
        app.address.replace("http", "ws"),
        routes().api.theme.ws.get().complete()
    );
    let (mut socket, _) = tokio_tungstenite::connect_async(ws_url).await.unwrap();

    let replay = next_config(&mut socket).await;
    assert_eq!(replay.theme, "pongal");

    let response = app
        .post(routes().api.theme.current)
        .as_admin()
        .json(&serde_json::json!({"theme": "christmas", "mode": "dark"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let pushed = next_config(&mut socket).await;
    assert_eq!(pushed.theme, "christmas");
    assert_eq!(pushed.mode, Mode::Dark);
}

#[tokio::test]
async fn theme_change_is_admin_only() {
    let app = spawn_app().await;

    let response = app
        .post(routes().api.theme.current)
        .as_guest()
        .json(&serde_json::json!({"theme": "pongal"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
