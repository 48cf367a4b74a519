use crate::helpers::{event_form, spawn_app, AsUser};
use base64::Engine as _;
use hyper::StatusCode;
use interfacing::{AttachmentReceipt, Event, EventsResponse};
use static_routes::*;

fn upload_body() -> serde_json::Value {
    serde_json::json!({
        "fileName": "poster.png",
        "mimeType": "image/png",
        "data": base64::engine::general_purpose::STANDARD.encode(b"not really a png"),
    })
}

async fn created_event(app: &crate::helpers::TestApp) -> Event {
    let response = app
        .post(routes().api.events)
        .as_admin()
        .json(&event_form("Pongal Feast", "2026-01-14"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    response.json::<Event>().await.unwrap()
}

async fn fetch_event(app: &crate::helpers::TestApp, id: &str) -> Event {
    app.get(routes().api.events)
        .send()
        .await
        .unwrap()
        .json::<EventsResponse>()
        .await
        .unwrap()
        .events
        .into_iter()
        .find(|event| event.id == id)
        .unwrap()
}

#[tokio::test]
async fn upload_attaches_a_file_id_to_the_event() {
    let app = spawn_app().await;
    let event = created_event(&app).await;

    let response = app
        .post_path(&format!("/api/events/{}/attachments", event.id))
        .as_admin()
        .json(&upload_body())
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let receipt = response.json::<AttachmentReceipt>().await.unwrap();
    assert!(receipt.success);
    assert!(receipt.file_id.ends_with("_poster.png"));

    let event = fetch_event(&app, &event.id).await;
    assert!(event.file_ids.contains(&receipt.file_id));
}

#[tokio::test]
async fn upload_to_an_unknown_event_is_a_404() {
    let app = spawn_app().await;

    let response = app
        .post_path("/api/events/Nothing_2026-01-01/attachments")
        .as_admin()
        .json(&upload_body())
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn upload_is_admin_only() {
    let app = spawn_app().await;
    let event = created_event(&app).await;

    let response = app
        .post_path(&format!("/api/events/{}/attachments", event.id))
        .as_guest()
        .json(&upload_body())
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn delete_clears_the_file_id_column_entry() {
    let app = spawn_app().await;
    let event = created_event(&app).await;

    let receipt = app
        .post_path(&format!("/api/events/{}/attachments", event.id))
        .as_admin()
        .json(&upload_body())
        .send()
        .await
        .unwrap()
        .json::<AttachmentReceipt>()
        .await
        .unwrap();

    let response = app
        .delete_path(&format!(
            "/api/events/{}/attachments/{}",
            event.id, receipt.file_id
        ))
        .as_admin()
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let event = fetch_event(&app, &event.id).await;
    assert!(!event.file_ids.contains(&receipt.file_id));
}
