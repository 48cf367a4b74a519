use crate::helpers::{event_form, spawn_app, AsUser, ADMIN_EMAIL};
use hyper::StatusCode;
use interfacing::EventsResponse;
use static_routes::*;

#[tokio::test]
async fn listing_starts_empty_and_requires_no_auth() {
    let app = spawn_app().await;

    let response = app.get(routes().api.events).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.json::<EventsResponse>().await.unwrap();
    assert!(body.success);
    assert!(body.events.is_empty());
    assert!(!body.is_admin);
}

#[tokio::test]
async fn listing_reports_admin_status_for_email_query() {
    let app = spawn_app().await;

    let url = format!("{}/api/events?email={}", app.address, ADMIN_EMAIL);
    let body = app
        .api_client
        .get(url)
        .send()
        .await
        .unwrap()
        .json::<EventsResponse>()
        .await
        .unwrap();

    assert!(body.is_admin);
}

#[tokio::test]
async fn create_is_admin_only() {
    let app = spawn_app().await;
    let form = event_form("Pongal Feast", "2026-01-14");

    let anonymous = app.post(routes().api.events).json(&form).send().await.unwrap();
    assert_eq!(anonymous.status(), StatusCode::UNAUTHORIZED);

    let guest = app
        .post(routes().api.events)
        .as_guest()
        .json(&form)
        .send()
        .await
        .unwrap();
    assert_eq!(guest.status(), StatusCode::UNAUTHORIZED);

    let admin = app
        .post(routes().api.events)
        .as_admin()
        .json(&form)
        .send()
        .await
        .unwrap();
    assert_eq!(admin.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn duplicate_name_and_date_conflicts() {
    let app = spawn_app().await;
    let form = event_form("Gala", "2026-01-01");

    let first = app
        .post(routes().api.events)
        .as_admin()
        .json(&form)
        .send()
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = app
        .post(routes().api.events)
        .as_admin()
        .json(&form)
        .send()
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn missing_name_is_a_bad_request() {
    let app = spawn_app().await;

    let response = app
        .post(routes().api.events)
        .as_admin()
        .json(&event_form("", "2026-01-01"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn listing_is_sorted_by_date() {
    let app = spawn_app().await;

    for (name, date) in [
        ("Diwali Night", "2026-11-08"),
        ("Pongal Feast", "2026-01-14"),
        ("Christmas Carols", "2026-12-24"),
    ] {
        let response = app
            .post(routes().api.events)
            .as_admin()
            .json(&event_form(name, date))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let body = app
        .get(routes().api.events)
        .send()
        .await
        .unwrap()
        .json::<EventsResponse>()
        .await
        .unwrap();

    let names = body
        .events
        .iter()
        .map(|event| event.event_name.as_str())
        .collect::<Vec<_>>();
    assert_eq!(
        names,
        ["Pongal Feast", "Diwali Night", "Christmas Carols"]
    );
}

#[tokio::test]
async fn update_renames_the_row_id() {
    let app = spawn_app().await;

    app.post(routes().api.events)
        .as_admin()
        .json(&event_form("Gala", "2026-01-01"))
        .send()
        .await
        .unwrap();

    let response = app
        .put_path("/api/events/Gala_2026-01-01")
        .as_admin()
        .json(&event_form("Gala", "2026-01-02"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = app
        .get(routes().api.events)
        .send()
        .await
        .unwrap()
        .json::<EventsResponse>()
        .await
        .unwrap();
    assert_eq!(body.events[0].id, "Gala_2026-01-02");
}

#[tokio::test]
async fn update_of_unknown_event_is_not_found() {
    let app = spawn_app().await;

    let response = app
        .put_path("/api/events/Nope_2026-01-01")
        .as_admin()
        .json(&event_form("Nope", "2026-01-01"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_removes_the_row() {
    let app = spawn_app().await;

    app.post(routes().api.events)
        .as_admin()
        .json(&event_form("Gala", "2026-01-01"))
        .send()
        .await
        .unwrap();

    let response = app
        .delete_path("/api/events/Gala_2026-01-01")
        .as_admin()
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let repeat = app
        .delete_path("/api/events/Gala_2026-01-01")
        .as_admin()
        .send()
        .await
        .unwrap();
    assert_eq!(repeat.status(), StatusCode::NOT_FOUND);
}
