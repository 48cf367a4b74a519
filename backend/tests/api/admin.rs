use crate::helpers::{spawn_app, ADMIN_EMAIL};
use interfacing::AdminCheck;

#[tokio::test]
async fn admin_check_recognizes_the_fallback_admin() {
    let app = spawn_app().await;

    let url = format!("{}/api/admin/check?email={}", app.address, ADMIN_EMAIL);
    let body = app
        .api_client
        .get(url)
        .send()
        .await
        .unwrap()
        .json::<AdminCheck>()
        .await
        .unwrap();

    assert!(body.success);
    assert!(body.is_admin);
}

#[tokio::test]
async fn admin_check_rejects_unknown_and_missing_emails() {
    let app = spawn_app().await;

    let url = format!("{}/api/admin/check?email=guest@example.com", app.address);
    let body = app
        .api_client
        .get(url)
        .send()
        .await
        .unwrap()
        .json::<AdminCheck>()
        .await
        .unwrap();
    assert!(!body.is_admin);

    let url = format!("{}/api/admin/check", app.address);
    let body = app
        .api_client
        .get(url)
        .send()
        .await
        .unwrap()
        .json::<AdminCheck>()
        .await
        .unwrap();
    assert!(!body.is_admin);
}
