use crate::routes::imports::*;
use interfacing::AdminCheck;

#[derive(Deserialize)]
pub struct AdminCheckQuery {
    pub email: Option<String>,
}

#[axum_macros::debug_handler]
pub async fn admin_check(
    State(state): State<AppState>,
    Query(query): Query<AdminCheckQuery>,
) -> Json<AdminCheck> {
    let is_admin = match query.email {
        Some(email) => state.sheets.is_admin(&email).await,
        None => false,
    };

    Json(AdminCheck {
        success: true,
        is_admin,
    })
}
