use crate::routes::imports::*;

pub async fn health_check() -> impl IntoResponse {
    StatusCode::OK
}
