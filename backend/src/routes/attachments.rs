//! Event file attachments.
//!
//! Uploads land in the configured uploads directory under a generated id,
//! and the id joins the event row's File IDs column. Deletion covers both
//! the file and its column entry.

use crate::routes::imports::*;
use base64::Engine as _;
use interfacing::{AttachmentReceipt, AttachmentUpload};

#[axum_macros::debug_handler]
pub async fn upload_attachment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    maybe_bearer: Option<TypedHeader<Authorization<Bearer>>>,
    headers: HeaderMap,
    payload: Result<Json<AttachmentUpload>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<AttachmentReceipt>)> {
    let caller = resolve_caller(&state, &maybe_bearer, &headers).await;
    let email = require_admin(&state.sheets, caller).await?;

    let Json(upload) = payload?;

    state.sheets.event(&id).await.ok_or(ApiError::EntryNotFound)?;

    let body = base64::engine::general_purpose::STANDARD
        .decode(upload.data.as_bytes())
        .map_err(|_| ApiError::BadRequest)?;

    let file_id = format!(
        "{}_{}",
        uuid::Uuid::new_v4(),
        sanitize_file_name(&upload.file_name)
    );

    std::fs::create_dir_all(&state.uploads_dir)
        .and_then(|()| std::fs::write(state.uploads_dir.join(&file_id), body))
        .context("failed to store the attachment")?;

    state.sheets.append_file_id(&id, &file_id).await?;

    tracing::info!("Attachment {} added to {} by {}", file_id, id, email);
    Ok((
        StatusCode::CREATED,
        Json(AttachmentReceipt {
            success: true,
            file_id,
        }),
    ))
}

#[axum_macros::debug_handler]
pub async fn delete_attachment(
    State(state): State<AppState>,
    Path((id, file_id)): Path<(String, String)>,
    maybe_bearer: Option<TypedHeader<Authorization<Bearer>>>,
    headers: HeaderMap,
) -> ApiResult<Json<AttachmentReceipt>> {
    let caller = resolve_caller(&state, &maybe_bearer, &headers).await;
    let email = require_admin(&state.sheets, caller).await?;

    // the column entry is authoritative; a missing file on disk is not an
    // error worth surfacing to the admin page
    state.sheets.remove_file_id(&id, &file_id).await?;

    if sanitize_file_name(&file_id) == file_id {
        if let Err(e) = std::fs::remove_file(state.uploads_dir.join(&file_id)) {
            tracing::warn!("Attachment file {} not removed: {}", file_id, e);
        }
    }

    tracing::info!("Attachment {} removed from {} by {}", file_id, id, email);
    Ok(Json(AttachmentReceipt {
        success: true,
        file_id,
    }))
}

fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '.' | '-' | '_' => c,
            _ => '-',
        })
        .collect()
}
