//! Handlers for avatar upload and retrieval.
//!
//! Uploads are multipart with a single file field, validated by extension
//! (`.jpg` only) and size (4 MiB cap), then stored under `{user_id}.jpg`.

use axum::extract::{Multipart, Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;

use quill_core::avatar::validate_upload;
use quill_core::error::CoreError;
use quill_core::types::DbId;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// PUT /api/v1/users/me/avatar
///
/// Replace the acting user's avatar. Expects a multipart body with one file
/// field; the original filename decides the format check.
pub async fn upload(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
    mut multipart: Multipart,
) -> AppResult<StatusCode> {
    let field = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Malformed multipart body: {e}")))?
        .ok_or_else(|| AppError::BadRequest("Missing file field".into()))?;

    let filename = field
        .file_name()
        .map(str::to_string)
        .ok_or_else(|| AppError::BadRequest("File field has no filename".into()))?;

    let bytes = field
        .bytes()
        .await
        .map_err(|e| AppError::BadRequest(format!("Failed to read upload: {e}")))?;

    validate_upload(&filename, bytes.len())?;

    state.avatars.put(actor.user_id, &bytes)?;

    tracing::info!(user_id = actor.user_id, size = bytes.len(), "Avatar replaced");

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/users/{id}/avatar
///
/// Serve the stored avatar as `image/jpeg`.
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let bytes = state
        .avatars
        .get(id)?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "avatar", id }))?;

    Ok(([(header::CONTENT_TYPE, "image/jpeg")], bytes))
}
