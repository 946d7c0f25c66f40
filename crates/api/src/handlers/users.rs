//! Handlers for the `/users` resource: credential changes, admin promotion,
//! and account deletion.
//!
//! Credential changes require the current password as confirmation and are
//! self-only; promotion is admin-only; deletion is self-or-admin. All checks
//! run through `quill_core::policy`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use quill_core::error::CoreError;
use quill_core::policy::{authorize, Action};
use quill_core::roles::ROLE_ADMIN;
use quill_core::types::DbId;
use quill_db::models::user::UserResponse;
use quill_db::repositories::{SessionRepo, UserRepo};

use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::error::{AppError, AppResult};
use crate::handlers::auth::MIN_PASSWORD_LENGTH;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `PUT /users/{id}/username`.
#[derive(Debug, Deserialize)]
pub struct ChangeUsernameRequest {
    pub current_password: String,
    pub new_username: String,
}

/// Request body for `PUT /users/{id}/password`.
#[derive(Debug, Deserialize)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// PUT /api/v1/users/{id}/username
///
/// Rename the account. Requires the current password. Past posts keep their
/// author snapshot; only the user row changes.
pub async fn change_username(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<ChangeUsernameRequest>,
) -> AppResult<Json<UserResponse>> {
    if !authorize(&actor, &Action::ChangeCredentials { user_id: id }) {
        return Err(AppError::Core(CoreError::Forbidden(
            "You may only change your own username".into(),
        )));
    }

    let user = confirm_current_password(&state, id, &input.current_password).await?;

    let policy = &state.config.username_policy;
    policy.check_shape(&input.new_username)?;
    if input.new_username != user.username {
        let taken = UserRepo::username_exists(&state.pool, &input.new_username).await?;
        policy.check_available(&input.new_username, taken)?;
    }

    UserRepo::update_username(&state.pool, id, &input.new_username).await?;

    let updated = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "user", id }))?;

    tracing::info!(user_id = id, new_username = %updated.username, "Username changed");

    Ok(Json(UserResponse::from(&updated)))
}

/// PUT /api/v1/users/{id}/password
///
/// Replace the password. Requires the current password; revokes all active
/// sessions so old refresh tokens die with the old password.
pub async fn change_password(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<ChangePasswordRequest>,
) -> AppResult<StatusCode> {
    if !authorize(&actor, &Action::ChangeCredentials { user_id: id }) {
        return Err(AppError::Core(CoreError::Forbidden(
            "You may only change your own password".into(),
        )));
    }

    confirm_current_password(&state, id, &input.current_password).await?;

    validate_password_strength(&input.new_password, MIN_PASSWORD_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let hashed = hash_password(&input.new_password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    UserRepo::update_password(&state.pool, id, &hashed).await?;
    SessionRepo::revoke_all_for_user(&state.pool, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/users/{id}/promote
///
/// Promote a user to the admin role. Admin-only.
pub async fn promote(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<UserResponse>> {
    if !authorize(&actor, &Action::PromoteUser) {
        return Err(AppError::Core(CoreError::Forbidden(
            "Admin role required".into(),
        )));
    }

    if !UserRepo::set_role(&state.pool, id, ROLE_ADMIN).await? {
        return Err(AppError::Core(CoreError::NotFound { entity: "user", id }));
    }

    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "user", id }))?;

    tracing::info!(user_id = id, promoted_by = actor.user_id, "User promoted to admin");

    Ok(Json(UserResponse::from(&user)))
}

/// DELETE /api/v1/users/{id}
///
/// Delete a user account (self or admin). Sessions go with it via cascade;
/// the user's posts keep their author snapshot.
pub async fn delete_user(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !authorize(&actor, &Action::DeleteUser { user_id: id }) {
        return Err(AppError::Core(CoreError::Forbidden(
            "You may only delete your own account".into(),
        )));
    }

    if !UserRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound { entity: "user", id }));
    }

    tracing::info!(user_id = id, deleted_by = actor.user_id, "User account deleted");

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Load the user and verify the supplied current password.
async fn confirm_current_password(
    state: &AppState,
    id: DbId,
    current_password: &str,
) -> AppResult<quill_db::models::user::User> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "user", id }))?;

    let valid = verify_password(current_password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !valid {
        return Err(AppError::Core(CoreError::BadCredentials));
    }

    Ok(user)
}
