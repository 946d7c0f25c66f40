//! Handlers for the `/profiles` resource (directory service).
//!
//! A profile aggregates the posts a user authored with the posts they last
//! edited. All profile endpoints require authentication; any authenticated
//! user may view any profile.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use quill_core::error::CoreError;
use quill_core::policy::{authorize, Action};
use quill_db::models::post::Post;
use quill_db::models::user::UserResponse;
use quill_db::repositories::{PostRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// A user's profile: who they are plus their authored and edited posts.
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub user: UserResponse,
    pub authored: Vec<Post>,
    pub edited: Vec<Post>,
}

/// Query params for `GET /profiles`.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Case-sensitive username substring. Absent or empty matches all users.
    pub q: Option<String>,
}

/// GET /api/v1/profiles/me
///
/// The acting user's own profile ("about" page data).
pub async fn me(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
) -> AppResult<Json<ProfileResponse>> {
    build_profile(&state, &actor.username).await
}

/// GET /api/v1/profiles/{username}
///
/// Another (or own) user's profile.
pub async fn by_username(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
    Path(username): Path<String>,
) -> AppResult<Json<ProfileResponse>> {
    if !authorize(&actor, &Action::ViewProfile) {
        return Err(AppError::Core(CoreError::Forbidden(
            "Profile browsing is not permitted".into(),
        )));
    }
    build_profile(&state, &username).await
}

/// GET /api/v1/profiles?q=substring
///
/// Case-sensitive substring search over usernames; no query returns all
/// users, ordered by descending id.
pub async fn search(
    State(state): State<AppState>,
    AuthUser(_actor): AuthUser,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<UserResponse>>> {
    let needle = params.q.unwrap_or_default();
    let users = UserRepo::search(&state.pool, &needle).await?;
    Ok(Json(users.iter().map(UserResponse::from).collect()))
}

/// Union a user record with their authored and edited posts.
async fn build_profile(state: &AppState, username: &str) -> AppResult<Json<ProfileResponse>> {
    let user = UserRepo::find_by_username(&state.pool, username)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No user named '{username}'")))?;

    let authored = PostRepo::list_by_author(&state.pool, username).await?;
    let edited = PostRepo::list_by_editor(&state.pool, username).await?;

    Ok(Json(ProfileResponse {
        user: UserResponse::from(&user),
        authored,
        edited,
    }))
}
