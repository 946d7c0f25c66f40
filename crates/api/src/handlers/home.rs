//! Handler for the homepage data endpoint.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use quill_db::models::post::Post;
use quill_db::models::user::UserResponse;
use quill_db::repositories::{PostRepo, UserRepo};

use crate::error::AppResult;
use crate::state::AppState;

/// How many recent registrants the homepage shows.
const RECENT_REGISTRANTS: i64 = 5;

/// Response body for `GET /home`.
#[derive(Debug, Serialize)]
pub struct HomeResponse {
    /// The most recent post, if any exist.
    pub latest_post: Option<Post>,
    /// Most recently registered users, newest first.
    pub recent_users: Vec<UserResponse>,
}

/// GET /api/v1/home
///
/// Homepage data: the latest post and the most recent registrants.
pub async fn home(State(state): State<AppState>) -> AppResult<Json<HomeResponse>> {
    let latest_post = PostRepo::latest(&state.pool).await?;
    let recent = UserRepo::list_recent(&state.pool, RECENT_REGISTRANTS).await?;

    Ok(Json(HomeResponse {
        latest_post,
        recent_users: recent.iter().map(UserResponse::from).collect(),
    }))
}
