//! Handlers for the `/posts` resource.
//!
//! Reads are public; mutations require authentication and pass through the
//! central policy gate (owner-or-admin for edit and delete).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use quill_core::error::CoreError;
use quill_core::policy::{authorize, Action};
use quill_core::types::DbId;
use quill_db::models::post::{CreatePost, Post, UpdatePost};
use quill_db::repositories::PostRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /posts`.
#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub intro: String,
    pub body: String,
}

/// Request body for `PUT /posts/{id}`.
#[derive(Debug, Deserialize)]
pub struct UpdatePostRequest {
    pub title: String,
    pub intro: String,
    pub body: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/posts
///
/// Create a post. The acting user's current username is stamped into the
/// `author` snapshot; `update_author` starts out unset.
pub async fn create_post(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
    Json(input): Json<CreatePostRequest>,
) -> AppResult<(StatusCode, Json<Post>)> {
    let post = PostRepo::create(
        &state.pool,
        &CreatePost {
            title: input.title,
            intro: input.intro,
            body: input.body,
            author: actor.username,
        },
    )
    .await?;

    tracing::info!(post_id = post.id, author = %post.author, "Post created");

    Ok((StatusCode::CREATED, Json(post)))
}

/// GET /api/v1/posts
///
/// List all posts, newest first.
pub async fn list_posts(State(state): State<AppState>) -> AppResult<Json<Vec<Post>>> {
    let posts = PostRepo::list_newest_first(&state.pool).await?;
    Ok(Json(posts))
}

/// GET /api/v1/posts/{id}
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Post>> {
    let post = PostRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "post", id }))?;
    Ok(Json(post))
}

/// PUT /api/v1/posts/{id}
///
/// Rewrite title/intro/body and stamp the acting user into `update_author`.
/// The `author` snapshot is never touched.
pub async fn update_post(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePostRequest>,
) -> AppResult<Json<Post>> {
    let post = PostRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "post", id }))?;

    if !authorize(&actor, &Action::EditPost { author: &post.author }) {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the author or an admin may edit this post".into(),
        )));
    }

    let updated = PostRepo::update(
        &state.pool,
        id,
        &UpdatePost {
            title: input.title,
            intro: input.intro,
            body: input.body,
            editor: actor.username,
        },
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound { entity: "post", id }))?;

    Ok(Json(updated))
}

/// DELETE /api/v1/posts/{id}
pub async fn delete_post(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let post = PostRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "post", id }))?;

    if !authorize(&actor, &Action::DeletePost { author: &post.author }) {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the author or an admin may delete this post".into(),
        )));
    }

    if !PostRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound { entity: "post", id }));
    }

    Ok(StatusCode::NO_CONTENT)
}
