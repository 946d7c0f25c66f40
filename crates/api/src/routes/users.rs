//! Route definitions for the `/users` resource.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::{avatars, users};
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// PUT    /{id}/username  -> rename (self, current password)
/// PUT    /{id}/password  -> change password (self, current password)
/// POST   /{id}/promote   -> promote to admin (admin)
/// DELETE /{id}           -> delete account (self or admin)
/// PUT    /me/avatar      -> replace avatar (auth, .jpg <= 4 MiB)
/// GET    /{id}/avatar    -> serve avatar
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/me/avatar", put(avatars::upload))
        .route("/{id}/avatar", get(avatars::get))
        .route("/{id}/username", put(users::change_username))
        .route("/{id}/password", put(users::change_password))
        .route("/{id}/promote", post(users::promote))
        .route("/{id}", delete(users::delete_user))
}
