pub mod auth;
pub mod health;
pub mod posts;
pub mod profiles;
pub mod users;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /home              homepage data
/// /auth/...          register / login / refresh / logout
/// /posts/...         post CRUD
/// /profiles/...      profile aggregation and search
/// /users/...         credential changes, promotion, deletion, avatars
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/home", get(handlers::home::home))
        .nest("/auth", auth::router())
        .nest("/posts", posts::router())
        .nest("/profiles", profiles::router())
        .nest("/users", users::router())
}
