//! Route definitions for the `/posts` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::posts;
use crate::state::AppState;

/// Routes mounted at `/posts`.
///
/// ```text
/// GET    /          -> list (newest first)
/// POST   /          -> create (auth)
/// GET    /{id}      -> get
/// PUT    /{id}      -> update (auth, owner-or-admin)
/// DELETE /{id}      -> delete (auth, owner-or-admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(posts::list_posts).post(posts::create_post))
        .route(
            "/{id}",
            get(posts::get_post)
                .put(posts::update_post)
                .delete(posts::delete_post),
        )
}
