//! Route definitions for the `/profiles` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::profiles;
use crate::state::AppState;

/// Routes mounted at `/profiles` (all require auth).
///
/// ```text
/// GET /            -> search (?q= substring, absent = all)
/// GET /me          -> acting user's profile
/// GET /{username}  -> profile by username
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(profiles::search))
        .route("/me", get(profiles::me))
        .route("/{username}", get(profiles::by_username))
}
