//! Request handlers.
//!
//! Each submodule provides async handler functions for a single resource.
//! Handlers delegate to the repositories in `quill_db`, gate mutations
//! through `quill_core::policy`, and map errors via [`crate::error::AppError`].

pub mod auth;
pub mod avatars;
pub mod home;
pub mod posts;
pub mod profiles;
pub mod users;
