//! Post entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;

use quill_core::types::{DbId, Timestamp};

/// A row from the `posts` table.
///
/// `author` is a snapshot of the creating user's username at creation time;
/// it is never rewritten, not even when that user renames themself. Only
/// `update_author` reflects the most recent editor.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Post {
    pub id: DbId,
    pub title: String,
    pub intro: String,
    pub body: String,
    pub author: String,
    pub update_author: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a new post.
#[derive(Debug)]
pub struct CreatePost {
    pub title: String,
    pub intro: String,
    pub body: String,
    /// Acting user's username at creation time.
    pub author: String,
}

/// DTO for updating a post's content.
#[derive(Debug)]
pub struct UpdatePost {
    pub title: String,
    pub intro: String,
    pub body: String,
    /// Username of the editor; stamped into `update_author`.
    pub editor: String,
}
