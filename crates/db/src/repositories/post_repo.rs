//! Repository for the `posts` table.

use sqlx::PgPool;

use quill_core::types::DbId;

use crate::models::post::{CreatePost, Post, UpdatePost};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, intro, body, author, update_author, created_at";

/// Provides CRUD operations for posts.
pub struct PostRepo;

impl PostRepo {
    /// Insert a new post, returning the created row.
    ///
    /// `author` is stamped from the acting user's current username and
    /// `update_author` starts out NULL.
    pub async fn create(pool: &PgPool, input: &CreatePost) -> Result<Post, sqlx::Error> {
        let query = format!(
            "INSERT INTO posts (title, intro, body, author)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Post>(&query)
            .bind(&input.title)
            .bind(&input.intro)
            .bind(&input.body)
            .bind(&input.author)
            .fetch_one(pool)
            .await
    }

    /// Find a post by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Post>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM posts WHERE id = $1");
        sqlx::query_as::<_, Post>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all posts, newest first (full scan by design at this scale).
    ///
    /// `id DESC` breaks creation-time ties deterministically.
    pub async fn list_newest_first(pool: &PgPool) -> Result<Vec<Post>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM posts ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Post>(&query).fetch_all(pool).await
    }

    /// The single most recent post, if any.
    pub async fn latest(pool: &PgPool) -> Result<Option<Post>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM posts ORDER BY created_at DESC, id DESC LIMIT 1"
        );
        sqlx::query_as::<_, Post>(&query).fetch_optional(pool).await
    }

    /// Posts whose author snapshot exactly matches `username`, newest first.
    pub async fn list_by_author(pool: &PgPool, username: &str) -> Result<Vec<Post>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM posts WHERE author = $1 ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Post>(&query)
            .bind(username)
            .fetch_all(pool)
            .await
    }

    /// Posts last edited by `username`, newest first.
    pub async fn list_by_editor(pool: &PgPool, username: &str) -> Result<Vec<Post>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM posts WHERE update_author = $1 ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Post>(&query)
            .bind(username)
            .fetch_all(pool)
            .await
    }

    /// Rewrite a post's content and stamp `update_author`.
    ///
    /// The `author` column is deliberately untouched. Returns `None` if no
    /// row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePost,
    ) -> Result<Option<Post>, sqlx::Error> {
        let query = format!(
            "UPDATE posts SET
                title = $2,
                intro = $3,
                body = $4,
                update_author = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Post>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.intro)
            .bind(&input.body)
            .bind(&input.editor)
            .fetch_optional(pool)
            .await
    }

    /// Delete a post. Returns `true` if the row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
