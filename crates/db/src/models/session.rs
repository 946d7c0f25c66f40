//! Refresh-token session model and DTOs.

use sqlx::FromRow;

use quill_core::types::{DbId, Timestamp};

/// One issued refresh token, from the `user_sessions` table.
///
/// Sessions are never returned to API clients; they only back the
/// login/refresh/logout flow.
#[derive(Debug, Clone, FromRow)]
pub struct UserSession {
    pub id: DbId,
    /// Owning user; rows cascade away when the account is deleted.
    pub user_id: DbId,
    /// SHA-256 hex digest of the opaque refresh token.
    pub refresh_token_hash: String,
    pub expires_at: Timestamp,
    /// Set on logout, rotation, and password change.
    pub is_revoked: bool,
    pub created_at: Timestamp,
}

/// DTO for recording a newly issued refresh token.
pub struct CreateSession {
    pub user_id: DbId,
    pub refresh_token_hash: String,
    pub expires_at: Timestamp,
}
