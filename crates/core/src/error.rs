use crate::types::DbId;

/// Domain error taxonomy shared by all layers.
///
/// HTTP status mapping lives in the api crate's `AppError`.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Duplicate username: {0}")]
    DuplicateUsername(String),

    #[error("Username exceeds maximum length of {max} characters")]
    UsernameTooLong { max: usize },

    #[error("Invalid username or password")]
    BadCredentials,

    #[error("Authentication required: {0}")]
    Unauthenticated(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Invalid upload: {0}")]
    InvalidUpload(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
