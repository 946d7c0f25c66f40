//! Username validation policy.
//!
//! The length cap and the uniqueness requirement varied across shipped
//! versions of the application, so both are runtime configuration rather
//! than hardcoded rules. Uniqueness itself is checked against the store by
//! the caller; [`UsernamePolicy::check_available`] folds the result into the
//! policy decision.

use crate::error::CoreError;

/// Configurable username rules applied on registration and rename.
#[derive(Debug, Clone)]
pub struct UsernamePolicy {
    /// Maximum username length in characters. `None` disables the cap.
    pub max_length: Option<usize>,
    /// Whether a username already present in the store is rejected.
    pub enforce_unique: bool,
}

impl Default for UsernamePolicy {
    /// Defaults match the latest shipped behavior: 11-character cap,
    /// duplicates rejected.
    fn default() -> Self {
        Self {
            max_length: Some(11),
            enforce_unique: true,
        }
    }
}

impl UsernamePolicy {
    /// Validate the shape of a username (non-empty, within the length cap).
    pub fn check_shape(&self, username: &str) -> Result<(), CoreError> {
        if username.trim().is_empty() {
            return Err(CoreError::Validation("Username must not be empty".into()));
        }
        if let Some(max) = self.max_length {
            if username.chars().count() > max {
                return Err(CoreError::UsernameTooLong { max });
            }
        }
        Ok(())
    }

    /// Fold a store lookup (`already_taken`) into the uniqueness rule.
    pub fn check_available(&self, username: &str, already_taken: bool) -> Result<(), CoreError> {
        if self.enforce_unique && already_taken {
            return Err(CoreError::DuplicateUsername(username.to_string()));
        }
        Ok(())
    }
}
