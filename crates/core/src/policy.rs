//! Central authorization policy.
//!
//! Every mutation goes through [`authorize`] so ownership and role rules are
//! applied in one place instead of ad hoc per endpoint. Post edits and
//! deletes require owner-or-admin, account deletion requires self-or-admin,
//! and promotion requires the admin role; being authenticated is never
//! sufficient on its own.

use crate::roles::ROLE_ADMIN;
use crate::types::DbId;

/// The acting identity, resolved from the request's session.
///
/// Anonymous requests never reach the policy gate: the extractor rejects
/// them with `Unauthenticated` first.
#[derive(Debug, Clone)]
pub struct Actor {
    pub user_id: DbId,
    pub username: String,
    pub role: String,
}

impl Actor {
    pub fn is_admin(&self) -> bool {
        self.role == ROLE_ADMIN
    }
}

/// An action an actor wants to perform, carrying the resource facts the
/// decision depends on.
#[derive(Debug)]
pub enum Action<'a> {
    /// Edit a post; `author` is the post's author snapshot.
    EditPost { author: &'a str },
    /// Delete a post; `author` is the post's author snapshot.
    DeletePost { author: &'a str },
    /// Delete a user account.
    DeleteUser { user_id: DbId },
    /// Promote a user to the admin role.
    PromoteUser,
    /// View another user's profile.
    ViewProfile,
    /// Change a user's username or password.
    ChangeCredentials { user_id: DbId },
}

/// Decide whether `actor` may perform `action`.
pub fn authorize(actor: &Actor, action: &Action<'_>) -> bool {
    match action {
        Action::EditPost { author } | Action::DeletePost { author } => {
            actor.username == *author || actor.is_admin()
        }
        Action::DeleteUser { user_id } => actor.user_id == *user_id || actor.is_admin(),
        Action::PromoteUser => actor.is_admin(),
        // Any authenticated user may browse profiles.
        Action::ViewProfile => true,
        // Credential changes additionally require the current password;
        // that check belongs to the credential store, not the policy.
        Action::ChangeCredentials { user_id } => actor.user_id == *user_id,
    }
}
