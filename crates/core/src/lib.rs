//! Domain logic for the Quill blog platform.
//!
//! Pure types and rules shared by the persistence and HTTP layers:
//! error taxonomy, role constants, username policy, the authorization
//! policy gate, and the avatar blob store.

pub mod avatar;
pub mod error;
pub mod policy;
pub mod roles;
pub mod types;
pub mod validation;
