//! Well-known role name constants.
//!
//! These must match the default and the values written by the promotion
//! endpoint; the `users.role` column stores them verbatim.

pub const ROLE_USER: &str = "user";
pub const ROLE_ADMIN: &str = "admin";
