use std::path::PathBuf;

use quill_core::validation::UsernamePolicy;

use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Directory holding `{user_id}.jpg` avatar files.
    pub avatar_dir: PathBuf,
    /// Username validation rules (length cap, uniqueness).
    pub username_policy: UsernamePolicy,
    /// JWT token configuration (secret, expiry durations).
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default                 |
    /// |---------------------------|-------------------------|
    /// | `HOST`                    | `0.0.0.0`               |
    /// | `PORT`                    | `3000`                  |
    /// | `CORS_ORIGINS`            | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS`    | `30`                    |
    /// | `AVATAR_DIR`              | `data/avatars`          |
    /// | `USERNAME_MAX_LENGTH`     | `11` (`none` disables)  |
    /// | `ENFORCE_UNIQUE_USERNAME` | `true`                  |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let avatar_dir =
            PathBuf::from(std::env::var("AVATAR_DIR").unwrap_or_else(|_| "data/avatars".into()));

        let max_length = match std::env::var("USERNAME_MAX_LENGTH") {
            Ok(v) if v.eq_ignore_ascii_case("none") => None,
            Ok(v) => Some(v.parse().expect("USERNAME_MAX_LENGTH must be a usize or 'none'")),
            Err(_) => Some(11),
        };

        let enforce_unique: bool = std::env::var("ENFORCE_UNIQUE_USERNAME")
            .unwrap_or_else(|_| "true".into())
            .parse()
            .expect("ENFORCE_UNIQUE_USERNAME must be true or false");

        let username_policy = UsernamePolicy {
            max_length,
            enforce_unique,
        };

        let jwt = JwtConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            avatar_dir,
            username_policy,
            jwt,
        }
    }
}
