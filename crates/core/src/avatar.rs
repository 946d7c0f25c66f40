//! Avatar blob storage.
//!
//! Avatars live in a flat directory of `{user_id}.jpg` files behind the
//! [`AvatarStore`] trait so the backend stays swappable. Uploads are
//! validated by file extension only (`.jpg`) and capped at 4 MiB; a built-in
//! placeholder image is written on first login when a user has no avatar yet.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::CoreError;
use crate::types::DbId;

/// Maximum accepted upload size (4 MiB).
pub const MAX_AVATAR_BYTES: usize = 4 * 1024 * 1024;

/// Placeholder shown for users who have not uploaded an avatar.
pub const DEFAULT_AVATAR: &[u8] = include_bytes!("../assets/default-avatar.jpg");

/// Validate an upload before it reaches the store: `.jpg` extension only,
/// size within [`MAX_AVATAR_BYTES`].
pub fn validate_upload(filename: &str, size: usize) -> Result<(), CoreError> {
    let extension = Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("");
    if !extension.eq_ignore_ascii_case("jpg") {
        return Err(CoreError::InvalidUpload(format!(
            "Only .jpg files are accepted, got '{filename}'"
        )));
    }
    if size > MAX_AVATAR_BYTES {
        return Err(CoreError::InvalidUpload(format!(
            "File exceeds the {MAX_AVATAR_BYTES} byte limit"
        )));
    }
    Ok(())
}

/// Keyed blob storage for avatar images.
pub trait AvatarStore: Send + Sync {
    /// Store `bytes` under the given user id, replacing any existing avatar.
    fn put(&self, user_id: DbId, bytes: &[u8]) -> Result<(), CoreError>;

    /// Whether an avatar exists for the given user id.
    fn exists(&self, user_id: DbId) -> bool;

    /// Read the avatar bytes, or `None` if the user has none.
    fn get(&self, user_id: DbId) -> Result<Option<Vec<u8>>, CoreError>;

    /// Write the placeholder image if the user has no avatar yet.
    fn ensure_default(&self, user_id: DbId) -> Result<(), CoreError> {
        if !self.exists(user_id) {
            self.put(user_id, DEFAULT_AVATAR)?;
        }
        Ok(())
    }
}

/// Filesystem-backed avatar store rooted at a configurable directory.
#[derive(Debug, Clone)]
pub struct LocalAvatarStore {
    root: PathBuf,
}

impl LocalAvatarStore {
    /// Create a store rooted at `root`, creating the directory if needed.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, CoreError> {
        let root = root.into();
        fs::create_dir_all(&root)
            .map_err(|e| CoreError::Internal(format!("Cannot create avatar directory: {e}")))?;
        Ok(Self { root })
    }

    fn path_for(&self, user_id: DbId) -> PathBuf {
        self.root.join(format!("{user_id}.jpg"))
    }
}

impl AvatarStore for LocalAvatarStore {
    fn put(&self, user_id: DbId, bytes: &[u8]) -> Result<(), CoreError> {
        let path = self.path_for(user_id);
        let mut file = fs::File::create(&path)
            .map_err(|e| CoreError::Internal(format!("Cannot write avatar: {e}")))?;
        file.write_all(bytes)
            .map_err(|e| CoreError::Internal(format!("Cannot write avatar: {e}")))?;
        Ok(())
    }

    fn exists(&self, user_id: DbId) -> bool {
        self.path_for(user_id).is_file()
    }

    fn get(&self, user_id: DbId) -> Result<Option<Vec<u8>>, CoreError> {
        match fs::read(self.path_for(user_id)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(CoreError::Internal(format!("Cannot read avatar: {e}"))),
        }
    }
}
