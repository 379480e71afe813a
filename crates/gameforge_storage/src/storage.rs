//! Storage trait definition.

use gameforge_error::GameforgeResult;
use std::path::PathBuf;

/// A media file written by a [`MediaStorage`] backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredMedia {
    /// Bare filename, e.g. `char_1718000000000.png`
    pub filename: String,
    /// Location on the backend
    pub path: PathBuf,
    /// Public URL the file is served from
    pub url: String,
}

/// Trait for pluggable media storage backends.
#[async_trait::async_trait]
pub trait MediaStorage: Send + Sync {
    /// Store rendered image bytes and return where they can be fetched.
    ///
    /// # Arguments
    ///
    /// * `data` - Encoded PNG bytes, never empty
    /// * `prefix` - Semantic prefix of the filename (`char`, `env`)
    async fn store(&self, data: &[u8], prefix: &str) -> GameforgeResult<StoredMedia>;

    /// Read back a stored file by filename.
    async fn retrieve(&self, filename: &str) -> GameforgeResult<Vec<u8>>;
}
