//! Filesystem-based media storage implementation.
//!
//! Files are written flat under the media root as `{prefix}_{unix_millis}.png`
//! and served from `{media_url}{filename}`.

use crate::{MediaStorage, StoredMedia};
use gameforge_error::{GameforgeResult, StorageError, StorageErrorKind};
use std::path::PathBuf;

/// Filesystem storage backend.
///
/// # Example Structure
///
/// ```text
/// media/
/// ├── char_1718000000000.png
/// └── env_1718000000412.png
/// ```
///
/// Writes go through a temp file followed by a rename, so a URL handed out by
/// [`store`](MediaStorage::store) never points at a partial file.
#[derive(Debug, Clone)]
pub struct FileSystemStorage {
    media_root: PathBuf,
    media_url: String,
}

impl FileSystemStorage {
    /// Create a new filesystem storage backend.
    ///
    /// Creates the media root if it doesn't exist.
    ///
    /// # Arguments
    ///
    /// * `media_root` - Directory receiving image files
    /// * `media_url` - Public URL prefix the directory is served under (e.g. `/media/`)
    ///
    /// # Errors
    ///
    /// Returns error if the directory cannot be created.
    #[tracing::instrument(skip_all)]
    pub fn new(
        media_root: impl Into<PathBuf>,
        media_url: impl Into<String>,
    ) -> GameforgeResult<Self> {
        let media_root = media_root.into();

        std::fs::create_dir_all(&media_root).map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                media_root.display(),
                e
            )))
        })?;

        tracing::info!(path = %media_root.display(), "Created filesystem storage");
        Ok(Self {
            media_root,
            media_url: media_url.into(),
        })
    }

    /// Root directory of stored files.
    pub fn media_root(&self) -> &std::path::Path {
        &self.media_root
    }

    /// Filename for `prefix` at `millis`.
    pub fn filename(prefix: &str, millis: i64) -> String {
        format!("{}_{}.png", prefix, millis)
    }

    /// Public URL for a stored filename.
    pub fn url_for(&self, filename: &str) -> String {
        format!("{}{}", self.media_url, filename)
    }

    fn validate_component(value: &str) -> GameforgeResult<()> {
        if value.is_empty()
            || value.contains(['/', '\\'])
            || value == "."
            || value == ".."
        {
            return Err(StorageError::new(StorageErrorKind::InvalidPath(value.to_string())).into());
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl MediaStorage for FileSystemStorage {
    #[tracing::instrument(skip(self, data), fields(size = data.len()))]
    async fn store(&self, data: &[u8], prefix: &str) -> GameforgeResult<StoredMedia> {
        Self::validate_component(prefix)?;
        if data.is_empty() {
            return Err(StorageError::new(StorageErrorKind::EmptyPayload(prefix.to_string())).into());
        }

        let filename = Self::filename(prefix, chrono::Utc::now().timestamp_millis());
        let path = self.media_root.join(&filename);

        tokio::fs::create_dir_all(&self.media_root).await.map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                self.media_root.display(),
                e
            )))
        })?;

        // Write to temp file first, then rename for atomicity
        let temp_path = path.with_extension("tmp");
        tokio::fs::write(&temp_path, data).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
        })?;

        tokio::fs::rename(&temp_path, &path).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "rename {} to {}: {}",
                temp_path.display(),
                path.display(),
                e
            )))
        })?;

        let url = self.url_for(&filename);
        tracing::info!(
            path = %path.display(),
            url = %url,
            size = data.len(),
            "Stored media file"
        );

        Ok(StoredMedia {
            filename,
            path,
            url,
        })
    }

    #[tracing::instrument(skip(self))]
    async fn retrieve(&self, filename: &str) -> GameforgeResult<Vec<u8>> {
        Self::validate_component(filename)?;
        let path = self.media_root.join(filename);

        let data = tokio::fs::read(&path).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileRead(format!(
                "{}: {}",
                path.display(),
                e
            )))
        })?;

        tracing::debug!(path = %path.display(), size = data.len(), "Retrieved media file");
        Ok(data)
    }
}
