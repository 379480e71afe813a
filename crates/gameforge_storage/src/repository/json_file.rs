//! JSON-document game repository.
//!
//! Each game is one pretty-printed JSON file, `{games_dir}/{id}.json`.

use async_trait::async_trait;
use chrono::Utc;
use gameforge_error::{GameforgeResult, RepositoryError, RepositoryErrorKind};
use gameforge_interface::{GameRepository, NewGame, SavedGame, StoredGame};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Game repository writing one JSON document per game.
#[derive(Debug, Clone)]
pub struct JsonFileGameRepository {
    games_dir: PathBuf,
}

impl JsonFileGameRepository {
    /// Create a repository rooted at `games_dir`, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns error if the directory cannot be created.
    #[tracing::instrument(skip_all)]
    pub fn new(games_dir: impl Into<PathBuf>) -> GameforgeResult<Self> {
        let games_dir = games_dir.into();
        std::fs::create_dir_all(&games_dir).map_err(|e| {
            RepositoryError::new(RepositoryErrorKind::Io(format!(
                "{}: {}",
                games_dir.display(),
                e
            )))
        })?;
        tracing::debug!(path = %games_dir.display(), "Opened game repository");
        Ok(Self { games_dir })
    }

    fn path_for(&self, id: Uuid) -> PathBuf {
        self.games_dir.join(format!("{}.json", id))
    }

    async fn read_game(path: &Path) -> GameforgeResult<StoredGame> {
        let bytes = tokio::fs::read(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                RepositoryError::new(RepositoryErrorKind::NotFound(path.display().to_string()))
            } else {
                RepositoryError::new(RepositoryErrorKind::Io(format!("{}: {}", path.display(), e)))
            }
        })?;

        serde_json::from_slice(&bytes).map_err(|e| {
            RepositoryError::new(RepositoryErrorKind::Serialization(format!(
                "{}: {}",
                path.display(),
                e
            )))
            .into()
        })
    }

    /// Write `stored` through a temp file and a rename.
    async fn write_game(&self, stored: &StoredGame) -> GameforgeResult<PathBuf> {
        let json = serde_json::to_vec_pretty(stored).map_err(|e| {
            RepositoryError::new(RepositoryErrorKind::Serialization(e.to_string()))
        })?;

        let path = self.path_for(stored.id);
        let temp_path = path.with_extension("tmp");
        tokio::fs::write(&temp_path, json).await.map_err(|e| {
            RepositoryError::new(RepositoryErrorKind::Io(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
        })?;
        tokio::fs::rename(&temp_path, &path).await.map_err(|e| {
            RepositoryError::new(RepositoryErrorKind::Io(format!(
                "rename {} to {}: {}",
                temp_path.display(),
                path.display(),
                e
            )))
        })?;
        Ok(path)
    }

    /// Readable games matching `keep`, newest first. Corrupt files are skipped.
    async fn scan(&self, keep: impl Fn(&StoredGame) -> bool) -> GameforgeResult<Vec<StoredGame>> {
        let mut entries = tokio::fs::read_dir(&self.games_dir).await.map_err(|e| {
            RepositoryError::new(RepositoryErrorKind::Io(format!(
                "{}: {}",
                self.games_dir.display(),
                e
            )))
        })?;

        let mut selected = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(|e| {
            RepositoryError::new(RepositoryErrorKind::Io(e.to_string()))
        })? {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            match Self::read_game(&path).await {
                Ok(stored) if keep(&stored) => selected.push(stored),
                Ok(_) => {}
                Err(e) => tracing::warn!(path = %path.display(), error = %e, "Skipping unreadable game file"),
            }
        }

        selected.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(selected)
    }
}

#[async_trait]
impl GameRepository for JsonFileGameRepository {
    #[tracing::instrument(skip(self, game), fields(owner = %game.owner, title = %game.params.title))]
    async fn save(&self, game: &NewGame) -> GameforgeResult<SavedGame> {
        let stored = StoredGame {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            game: game.clone(),
        };

        let path = self.write_game(&stored).await?;

        tracing::info!(id = %stored.id, path = %path.display(), "Saved game");
        Ok(SavedGame::new(stored.id, stored.created_at))
    }

    async fn load(&self, id: Uuid) -> GameforgeResult<StoredGame> {
        Self::read_game(&self.path_for(id)).await
    }

    async fn list_by_owner(&self, owner: &str) -> GameforgeResult<Vec<StoredGame>> {
        self.scan(|stored| stored.game.owner == owner).await
    }

    async fn list_public(&self) -> GameforgeResult<Vec<StoredGame>> {
        self.scan(|stored| stored.game.is_public).await
    }

    #[tracing::instrument(skip(self))]
    async fn set_visibility(
        &self,
        id: Uuid,
        owner: &str,
        is_public: bool,
    ) -> GameforgeResult<StoredGame> {
        let mut stored = self.load(id).await?;
        if stored.game.owner != owner {
            tracing::warn!(actual_owner = %stored.game.owner, "Visibility change refused");
            return Err(RepositoryError::new(RepositoryErrorKind::NotOwner {
                id: id.to_string(),
                owner: owner.to_string(),
            })
            .into());
        }

        stored.game.is_public = is_public;
        self.write_game(&stored).await?;
        tracing::info!("Updated game visibility");
        Ok(stored)
    }
}
