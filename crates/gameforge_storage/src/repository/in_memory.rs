//! In-memory implementation of GameRepository for testing.
//!
//! Stores games in a HashMap protected by an RwLock. All data is lost when the
//! repository is dropped.

use async_trait::async_trait;
use chrono::Utc;
use gameforge_error::{GameforgeResult, RepositoryError, RepositoryErrorKind};
use gameforge_interface::{GameRepository, NewGame, SavedGame, StoredGame};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-memory repository for generated games.
#[derive(Debug, Clone, Default)]
pub struct InMemoryGameRepository {
    games: Arc<RwLock<HashMap<Uuid, StoredGame>>>,
}

impl InMemoryGameRepository {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored games.
    pub async fn len(&self) -> usize {
        self.games.read().await.len()
    }

    /// Check if the repository is empty.
    pub async fn is_empty(&self) -> bool {
        self.games.read().await.is_empty()
    }

    async fn newest_first(&self, keep: impl Fn(&StoredGame) -> bool) -> Vec<StoredGame> {
        let games = self.games.read().await;
        let mut selected: Vec<StoredGame> = games.values().filter(|g| keep(g)).cloned().collect();
        selected.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        selected
    }
}

#[async_trait]
impl GameRepository for InMemoryGameRepository {
    async fn save(&self, game: &NewGame) -> GameforgeResult<SavedGame> {
        let saved = SavedGame::new(Uuid::new_v4(), Utc::now());
        let stored = StoredGame {
            id: *saved.id(),
            created_at: *saved.created_at(),
            game: game.clone(),
        };

        self.games.write().await.insert(stored.id, stored);
        Ok(saved)
    }

    async fn load(&self, id: Uuid) -> GameforgeResult<StoredGame> {
        self.games.read().await.get(&id).cloned().ok_or_else(|| {
            RepositoryError::new(RepositoryErrorKind::NotFound(id.to_string())).into()
        })
    }

    async fn list_by_owner(&self, owner: &str) -> GameforgeResult<Vec<StoredGame>> {
        Ok(self.newest_first(|stored| stored.game.owner == owner).await)
    }

    async fn list_public(&self) -> GameforgeResult<Vec<StoredGame>> {
        Ok(self.newest_first(|stored| stored.game.is_public).await)
    }

    async fn set_visibility(
        &self,
        id: Uuid,
        owner: &str,
        is_public: bool,
    ) -> GameforgeResult<StoredGame> {
        let mut games = self.games.write().await;
        let stored = games.get_mut(&id).ok_or_else(|| {
            RepositoryError::new(RepositoryErrorKind::NotFound(id.to_string()))
        })?;
        if stored.game.owner != owner {
            return Err(RepositoryError::new(RepositoryErrorKind::NotOwner {
                id: id.to_string(),
                owner: owner.to_string(),
            })
            .into());
        }

        stored.game.is_public = is_public;
        Ok(stored.clone())
    }
}
