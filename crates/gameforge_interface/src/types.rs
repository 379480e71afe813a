//! Types exchanged with game repositories.

use chrono::{DateTime, Utc};
use derive_getters::Getters;
use gameforge_core::{ArtifactSet, CreativeParams};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A generated game awaiting persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewGame {
    /// Owner identity, as known to the authentication layer
    pub owner: String,
    /// Parameters the artifacts were generated from
    pub params: CreativeParams,
    /// Generated artifacts
    pub artifacts: ArtifactSet,
    /// Whether other users may see the game
    pub is_public: bool,
}

/// Identity assigned by a repository on save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct SavedGame {
    /// Durable identifier
    id: Uuid,
    /// Creation timestamp
    created_at: DateTime<Utc>,
}

impl SavedGame {
    /// Creates a saved-game handle.
    pub fn new(id: Uuid, created_at: DateTime<Utc>) -> Self {
        Self { id, created_at }
    }
}

/// A persisted game with its identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredGame {
    /// Durable identifier
    pub id: Uuid,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// The game as it was saved
    #[serde(flatten)]
    pub game: NewGame,
}
