//! Trait definitions for providers and persistence.

use crate::{NewGame, SavedGame, StoredGame};
use async_trait::async_trait;
use gameforge_core::{ChatRequest, CompletionRequest, ImageRequest};
use gameforge_error::GameforgeResult;
use uuid::Uuid;

/// Text generation backend.
///
/// Exposes the two call styles the text gateway chains: a structured chat call
/// and a raw single-string completion.
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Chat-style generation with system and user messages.
    async fn chat(&self, req: &ChatRequest) -> GameforgeResult<String>;

    /// Raw completion of a single prompt string.
    async fn complete(&self, req: &CompletionRequest) -> GameforgeResult<String>;

    /// Provider name (e.g., "huggingface").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "Qwen/Qwen2.5-7B-Instruct").
    fn model_name(&self) -> &str;
}

/// Text-to-image backend.
#[async_trait]
pub trait ImageProvider: Send + Sync {
    /// Render one image and return its encoded bytes (PNG).
    async fn text_to_image(&self, req: &ImageRequest) -> GameforgeResult<Vec<u8>>;

    /// Provider name (e.g., "huggingface").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "stabilityai/stable-diffusion-2-1").
    fn model_name(&self) -> &str;
}

/// Durable storage for generated games.
///
/// The repository owns identity and ownership: it assigns the id and the
/// creation timestamp. Artifact sets are stored verbatim.
#[async_trait]
pub trait GameRepository: Send + Sync {
    /// Persist a game and return its assigned identity.
    async fn save(&self, game: &NewGame) -> GameforgeResult<SavedGame>;

    /// Load a game by id.
    async fn load(&self, id: Uuid) -> GameforgeResult<StoredGame>;

    /// All games of one owner, newest first.
    async fn list_by_owner(&self, owner: &str) -> GameforgeResult<Vec<StoredGame>>;

    /// Public games of every owner, newest first.
    async fn list_public(&self) -> GameforgeResult<Vec<StoredGame>>;

    /// Make a game public or private and return the updated game.
    ///
    /// Only the owner may change visibility. Fails with
    /// `RepositoryErrorKind::NotOwner` for anyone else and with
    /// `RepositoryErrorKind::NotFound` for an unknown id.
    async fn set_visibility(
        &self,
        id: Uuid,
        owner: &str,
        is_public: bool,
    ) -> GameforgeResult<StoredGame>;
}
