//! Composition root.

use crate::GameforgeConfig;
use gameforge_core::{ArtifactSet, CreativeParams};
use gameforge_error::GameforgeResult;
use gameforge_interface::{GameRepository, ImageProvider, NewGame, SavedGame, StoredGame, TextProvider};
use gameforge_pipeline::{ExploreSession, ImageGateway, Orchestrator, TextGateway};
use gameforge_storage::MediaStorage;
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

/// Wires providers, media storage and the game repository into the
/// generation flows.
///
/// Provider handles are built once and shared by every flow for the life of
/// the value.
#[derive(Clone)]
pub struct Gameforge {
    config: GameforgeConfig,
    orchestrator: Orchestrator,
    repository: Arc<dyn GameRepository>,
}

impl std::fmt::Debug for Gameforge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gameforge")
            .field("config", &self.config)
            .field("orchestrator", &self.orchestrator)
            .finish_non_exhaustive()
    }
}

impl Gameforge {
    /// Build the HuggingFace clients, filesystem media storage and JSON game
    /// repository described by `config`.
    ///
    /// # Errors
    ///
    /// Returns error if a model id is blank or the media or games directory
    /// cannot be created.
    #[cfg(feature = "huggingface")]
    #[instrument(skip_all, fields(text_model = %config.text_model, image_model = %config.image_model))]
    pub fn new(config: GameforgeConfig) -> GameforgeResult<Self> {
        use gameforge_models::{HuggingFaceClient, HuggingFaceEndpoints};
        use gameforge_storage::{FileSystemStorage, JsonFileGameRepository};

        let endpoints = HuggingFaceEndpoints {
            chat_base_url: config.chat_base_url.clone(),
            inference_base_url: config.inference_base_url.clone(),
        };
        let text = Arc::new(HuggingFaceClient::new(
            &config.text_model,
            config.api_token.clone(),
            endpoints.clone(),
        )?);
        let image = Arc::new(HuggingFaceClient::new(
            &config.image_model,
            config.api_token.clone(),
            endpoints,
        )?);
        let media = Arc::new(FileSystemStorage::new(
            config.media_root.clone(),
            config.media_url.clone(),
        )?);
        let repository = Arc::new(JsonFileGameRepository::new(config.games_dir.clone())?);

        info!(authenticated = config.api_token.is_some(), "Gameforge ready");
        Ok(Self::with_components(config, text, image, media, repository))
    }

    /// Assemble from explicit components.
    pub fn with_components(
        config: GameforgeConfig,
        text: Arc<dyn TextProvider>,
        image: Arc<dyn ImageProvider>,
        media: Arc<dyn MediaStorage>,
        repository: Arc<dyn GameRepository>,
    ) -> Self {
        let orchestrator = Orchestrator::new(
            TextGateway::new(text),
            ImageGateway::new(image, media),
            config.default_character_count,
        );
        Self {
            config,
            orchestrator,
            repository,
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &GameforgeConfig {
        &self.config
    }

    /// The game repository.
    pub fn repository(&self) -> &dyn GameRepository {
        self.repository.as_ref()
    }

    /// Form-driven creation. Never fails.
    pub async fn create(&self, params: &CreativeParams) -> ArtifactSet {
        self.orchestrator.generate_all(params).await
    }

    /// Persist a generated game for `owner`.
    #[instrument(skip(self, params, artifacts), fields(title = %params.title))]
    pub async fn save(
        &self,
        owner: &str,
        params: CreativeParams,
        artifacts: ArtifactSet,
        is_public: bool,
    ) -> GameforgeResult<SavedGame> {
        let game = NewGame {
            owner: owner.to_string(),
            params,
            artifacts,
            is_public,
        };
        let saved = self.repository.save(&game).await?;
        info!(id = %saved.id(), "Saved game");
        Ok(saved)
    }

    /// A fresh exploration session sharing this instance's providers.
    pub fn explore_session(&self) -> ExploreSession {
        ExploreSession::new(self.orchestrator.clone())
    }

    /// Saved games of `owner`, newest first.
    pub async fn list(&self, owner: &str) -> GameforgeResult<Vec<StoredGame>> {
        self.repository.list_by_owner(owner).await
    }

    /// Public games of every owner, newest first.
    pub async fn list_public(&self) -> GameforgeResult<Vec<StoredGame>> {
        self.repository.list_public().await
    }

    /// Publish or hide a saved game of `owner`.
    #[instrument(skip(self))]
    pub async fn set_visibility(
        &self,
        id: Uuid,
        owner: &str,
        is_public: bool,
    ) -> GameforgeResult<StoredGame> {
        let stored = self.repository.set_visibility(id, owner, is_public).await?;
        info!(is_public, "Changed game visibility");
        Ok(stored)
    }
}
