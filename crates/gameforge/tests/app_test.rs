//! Tests for the composition root over mock components.

use async_trait::async_trait;
use gameforge::{
    ChatRequest, CompletionRequest, Gameforge, GameforgeConfig, GameforgeResult,
    ImageProvider, ImageRequest, InMemoryGameRepository, ProviderError, ProviderErrorKind,
    TextProvider, fallback_roster, FileSystemStorage, CreativeParams,
};
use rand::{SeedableRng, rngs::StdRng};
use std::sync::Arc;

/// Text provider whose chat tier always answers with one fixed text.
struct FixedText(&'static str);

#[async_trait]
impl TextProvider for FixedText {
    async fn chat(&self, _req: &ChatRequest) -> GameforgeResult<String> {
        Ok(self.0.to_string())
    }

    async fn complete(&self, _req: &CompletionRequest) -> GameforgeResult<String> {
        Err(ProviderError::new(ProviderErrorKind::EmptyResponse).into())
    }

    fn provider_name(&self) -> &'static str {
        "fixed"
    }

    fn model_name(&self) -> &str {
        "fixed-text"
    }
}

/// Image provider that is always down.
struct DownImages;

#[async_trait]
impl ImageProvider for DownImages {
    async fn text_to_image(&self, _req: &ImageRequest) -> GameforgeResult<Vec<u8>> {
        Err(ProviderError::new(ProviderErrorKind::Http("connection refused".to_string())).into())
    }

    fn provider_name(&self) -> &'static str {
        "down"
    }

    fn model_name(&self) -> &str {
        "down-image"
    }
}

fn app(dir: &tempfile::TempDir, repository: Arc<InMemoryGameRepository>) -> Gameforge {
    let config = GameforgeConfig {
        default_character_count: 2,
        ..GameforgeConfig::default()
    };
    let media = Arc::new(FileSystemStorage::new(dir.path(), "/media/").unwrap());
    Gameforge::with_components(
        config,
        Arc::new(FixedText("Texte généré.")),
        Arc::new(DownImages),
        media,
        repository,
    )
}

fn params() -> CreativeParams {
    CreativeParams::new("Hollow Lines", "MV", "Onirique pastel", "ruines anciennes")
}

#[tokio::test]
async fn test_create_uses_configured_character_count() {
    let dir = tempfile::tempdir().unwrap();
    let app = app(&dir, Arc::new(InMemoryGameRepository::new()));

    let artifacts = app.create(&params()).await;

    assert_eq!(artifacts.universe, "Texte généré.");
    assert_eq!(artifacts.characters, fallback_roster()[..2].to_vec());
    assert!(artifacts.character_image_url.starts_with("https://picsum.photos/"));
}

#[tokio::test]
async fn test_save_then_list_by_owner() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let repository = Arc::new(InMemoryGameRepository::new());
    let app = app(&dir, repository.clone());

    let artifacts = app.create(&params()).await;
    let saved = app.save("ada", params(), artifacts.clone(), true).await?;

    let games = app.list("ada").await?;
    assert_eq!(games.len(), 1);
    assert_eq!(games[0].id, *saved.id());
    assert_eq!(games[0].game.artifacts, artifacts);
    assert!(games[0].game.is_public);
    assert!(app.list("bob").await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_explore_session_saves_private_game() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let repository = Arc::new(InMemoryGameRepository::new());
    let app = app(&dir, repository.clone());

    let mut session = app.explore_session();
    session.generate(&mut StdRng::seed_from_u64(11)).await;
    let saved = session.save(app.repository(), "ada").await?;

    assert!(saved.is_some());
    let games = app.list("ada").await?;
    assert_eq!(games.len(), 1);
    assert!(!games[0].game.is_public);
    assert_eq!(repository.len().await, 1);
    Ok(())
}

#[tokio::test]
async fn test_publish_then_list_public() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let app = app(&dir, Arc::new(InMemoryGameRepository::new()));

    let artifacts = app.create(&params()).await;
    let saved = app.save("ada", params(), artifacts, false).await?;
    assert!(app.list_public().await?.is_empty());

    assert!(app.set_visibility(*saved.id(), "bob", true).await.is_err());
    let stored = app.set_visibility(*saved.id(), "ada", true).await?;
    assert!(stored.game.is_public);

    let public = app.list_public().await?;
    assert_eq!(public.len(), 1);
    assert_eq!(public[0].game.owner, "ada");
    Ok(())
}
