//! Image generation gateway.
//!
//! Renders concept art through an [`ImageProvider`], stores the PNG bytes with a
//! [`MediaStorage`] backend and hands back public URLs. A failed pair falls
//! back, as a whole, to placeholder URLs seeded from the creative parameters.

use crate::prompts::{self, IMAGE_PROMPT_CHAR_BUDGET};
use gameforge_core::{Character, CreativeParams, ImageRequest};
use gameforge_interface::ImageProvider;
use gameforge_storage::MediaStorage;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Width of rendered concept art.
pub const IMAGE_WIDTH: u32 = 768;

/// Height of rendered concept art.
pub const IMAGE_HEIGHT: u32 = 512;

/// Public URLs of the two concept-art images of a game.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConceptArt {
    /// Character portrait URL
    pub character_url: String,
    /// Environment URL
    pub environment_url: String,
}

/// Failure-absorbing front of an image provider.
#[derive(Clone)]
pub struct ImageGateway {
    provider: Arc<dyn ImageProvider>,
    storage: Arc<dyn MediaStorage>,
}

impl std::fmt::Debug for ImageGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageGateway")
            .field("provider", &self.provider.provider_name())
            .field("model", &self.provider.model_name())
            .finish()
    }
}

impl ImageGateway {
    /// Creates a gateway over a shared provider handle and a media store.
    pub fn new(provider: Arc<dyn ImageProvider>, storage: Arc<dyn MediaStorage>) -> Self {
        Self { provider, storage }
    }

    /// Render `prompt`, truncated to the provider's character limit.
    ///
    /// Returns empty bytes on any failure.
    #[instrument(skip(self, prompt), fields(model = %self.provider.model_name()))]
    pub async fn render(&self, prompt: &str, width: u32, height: u32) -> Vec<u8> {
        let bounded = prompts::truncate_chars(prompt, IMAGE_PROMPT_CHAR_BUDGET);
        debug!(
            prompt_chars = bounded.chars().count(),
            truncated = bounded.len() < prompt.len(),
            "Rendering image"
        );

        let request = ImageRequest::builder()
            .prompt(bounded)
            .width(width)
            .height(height)
            .build();

        let request = match request {
            Ok(request) => request,
            Err(e) => {
                warn!(error = %e, "Failed to build image request");
                return Vec::new();
            }
        };

        match self.provider.text_to_image(&request).await {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(error = %e, "Image render failed");
                Vec::new()
            }
        }
    }

    /// Render `prompt` and store it as `{prefix}_{millis}.png`.
    ///
    /// Returns `None` when rendering yields no bytes or storing fails.
    pub async fn render_to_url(&self, prompt: &str, prefix: &str) -> Option<String> {
        let bytes = self.render(prompt, IMAGE_WIDTH, IMAGE_HEIGHT).await;
        if bytes.is_empty() {
            return None;
        }

        match self.storage.store(&bytes, prefix).await {
            Ok(stored) => Some(stored.url),
            Err(e) => {
                warn!(error = %e, prefix, "Failed to store rendered image");
                None
            }
        }
    }

    /// Render the character portrait and the environment for a game.
    ///
    /// Both images are attempted. If either one fails, both URLs are replaced
    /// by [`placeholder_pair`] for the same parameters.
    #[instrument(skip_all, fields(title = %params.title))]
    pub async fn render_concept_pair(
        &self,
        params: &CreativeParams,
        characters: &[Character],
        locations: &str,
        story: &str,
    ) -> ConceptArt {
        let character_prompt = prompts::character_art_prompt(params, characters);
        let environment_prompt = prompts::environment_art_prompt(params, locations, story);

        let character_url = self.render_to_url(&character_prompt, "char").await;
        let environment_url = self.render_to_url(&environment_prompt, "env").await;

        match (character_url, environment_url) {
            (Some(character_url), Some(environment_url)) => ConceptArt {
                character_url,
                environment_url,
            },
            (character_url, environment_url) => {
                warn!(
                    character_ok = character_url.is_some(),
                    environment_ok = environment_url.is_some(),
                    "Concept art incomplete, using placeholder pair"
                );
                placeholder_pair(params)
            }
        }
    }
}

/// Seed in `0..1000` derived from genre, ambiance and keywords.
///
/// Uses SHA-256 so the seed is identical across calls and processes.
pub fn placeholder_seed(params: &CreativeParams) -> u64 {
    let mut hasher = Sha256::new();
    for part in [&params.genre, &params.ambiance, &params.keywords] {
        hasher.update((part.len() as u64).to_be_bytes());
        hasher.update(part.as_bytes());
    }
    let digest = hasher.finalize();

    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(prefix) % 1000
}

/// Deterministic placeholder concept art.
///
/// # Examples
///
/// ```
/// use gameforge_core::CreativeParams;
/// use gameforge_pipeline::placeholder_pair;
///
/// let params = CreativeParams::new("T", "RPG", "Onirique pastel", "ruines");
/// let art = placeholder_pair(&params);
/// assert!(art.character_url.starts_with("https://picsum.photos/seed/char"));
/// assert!(art.environment_url.ends_with("/1280/720"));
/// assert_eq!(art, placeholder_pair(&params));
/// ```
pub fn placeholder_pair(params: &CreativeParams) -> ConceptArt {
    let seed = placeholder_seed(params);
    ConceptArt {
        character_url: format!("https://picsum.photos/seed/char{}/640/360", seed),
        environment_url: format!("https://picsum.photos/seed/env{}/1280/720", seed),
    }
}
