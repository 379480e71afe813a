//! Generation flows.

use crate::{
    ImageGateway, TextGateway, extract_characters, harmonize,
    prompts::{self, TextPrompt},
};
use gameforge_core::{ArtifactSet, CreativeParams};
use tracing::{debug, info, instrument};

/// Sequences prompts, gateways, extraction and harmonization into complete
/// artifact sets.
///
/// Every call runs one strictly ordered chain of awaits: universe, story,
/// locations, characters, then the image pair. None of the steps can fail,
/// so neither can the orchestrator.
#[derive(Debug, Clone)]
pub struct Orchestrator {
    text: TextGateway,
    images: ImageGateway,
    character_count: usize,
}

impl Orchestrator {
    /// Create an orchestrator requesting `character_count` characters per game.
    pub fn new(text: TextGateway, images: ImageGateway, character_count: usize) -> Self {
        Self {
            text,
            images,
            character_count,
        }
    }

    /// Number of characters requested per game.
    pub fn character_count(&self) -> usize {
        self.character_count
    }

    async fn generate_text(&self, stage: &str, prompt: TextPrompt) -> String {
        debug!(stage, max_tokens = prompt.max_tokens, "Generating text artifact");
        self.text.complete(&prompt.text, prompt.max_tokens).await
    }

    /// Form-driven creation: the story is kept as the provider wrote it.
    #[instrument(skip_all, fields(title = %params.title, genre = %params.genre))]
    pub async fn generate_all(&self, params: &CreativeParams) -> ArtifactSet {
        self.generate(params, false).await
    }

    /// Exploration: like [`generate_all`](Self::generate_all), with the story
    /// harmonized against the extracted roster.
    #[instrument(skip_all, fields(title = %params.title, genre = %params.genre))]
    pub async fn generate_harmonized(&self, params: &CreativeParams) -> ArtifactSet {
        self.generate(params, true).await
    }

    async fn generate(&self, params: &CreativeParams, harmonize_story: bool) -> ArtifactSet {
        let universe = self
            .generate_text("universe", prompts::universe_prompt(params))
            .await;
        let story = self
            .generate_text("story", prompts::story_prompt(params))
            .await;
        let locations = self
            .generate_text("locations", prompts::locations_prompt(params))
            .await;

        let raw_characters = self
            .generate_text(
                "characters",
                prompts::characters_prompt(self.character_count),
            )
            .await;
        let characters = extract_characters(&raw_characters, self.character_count);

        let story = if harmonize_story {
            let names: Vec<String> = characters.iter().map(|c| c.name.clone()).collect();
            harmonize(&story, &names)
        } else {
            story
        };

        let art = self
            .images
            .render_concept_pair(params, &characters, &locations, &story)
            .await;

        info!(
            characters = characters.len(),
            character_image = %art.character_url,
            environment_image = %art.environment_url,
            "Generated artifact set"
        );

        ArtifactSet {
            universe,
            story,
            locations,
            characters,
            character_image_url: art.character_url,
            environment_image_url: art.environment_url,
        }
    }
}
