//! Exploration flow: random parameters, cached preview, explicit decision.

use crate::Orchestrator;
use gameforge_core::{ArtifactSet, CreativeParams, Genre};
use gameforge_error::GameforgeResult;
use gameforge_interface::{GameRepository, NewGame, SavedGame};
use rand::{Rng, seq::SliceRandom};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{info, instrument};

/// Ambiances drawn by exploration.
pub const EXPLORE_AMBIANCES: [&str; 4] = [
    "Cyberpunk nébuleux",
    "Dark Fantasy gothique",
    "Onirique pastel",
    "Post-apo organique",
];

/// Titles drawn by exploration.
pub const EXPLORE_TITLES: [&str; 4] = [
    "Echoes of Glass",
    "Hollow Lines",
    "Sepia Crown",
    "Neon Pilgrims",
];

/// Keywords of every explored game.
pub const EXPLORE_KEYWORDS: &str = "boucle temporelle, IA rebelle, ruines anciennes";

/// References of every explored game.
pub const EXPLORE_REFERENCES: &str = "Zelda, Hollow Knight, Disco Elysium";

/// Draw random exploration parameters.
///
/// The genre is stored by its short code.
///
/// # Examples
///
/// ```
/// use gameforge_pipeline::{EXPLORE_KEYWORDS, explore_params};
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let params = explore_params(&mut StdRng::seed_from_u64(7));
/// assert_eq!(params.keywords, EXPLORE_KEYWORDS);
/// assert_eq!(params, explore_params(&mut StdRng::seed_from_u64(7)));
/// ```
pub fn explore_params<R: Rng + ?Sized>(rng: &mut R) -> CreativeParams {
    let genres: Vec<Genre> = Genre::iter().collect();
    let genre = genres.choose(rng).copied().unwrap_or(Genre::Rpg);
    let ambiance = EXPLORE_AMBIANCES
        .choose(rng)
        .copied()
        .unwrap_or(EXPLORE_AMBIANCES[0]);
    let title = EXPLORE_TITLES
        .choose(rng)
        .copied()
        .unwrap_or(EXPLORE_TITLES[0]);

    CreativeParams::new(title, genre.code(), ambiance, EXPLORE_KEYWORDS)
        .with_references(EXPLORE_REFERENCES)
}

/// An explored game awaiting a save or discard decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplorePreview {
    /// Randomly drawn parameters
    pub params: CreativeParams,
    /// Generated artifacts, story harmonized
    pub artifacts: ArtifactSet,
}

/// Session-scoped cache of one exploration preview.
///
/// Holds at most one preview. [`generate`](Self::generate) reuses the cached
/// preview, [`regenerate`](Self::regenerate) replaces it, and
/// [`save`](Self::save) or [`discard`](Self::discard) settle it.
#[derive(Debug, Clone)]
pub struct ExploreSession {
    orchestrator: Orchestrator,
    cached: Option<ExplorePreview>,
}

impl ExploreSession {
    /// Create an empty session.
    pub fn new(orchestrator: Orchestrator) -> Self {
        Self {
            orchestrator,
            cached: None,
        }
    }

    /// The cached preview, if any.
    pub fn preview(&self) -> Option<&ExplorePreview> {
        self.cached.as_ref()
    }

    /// Return the cached preview, generating one first if the cache is empty.
    pub async fn generate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &ExplorePreview {
        let preview = match self.cached.take() {
            Some(preview) => preview,
            None => self.run(rng).await,
        };
        self.cached.insert(preview)
    }

    /// Drop the cached preview and run the whole pipeline again.
    pub async fn regenerate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &ExplorePreview {
        self.cached = None;
        let preview = self.run(rng).await;
        self.cached.insert(preview)
    }

    /// Persist the cached preview as a private game of `owner`.
    ///
    /// The artifact set is forwarded verbatim. The cache is cleared only when
    /// the repository accepts the game. Returns `Ok(None)` when there is
    /// nothing to save.
    #[instrument(skip(self, repository))]
    pub async fn save(
        &mut self,
        repository: &dyn GameRepository,
        owner: &str,
    ) -> GameforgeResult<Option<SavedGame>> {
        let Some(preview) = self.cached.as_ref() else {
            return Ok(None);
        };

        let game = NewGame {
            owner: owner.to_string(),
            params: preview.params.clone(),
            artifacts: preview.artifacts.clone(),
            is_public: false,
        };
        let saved = repository.save(&game).await?;

        self.cached = None;
        info!(id = %saved.id(), "Saved explored game");
        Ok(Some(saved))
    }

    /// Drop the cached preview.
    pub fn discard(&mut self) -> Option<ExplorePreview> {
        self.cached.take()
    }

    async fn run<R: Rng + ?Sized>(&self, rng: &mut R) -> ExplorePreview {
        let params = explore_params(rng);
        let artifacts = self.orchestrator.generate_harmonized(&params).await;
        ExplorePreview { params, artifacts }
    }
}
