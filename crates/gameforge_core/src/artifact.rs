//! The complete output of one generation request.

use crate::Character;
use serde::{Deserialize, Serialize};

/// Universe, story, locations, roster and concept art for one game.
///
/// Has no identity of its own; repositories assign one when it is saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactSet {
    /// Short universe description
    pub universe: String,
    /// Three-act synopsis
    pub story: String,
    /// Bullet list of notable locations
    pub locations: String,
    /// Canonical roster, in provider order
    pub characters: Vec<Character>,
    /// Character concept art URL
    pub character_image_url: String,
    /// Environment concept art URL
    pub environment_image_url: String,
}

impl ArtifactSet {
    /// Names of the roster members, in order.
    pub fn character_names(&self) -> Vec<String> {
        self.characters.iter().map(|c| c.name.clone()).collect()
    }
}
