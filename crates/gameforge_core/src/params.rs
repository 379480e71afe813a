//! Creative parameters supplied by the user.

use serde::{Deserialize, Serialize};

/// Inputs of a generation request.
///
/// # Examples
///
/// ```
/// use gameforge_core::CreativeParams;
///
/// let params = CreativeParams::new("Sepia Crown", "RPG", "Dark Fantasy", "ruines, , IA rebelle");
/// assert_eq!(params.keyword_list(), vec!["ruines", "IA rebelle"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CreativeParams {
    /// Working title of the game
    pub title: String,
    /// Genre label
    pub genre: String,
    /// Mood or visual ambiance
    pub ambiance: String,
    /// Comma-separated keywords
    pub keywords: String,
    /// Optional inspirations
    #[serde(default)]
    pub references: Option<String>,
}

impl CreativeParams {
    /// Creates parameters without references.
    pub fn new(
        title: impl Into<String>,
        genre: impl Into<String>,
        ambiance: impl Into<String>,
        keywords: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            genre: genre.into(),
            ambiance: ambiance.into(),
            keywords: keywords.into(),
            references: None,
        }
    }

    /// Sets the references.
    pub fn with_references(mut self, references: impl Into<String>) -> Self {
        self.references = Some(references.into());
        self
    }

    /// Keywords split on commas, trimmed, empty entries dropped.
    pub fn keyword_list(&self) -> Vec<&str> {
        self.keywords
            .split(',')
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .collect()
    }
}
