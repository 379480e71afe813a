//! Character record.

use serde::{Deserialize, Serialize};

/// Placeholder used when the provider omits a character's name.
pub const UNKNOWN_NAME: &str = "Inconnu";

/// Placeholder used for any other missing character field.
pub const MISSING_FIELD: &str = "—";

/// One member of a generated roster.
///
/// `abilities` is always a flat string; list-shaped provider output is joined
/// with newlines before it reaches this type.
///
/// # Examples
///
/// ```
/// use gameforge_core::Character;
///
/// let placeholder = Character::default();
/// assert_eq!(placeholder.name, "Inconnu");
/// assert_eq!(placeholder.role, "—");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Character {
    /// Display name
    pub name: String,
    /// Archetype or class
    pub role: String,
    /// Newline-separated abilities
    pub abilities: String,
    /// One-sentence motivation
    pub motivation: String,
}

impl Character {
    /// Creates a character from its four fields.
    pub fn new(
        name: impl Into<String>,
        role: impl Into<String>,
        abilities: impl Into<String>,
        motivation: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            abilities: abilities.into(),
            motivation: motivation.into(),
        }
    }
}

impl Default for Character {
    fn default() -> Self {
        Self::new(UNKNOWN_NAME, MISSING_FIELD, MISSING_FIELD, MISSING_FIELD)
    }
}
