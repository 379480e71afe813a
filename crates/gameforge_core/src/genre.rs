//! Supported game genres.

use serde::{Deserialize, Serialize};

/// Game genre offered by the creation form.
///
/// Parses from either its short code or its label, case-insensitively.
///
/// # Examples
///
/// ```
/// use gameforge_core::Genre;
/// use std::str::FromStr;
///
/// assert_eq!(Genre::from_str("mv").unwrap(), Genre::Metroidvania);
/// assert_eq!(Genre::Metroidvania.code(), "MV");
/// assert_eq!(Genre::Metroidvania.to_string(), "Metroidvania");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
    derive_more::Display,
)]
#[strum(ascii_case_insensitive)]
pub enum Genre {
    /// Role-playing game
    #[serde(rename = "RPG")]
    #[strum(serialize = "RPG")]
    #[display("RPG")]
    Rpg,
    /// First-person shooter
    #[serde(rename = "FPS")]
    #[strum(serialize = "FPS")]
    #[display("FPS")]
    Fps,
    /// Metroidvania
    #[serde(rename = "MV")]
    #[strum(serialize = "MV", serialize = "Metroidvania")]
    #[display("Metroidvania")]
    Metroidvania,
    /// Visual novel
    #[serde(rename = "VN")]
    #[strum(serialize = "VN", serialize = "Visual Novel")]
    #[display("Visual Novel")]
    VisualNovel,
    /// Platformer
    #[serde(rename = "PLAT")]
    #[strum(serialize = "PLAT", serialize = "Platformer")]
    #[display("Platformer")]
    Platformer,
    /// Strategy
    #[serde(rename = "STR")]
    #[strum(serialize = "STR", serialize = "Strategy")]
    #[display("Strategy")]
    Strategy,
    /// Action-adventure
    #[serde(rename = "ACT")]
    #[strum(serialize = "ACT", serialize = "Action-Adventure")]
    #[display("Action-Adventure")]
    ActionAdventure,
}

impl Genre {
    /// Short code used for storage.
    pub fn code(&self) -> &'static str {
        match self {
            Genre::Rpg => "RPG",
            Genre::Fps => "FPS",
            Genre::Metroidvania => "MV",
            Genre::VisualNovel => "VN",
            Genre::Platformer => "PLAT",
            Genre::Strategy => "STR",
            Genre::ActionAdventure => "ACT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_genre_parses_from_its_code_and_label() {
        for genre in Genre::iter() {
            assert_eq!(Genre::from_str(genre.code()).unwrap(), genre);
            assert_eq!(Genre::from_str(&genre.to_string()).unwrap(), genre);
        }
    }

    #[test]
    fn test_unknown_genre_is_rejected() {
        assert!(Genre::from_str("Roguelike").is_err());
    }

    #[test]
    fn test_serializes_as_code() {
        let json = serde_json::to_string(&Genre::VisualNovel).unwrap();
        assert_eq!(json, "\"VN\"");
    }
}
