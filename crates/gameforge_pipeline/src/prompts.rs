//! Prompt composition.
//!
//! Pure functions from creative parameters (and previously generated text) to
//! provider prompts. Text prompts carry their token budget; image prompts are
//! bounded to [`IMAGE_PROMPT_CHAR_BUDGET`] characters because the image
//! provider rejects longer inputs.

use gameforge_core::{Character, CreativeParams};

/// Hard character limit of image prompts.
pub const IMAGE_PROMPT_CHAR_BUDGET: usize = 200;

/// Characters of the story quoted in the environment prompt.
pub const STORY_EXCERPT_CHARS: usize = 200;

/// A text prompt and the number of tokens the provider may produce for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextPrompt {
    /// Prompt text
    pub text: String,
    /// Token budget
    pub max_tokens: u32,
}

impl TextPrompt {
    fn new(text: String, max_tokens: u32) -> Self {
        Self { text, max_tokens }
    }
}

/// First `max_chars` characters of `text`, never splitting a character.
///
/// # Examples
///
/// ```
/// use gameforge_pipeline::prompts::truncate_chars;
///
/// assert_eq!(truncate_chars("Éclaireur", 3), "Écl");
/// assert_eq!(truncate_chars("abc", 10), "abc");
/// ```
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Short universe description.
pub fn universe_prompt(params: &CreativeParams) -> TextPrompt {
    TextPrompt::new(
        format!(
            "Crée un univers concis (5-7 lignes) pour un {} ambiance {}. Mots-clés: {}.",
            params.genre,
            params.ambiance,
            params.keyword_list().join(", ")
        ),
        300,
    )
}

/// Three-act synopsis.
pub fn story_prompt(params: &CreativeParams) -> TextPrompt {
    let references = params
        .references
        .as_deref()
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .unwrap_or("—");

    TextPrompt::new(
        format!(
            "Synopsis 3 actes pour '{}' ({}, {}). Réfs: {}. Mots-clés: {}.",
            params.title, params.genre, params.ambiance, references, params.keywords
        ),
        500,
    )
}

/// Three notable locations as a bullet list.
pub fn locations_prompt(params: &CreativeParams) -> TextPrompt {
    TextPrompt::new(
        format!(
            "3 lieux emblématiques ambiance {}, format liste à puces.",
            params.ambiance
        ),
        200,
    )
}

/// Roster of `count` characters, requested as a bare JSON list.
pub fn characters_prompt(count: usize) -> TextPrompt {
    TextPrompt::new(
        format!(
            r#"Donne {count} personnages majeurs. Réponds UNIQUEMENT par une liste JSON.
Chaque objet:
  - name (str)
  - role (str)
  - abilities (list[str] ou str)
  - motivation (str, 1 phrase)
Exemple:
[
  {{"name":"...", "role":"...", "abilities":["...","..."], "motivation":"..."}}
]"#
        ),
        400,
    )
}

/// Character concept art, built around the first roster member when there is one.
pub fn character_art_prompt(params: &CreativeParams, characters: &[Character]) -> String {
    let mut prompt = format!(
        "Concept art d'un héros pour un jeu intitulé '{}' ({}, ambiance {}). ",
        params.title, params.genre, params.ambiance
    );
    if let Some(hero) = characters.first() {
        prompt.push_str(&format!(
            "Nom: {}, Rôle: {}, Capacités: {}, Motivation: {}. ",
            hero.name, hero.role, hero.abilities, hero.motivation
        ));
    }
    prompt.push_str(&format!(
        "Mots-clés: {}. Style cohérent avec l'univers du jeu.",
        params.keywords
    ));

    truncate_chars(&prompt, IMAGE_PROMPT_CHAR_BUDGET).to_string()
}

/// Environment concept art, built from the locations and a story excerpt.
pub fn environment_art_prompt(params: &CreativeParams, locations: &str, story: &str) -> String {
    let mut prompt = format!(
        "Concept art d'un environnement pour '{}' ({}, ambiance {}). ",
        params.title, params.genre, params.ambiance
    );
    if !locations.trim().is_empty() {
        prompt.push_str(&format!("Lieux: {}. ", locations));
    }
    if !story.trim().is_empty() {
        prompt.push_str(&format!(
            "Scénario: {}... ",
            truncate_chars(story, STORY_EXCERPT_CHARS)
        ));
    }
    prompt.push_str(&format!(
        "Mots-clés: {}. Style immersif et cohérent avec le jeu.",
        params.keywords
    ));

    truncate_chars(&prompt, IMAGE_PROMPT_CHAR_BUDGET).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> CreativeParams {
        CreativeParams::new(
            "Sepia Crown",
            "RPG",
            "Dark Fantasy gothique",
            "boucle temporelle, , IA rebelle",
        )
    }

    #[test]
    fn test_universe_prompt_lists_clean_keywords() {
        let prompt = universe_prompt(&params());
        assert_eq!(
            prompt.text,
            "Crée un univers concis (5-7 lignes) pour un RPG ambiance Dark Fantasy gothique. \
             Mots-clés: boucle temporelle, IA rebelle."
        );
        assert_eq!(prompt.max_tokens, 300);
    }

    #[test]
    fn test_story_prompt_defaults_missing_references() {
        let prompt = story_prompt(&params());
        assert!(prompt.text.contains("Réfs: —."));
        assert!(prompt.text.starts_with("Synopsis 3 actes pour 'Sepia Crown'"));
        assert_eq!(prompt.max_tokens, 500);

        let with_refs = story_prompt(&params().with_references("Zelda"));
        assert!(with_refs.text.contains("Réfs: Zelda."));
    }

    #[test]
    fn test_characters_prompt_embeds_count_and_schema() {
        let prompt = characters_prompt(5);
        assert!(prompt.text.starts_with("Donne 5 personnages majeurs."));
        assert!(prompt.text.contains(r#"{"name":"...""#));
        assert_eq!(prompt.max_tokens, 400);
    }

    #[test]
    fn test_character_art_prompt_uses_first_character() {
        let roster = vec![
            Character::new("Zed", "Mage", "Feu", "Vengeance"),
            Character::new("Other", "Tank", "Bouclier", "Rien"),
        ];
        let prompt = character_art_prompt(&params(), &roster);
        assert!(prompt.contains("Nom: Zed, Rôle: Mage"));
        assert!(!prompt.contains("Other"));
    }

    #[test]
    fn test_image_prompts_are_bounded() {
        let long = "x".repeat(1_000);
        let roster = vec![Character::new(&long, &long, &long, &long)];
        let char_prompt = character_art_prompt(&params(), &roster);
        let env_prompt = environment_art_prompt(&params(), &long, &long);

        assert_eq!(char_prompt.chars().count(), IMAGE_PROMPT_CHAR_BUDGET);
        assert_eq!(env_prompt.chars().count(), IMAGE_PROMPT_CHAR_BUDGET);
    }

    #[test]
    fn test_environment_prompt_skips_empty_sections() {
        let prompt = environment_art_prompt(&params(), "", "  ");
        assert!(!prompt.contains("Lieux:"));
        assert!(!prompt.contains("Scénario:"));
    }

    #[test]
    fn test_truncate_chars_respects_multibyte_boundaries() {
        let text = "é".repeat(250);
        let cut = truncate_chars(&text, IMAGE_PROMPT_CHAR_BUDGET);
        assert_eq!(cut.chars().count(), 200);
        assert_eq!(cut.len(), 400);
    }
}
