//! Character roster extraction from free-form provider text.
//!
//! Providers asked for a JSON list frequently wrap it in prose or code fences,
//! truncate it, or ignore the instruction entirely. Extraction walks a ladder
//! of parse attempts, normalizes whatever objects it finds, and tops the result
//! up from a static roster so callers always receive usable characters.

use gameforge_core::{Character, MISSING_FIELD, UNKNOWN_NAME};
use regex::Regex;
use serde_json::{Map, Value};
use std::sync::LazyLock;
use tracing::{debug, warn};

/// First `[` through last `]`, across newlines.
static BRACKETED_ARRAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[[\s\S]*\]").expect("Valid bracketed array regex"));

/// One rung of the parse ladder.
type ParseAttempt = fn(&str) -> Option<Vec<Value>>;

const PARSE_LADDER: [(&str, ParseAttempt); 2] = [
    ("whole_text", parse_whole_array),
    ("bracketed_substring", parse_bracketed_array),
];

/// Parse the entire text as a non-empty JSON array.
///
/// # Examples
///
/// ```
/// use gameforge_pipeline::parse_whole_array;
///
/// assert_eq!(parse_whole_array(r#"[{"name": "Zed"}]"#).map(|v| v.len()), Some(1));
/// assert!(parse_whole_array(r#"{"name": "Zed"}"#).is_none());
/// assert!(parse_whole_array("[]").is_none());
/// ```
pub fn parse_whole_array(raw: &str) -> Option<Vec<Value>> {
    as_non_empty_array(serde_json::from_str(raw.trim()).ok()?)
}

/// Parse the greedy `[ ... ]` substring of the text as a non-empty JSON array.
///
/// # Examples
///
/// ```
/// use gameforge_pipeline::parse_bracketed_array;
///
/// let raw = "Voici la liste:\n```json\n[{\"name\": \"Zed\"}]\n```";
/// assert_eq!(parse_bracketed_array(raw).map(|v| v.len()), Some(1));
/// ```
pub fn parse_bracketed_array(raw: &str) -> Option<Vec<Value>> {
    let candidate = BRACKETED_ARRAY.find(raw)?;
    as_non_empty_array(serde_json::from_str(candidate.as_str()).ok()?)
}

fn as_non_empty_array(value: Value) -> Option<Vec<Value>> {
    match value {
        Value::Array(items) if !items.is_empty() => Some(items),
        _ => None,
    }
}

/// Normalize one provider object into a [`Character`].
///
/// Returns `None` for anything that is not a JSON object. Missing, `null` or
/// blank fields take the placeholders; an `abilities` list is joined with
/// newlines.
///
/// # Examples
///
/// ```
/// use gameforge_pipeline::normalize_character;
/// use serde_json::json;
///
/// let character = normalize_character(&json!({"abilities": ["Feu", "Glace"]})).unwrap();
/// assert_eq!(character.name, "Inconnu");
/// assert_eq!(character.abilities, "Feu\nGlace");
/// assert_eq!(character.motivation, "—");
/// ```
pub fn normalize_character(value: &Value) -> Option<Character> {
    let object = value.as_object()?;

    Some(Character {
        name: text_field(object, "name", UNKNOWN_NAME),
        role: text_field(object, "role", MISSING_FIELD),
        abilities: abilities_field(object),
        motivation: text_field(object, "motivation", MISSING_FIELD),
    })
}

fn text_field(object: &Map<String, Value>, key: &str, default: &str) -> String {
    match object.get(key).map(value_text) {
        Some(text) if !text.trim().is_empty() => text,
        _ => default.to_string(),
    }
}

fn abilities_field(object: &Map<String, Value>) -> String {
    let joined = match object.get("abilities") {
        Some(Value::Array(items)) => items.iter().map(value_text).collect::<Vec<_>>().join("\n"),
        Some(other) => value_text(other),
        None => String::new(),
    };

    if joined.trim().is_empty() {
        MISSING_FIELD.to_string()
    } else {
        joined
    }
}

/// Plain text of a scalar; nested structures are rendered compactly.
fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(value_text).collect::<Vec<_>>().join(", "),
        other => other.to_string(),
    }
}

/// The pre-authored roster used when the provider yields nothing usable.
pub fn fallback_roster() -> Vec<Character> {
    vec![
        Character::new(
            "Alex",
            "Éclaireur",
            "Furtivité\nDrones\nParkour",
            "Retrouver sa sœur disparue.",
        ),
        Character::new(
            "Mira",
            "Alchimiste",
            "Concoctions\nContrôle de zone\nBuffs",
            "Rompre un ancien pacte.",
        ),
        Character::new(
            "Rook",
            "Tank",
            "Bouclier lourd\nProvocation\nCharge",
            "Protéger la cité basse.",
        ),
    ]
}

/// Extract up to `count` characters from raw provider text.
///
/// Never fails. Extracted characters come first, in provider order, truncated
/// to `count`; any shortfall is filled from [`fallback_roster`] until `count`
/// is reached or the static roster runs out.
///
/// # Examples
///
/// ```
/// use gameforge_pipeline::extract_characters;
///
/// let roster = extract_characters("not json at all", 3);
/// let names: Vec<_> = roster.iter().map(|c| c.name.as_str()).collect();
/// assert_eq!(names, ["Alex", "Mira", "Rook"]);
/// ```
pub fn extract_characters(raw: &str, count: usize) -> Vec<Character> {
    let candidates = PARSE_LADDER
        .iter()
        .find_map(|(rung, attempt)| {
            let parsed = attempt(raw)?;
            debug!(rung, entries = parsed.len(), "Parsed character list");
            Some(parsed)
        })
        .unwrap_or_default();

    let mut roster: Vec<Character> = candidates
        .iter()
        .filter_map(normalize_character)
        .take(count)
        .collect();

    if roster.is_empty() {
        warn!(
            response_length = raw.len(),
            "No characters extracted from provider output, using static roster"
        );
    }

    for fallback in fallback_roster() {
        if roster.len() >= count {
            break;
        }
        roster.push(fallback);
    }

    roster
}
