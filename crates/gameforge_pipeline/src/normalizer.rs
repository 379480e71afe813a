//! Story name harmonization.
//!
//! Generated synopses tend to invent their own cast. [`harmonize`] rewrites
//! capitalized words in the story to names from the canonical roster, line by
//! line, leaving headings untouched.
//!
//! The candidate pattern is heuristic and will also catch capitalized common
//! words. Its character classes are pinned here and locked down by tests.

use regex::{Captures, Regex};
use std::collections::HashMap;
use std::sync::LazyLock;

/// Markdown heading or act heading (`Acte 1`, `ACT II`, `**Acte 3**`) at line start.
static STRUCTURAL_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:#{1,6}(?:\s|$)|\**\s*(?i:acte?)\s*(?:\d+|[IVXLC]+)\b)")
        .expect("Valid structural marker regex")
});

/// One uppercase letter then at least two lowercase letters, whole word.
static NAME_CANDIDATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-ZÀÂÄÇÉÈÊËÎÏÔÖÙÛÜŸÆŒ][a-zàâäçéèêëîïôöùûüÿæœ]{2,}\b")
        .expect("Valid name candidate regex")
});

/// Whether `line` is a heading that harmonization leaves byte-identical.
///
/// # Examples
///
/// ```
/// use gameforge_pipeline::is_structural_marker;
///
/// assert!(is_structural_marker("## Acte 1"));
/// assert!(is_structural_marker("ACT II: La chute"));
/// assert!(is_structural_marker("**Acte 3** - Finale"));
/// assert!(!is_structural_marker("Acteur principal: Zed"));
/// ```
pub fn is_structural_marker(line: &str) -> bool {
    STRUCTURAL_MARKER.is_match(line)
}

/// Distinct capitalized words of `line` that are not canonical names, in
/// first-occurrence order.
///
/// # Examples
///
/// ```
/// use gameforge_pipeline::name_candidates;
///
/// let names = vec!["Alex".to_string()];
/// let found = name_candidates("Alex rencontre Zora puis Zora fuit avec Éloïse.", &names);
/// assert_eq!(found, ["Zora", "Éloïse"]);
/// ```
pub fn name_candidates<'a>(line: &'a str, canonical_names: &[String]) -> Vec<&'a str> {
    let mut candidates: Vec<&str> = Vec::new();
    for found in NAME_CANDIDATE.find_iter(line) {
        let word = found.as_str();
        if canonical_names.iter().any(|name| name == word) || candidates.contains(&word) {
            continue;
        }
        candidates.push(word);
    }
    candidates
}

fn harmonize_line(line: &str, canonical_names: &[String]) -> String {
    let substitutions: HashMap<&str, &str> = name_candidates(line, canonical_names)
        .into_iter()
        .enumerate()
        .map(|(index, candidate)| {
            (
                candidate,
                canonical_names[index % canonical_names.len()].as_str(),
            )
        })
        .collect();

    // Single pass over the original line: inserted names are never rescanned.
    NAME_CANDIDATE
        .replace_all(line, |caps: &Captures<'_>| {
            let word = &caps[0];
            substitutions.get(word).copied().unwrap_or(word).to_string()
        })
        .into_owned()
}

/// Rewrite incidental names in `story` to names from `canonical_names`.
///
/// Works line by line and preserves the line count. Structural markers pass
/// through unchanged. In every other line the i-th distinct candidate is
/// replaced, at each whole-word occurrence, by `canonical_names[i % len]`, so
/// two incidental names can end up sharing one canonical name. An empty
/// roster leaves the story unchanged.
///
/// # Examples
///
/// ```
/// use gameforge_pipeline::harmonize;
///
/// let names = vec!["Alex".to_string(), "Mira".to_string()];
/// let story = "# Acte 1\nZora trahit Bastien.";
/// assert_eq!(harmonize(story, &names), "# Acte 1\nAlex trahit Mira.");
/// ```
pub fn harmonize(story: &str, canonical_names: &[String]) -> String {
    if canonical_names.is_empty() {
        return story.to_string();
    }

    story
        .split('\n')
        .map(|line| {
            if is_structural_marker(line) {
                line.to_string()
            } else {
                harmonize_line(line, canonical_names)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_marker_lines_are_byte_identical() {
        let names = roster(&["Alex"]);
        for line in [
            "# Zora",
            "###### Bastien au Palais",
            "Acte 1 - Zora",
            "ACTE II: Bastien",
            "  act 3 Zora",
            "**Acte 3** Bastien",
        ] {
            assert!(is_structural_marker(line), "{line}");
            assert_eq!(harmonize(line, &names), line);
        }
    }

    #[test]
    fn test_non_markers() {
        for line in [
            "Zora entre.",
            "#hashtag Zora",
            "####### Trop profond",
            "Acteur: Zora",
            "Actes Zora",
            "Un acte 1 au milieu",
        ] {
            assert!(!is_structural_marker(line), "{line}");
        }
    }

    #[test]
    fn test_repeated_token_maps_to_same_name() {
        let names = roster(&["Alex", "Mira"]);
        let out = harmonize("Zora parle. Plus tard, Zora part.", &names);
        assert_eq!(out, "Alex parle. Plus tard, Alex part.");
    }

    #[test]
    fn test_distinct_candidates_cycle_and_alias() {
        let names = roster(&["Alex", "Mira"]);
        let out = harmonize("Zora, Bastien et Yvette.", &names);
        // Third candidate wraps around onto the first canonical name.
        assert_eq!(out, "Alex, Mira et Alex.");
    }

    #[test]
    fn test_index_restarts_on_each_line() {
        let names = roster(&["Alex", "Mira"]);
        let out = harmonize("Zora et Bastien.\nYvette seule.", &names);
        assert_eq!(out, "Alex et Mira.\nAlex seule.");
    }

    #[test]
    fn test_canonical_names_are_left_alone() {
        let names = roster(&["Alex", "Mira"]);
        let out = harmonize("Alex aide Zora.", &names);
        assert_eq!(out, "Alex aide Alex.");
    }

    #[test]
    fn test_empty_roster_is_noop() {
        let story = "Zora et Bastien.\n# Acte 1";
        assert_eq!(harmonize(story, &[]), story);
    }

    #[test]
    fn test_line_count_is_preserved() {
        let names = roster(&["Alex"]);
        let story = "Zora\n\n# Acte 2\nFin de Bastien.\n";
        let out = harmonize(story, &names);
        assert_eq!(out.split('\n').count(), story.split('\n').count());
        assert!(out.ends_with('\n'));
    }

    #[test]
    fn test_candidate_pattern_is_pinned() {
        let names = roster(&[]);
        // Needs three letters, an uppercase head and a lowercase tail.
        assert!(name_candidates("Al Bo", &names).is_empty());
        assert!(name_candidates("ZORA", &names).is_empty());
        assert!(name_candidates("zora", &names).is_empty());
        assert!(name_candidates("Zora2", &names).is_empty());
        assert_eq!(name_candidates("Zed", &names), ["Zed"]);
        // Accented letters on both sides.
        assert_eq!(name_candidates("Œdipe Ève Émilie", &names), ["Œdipe", "Ève", "Émilie"]);
        assert_eq!(name_candidates("Ysaÿe", &names), ["Ysaÿe"]);
    }

    #[test]
    fn test_whole_word_replacement_only() {
        let names = roster(&["Alex"]);
        // "Zora" and "Zoran" are separate candidates; neither replacement touches the other.
        let out = harmonize("Zora et Zoran", &roster(&["Alex", "Mira"]));
        assert_eq!(out, "Alex et Mira");
        assert_eq!(harmonize("Zora, Zora!", &names), "Alex, Alex!");
    }

    #[test]
    fn test_inserted_names_are_not_rewritten_again() {
        let names = roster(&["Kael Voss", "Mira"]);
        assert_eq!(
            harmonize("Kael Voss arrive.", &names),
            "Kael Voss Mira arrive."
        );
        assert_eq!(
            harmonize("Zora croise Bastien.", &names),
            "Kael Voss croise Mira."
        );
    }

    #[test]
    fn test_hyphenated_roster_name_survives() {
        let names = roster(&["Jean-Luc", "Mira"]);
        assert_eq!(harmonize("Zora parle à Luc.", &names), "Jean-Luc parle à Mira.");
    }

    #[test]
    fn test_replacement_text_is_literal() {
        let names = roster(&["$1 Zed"]);
        assert_eq!(harmonize("Zora", &names), "$1 Zed");
    }
}
