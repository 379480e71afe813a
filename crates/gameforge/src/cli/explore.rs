//! Exploration command handler.

use super::build_app;
use gameforge::ExplorePreview;
use std::io::{BufRead, Write};
use std::path::Path;

/// A decision read from the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Decision {
    Save,
    Regenerate,
    Discard,
}

impl Decision {
    fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "s" | "save" => Some(Self::Save),
            "r" | "regenerate" => Some(Self::Regenerate),
            "d" | "discard" | "q" => Some(Self::Discard),
            _ => None,
        }
    }
}

fn print_preview(preview: &ExplorePreview) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(preview)?);
    Ok(())
}

fn read_decision() -> anyhow::Result<Decision> {
    let stdin = std::io::stdin();
    loop {
        print!("[s]ave, [r]egenerate or [d]iscard? ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(Decision::Discard);
        }
        if let Some(decision) = Decision::parse(&line) {
            return Ok(decision);
        }
    }
}

/// Run the exploration loop until the preview is saved or discarded.
pub async fn explore(config_path: Option<&Path>, owner: &str) -> anyhow::Result<()> {
    let app = build_app(config_path)?;
    let mut session = app.explore_session();
    let mut rng = rand::thread_rng();

    print_preview(session.generate(&mut rng).await)?;

    loop {
        match read_decision()? {
            Decision::Save => {
                if let Some(saved) = session.save(app.repository(), owner).await? {
                    println!("Saved as {} ({})", saved.id(), saved.created_at());
                }
                return Ok(());
            }
            Decision::Regenerate => {
                print_preview(session.regenerate(&mut rng).await)?;
            }
            Decision::Discard => {
                session.discard();
                println!("Discarded.");
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decision_parsing() {
        assert_eq!(Decision::parse("s\n"), Some(Decision::Save));
        assert_eq!(Decision::parse(" Regenerate "), Some(Decision::Regenerate));
        assert_eq!(Decision::parse("D"), Some(Decision::Discard));
        assert_eq!(Decision::parse("maybe"), None);
    }
}
