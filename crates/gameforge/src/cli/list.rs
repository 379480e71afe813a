//! Listing command handlers.

use super::build_app;
use super::commands::Visibility;
use gameforge::{Genre, StoredGame};
use std::path::Path;
use strum::IntoEnumIterator;
use uuid::Uuid;

/// Print the saved games of `owner`, newest first.
pub async fn list_games(config_path: Option<&Path>, owner: &str) -> anyhow::Result<()> {
    let app = build_app(config_path)?;
    let games = app.list(owner).await?;

    println!("Games of '{}':", owner);
    print_games(&games, true);
    Ok(())
}

/// Print the public games of every owner, newest first.
pub async fn list_public_games(config_path: Option<&Path>) -> anyhow::Result<()> {
    let app = build_app(config_path)?;
    let games = app.list_public().await?;

    println!("Public games:");
    print_games(&games, false);
    Ok(())
}

/// Publish or hide one saved game.
pub async fn change_visibility(
    config_path: Option<&Path>,
    id: Uuid,
    owner: &str,
    visibility: Visibility,
) -> anyhow::Result<()> {
    let app = build_app(config_path)?;
    let stored = app
        .set_visibility(id, owner, visibility == Visibility::Public)
        .await?;

    println!(
        "'{}' is now {}",
        stored.game.params.title,
        if stored.game.is_public { "public" } else { "private" }
    );
    Ok(())
}

fn print_games(games: &[StoredGame], mark_public: bool) {
    println!("{:-<80}", "");
    for stored in games {
        let params = &stored.game.params;
        let suffix = if !mark_public {
            format!("  by {}", stored.game.owner)
        } else if stored.game.is_public {
            "  [public]".to_string()
        } else {
            String::new()
        };
        println!(
            "{}  {}  {} ({}, {}){}",
            stored.id,
            stored.created_at.format("%Y-%m-%d %H:%M"),
            params.title,
            params.genre,
            params.ambiance,
            suffix
        );
    }
    println!("{:-<80}", "");
    println!("Total: {} games", games.len());
}

/// Print genre codes and labels.
pub fn show_genres() {
    for genre in Genre::iter() {
        println!("{:<5} {}", genre.code(), genre);
    }
}
