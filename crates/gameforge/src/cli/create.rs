//! Form-driven creation command handler.

use super::build_app;
use super::commands::CreateArgs;
use gameforge::CreativeParams;
use std::path::Path;

/// Generate a game, print it as JSON, and save it when asked.
pub async fn create_game(config_path: Option<&Path>, args: CreateArgs) -> anyhow::Result<()> {
    let app = build_app(config_path)?;

    let mut params = CreativeParams::new(
        args.title,
        args.genre.code(),
        args.ambiance,
        args.keywords,
    );
    if let Some(references) = args.references.filter(|r| !r.trim().is_empty()) {
        params = params.with_references(references);
    }

    let artifacts = app.create(&params).await;
    println!("{}", serde_json::to_string_pretty(&artifacts)?);

    if args.save {
        let saved = app.save(&args.owner, params, artifacts, args.public).await?;
        println!("Saved as {} ({})", saved.id(), saved.created_at());
    }

    Ok(())
}
