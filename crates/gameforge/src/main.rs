//! Gameforge CLI binary.
//!
//! - Create a game from creative parameters
//! - Explore randomly generated games and keep the ones you like
//! - List saved games and publish or hide them

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use cli::{
        Cli, Commands, change_visibility, create_game, explore, list_games, list_public_games,
        show_genres,
    };

    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Create(args) => create_game(cli.config.as_deref(), args).await?,
        Commands::Explore { owner } => explore(cli.config.as_deref(), &owner).await?,
        Commands::List { owner } => list_games(cli.config.as_deref(), &owner).await?,
        Commands::Public => list_public_games(cli.config.as_deref()).await?,
        Commands::Visibility {
            id,
            visibility,
            owner,
        } => change_visibility(cli.config.as_deref(), id, &owner, visibility).await?,
        Commands::Genres => show_genres(),
    }

    Ok(())
}
