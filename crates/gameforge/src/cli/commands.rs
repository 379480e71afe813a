//! CLI command definitions.

use clap::{Args, Parser, Subcommand, ValueEnum};
use gameforge::Genre;
use std::path::PathBuf;
use uuid::Uuid;

/// Gameforge - game concepts from a few creative parameters
#[derive(Parser, Debug)]
#[command(name = "gameforge")]
#[command(about = "Generate game concepts: universe, story, characters and concept art", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file layered over the standard sources
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a game from creative parameters
    Create(CreateArgs),

    /// Generate a random game, then save, regenerate or discard it
    Explore {
        /// Owner of saved games
        #[arg(long, default_value = "local")]
        owner: String,
    },

    /// List saved games
    List {
        /// Owner whose games to list
        #[arg(long)]
        owner: String,
    },

    /// List public games of every owner
    Public,

    /// Publish or hide a saved game
    Visibility {
        /// Game id (see `gameforge list`)
        id: Uuid,

        /// New visibility
        #[arg(value_enum)]
        visibility: Visibility,

        /// Owner of the game
        #[arg(long, default_value = "local")]
        owner: String,
    },

    /// List supported genres
    Genres,
}

/// Visibility of a saved game
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Listed by `gameforge public`
    Public,
    /// Visible to its owner only
    Private,
}

/// Arguments of the `create` command
#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Working title
    #[arg(long)]
    pub title: String,

    /// Genre code or label (see `gameforge genres`)
    #[arg(long)]
    pub genre: Genre,

    /// Mood or visual ambiance
    #[arg(long)]
    pub ambiance: String,

    /// Comma-separated keywords
    #[arg(long)]
    pub keywords: String,

    /// Inspirations
    #[arg(long)]
    pub references: Option<String>,

    /// Owner of the saved game
    #[arg(long, default_value = "local")]
    pub owner: String,

    /// Make the saved game public
    #[arg(long)]
    pub public: bool,

    /// Save the generated game
    #[arg(long)]
    pub save: bool,
}
