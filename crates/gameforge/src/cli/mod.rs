//! Command-line interface module.

mod commands;
mod create;
mod explore;
mod list;

pub use commands::{Cli, Commands};
pub use create::create_game;
pub use explore::explore;
pub use list::{change_visibility, list_games, list_public_games, show_genres};

use gameforge::{Gameforge, GameforgeConfig, GameforgeResult};
use std::path::Path;

/// Load configuration, layering `config_path` when given, and build the app.
fn build_app(config_path: Option<&Path>) -> GameforgeResult<Gameforge> {
    let config = GameforgeConfig::load_with_override(config_path)?;
    Gameforge::new(config)
}
