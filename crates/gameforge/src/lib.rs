//! Gameforge - game concepts from a few creative parameters.
//!
//! Gameforge turns a title, genre, ambiance and keywords into a complete game
//! concept: a short universe, a three-act story, notable locations, a
//! character roster, and two pieces of concept art. Text and images come from
//! HuggingFace models; every provider failure degrades to a fallback value, so
//! generation always completes.
//!
//! # Quick Start
//!
//! ```no_run
//! use gameforge::{CreativeParams, Gameforge, GameforgeConfig};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let app = Gameforge::new(GameforgeConfig::load()?)?;
//! let params = CreativeParams::new("Sepia Crown", "RPG", "Dark Fantasy gothique", "ruines anciennes");
//!
//! let artifacts = app.create(&params).await;
//! println!("{}", artifacts.story);
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - `gameforge_error` - Error types
//! - `gameforge_core` - Artifact schema and provider request types
//! - `gameforge_interface` - Provider and repository traits
//! - `gameforge_models` - HuggingFace client
//! - `gameforge_storage` - Media files and saved games
//! - `gameforge_pipeline` - Prompts, gateways, extraction, harmonization
//!
//! This crate re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod app;
mod config;

pub use app::Gameforge;
pub use config::{DEFAULT_CONFIG, GameforgeConfig, TOKEN_ENV_VAR};

pub use gameforge_core::*;
pub use gameforge_error::*;
pub use gameforge_interface::*;
pub use gameforge_pipeline::*;
pub use gameforge_storage::*;

#[cfg(feature = "huggingface")]
pub use gameforge_models::*;
