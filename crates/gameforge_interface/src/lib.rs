//! Trait definitions for the collaborators of the Gameforge pipeline.
//!
//! The pipeline talks to text and image providers and hands finished artifact
//! sets to a repository exclusively through the traits defined here.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;
mod types;

pub use traits::{GameRepository, ImageProvider, TextProvider};
pub use types::{NewGame, SavedGame, StoredGame};
