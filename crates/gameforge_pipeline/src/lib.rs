//! Generative content pipeline for Gameforge.
//!
//! Turns creative parameters into a complete [`ArtifactSet`](gameforge_core::ArtifactSet)
//! by composing prompts, driving text and image providers through
//! failure-absorbing gateways, extracting a character roster from free-form
//! provider text, and harmonizing the story with that roster.
//!
//! Components, leaves first:
//!
//! - [`prompts`]: pure prompt composition
//! - [`TextGateway`]: chat call, raw completion fallback, sentinel text
//! - [`extract_characters`]: JSON ladder with a static roster fallback
//! - [`ImageGateway`]: bounded prompts, stored PNGs, deterministic placeholders
//! - [`harmonize`]: roster-aware name substitution in the story
//! - [`Orchestrator`] and [`ExploreSession`]: the two generation flows
//!
//! Nothing in this crate returns an error for provider misbehavior; every
//! failure degrades to a well-typed fallback value.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod explore;
mod extraction;
mod image_gateway;
mod normalizer;
mod orchestrator;
pub mod prompts;
mod text_gateway;

pub use explore::{
    EXPLORE_AMBIANCES, EXPLORE_KEYWORDS, EXPLORE_REFERENCES, EXPLORE_TITLES, ExplorePreview,
    ExploreSession, explore_params,
};
pub use extraction::{
    extract_characters, fallback_roster, normalize_character, parse_bracketed_array,
    parse_whole_array,
};
pub use image_gateway::{
    ConceptArt, IMAGE_HEIGHT, IMAGE_WIDTH, ImageGateway, placeholder_pair, placeholder_seed,
};
pub use normalizer::{harmonize, is_structural_marker, name_candidates};
pub use orchestrator::Orchestrator;
pub use prompts::TextPrompt;
pub use text_gateway::{ERROR_SENTINEL_PREFIX, SYSTEM_INSTRUCTION, TEMPERATURE, TextGateway};
