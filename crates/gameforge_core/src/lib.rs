//! Core data types for the Gameforge content pipeline.
//!
//! This crate provides the artifact schema the pipeline guarantees to produce,
//! the creative parameters it consumes, and the request types exchanged with
//! text and image providers.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod artifact;
mod character;
mod genre;
mod message;
mod params;
mod request;
mod role;

pub use artifact::ArtifactSet;
pub use character::{Character, MISSING_FIELD, UNKNOWN_NAME};
pub use genre::Genre;
pub use message::Message;
pub use params::CreativeParams;
pub use request::{
    ChatRequest, ChatRequestBuilder, CompletionRequest, CompletionRequestBuilder, ImageRequest,
    ImageRequestBuilder,
};
pub use role::Role;
