//! Request types exchanged with text and image providers.

use crate::Message;
use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Chat-style text generation request.
///
/// # Examples
///
/// ```
/// use gameforge_core::{ChatRequest, Message};
///
/// let request = ChatRequest::builder()
///     .messages(vec![Message::system("Tu es concis."), Message::user("Bonjour")])
///     .max_tokens(300u32)
///     .temperature(0.7f32)
///     .build()
///     .unwrap();
///
/// assert_eq!(request.messages().len(), 2);
/// assert_eq!(*request.max_tokens(), 300);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct ChatRequest {
    /// Conversation messages, system instruction first
    messages: Vec<Message>,
    /// Maximum number of tokens to generate
    max_tokens: u32,
    /// Sampling temperature
    temperature: f32,
}

impl ChatRequest {
    /// Creates a new builder for `ChatRequest`.
    pub fn builder() -> ChatRequestBuilder {
        ChatRequestBuilder::default()
    }
}

/// Raw single-string completion request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct CompletionRequest {
    /// Full prompt, instruction included
    prompt: String,
    /// Maximum number of new tokens
    max_new_tokens: u32,
    /// Sampling temperature
    temperature: f32,
}

impl CompletionRequest {
    /// Creates a new builder for `CompletionRequest`.
    pub fn builder() -> CompletionRequestBuilder {
        CompletionRequestBuilder::default()
    }
}

/// Text-to-image request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct ImageRequest {
    /// Image prompt, already bounded by the caller
    prompt: String,
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
}

impl ImageRequest {
    /// Creates a new builder for `ImageRequest`.
    pub fn builder() -> ImageRequestBuilder {
        ImageRequestBuilder::default()
    }
}
