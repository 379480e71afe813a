//! HuggingFace API data transfer objects.

use derive_builder::Builder;
use derive_getters::Getters;
use gameforge_core::Message;
use serde::{Deserialize, Serialize};

/// OpenAI-compatible chat completion request sent to the router.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct ChatCompletionRequest {
    /// Model identifier
    model: String,
    /// Conversation messages
    messages: Vec<Message>,
    /// Maximum tokens to generate
    max_tokens: u32,
    /// Sampling temperature
    temperature: f32,
    /// Whether to stream the response
    #[builder(default = "false")]
    stream: bool,
}

impl ChatCompletionRequest {
    /// Creates a new builder for `ChatCompletionRequest`.
    pub fn builder() -> ChatCompletionRequestBuilder {
        ChatCompletionRequestBuilder::default()
    }
}

/// Message returned inside a chat choice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct ChatChoiceMessage {
    /// Generated content; some models return `null` on refusal
    #[serde(default)]
    content: Option<String>,
}

/// One completion choice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct ChatChoice {
    /// Generated message
    message: ChatChoiceMessage,
}

/// OpenAI-compatible chat completion response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct ChatCompletionResponse {
    /// Completion choices, first one is used
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

/// Sampling parameters for raw text generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct TextGenerationParameters {
    /// Maximum new tokens
    max_new_tokens: u32,
    /// Sampling temperature
    temperature: f32,
    /// Echo the prompt back in `generated_text`
    #[builder(default = "false")]
    return_full_text: bool,
}

impl TextGenerationParameters {
    /// Creates a new builder for `TextGenerationParameters`.
    pub fn builder() -> TextGenerationParametersBuilder {
        TextGenerationParametersBuilder::default()
    }
}

/// Raw text generation request for the inference API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct TextGenerationRequest {
    /// Prompt string
    inputs: String,
    /// Sampling parameters
    parameters: TextGenerationParameters,
}

impl TextGenerationRequest {
    /// Creates a new builder for `TextGenerationRequest`.
    pub fn builder() -> TextGenerationRequestBuilder {
        TextGenerationRequestBuilder::default()
    }
}

/// Image dimensions for text-to-image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct TextToImageParameters {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
}

impl TextToImageParameters {
    /// Creates image parameters.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Text-to-image request for the inference API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct TextToImageRequest {
    /// Image prompt
    inputs: String,
    /// Output dimensions
    parameters: TextToImageParameters,
}

impl TextToImageRequest {
    /// Creates a text-to-image request.
    pub fn new(inputs: impl Into<String>, parameters: TextToImageParameters) -> Self {
        Self {
            inputs: inputs.into(),
            parameters,
        }
    }
}
