//! HuggingFace router and inference API integration.

mod client;
mod conversions;
mod dto;

pub use client::{HuggingFaceClient, HuggingFaceEndpoints};
pub use dto::{
    ChatCompletionRequest, ChatCompletionResponse, TextGenerationParameters,
    TextGenerationRequest, TextToImageParameters, TextToImageRequest,
};
