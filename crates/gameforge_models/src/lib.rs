//! Text and image provider integrations for Gameforge.
//!
//! Each provider lives behind its own feature flag and implements the
//! [`TextProvider`](gameforge_interface::TextProvider) and
//! [`ImageProvider`](gameforge_interface::ImageProvider) traits.
//!
//! # Available Providers
//!
//! - **HuggingFace** - Enable with `huggingface` feature (default)
//!
//! # Example
//!
//! ```no_run
//! # #[cfg(feature = "huggingface")]
//! # {
//! use gameforge_core::{ChatRequest, Message};
//! use gameforge_interface::TextProvider;
//! use gameforge_models::{HuggingFaceClient, HuggingFaceEndpoints};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = HuggingFaceClient::new(
//!     "Qwen/Qwen2.5-7B-Instruct",
//!     std::env::var("HF_TOKEN").ok(),
//!     HuggingFaceEndpoints::default(),
//! )?;
//! let request = ChatRequest::builder()
//!     .messages(vec![Message::user("Bonjour")])
//!     .max_tokens(50u32)
//!     .temperature(0.7f32)
//!     .build()?;
//! let text = client.chat(&request).await?;
//! # Ok(())
//! # }
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

#[cfg(feature = "huggingface")]
mod huggingface;

#[cfg(feature = "huggingface")]
pub use huggingface::{
    ChatCompletionRequest, ChatCompletionResponse, HuggingFaceClient, HuggingFaceEndpoints,
    TextGenerationParameters, TextGenerationRequest, TextToImageParameters, TextToImageRequest,
};
