//! Text generation gateway.
//!
//! Wraps a [`TextProvider`] in a two-tier call strategy that never fails:
//! a chat call first, a raw completion second, and a sentinel string
//! describing the failure last.

use gameforge_core::{ChatRequest, CompletionRequest, Message};
use gameforge_error::{GameforgeError, GameforgeResult, ProviderError, ProviderErrorKind};
use gameforge_interface::TextProvider;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Instruction framing every text request.
pub const SYSTEM_INSTRUCTION: &str = "You are GameForge, an assistant that creates concise, structured game design content in French.";

/// Sampling temperature of both tiers.
pub const TEMPERATURE: f32 = 0.7;

/// Prefix of the text returned when both tiers fail.
pub const ERROR_SENTINEL_PREFIX: &str = "[Erreur Hugging Face]";

/// Failure-absorbing front of a text provider.
#[derive(Clone)]
pub struct TextGateway {
    provider: Arc<dyn TextProvider>,
}

impl std::fmt::Debug for TextGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextGateway")
            .field("provider", &self.provider.provider_name())
            .field("model", &self.provider.model_name())
            .finish()
    }
}

impl TextGateway {
    /// Creates a gateway over a shared provider handle.
    pub fn new(provider: Arc<dyn TextProvider>) -> Self {
        Self { provider }
    }

    /// Generate text for `prompt`. Always returns a string.
    ///
    /// Tries [`attempt_chat`](Self::attempt_chat), then
    /// [`attempt_completion`](Self::attempt_completion), and finally returns
    /// [`sentinel`](Self::sentinel) text embedding the last failure.
    #[instrument(skip(self, prompt), fields(model = %self.provider.model_name(), prompt_len = prompt.len()))]
    pub async fn complete(&self, prompt: &str, max_tokens: u32) -> String {
        match self.attempt_chat(prompt, max_tokens).await {
            Ok(text) => return text,
            Err(e) => warn!(error = %e, "Chat completion failed, falling back to text generation"),
        }

        match self.attempt_completion(prompt, max_tokens).await {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "Text generation failed, returning sentinel");
                Self::sentinel(&e)
            }
        }
    }

    /// Tier 1: chat call with the system instruction and the user prompt.
    pub async fn attempt_chat(&self, prompt: &str, max_tokens: u32) -> GameforgeResult<String> {
        let request = ChatRequest::builder()
            .messages(vec![
                Message::system(SYSTEM_INSTRUCTION),
                Message::user(prompt),
            ])
            .max_tokens(max_tokens)
            .temperature(TEMPERATURE)
            .build()
            .map_err(|e| ProviderError::new(ProviderErrorKind::Builder(e.to_string())))?;

        let text = self.provider.chat(&request).await?;
        debug!(response_len = text.len(), "Chat completion succeeded");
        non_empty(text)
    }

    /// Tier 2: raw completion of the instruction and prompt as one string.
    pub async fn attempt_completion(
        &self,
        prompt: &str,
        max_tokens: u32,
    ) -> GameforgeResult<String> {
        let request = CompletionRequest::builder()
            .prompt(Self::completion_prompt(prompt))
            .max_new_tokens(max_tokens)
            .temperature(TEMPERATURE)
            .build()
            .map_err(|e| ProviderError::new(ProviderErrorKind::Builder(e.to_string())))?;

        let text = self.provider.complete(&request).await?;
        debug!(response_len = text.len(), "Text generation succeeded");
        non_empty(text)
    }

    /// The single-string form of the instruction and prompt used by tier 2.
    ///
    /// # Examples
    ///
    /// ```
    /// use gameforge_pipeline::{SYSTEM_INSTRUCTION, TextGateway};
    ///
    /// let prompt = TextGateway::completion_prompt("Bonjour");
    /// assert_eq!(prompt, format!("{}\nUtilisateur: Bonjour\nAssistant:", SYSTEM_INSTRUCTION));
    /// ```
    pub fn completion_prompt(prompt: &str) -> String {
        format!("{}\nUtilisateur: {}\nAssistant:", SYSTEM_INSTRUCTION, prompt)
    }

    /// Text standing in for generated content when both tiers fail.
    pub fn sentinel(cause: &GameforgeError) -> String {
        format!("{} {}", ERROR_SENTINEL_PREFIX, cause)
    }
}

fn non_empty(text: String) -> GameforgeResult<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ProviderError::new(ProviderErrorKind::EmptyResponse).into());
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty_trims() {
        assert_eq!(non_empty("  texte \n".to_string()).unwrap(), "texte");
    }

    #[test]
    fn test_non_empty_rejects_blank() {
        assert!(non_empty(" \n\t".to_string()).is_err());
    }

    #[test]
    fn test_sentinel_embeds_cause() {
        let cause: GameforgeError = ProviderError::new(ProviderErrorKind::Api {
            status: 503,
            message: "loading".to_string(),
        })
        .into();
        let text = TextGateway::sentinel(&cause);
        assert!(text.starts_with("[Erreur Hugging Face] "));
        assert!(text.contains("503"));
    }
}
