//! HuggingFace client using reqwest.

use super::conversions;
use super::dto::ChatCompletionResponse;
use async_trait::async_trait;
use gameforge_core::{ChatRequest, CompletionRequest, ImageRequest};
use gameforge_error::{GameforgeResult, ProviderError, ProviderErrorKind};
use gameforge_interface::{ImageProvider, TextProvider};
use reqwest::{Client, RequestBuilder, Response};
use tracing::{debug, error, instrument};

/// Base URLs of the two HuggingFace surfaces the client talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuggingFaceEndpoints {
    /// OpenAI-compatible router, used for chat completions
    pub chat_base_url: String,
    /// Inference API, used for raw completions and text-to-image
    pub inference_base_url: String,
}

impl Default for HuggingFaceEndpoints {
    fn default() -> Self {
        Self {
            chat_base_url: "https://router.huggingface.co/v1".to_string(),
            inference_base_url: "https://api-inference.huggingface.co/models".to_string(),
        }
    }
}

/// HuggingFace client bound to one model.
///
/// The same type serves text and image models; the composition root builds one
/// instance per model and shares it for the life of the process.
#[derive(Debug, Clone)]
pub struct HuggingFaceClient {
    client: Client,
    api_token: Option<String>,
    model: String,
    endpoints: HuggingFaceEndpoints,
}

impl HuggingFaceClient {
    /// Creates a client for `model`.
    ///
    /// Requests are sent anonymously when `api_token` is `None`.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderErrorKind::InvalidConfiguration`] when the model id
    /// is blank.
    #[instrument(skip_all, fields(model = %model.as_ref()))]
    pub fn new(
        model: impl AsRef<str>,
        api_token: Option<String>,
        endpoints: HuggingFaceEndpoints,
    ) -> GameforgeResult<Self> {
        let model = model.as_ref().trim();
        if model.is_empty() {
            error!("Model id is blank");
            return Err(ProviderError::new(ProviderErrorKind::InvalidConfiguration(
                "model id must not be empty".to_string(),
            ))
            .into());
        }

        debug!(
            chat = %endpoints.chat_base_url,
            inference = %endpoints.inference_base_url,
            authenticated = api_token.is_some(),
            "Created HuggingFace client"
        );

        Ok(Self {
            client: Client::new(),
            api_token,
            model: model.to_string(),
            endpoints,
        })
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.api_token {
            Some(token) => builder.header("Authorization", format!("Bearer {}", token)),
            None => builder,
        }
    }

    fn inference_url(&self) -> String {
        format!(
            "{}/{}",
            self.endpoints.inference_base_url.trim_end_matches('/'),
            self.model
        )
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response, ProviderError> {
        let response = self.authorize(builder).send().await.map_err(|e| {
            error!(error = ?e, "HTTP request failed");
            ProviderError::new(ProviderErrorKind::Http(format!("Request failed: {}", e)))
        })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            error!(status = %status, error = %message, "API error");
            return Err(ProviderError::new(ProviderErrorKind::Api {
                status: status.as_u16(),
                message,
            }));
        }

        Ok(response)
    }
}

#[async_trait]
impl TextProvider for HuggingFaceClient {
    #[instrument(skip(self, req), fields(model = %self.model, max_tokens = *req.max_tokens()))]
    async fn chat(&self, req: &ChatRequest) -> GameforgeResult<String> {
        let body = conversions::to_chat_completion_request(req, &self.model)?;
        let url = format!(
            "{}/chat/completions",
            self.endpoints.chat_base_url.trim_end_matches('/')
        );
        debug!(url = %url, messages = body.messages().len(), "Sending chat completion");

        let response = self.send(self.client.post(&url).json(&body)).await?;

        let parsed: ChatCompletionResponse = response.json().await.map_err(|e| {
            ProviderError::new(ProviderErrorKind::ResponseConversion(format!(
                "Failed to parse chat response: {}",
                e
            )))
        })?;

        Ok(conversions::from_chat_completion_response(&parsed)?)
    }

    #[instrument(skip(self, req), fields(model = %self.model, max_new_tokens = *req.max_new_tokens()))]
    async fn complete(&self, req: &CompletionRequest) -> GameforgeResult<String> {
        let body = conversions::to_text_generation_request(req)?;
        let url = self.inference_url();
        debug!(url = %url, inputs_len = body.inputs().len(), "Sending text generation");

        let response = self.send(self.client.post(&url).json(&body)).await?;

        let response_text = response.text().await.map_err(|e| {
            ProviderError::new(ProviderErrorKind::ResponseConversion(format!(
                "Failed to read response: {}",
                e
            )))
        })?;
        debug!(response_len = response_text.len(), "Received response");

        let response_json: serde_json::Value =
            serde_json::from_str(&response_text).map_err(|e| {
                error!(error = ?e, response = %response_text, "Failed to parse JSON");
                ProviderError::new(ProviderErrorKind::ResponseConversion(format!(
                    "Failed to parse JSON: {}",
                    e
                )))
            })?;

        Ok(conversions::generated_text(&response_json)?)
    }

    fn provider_name(&self) -> &'static str {
        "huggingface"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl ImageProvider for HuggingFaceClient {
    #[instrument(skip(self, req), fields(model = %self.model, width = *req.width(), height = *req.height()))]
    async fn text_to_image(&self, req: &ImageRequest) -> GameforgeResult<Vec<u8>> {
        let body = conversions::to_text_to_image_request(req);
        let url = self.inference_url();
        debug!(url = %url, prompt_len = req.prompt().chars().count(), "Sending text-to-image");

        let response = self
            .send(
                self.client
                    .post(&url)
                    .header("Accept", "image/png")
                    .json(&body),
            )
            .await?;

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let bytes = response.bytes().await.map_err(|e| {
            ProviderError::new(ProviderErrorKind::Http(format!(
                "Failed to read image body: {}",
                e
            )))
        })?;
        debug!(size = bytes.len(), content_type = ?content_type, "Received image");

        Ok(conversions::decode_image_body(
            content_type.as_deref(),
            &bytes,
        )?)
    }

    fn provider_name(&self) -> &'static str {
        "huggingface"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
