//! Type conversions between Gameforge and HuggingFace formats.

use super::dto::{
    ChatCompletionRequest, ChatCompletionResponse, TextGenerationParameters,
    TextGenerationRequest, TextToImageParameters, TextToImageRequest,
};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use gameforge_core::{ChatRequest, CompletionRequest, ImageRequest};
use gameforge_error::{ProviderError, ProviderErrorKind};
use serde_json::Value;

/// Converts a Gameforge chat request to the router's chat completion format.
pub fn to_chat_completion_request(
    req: &ChatRequest,
    model: &str,
) -> Result<ChatCompletionRequest, ProviderError> {
    ChatCompletionRequest::builder()
        .model(model)
        .messages(req.messages().clone())
        .max_tokens(*req.max_tokens())
        .temperature(*req.temperature())
        .build()
        .map_err(|e| {
            ProviderError::new(ProviderErrorKind::Builder(format!(
                "Failed to build chat request: {}",
                e
            )))
        })
}

/// Extracts the first choice's content from a chat completion.
pub fn from_chat_completion_response(
    resp: &ChatCompletionResponse,
) -> Result<String, ProviderError> {
    resp.choices()
        .first()
        .and_then(|choice| choice.message().content().clone())
        .ok_or_else(|| ProviderError::new(ProviderErrorKind::EmptyResponse))
}

/// Converts a Gameforge completion request to the inference API format.
pub fn to_text_generation_request(
    req: &CompletionRequest,
) -> Result<TextGenerationRequest, ProviderError> {
    let parameters = TextGenerationParameters::builder()
        .max_new_tokens(*req.max_new_tokens())
        .temperature(*req.temperature())
        .build()
        .map_err(|e| {
            ProviderError::new(ProviderErrorKind::Builder(format!(
                "Failed to build parameters: {}",
                e
            )))
        })?;

    TextGenerationRequest::builder()
        .inputs(req.prompt().clone())
        .parameters(parameters)
        .build()
        .map_err(|e| {
            ProviderError::new(ProviderErrorKind::Builder(format!(
                "Failed to build request: {}",
                e
            )))
        })
}

/// Reads `generated_text` from either `[{"generated_text": ..}]` or `{"generated_text": ..}`.
pub fn generated_text(response_json: &Value) -> Result<String, ProviderError> {
    let text = match response_json.as_array() {
        Some(array) => array.first().and_then(|v| v.get("generated_text")),
        None => response_json.get("generated_text"),
    };

    text.and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| {
            ProviderError::new(ProviderErrorKind::ResponseConversion(
                "Missing generated_text in response".to_string(),
            ))
        })
}

/// Converts a Gameforge image request to the inference API format.
pub fn to_text_to_image_request(req: &ImageRequest) -> TextToImageRequest {
    TextToImageRequest::new(
        req.prompt().clone(),
        TextToImageParameters::new(*req.width(), *req.height()),
    )
}

/// Decodes an image response body.
///
/// Binary bodies are returned as-is. JSON bodies must carry a base64 image under
/// `b64_json`, `image`, or `data[0].b64_json`.
pub fn decode_image_body(content_type: Option<&str>, body: &[u8]) -> Result<Vec<u8>, ProviderError> {
    let is_json = content_type.is_some_and(|ct| ct.starts_with("application/json"));

    let bytes = if is_json {
        let json: Value = serde_json::from_slice(body).map_err(|e| {
            ProviderError::new(ProviderErrorKind::ResponseConversion(format!(
                "Failed to parse image JSON: {}",
                e
            )))
        })?;

        let encoded = json
            .get("b64_json")
            .or_else(|| json.get("image"))
            .or_else(|| {
                json.get("data")
                    .and_then(|d| d.get(0))
                    .and_then(|d| d.get("b64_json"))
            })
            .and_then(Value::as_str)
            .ok_or_else(|| {
                ProviderError::new(ProviderErrorKind::ResponseConversion(
                    "No base64 image in JSON response".to_string(),
                ))
            })?;

        STANDARD.decode(encoded).map_err(|e| {
            ProviderError::new(ProviderErrorKind::ResponseConversion(format!(
                "Invalid base64 image: {}",
                e
            )))
        })?
    } else {
        body.to_vec()
    };

    if bytes.is_empty() {
        return Err(ProviderError::new(ProviderErrorKind::EmptyResponse));
    }

    Ok(bytes)
}
