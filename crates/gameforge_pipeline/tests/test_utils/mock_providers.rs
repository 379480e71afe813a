//! Mock text, image and media backends.

use async_trait::async_trait;
use gameforge_core::{ChatRequest, CompletionRequest, ImageRequest};
use gameforge_error::{
    GameforgeError, GameforgeResult, ProviderError, ProviderErrorKind, StorageError,
    StorageErrorKind,
};
use gameforge_interface::{ImageProvider, TextProvider};
use gameforge_storage::{MediaStorage, StoredMedia};
use std::sync::{Arc, Mutex};

/// Behavior configuration for mock responses.
#[derive(Debug, Clone)]
pub enum MockBehavior<T> {
    /// Always return success with the given value
    Success(T),
    /// Always return the specified error
    Error(ProviderErrorKind),
    /// Return a sequence of responses, erroring once exhausted
    Sequence(Vec<MockResponse<T>>),
}

/// A single mock response (success or error).
#[derive(Debug, Clone)]
pub enum MockResponse<T> {
    Success(T),
    Error(ProviderErrorKind),
}

fn provider_error(kind: ProviderErrorKind) -> GameforgeError {
    ProviderError::new(kind).into()
}

fn respond<T: Clone>(behavior: &MockBehavior<T>, call: usize) -> GameforgeResult<T> {
    match behavior {
        MockBehavior::Success(value) => Ok(value.clone()),
        MockBehavior::Error(kind) => Err(provider_error(kind.clone())),
        MockBehavior::Sequence(responses) => match responses.get(call) {
            Some(MockResponse::Success(value)) => Ok(value.clone()),
            Some(MockResponse::Error(kind)) => Err(provider_error(kind.clone())),
            None => Err(provider_error(ProviderErrorKind::Http(format!(
                "Mock sequence exhausted (call {} beyond {} responses)",
                call + 1,
                responses.len()
            )))),
        },
    }
}

fn unavailable() -> ProviderErrorKind {
    ProviderErrorKind::Api {
        status: 503,
        message: "Model is currently loading".to_string(),
    }
}

/// Mock text provider with independent chat and completion behaviors.
pub struct MockTextProvider {
    chat: MockBehavior<String>,
    completion: MockBehavior<String>,
    chat_calls: Arc<Mutex<usize>>,
    completion_calls: Arc<Mutex<usize>>,
    chat_requests: Arc<Mutex<Vec<ChatRequest>>>,
    completion_requests: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl MockTextProvider {
    /// Create a mock with explicit behaviors for both tiers.
    pub fn new(chat: MockBehavior<String>, completion: MockBehavior<String>) -> Self {
        Self {
            chat,
            completion,
            chat_calls: Arc::new(Mutex::new(0)),
            completion_calls: Arc::new(Mutex::new(0)),
            chat_requests: Arc::new(Mutex::new(Vec::new())),
            completion_requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Chat always succeeds with `text`; completion always fails.
    pub fn new_chat_success(text: impl Into<String>) -> Self {
        Self::new(
            MockBehavior::Success(text.into()),
            MockBehavior::Error(unavailable()),
        )
    }

    /// Chat always fails; completion succeeds with `text`.
    pub fn new_completion_only(text: impl Into<String>) -> Self {
        Self::new(
            MockBehavior::Error(unavailable()),
            MockBehavior::Success(text.into()),
        )
    }

    /// Both tiers always fail.
    pub fn new_failing() -> Self {
        Self::new(
            MockBehavior::Error(ProviderErrorKind::Http("connection refused".to_string())),
            MockBehavior::Error(unavailable()),
        )
    }

    /// Chat answers with `responses` in order; completion always fails.
    pub fn new_chat_sequence(responses: Vec<&str>) -> Self {
        Self::new(
            MockBehavior::Sequence(
                responses
                    .into_iter()
                    .map(|r| MockResponse::Success(r.to_string()))
                    .collect(),
            ),
            MockBehavior::Error(unavailable()),
        )
    }

    /// Number of chat calls.
    pub fn chat_calls(&self) -> usize {
        *self.chat_calls.lock().unwrap()
    }

    /// Number of completion calls.
    pub fn completion_calls(&self) -> usize {
        *self.completion_calls.lock().unwrap()
    }

    /// Chat requests received, in order.
    pub fn chat_requests(&self) -> Vec<ChatRequest> {
        self.chat_requests.lock().unwrap().clone()
    }

    /// Completion requests received, in order.
    pub fn completion_requests(&self) -> Vec<CompletionRequest> {
        self.completion_requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn chat(&self, req: &ChatRequest) -> GameforgeResult<String> {
        self.chat_requests.lock().unwrap().push(req.clone());
        let call = {
            let mut count = self.chat_calls.lock().unwrap();
            *count += 1;
            *count - 1
        };
        respond(&self.chat, call)
    }

    async fn complete(&self, req: &CompletionRequest) -> GameforgeResult<String> {
        self.completion_requests.lock().unwrap().push(req.clone());
        let call = {
            let mut count = self.completion_calls.lock().unwrap();
            *count += 1;
            *count - 1
        };
        respond(&self.completion, call)
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-text"
    }
}

/// Mock image provider.
pub struct MockImageProvider {
    behavior: MockBehavior<Vec<u8>>,
    calls: Arc<Mutex<usize>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockImageProvider {
    /// Create a mock with custom behavior.
    pub fn new(behavior: MockBehavior<Vec<u8>>) -> Self {
        Self {
            behavior,
            calls: Arc::new(Mutex::new(0)),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Always returns a small fake PNG.
    pub fn new_success() -> Self {
        Self::new(MockBehavior::Success(fake_png()))
    }

    /// Always fails.
    pub fn new_error() -> Self {
        Self::new(MockBehavior::Error(unavailable()))
    }

    /// Always returns zero bytes.
    pub fn new_empty() -> Self {
        Self::new(MockBehavior::Success(Vec::new()))
    }

    /// Number of render calls.
    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }

    /// Prompts received, in order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

/// PNG signature followed by a few payload bytes.
pub fn fake_png() -> Vec<u8> {
    let mut bytes = vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
    bytes.extend_from_slice(b"mock image");
    bytes
}

#[async_trait]
impl ImageProvider for MockImageProvider {
    async fn text_to_image(&self, req: &ImageRequest) -> GameforgeResult<Vec<u8>> {
        self.prompts.lock().unwrap().push(req.prompt().clone());
        let call = {
            let mut count = self.calls.lock().unwrap();
            *count += 1;
            *count - 1
        };
        respond(&self.behavior, call)
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-image"
    }
}

/// Media storage that rejects every write.
#[derive(Debug, Default)]
pub struct FailingMediaStorage;

#[async_trait]
impl MediaStorage for FailingMediaStorage {
    async fn store(&self, _data: &[u8], prefix: &str) -> GameforgeResult<StoredMedia> {
        Err(StorageError::new(StorageErrorKind::FileWrite(format!("{prefix}: read-only"))).into())
    }

    async fn retrieve(&self, filename: &str) -> GameforgeResult<Vec<u8>> {
        Err(StorageError::new(StorageErrorKind::FileRead(filename.to_string())).into())
    }
}
