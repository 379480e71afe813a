//! Test utilities for pipeline tests.
//!
//! Mock providers with call counters, plus helpers to assemble gateways and
//! orchestrators over them.

#![allow(dead_code)]

pub mod mock_providers;

#[allow(unused_imports)]
pub use mock_providers::{
    FailingMediaStorage, MockBehavior, MockImageProvider, MockResponse, MockTextProvider,
};

use gameforge_core::CreativeParams;
use gameforge_pipeline::{ImageGateway, Orchestrator, TextGateway};
use gameforge_storage::FileSystemStorage;
use std::sync::Arc;

/// Parameters shared by most tests.
pub fn sample_params() -> CreativeParams {
    CreativeParams::new(
        "Sepia Crown",
        "RPG",
        "Dark Fantasy gothique",
        "boucle temporelle, IA rebelle",
    )
    .with_references("Zelda")
}

/// Filesystem media storage rooted in `dir`, served under `/media/`.
pub fn media_storage(dir: &tempfile::TempDir) -> Arc<FileSystemStorage> {
    Arc::new(
        FileSystemStorage::new(dir.path().join("media"), "/media/")
            .expect("Failed to create media storage"),
    )
}

/// Orchestrator over the given mocks, storing media under `dir`.
pub fn orchestrator(
    text: Arc<MockTextProvider>,
    images: Arc<MockImageProvider>,
    dir: &tempfile::TempDir,
    character_count: usize,
) -> Orchestrator {
    Orchestrator::new(
        TextGateway::new(text),
        ImageGateway::new(images, media_storage(dir)),
        character_count,
    )
}
