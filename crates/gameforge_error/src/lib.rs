//! Error types for the Gameforge workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - Constructors use `#[track_caller]` for automatic location capture
//!
//! The generation pipeline itself never surfaces these errors to its caller;
//! they travel between provider clients and the gateways that absorb them, and
//! out of the infrastructure around the pipeline (configuration, repositories).
//!
//! # Examples
//!
//! ```
//! use gameforge_error::{ConfigError, GameforgeResult};
//!
//! fn load() -> GameforgeResult<String> {
//!     Err(ConfigError::new("media_root is empty"))?
//! }
//!
//! assert!(load().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod provider;
mod repository;
mod storage;

pub use config::ConfigError;
pub use error::{GameforgeError, GameforgeErrorKind, GameforgeResult};
pub use provider::{ProviderError, ProviderErrorKind};
pub use repository::{RepositoryError, RepositoryErrorKind};
pub use storage::{StorageError, StorageErrorKind};
