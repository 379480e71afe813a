//! Top-level error wrapper types.

use crate::{ConfigError, ProviderError, RepositoryError, StorageError};

/// Every error condition the workspace can report.
///
/// # Examples
///
/// ```
/// use gameforge_error::{GameforgeError, ProviderError, ProviderErrorKind};
///
/// let err: GameforgeError = ProviderError::new(ProviderErrorKind::EmptyResponse).into();
/// assert!(format!("{}", err).contains("empty response"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum GameforgeErrorKind {
    /// Text or image provider error
    #[from(ProviderError)]
    Provider(ProviderError),
    /// Media storage error
    #[from(StorageError)]
    Storage(StorageError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Game repository error
    #[from(RepositoryError)]
    Repository(RepositoryError),
}

/// Gameforge error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Gameforge Error: {}", _0)]
pub struct GameforgeError(Box<GameforgeErrorKind>);

impl GameforgeError {
    /// Create a new error from a kind.
    pub fn new(kind: GameforgeErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &GameforgeErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to GameforgeErrorKind
impl<T> From<T> for GameforgeError
where
    T: Into<GameforgeErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Gameforge operations.
pub type GameforgeResult<T> = std::result::Result<T, GameforgeError>;
