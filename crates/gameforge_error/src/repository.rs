//! Game repository error types.

/// Kinds of errors raised by game repositories.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum RepositoryErrorKind {
    /// No game stored under the given id
    #[display("Game not found: {}", _0)]
    NotFound(String),
    /// Caller does not own the game it tried to change
    #[display("Game {} is not owned by {}", id, owner)]
    NotOwner {
        /// Game id
        id: String,
        /// Rejected caller
        owner: String,
    },
    /// Failed to serialize or deserialize a stored game
    #[display("Serialization failed: {}", _0)]
    Serialization(String),
    /// Underlying storage I/O failed
    #[display("I/O failure: {}", _0)]
    Io(String),
}

/// Repository error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Repository Error: {} at line {} in {}", kind, line, file)]
pub struct RepositoryError {
    /// The kind of error that occurred
    pub kind: RepositoryErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl RepositoryError {
    /// Create a new repository error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: RepositoryErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
