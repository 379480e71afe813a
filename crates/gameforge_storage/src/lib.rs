//! Media files and game persistence for Gameforge.
//!
//! Two concerns live here:
//!
//! - **Media storage**: rendered concept art is written under a media root and
//!   addressed by a public URL prefix ([`FileSystemStorage`]).
//! - **Game repositories**: finished artifact sets are handed to a
//!   [`GameRepository`](gameforge_interface::GameRepository), either in memory
//!   ([`InMemoryGameRepository`]) or as JSON documents on disk
//!   ([`JsonFileGameRepository`]).
//!
//! # Example
//!
//! ```rust
//! use gameforge_storage::{FileSystemStorage, MediaStorage};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let storage = FileSystemStorage::new("/tmp/gameforge-media", "/media/")?;
//! let stored = storage.store(&[0x89, b'P', b'N', b'G'], "char").await?;
//! assert!(stored.url.starts_with("/media/char_"));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod filesystem;
mod repository;
mod storage;

pub use filesystem::FileSystemStorage;
pub use gameforge_error::{StorageError, StorageErrorKind};
pub use repository::{InMemoryGameRepository, JsonFileGameRepository};
pub use storage::{MediaStorage, StoredMedia};
