//! Role types for chat participants.

use serde::{Deserialize, Serialize};

/// Chat participant role.
///
/// # Examples
///
/// ```
/// use gameforge_core::Role;
///
/// assert_eq!(format!("{}", Role::System), "system");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Fixed instruction framing every request
    #[display("system")]
    System,
    /// Prompt composed from the creative parameters
    #[display("user")]
    User,
    /// Provider output
    #[display("assistant")]
    Assistant,
}
