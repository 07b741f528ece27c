//! Cross-cutting error types for the forum client.
//!
//! Crate-specific errors (`ClientError`, `ComposerError`, ...) live in their
//! own crates. They converge into `anyhow` at the CLI boundary.

use thiserror::Error;

/// Errors that can be raised by any forum crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A privacy code outside `{0, 1, 2}`.
    #[error("Invalid privacy code: {0}")]
    InvalidPrivacy(String),

    /// Taxonomy data could not be parsed.
    #[error("Taxonomy parse error: {0}")]
    Taxonomy(#[from] toml::de::Error),

    /// Taxonomy file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Taxonomy data parsed but breaks a constraint.
    #[error("Validation error: {0}")]
    Validation(String),
}
