//! Error types for the autocomplete engine.

use thiserror::Error;

/// Errors that can occur inside the autocomplete engine.
///
/// Interaction handlers never surface these to the host; they recover to a
/// safe state and log instead. The fallible building blocks return them so the
/// recovery is explicit.
#[derive(Error, Debug)]
pub enum AutocompleteError {
    /// A commit or navigation referenced a position outside the candidate list.
    #[error("index {index} out of bounds for {len} candidates")]
    IndexOutOfBounds { index: usize, len: usize },

    /// A commit referenced a disabled candidate.
    #[error("candidate {index} is disabled")]
    DisabledCandidate { index: usize },

    /// Configuration values failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration text could not be parsed.
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// The query could not be compiled into a matcher.
    #[error("failed to build query matcher: {0}")]
    Pattern(#[from] regex::Error),
}

/// Result type for autocomplete operations.
pub type Result<T> = std::result::Result<T, AutocompleteError>;
