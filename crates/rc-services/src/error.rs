//! Error types for the external services.

use thiserror::Error;

/// Errors from the spell suggestion service.
#[derive(Debug, Error)]
pub enum SuggestionError {
    /// The intent was blank.
    #[error("intent must not be empty")]
    EmptyIntent,

    /// The upstream call failed.
    #[error("suggestion service failed: {0}")]
    Upstream(String),

    /// The service answered with data that is not a valid suggestion.
    #[error("unparseable suggestion: {0}")]
    Unparseable(#[from] serde_json::Error),
}

/// Errors from the narration service.
#[derive(Debug, Error)]
pub enum NarrationError {
    /// There was nothing to narrate.
    #[error("nothing to narrate")]
    EmptyText,

    /// The upstream request failed.
    #[error("narration request failed: {0}")]
    Network(String),

    /// Audio was received but could not be played.
    #[error("playback failed: {0}")]
    Playback(String),
}
