//! Error types for the rules engine.
//!
//! The calculators themselves are total. These errors only surface when
//! parsing user-supplied text into engine inputs.

/// Errors that can occur while parsing rules inputs.
#[derive(Debug, thiserror::Error)]
pub enum MechError {
    /// A die tag such as `d7x` could not be parsed.
    #[error("invalid die: {0}")]
    InvalidDie(String),

    /// A roll formula contained no dice and no flat bonus.
    #[error("empty roll formula")]
    EmptyFormula,

    /// A cost policy name was not recognized.
    #[error("unknown cost policy: {0}")]
    UnknownPolicy(String),

    /// An escalation scheme name was not recognized.
    #[error("unknown escalation scheme: {0}")]
    UnknownScheme(String),
}

/// Convenience result type for rules operations.
pub type MechResult<T> = Result<T, MechError>;
