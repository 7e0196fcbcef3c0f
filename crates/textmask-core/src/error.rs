//! Error types for the textmask-core library.

use thiserror::Error;

/// Main error type for the textmask library.
#[derive(Error, Debug)]
pub enum MaskError {
    /// Pattern construction error.
    #[error("pattern error: {0}")]
    Pattern(#[from] PatternError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be (de)serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while parsing a mask pattern.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// The pattern ends with an escape character that escapes nothing.
    #[error("dangling escape at position {position}")]
    DanglingEscape { position: usize },

    /// The placeholder symbol cannot be used as a slot marker.
    #[error("invalid placeholder symbol: {0:?}")]
    InvalidPlaceholder(char),
}

/// Errors raised by invalid formatter configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Grouping and decimal separators are the same character.
    #[error("grouping and decimal separator are both {0:?}")]
    SeparatorClash(char),

    /// Separator that would be read as part of the number.
    #[error("{0:?} cannot be used as a separator")]
    InvalidSeparator(char),

    /// Minimum fraction digits exceed the maximum.
    #[error("min fraction digits ({min}) exceed max fraction digits ({max})")]
    FractionDigits { min: u32, max: u32 },

    /// Grouping size of zero would never place a separator.
    #[error("grouping size must be greater than zero")]
    ZeroGroupingSize,

    /// No field with this name is configured.
    #[error("unknown field: {0}")]
    UnknownField(String),

    /// No preset with this name exists.
    #[error("unknown preset: {0}")]
    UnknownPreset(String),
}

/// Result type for the textmask library.
pub type Result<T> = std::result::Result<T, MaskError>;
