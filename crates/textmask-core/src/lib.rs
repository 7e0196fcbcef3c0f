//! Core library for masked text input.
//!
//! This crate provides:
//! - Mask patterns (`(###) ###-####`) with literal type-through and caret placement
//! - Numeric and currency formatting backed by `rust_decimal`
//! - Built-in presets for common fields (phone, card, IBAN, NIP, dates)
//! - Serializable field configuration
//!
//! Every operation is a pure function of its inputs; formatters hold no
//! session state and can be shared between threads.

pub mod error;
pub mod mask;
pub mod models;

pub use error::{ConfigError, MaskError, PatternError, Result};
pub use mask::{
    CaretPositioner, CharClass, CurrencyPosition, EditRange, EditResult, FieldFormatter,
    Formatter, InputFormatter, MaskFormatter, NumberFormatter, NumberStyle, NumericFormatter,
    Pattern, TextInputFormatter, Unformatter,
};
pub use models::config::{FieldConfig, TextmaskConfig};

/// Re-export of the decimal type used by numeric formatters.
pub use rust_decimal::Decimal;
