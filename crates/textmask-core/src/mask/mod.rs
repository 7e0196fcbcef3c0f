//! Masked input formatting.
//!
//! Formatters are split into small capabilities so a collaborator can ask for
//! exactly what it needs: a plain display field only needs [`Formatter`], an
//! editable field needs [`TextInputFormatter`], a currency field additionally
//! implements [`NumericFormatter`].

mod field;
mod number;
mod pattern;
pub mod presets;
mod text;

pub use field::FieldFormatter;
pub use number::{CurrencyPosition, NumberFormatter, NumberStyle};
pub use pattern::{CharClass, Pattern, Symbol, DEFAULT_PLACEHOLDER, ESCAPE};
pub use presets::preset;
pub use text::MaskFormatter;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Renders a raw value for display.
pub trait Formatter {
    /// Format a raw value.
    fn format(&self, raw: &str) -> String;
}

/// Recovers a raw value from formatted text.
pub trait Unformatter {
    /// Strip formatting; `None` when the text has no meaning for this formatter.
    fn unformat(&self, formatted: &str) -> Option<String>;
}

/// Applies a user edit to formatted text.
pub trait InputFormatter {
    /// Replace `range` of `current` with `replacement` and reformat.
    fn format_input(&self, current: &str, range: EditRange, replacement: &str) -> EditResult;
}

/// Chooses where the caret goes when a field gains focus.
pub trait CaretPositioner {
    fn caret_offset(&self, formatted: &str) -> usize;
}

/// Converts between numbers and their formatted text.
pub trait NumericFormatter {
    /// Format a value; `None` renders as an empty field.
    fn format_number(&self, value: Option<Decimal>) -> String;

    /// Parse formatted text; `None` when no number can be read.
    fn unformat_number(&self, formatted: &str) -> Option<Decimal>;
}

/// Everything an editable text field needs.
pub trait TextInputFormatter: Formatter + Unformatter + InputFormatter + CaretPositioner {}

impl<T> TextInputFormatter for T where
    T: Formatter + Unformatter + InputFormatter + CaretPositioner + ?Sized
{
}

/// A replaced span of formatted text, in character offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EditRange {
    pub start: usize,
    pub length: usize,
}

impl EditRange {
    pub fn new(start: usize, length: usize) -> Self {
        Self { start, length }
    }

    /// Zero-length range, i.e. a caret.
    pub fn caret(at: usize) -> Self {
        Self::new(at, 0)
    }

    pub fn end(&self) -> usize {
        self.start.saturating_add(self.length)
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Clamp to a text of `len` characters.
    pub fn clamp(self, len: usize) -> Self {
        let start = self.start.min(len);
        let end = self.end().min(len);
        Self::new(start, end - start)
    }
}

impl From<std::ops::Range<usize>> for EditRange {
    fn from(range: std::ops::Range<usize>) -> Self {
        Self::new(range.start, range.end.saturating_sub(range.start))
    }
}

/// New text and caret after an edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditResult {
    /// Text to display.
    pub formatted_text: String,
    /// Character offset of the caret in `formatted_text`.
    pub caret_offset: usize,
}

impl EditResult {
    pub fn new(formatted_text: impl Into<String>, caret_offset: usize) -> Self {
        Self {
            formatted_text: formatted_text.into(),
            caret_offset,
        }
    }

    /// Result that leaves the field untouched.
    pub(crate) fn unchanged(current: &str, range: EditRange) -> Self {
        Self::new(current, range.start)
    }
}
