//! Numeric and currency formatting.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::{
    CaretPositioner, EditRange, EditResult, Formatter, InputFormatter, NumericFormatter,
    Unformatter,
};
use crate::error::ConfigError;

/// Where the currency symbol goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurrencyPosition {
    /// `$1,234.50`
    #[default]
    Prefix,
    /// `1 234,50 zł`
    Suffix,
}

/// Separators, precision and currency of a numeric field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberStyle {
    /// Thousands separator; `None` disables grouping.
    pub grouping_separator: Option<char>,

    /// Digits per group.
    pub grouping_size: usize,

    pub decimal_separator: char,

    /// Fraction digits always shown by `format_number`.
    pub min_fraction_digits: u32,

    /// Values are rounded to this many fraction digits.
    pub max_fraction_digits: u32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_symbol: Option<String>,

    pub currency_position: CurrencyPosition,

    /// Put a space between the symbol and the number.
    pub currency_spacing: bool,

    /// Limit on integer digits accepted while typing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_integer_digits: Option<usize>,

    /// Accept a minus sign while typing.
    pub allow_negative: bool,
}

impl Default for NumberStyle {
    fn default() -> Self {
        Self {
            grouping_separator: Some(','),
            grouping_size: 3,
            decimal_separator: '.',
            min_fraction_digits: 0,
            max_fraction_digits: 2,
            currency_symbol: None,
            currency_position: CurrencyPosition::Prefix,
            currency_spacing: false,
            max_integer_digits: None,
            allow_negative: true,
        }
    }
}

impl NumberStyle {
    /// Prefix currency with exactly two fraction digits.
    pub fn currency(symbol: impl Into<String>) -> Self {
        Self {
            currency_symbol: Some(symbol.into()),
            min_fraction_digits: 2,
            max_fraction_digits: 2,
            ..Self::default()
        }
    }

    pub fn with_grouping_separator(mut self, separator: Option<char>) -> Self {
        self.grouping_separator = separator;
        self
    }

    pub fn with_decimal_separator(mut self, separator: char) -> Self {
        self.decimal_separator = separator;
        self
    }

    pub fn with_fraction_digits(mut self, min: u32, max: u32) -> Self {
        self.min_fraction_digits = min;
        self.max_fraction_digits = max;
        self
    }

    pub fn with_currency(mut self, symbol: impl Into<String>, position: CurrencyPosition) -> Self {
        self.currency_symbol = Some(symbol.into());
        self.currency_position = position;
        self
    }

    pub fn with_currency_spacing(mut self, spacing: bool) -> Self {
        self.currency_spacing = spacing;
        self
    }

    pub fn with_max_integer_digits(mut self, digits: Option<usize>) -> Self {
        self.max_integer_digits = digits;
        self
    }

    pub fn with_allow_negative(mut self, allow: bool) -> Self {
        self.allow_negative = allow;
        self
    }

    /// Check that the style can round-trip values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let separators = self.grouping_separator.into_iter().chain([self.decimal_separator]);
        for separator in separators {
            if separator.is_ascii_digit() || separator == '-' {
                return Err(ConfigError::InvalidSeparator(separator));
            }
        }
        if self.grouping_separator == Some(self.decimal_separator) {
            return Err(ConfigError::SeparatorClash(self.decimal_separator));
        }
        if self.min_fraction_digits > self.max_fraction_digits {
            return Err(ConfigError::FractionDigits {
                min: self.min_fraction_digits,
                max: self.max_fraction_digits,
            });
        }
        if self.grouping_size == 0 {
            return Err(ConfigError::ZeroGroupingSize);
        }
        Ok(())
    }
}

/// Normalized value while typing: sign, integer digits, optional fraction.
#[derive(Debug, Default, PartialEq, Eq)]
struct Typed {
    negative: bool,
    integer: String,
    fraction: Option<String>,
}

impl Typed {
    fn is_empty(&self) -> bool {
        self.integer.is_empty() && self.fraction.is_none()
    }

    /// Canonical raw form, `-1234.5`.
    fn to_raw(&self) -> String {
        let mut raw = String::new();
        if self.negative {
            raw.push('-');
        }
        raw.push_str(&self.integer);
        if let Some(fraction) = &self.fraction {
            raw.push('.');
            raw.push_str(fraction);
        }
        raw
    }
}

/// Formatter for numeric and currency fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberFormatter {
    style: NumberStyle,
}

impl NumberFormatter {
    pub fn new(style: NumberStyle) -> Result<Self, ConfigError> {
        style.validate()?;
        Ok(Self { style })
    }

    pub fn style(&self) -> &NumberStyle {
        &self.style
    }

    /// Insert grouping separators into a run of integer digits.
    fn group(&self, digits: &str) -> String {
        let Some(separator) = self.style.grouping_separator else {
            return digits.to_string();
        };

        let chars: Vec<char> = digits.chars().collect();
        let mut grouped = String::with_capacity(chars.len() * 4 / 3 + 1);
        for (i, c) in chars.iter().enumerate() {
            if i > 0 && (chars.len() - i) % self.style.grouping_size == 0 {
                grouped.push(separator);
            }
            grouped.push(*c);
        }
        grouped
    }

    /// Text before the number: sign, prefix symbol and spacing.
    fn lead(&self, negative: bool) -> String {
        let mut lead = String::new();
        if negative {
            lead.push('-');
        }
        if let (Some(symbol), CurrencyPosition::Prefix) =
            (&self.style.currency_symbol, self.style.currency_position)
        {
            lead.push_str(symbol);
            if self.style.currency_spacing {
                lead.push(' ');
            }
        }
        lead
    }

    /// Text after the number: spacing and suffix symbol.
    fn trail(&self) -> String {
        let mut trail = String::new();
        if let (Some(symbol), CurrencyPosition::Suffix) =
            (&self.style.currency_symbol, self.style.currency_position)
        {
            if self.style.currency_spacing {
                trail.push(' ');
            }
            trail.push_str(symbol);
        }
        trail
    }

    /// Render a typed value; returns the text and, for every raw digit or
    /// decimal separator, the offset right after it.
    fn render(&self, typed: &Typed) -> (String, Vec<usize>) {
        if typed.is_empty() {
            let text = if typed.negative { self.lead(true) } else { String::new() };
            return (text, Vec::new());
        }

        let mut text = self.lead(typed.negative);
        let mut len = text.chars().count();
        let mut ends = Vec::new();

        let grouping = self.style.grouping_separator.is_some();
        let digits = typed.integer.chars().count();
        for (i, c) in typed.integer.chars().enumerate() {
            if grouping && i > 0 && (digits - i) % self.style.grouping_size == 0 {
                text.extend(self.style.grouping_separator);
                len += 1;
            }
            text.push(c);
            len += 1;
            ends.push(len);
        }

        if let Some(fraction) = &typed.fraction {
            text.push(self.style.decimal_separator);
            len += 1;
            ends.push(len);
            for c in fraction.chars() {
                text.push(c);
                len += 1;
                ends.push(len);
            }
        }

        text.push_str(&self.trail());
        (text, ends)
    }

    /// Char range of the currency symbol inside `chars`, if present.
    fn symbol_span(&self, chars: &[char]) -> Option<(usize, usize)> {
        let symbol: Vec<char> = self.style.currency_symbol.as_deref()?.chars().collect();
        if symbol.is_empty() || symbol.len() > chars.len() {
            return None;
        }
        let start = match self.style.currency_position {
            CurrencyPosition::Prefix => chars.windows(symbol.len()).position(|w| w == symbol.as_slice())?,
            CurrencyPosition::Suffix => chars.windows(symbol.len()).rposition(|w| w == symbol.as_slice())?,
        };
        Some((start, start + symbol.len()))
    }

    /// Map an input character to its raw form.
    fn raw_char(&self, c: char) -> Option<char> {
        if c.is_ascii_digit() || c == '-' {
            Some(c)
        } else if c == self.style.decimal_separator {
            Some('.')
        } else if (c == '.' || c == ',') && self.style.grouping_separator != Some(c) {
            Some('.')
        } else {
            None
        }
    }

    /// Raw characters of formatted text with their index. Only the configured
    /// decimal separator counts here; the lenient `.`/`,` mapping applies to
    /// typed input.
    fn scan(&self, chars: &[char]) -> Vec<(usize, char)> {
        let symbol = self.symbol_span(chars);
        chars
            .iter()
            .copied()
            .enumerate()
            .filter(|(i, _)| !symbol.is_some_and(|(start, end)| (start..end).contains(i)))
            .filter_map(|(i, c)| {
                if c.is_ascii_digit() || c == '-' {
                    Some((i, c))
                } else if c == self.style.decimal_separator {
                    Some((i, '.'))
                } else {
                    None
                }
            })
            .collect()
    }

    /// Normalize raw characters. `caret` counts raw characters before the
    /// caret and is adjusted to count digits and separators of the result.
    fn normalize(&self, raw: &[char], caret: usize) -> (Typed, usize) {
        let negative = self.style.allow_negative && raw.contains(&'-');
        let mut caret = raw[..caret.min(raw.len())].iter().filter(|c| **c != '-').count();
        let body: Vec<char> = raw.iter().copied().filter(|c| *c != '-').collect();

        let (integer, fraction) = match body.iter().position(|c| *c == '.') {
            Some(dot) => {
                let fraction: String = body[dot + 1..].iter().filter(|c| **c != '.').collect();
                (&body[..dot], Some(fraction))
            }
            None => (&body[..], None),
        };

        let mut strip = integer.iter().take_while(|c| **c == '0').count();
        if strip == integer.len() && strip > 0 {
            strip -= 1;
        }
        caret = caret.saturating_sub(strip.min(caret));

        let mut integer: String = integer[strip..].iter().collect();
        if integer.is_empty() && fraction.is_some() {
            integer.push('0');
            if caret > 0 {
                caret += 1;
            }
        }

        (
            Typed {
                negative,
                integer,
                fraction,
            },
            caret,
        )
    }

    fn typed_from_text(&self, text: &str) -> Typed {
        let chars: Vec<char> = text.chars().collect();
        let raw: Vec<char> = self.scan(&chars).into_iter().map(|(_, c)| c).collect();
        self.normalize(&raw, 0).0
    }

    /// Check typing limits.
    fn fits(&self, typed: &Typed) -> bool {
        if let Some(fraction) = &typed.fraction {
            if self.style.max_fraction_digits == 0 {
                return false;
            }
            if fraction.chars().count() > self.style.max_fraction_digits as usize {
                return false;
            }
        }
        match self.style.max_integer_digits {
            Some(max) => typed.integer.chars().count() <= max,
            None => true,
        }
    }

    fn caret_for(&self, typed: &Typed, ends: &[usize], text: &str, digits_before: usize) -> usize {
        let caret = match digits_before {
            0 if typed.is_empty() => text.chars().count(),
            0 => self.lead(typed.negative).chars().count(),
            k => ends.get(k - 1).copied().unwrap_or_else(|| ends.last().copied().unwrap_or(0)),
        };
        caret.min(text.chars().count())
    }
}

impl Formatter for NumberFormatter {
    fn format(&self, raw: &str) -> String {
        let raw: Vec<char> = raw.chars().filter_map(|c| self.raw_char(c)).collect();
        self.render(&self.normalize(&raw, 0).0).0
    }
}

impl Unformatter for NumberFormatter {
    fn unformat(&self, formatted: &str) -> Option<String> {
        let typed = self.typed_from_text(formatted);
        if typed.is_empty() {
            return None;
        }
        Some(typed.to_raw())
    }
}

impl InputFormatter for NumberFormatter {
    fn format_input(&self, current: &str, range: EditRange, replacement: &str) -> EditResult {
        trace!("Numeric edit {:?} of {:?} with {:?}", range, current, replacement);

        let chars: Vec<char> = current.chars().collect();
        let range = range.clamp(chars.len());
        let scanned = self.scan(&chars);
        let raw: Vec<char> = scanned.iter().map(|&(_, c)| c).collect();

        let mut raw_start = scanned.iter().take_while(|(i, _)| *i < range.start).count();
        let raw_end = scanned.iter().take_while(|(i, _)| *i < range.end()).count();

        // Backspace over a grouping separator removes the digit before it.
        if replacement.is_empty() && range.length == 1 && raw_start == raw_end && raw_start > 0 {
            raw_start -= 1;
        }

        let inserted: Vec<char> = replacement.chars().filter_map(|c| self.raw_char(c)).collect();
        if !replacement.is_empty() && inserted.is_empty() {
            debug!("Rejected numeric edit {:?}: no digits", replacement);
            return EditResult::unchanged(current, range);
        }
        if inserted.contains(&'-') && !self.style.allow_negative {
            debug!("Rejected numeric edit {:?}: negatives not allowed", replacement);
            return EditResult::unchanged(current, range);
        }

        let mut new_raw = Vec::with_capacity(raw.len() + inserted.len());
        new_raw.extend_from_slice(&raw[..raw_start]);
        new_raw.extend_from_slice(&inserted);
        new_raw.extend_from_slice(&raw[raw_end..]);

        if !inserted.is_empty() {
            let separators = new_raw.iter().filter(|c| **c == '.').count();
            if separators > 1 {
                debug!("Rejected numeric edit {:?}: second decimal separator", replacement);
                return EditResult::unchanged(current, range);
            }
        }

        let (typed, digits_before) = self.normalize(&new_raw, raw_start + inserted.len());
        if !inserted.is_empty() && !self.fits(&typed) {
            debug!("Rejected numeric edit {:?}: too many digits", replacement);
            return EditResult::unchanged(current, range);
        }

        let (text, ends) = self.render(&typed);
        let caret = self.caret_for(&typed, &ends, &text, digits_before);
        trace!("Numeric edit produced {:?} with caret at {}", text, caret);

        EditResult::new(text, caret)
    }
}

impl CaretPositioner for NumberFormatter {
    fn caret_offset(&self, formatted: &str) -> usize {
        let chars: Vec<char> = formatted.chars().collect();
        match self.scan(&chars).iter().rev().find(|(_, c)| *c != '-') {
            Some(&(i, _)) => i + 1,
            None => match (self.style.currency_position, self.symbol_span(&chars)) {
                (CurrencyPosition::Prefix, Some((start, end)))
                    if chars[..start].iter().all(|c| *c == '-') =>
                {
                    end
                }
                // Stay in front of a trailing symbol.
                (CurrencyPosition::Suffix, Some(_)) if formatted.ends_with(&self.trail()) => {
                    chars.len() - self.trail().chars().count()
                }
                _ => chars.len(),
            },
        }
    }
}

impl NumericFormatter for NumberFormatter {
    fn format_number(&self, value: Option<Decimal>) -> String {
        let Some(value) = value else {
            return String::new();
        };

        let rounded = value.round_dp_with_strategy(
            self.style.max_fraction_digits,
            RoundingStrategy::MidpointAwayFromZero,
        );
        let negative = rounded.is_sign_negative() && !rounded.is_zero();
        let text = rounded.abs().to_string();
        let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));

        let min = self.style.min_fraction_digits as usize;
        let mut fraction = fraction.to_string();
        while fraction.len() > min && fraction.ends_with('0') {
            fraction.pop();
        }
        while fraction.len() < min {
            fraction.push('0');
        }

        let mut out = self.lead(negative);
        out.push_str(&self.group(integer));
        if !fraction.is_empty() {
            out.push(self.style.decimal_separator);
            out.push_str(&fraction);
        }
        out.push_str(&self.trail());
        out
    }

    fn unformat_number(&self, formatted: &str) -> Option<Decimal> {
        let stripped = match self.style.currency_symbol.as_deref() {
            Some(symbol) if !symbol.is_empty() => formatted.replace(symbol, ""),
            _ => formatted.to_string(),
        };
        let trimmed = stripped.trim();
        let accounting = trimmed.starts_with('(') && trimmed.ends_with(')');

        let mut negative = accounting;
        let mut minus = false;
        let mut normalized = String::with_capacity(trimmed.len());
        for c in trimmed.chars() {
            if c.is_ascii_digit() {
                normalized.push(c);
            } else if c == self.style.decimal_separator {
                normalized.push('.');
            } else if c == '-' {
                // Only a single sign in front of the number.
                if minus || !normalized.is_empty() {
                    debug!("Cannot read number from {:?}: misplaced sign", formatted);
                    return None;
                }
                minus = true;
                negative = true;
            } else if Some(c) == self.style.grouping_separator
                || c.is_whitespace()
                || (accounting && (c == '(' || c == ')'))
            {
                continue;
            } else {
                debug!("Cannot read number from {:?}: unexpected {:?}", formatted, c);
                return None;
            }
        }

        if !normalized.chars().any(|c| c.is_ascii_digit()) {
            return None;
        }
        if normalized.starts_with('.') {
            normalized.insert(0, '0');
        }
        if normalized.ends_with('.') {
            normalized.pop();
        }

        let value = Decimal::from_str(&normalized).ok()?;
        Some(if negative { -value } else { value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn dollars() -> NumberFormatter {
        NumberFormatter::new(NumberStyle::currency("$")).unwrap()
    }

    fn zloty() -> NumberFormatter {
        NumberFormatter::new(
            NumberStyle::currency("zł")
                .with_grouping_separator(Some(' '))
                .with_decimal_separator(',')
                .with_currency(String::from("zł"), CurrencyPosition::Suffix)
                .with_currency_spacing(true),
        )
        .unwrap()
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_format_number_currency() {
        assert_eq!(dollars().format_number(Some(dec("1234.5"))), "$1,234.50");
        assert_eq!(dollars().format_number(Some(dec("0"))), "$0.00");
        assert_eq!(dollars().format_number(Some(dec("1234567.891"))), "$1,234,567.89");
        assert_eq!(dollars().format_number(None), "");
    }

    #[test]
    fn test_format_number_rounds_half_away_from_zero() {
        assert_eq!(dollars().format_number(Some(dec("2.345"))), "$2.35");
        assert_eq!(dollars().format_number(Some(dec("-2.345"))), "-$2.35");
    }

    #[test]
    fn test_format_number_negative_zero() {
        assert_eq!(dollars().format_number(Some(dec("-0.001"))), "$0.00");
    }

    #[test]
    fn test_format_number_trims_to_min_fraction() {
        let formatter = NumberFormatter::new(NumberStyle::default()).unwrap();
        assert_eq!(formatter.format_number(Some(dec("1234.50"))), "1,234.5");
        assert_eq!(formatter.format_number(Some(dec("1000"))), "1,000");
    }

    #[test]
    fn test_format_number_suffix_locale() {
        assert_eq!(zloty().format_number(Some(dec("12345678.9"))), "12 345 678,90 zł");
    }

    #[test]
    fn test_unformat_number() {
        assert_eq!(dollars().unformat_number("$1,234.50"), Some(dec("1234.50")));
        assert_eq!(dollars().unformat_number("-$2.35"), Some(dec("-2.35")));
        assert_eq!(dollars().unformat_number("($2.35)"), Some(dec("-2.35")));
        assert_eq!(dollars().unformat_number(".5"), Some(dec("0.5")));
        assert_eq!(zloty().unformat_number("1 234,56 zł"), Some(dec("1234.56")));
    }

    #[test]
    fn test_unformat_number_without_digits() {
        assert_eq!(dollars().unformat_number("$"), None);
        assert_eq!(dollars().unformat_number(""), None);
        assert_eq!(dollars().unformat_number("abc"), None);
        assert_eq!(dollars().unformat_number("1.2.3"), None);
        assert_eq!(dollars().unformat_number("1-2-3"), None);
        assert_eq!(dollars().unformat_number("12-"), None);
        assert_eq!(dollars().unformat_number("--12"), None);
    }

    #[test]
    fn test_number_round_trip() {
        let formatter = dollars();
        for value in ["0.00", "1.05", "999.99", "1000000.00", "-42.10"] {
            let value = dec(value);
            let text = formatter.format_number(Some(value));
            assert_eq!(formatter.unformat_number(&text), Some(value));
        }
    }

    #[test]
    fn test_invalid_styles() {
        assert_eq!(
            NumberFormatter::new(NumberStyle::default().with_decimal_separator(',')),
            Err(ConfigError::SeparatorClash(','))
        );
        assert_eq!(
            NumberFormatter::new(NumberStyle::default().with_decimal_separator('5')),
            Err(ConfigError::InvalidSeparator('5'))
        );
        assert_eq!(
            NumberFormatter::new(NumberStyle::default().with_grouping_separator(Some('-'))),
            Err(ConfigError::InvalidSeparator('-'))
        );
        assert_eq!(
            NumberFormatter::new(NumberStyle::default().with_fraction_digits(3, 2)),
            Err(ConfigError::FractionDigits { min: 3, max: 2 })
        );
    }

    #[test]
    fn test_format_raw_digits() {
        assert_eq!(dollars().format("1234"), "$1,234");
        assert_eq!(dollars().format("001234.5"), "$1,234.5");
        assert_eq!(dollars().format(""), "");
    }

    #[test]
    fn test_unformat_to_raw() {
        assert_eq!(dollars().unformat("$1,234.50"), Some("1234.50".to_string()));
        assert_eq!(dollars().unformat("-$7"), Some("-7".to_string()));
        assert_eq!(dollars().unformat("$"), None);
    }

    #[test]
    fn test_typing_groups_digits() {
        let formatter = dollars();
        let mut text = String::new();
        let mut caret = 0;
        for digit in ["1", "2", "3", "4"] {
            let result = formatter.format_input(&text, EditRange::caret(caret), digit);
            text = result.formatted_text;
            caret = result.caret_offset;
        }
        assert_eq!(text, "$1,234");
        assert_eq!(caret, 6);
    }

    #[test]
    fn test_typing_decimal_separator() {
        let result = dollars().format_input("$1,234", EditRange::caret(6), ".");
        assert_eq!(result, EditResult::new("$1,234.", 7));

        let result = dollars().format_input("$1,234.", EditRange::caret(7), "5");
        assert_eq!(result, EditResult::new("$1,234.5", 8));
    }

    #[test]
    fn test_leading_decimal_separator() {
        let result = dollars().format_input("", EditRange::caret(0), ".");
        assert_eq!(result, EditResult::new("$0.", 3));
    }

    #[test]
    fn test_second_decimal_separator_is_rejected() {
        let result = dollars().format_input("$1.5", EditRange::caret(4), ".");
        assert_eq!(result, EditResult::new("$1.5", 4));
    }

    #[test]
    fn test_fraction_limit() {
        let result = dollars().format_input("$1.55", EditRange::caret(5), "5");
        assert_eq!(result, EditResult::new("$1.55", 5));
    }

    #[test]
    fn test_integer_limit() {
        let formatter =
            NumberFormatter::new(NumberStyle::currency("$").with_max_integer_digits(Some(3)))
                .unwrap();
        let result = formatter.format_input("$123", EditRange::caret(4), "4");
        assert_eq!(result, EditResult::new("$123", 4));
    }

    #[test]
    fn test_delete_digit_regroups() {
        let result = dollars().format_input("$1,234", EditRange::new(4, 1), "");
        assert_eq!(result, EditResult::new("$124", 3));
    }

    #[test]
    fn test_backspace_over_grouping_separator() {
        let result = dollars().format_input("$1,234", EditRange::new(2, 1), "");
        assert_eq!(result, EditResult::new("$234", 1));
    }

    #[test]
    fn test_leading_zero_is_stripped() {
        let result = dollars().format_input("$0", EditRange::caret(2), "7");
        assert_eq!(result, EditResult::new("$7", 2));
    }

    #[test]
    fn test_letters_are_noop() {
        let result = dollars().format_input("$12", EditRange::caret(3), "ab");
        assert_eq!(result, EditResult::new("$12", 3));
    }

    #[test]
    fn test_negative_input() {
        let result = dollars().format_input("$12", EditRange::caret(0), "-");
        assert_eq!(result, EditResult::new("-$12", 2));

        let unsigned = NumberFormatter::new(NumberStyle::currency("$").with_allow_negative(false))
            .unwrap();
        let result = unsigned.format_input("$12", EditRange::caret(0), "-");
        assert_eq!(result, EditResult::new("$12", 0));
    }

    #[test]
    fn test_suffix_input_keeps_caret_before_symbol() {
        let formatter = zloty();
        let result = formatter.format_input("123 zł", EditRange::caret(3), "4");
        assert_eq!(result, EditResult::new("1 234 zł", 5));

        let result = formatter.format_input("1 234 zł", EditRange::caret(5), ",");
        assert_eq!(result, EditResult::new("1 234, zł", 6));
    }

    #[test]
    fn test_clear_field() {
        let result = dollars().format_input("$5", EditRange::new(0, 2), "");
        assert_eq!(result, EditResult::new("", 0));
    }

    #[test]
    fn test_caret_offset() {
        assert_eq!(dollars().caret_offset(""), 0);
        assert_eq!(dollars().caret_offset("$"), 1);
        assert_eq!(dollars().caret_offset("$1,234.50"), 9);
        assert_eq!(zloty().caret_offset("1 234,50 zł"), 8);
        assert_eq!(zloty().caret_offset(" zł"), 0);
        assert_eq!(zloty().caret_offset("-"), 1);
    }

    #[test]
    fn test_caret_offset_before_bare_suffix() {
        let formatter = NumberFormatter::new(
            NumberStyle::currency("€").with_currency("€", CurrencyPosition::Suffix),
        )
        .unwrap();
        assert_eq!(formatter.caret_offset("€"), 0);
        assert_eq!(formatter.caret_offset("12€"), 2);
    }
}
