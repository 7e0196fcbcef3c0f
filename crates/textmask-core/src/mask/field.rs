//! A field formatter that is either a mask or a number.

use rust_decimal::Decimal;

use super::{
    CaretPositioner, EditRange, EditResult, Formatter, InputFormatter, MaskFormatter,
    NumberFormatter, NumericFormatter, Unformatter,
};

/// Formatter selected at runtime from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldFormatter {
    Mask(MaskFormatter),
    Number(NumberFormatter),
}

impl FieldFormatter {
    /// Numeric capabilities, if this is a number field.
    pub fn as_numeric(&self) -> Option<&NumberFormatter> {
        match self {
            FieldFormatter::Number(formatter) => Some(formatter),
            FieldFormatter::Mask(_) => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            FieldFormatter::Mask(_) => "mask",
            FieldFormatter::Number(_) => "number",
        }
    }
}

impl From<MaskFormatter> for FieldFormatter {
    fn from(formatter: MaskFormatter) -> Self {
        FieldFormatter::Mask(formatter)
    }
}

impl From<NumberFormatter> for FieldFormatter {
    fn from(formatter: NumberFormatter) -> Self {
        FieldFormatter::Number(formatter)
    }
}

impl Formatter for FieldFormatter {
    fn format(&self, raw: &str) -> String {
        match self {
            FieldFormatter::Mask(f) => f.format(raw),
            FieldFormatter::Number(f) => f.format(raw),
        }
    }
}

impl Unformatter for FieldFormatter {
    fn unformat(&self, formatted: &str) -> Option<String> {
        match self {
            FieldFormatter::Mask(f) => f.unformat(formatted),
            FieldFormatter::Number(f) => f.unformat(formatted),
        }
    }
}

impl InputFormatter for FieldFormatter {
    fn format_input(&self, current: &str, range: EditRange, replacement: &str) -> EditResult {
        match self {
            FieldFormatter::Mask(f) => f.format_input(current, range, replacement),
            FieldFormatter::Number(f) => f.format_input(current, range, replacement),
        }
    }
}

impl CaretPositioner for FieldFormatter {
    fn caret_offset(&self, formatted: &str) -> usize {
        match self {
            FieldFormatter::Mask(f) => f.caret_offset(formatted),
            FieldFormatter::Number(f) => f.caret_offset(formatted),
        }
    }
}

/// Mask fields read numbers from their raw digits.
impl NumericFormatter for FieldFormatter {
    fn format_number(&self, value: Option<Decimal>) -> String {
        match self {
            FieldFormatter::Number(f) => f.format_number(value),
            FieldFormatter::Mask(f) => value
                .map(|v| f.format(&v.trunc().abs().to_string()))
                .unwrap_or_default(),
        }
    }

    fn unformat_number(&self, formatted: &str) -> Option<Decimal> {
        match self {
            FieldFormatter::Number(f) => f.unformat_number(formatted),
            FieldFormatter::Mask(f) => f.unformat(formatted)?.parse().ok(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mask::{NumberStyle, TextInputFormatter};
    use pretty_assertions::assert_eq;

    fn fields() -> Vec<FieldFormatter> {
        vec![
            MaskFormatter::from_mask("##/##").unwrap().into(),
            NumberFormatter::new(NumberStyle::currency("$")).unwrap().into(),
        ]
    }

    fn type_into(formatter: &dyn TextInputFormatter, keys: &str) -> String {
        let mut text = String::new();
        for key in keys.chars() {
            let caret = formatter.caret_offset(&text);
            text = formatter
                .format_input(&text, EditRange::caret(caret), &key.to_string())
                .formatted_text;
        }
        text
    }

    #[test]
    fn test_dispatch_through_trait_object() {
        let fields = fields();
        assert_eq!(type_into(&fields[0], "1225"), "12/25");
        assert_eq!(type_into(&fields[1], "1225"), "$1,225");
    }

    #[test]
    fn test_numeric_on_mask_field() {
        let fields = fields();
        assert_eq!(fields[0].unformat_number("12/25"), Some(Decimal::from(1225)));
        assert_eq!(fields[0].format_number(Some(Decimal::from(1225))), "12/25");
        assert_eq!(fields[0].unformat_number(""), None);
    }

    #[test]
    fn test_kind() {
        let fields = fields();
        assert_eq!(fields[0].kind(), "mask");
        assert!(fields[1].as_numeric().is_some());
    }
}
