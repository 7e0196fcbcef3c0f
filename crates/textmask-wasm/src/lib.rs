//! WASM bindings for masked text input.
//!
//! A browser `<input>` handler calls `format_input` from its `beforeinput`
//! event, cancels the default edit, and applies the returned text and caret.

use std::str::FromStr;

use wasm_bindgen::prelude::*;

use textmask_core::mask::presets::PRESET_NAMES;
use textmask_core::mask::{
    preset, CaretPositioner, CharClass, CurrencyPosition, EditRange, Formatter, InputFormatter,
    MaskFormatter, NumberFormatter, NumberStyle, NumericFormatter, Pattern, Unformatter,
};
use textmask_core::Decimal;

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Format a raw value with a one-off pattern.
#[wasm_bindgen]
pub fn format_with_pattern(pattern: &str, raw: &str) -> Result<String, JsValue> {
    let formatter = MaskFormatter::from_mask(pattern).map_err(js_error)?;
    Ok(formatter.format(raw))
}

/// Strip formatting with a one-off pattern.
#[wasm_bindgen]
pub fn unformat_with_pattern(pattern: &str, text: &str) -> Result<Option<String>, JsValue> {
    let formatter = MaskFormatter::from_mask(pattern).map_err(js_error)?;
    Ok(formatter.unformat(text))
}

/// Names of the built-in presets.
#[wasm_bindgen]
pub fn preset_names() -> js_sys::Array {
    PRESET_NAMES.iter().map(|name| JsValue::from_str(name)).collect()
}

/// Masked input field.
#[wasm_bindgen]
pub struct MaskedInput {
    formatter: MaskFormatter,
}

#[wasm_bindgen]
impl MaskedInput {
    /// Create a masked input from a pattern and an optional character class.
    #[wasm_bindgen(constructor)]
    pub fn new(pattern: &str, class: Option<String>) -> Result<MaskedInput, JsValue> {
        let class = match class {
            Some(class) => CharClass::from_str(&class).map_err(js_error)?,
            None => CharClass::default(),
        };
        let pattern = Pattern::new(pattern).map_err(js_error)?.with_class(class);
        Ok(Self {
            formatter: MaskFormatter::new(pattern),
        })
    }

    /// Create a masked input from a built-in preset.
    #[wasm_bindgen]
    pub fn from_preset(name: &str) -> Result<MaskedInput, JsValue> {
        let pattern = preset(name).ok_or_else(|| js_error(format!("unknown preset: {}", name)))?;
        Ok(Self {
            formatter: MaskFormatter::new(pattern.clone()),
        })
    }

    #[wasm_bindgen(getter)]
    pub fn pattern(&self) -> String {
        self.formatter.pattern().source().to_string()
    }

    #[wasm_bindgen]
    pub fn format(&self, raw: &str) -> String {
        self.formatter.format(raw)
    }

    #[wasm_bindgen]
    pub fn unformat(&self, text: &str) -> Option<String> {
        self.formatter.unformat(text)
    }

    /// Apply an edit; returns `{ formatted_text, caret_offset }`.
    #[wasm_bindgen]
    pub fn format_input(
        &self,
        current: &str,
        start: usize,
        length: usize,
        replacement: &str,
    ) -> Result<JsValue, JsValue> {
        let result = self
            .formatter
            .format_input(current, EditRange::new(start, length), replacement);
        serde_wasm_bindgen::to_value(&result).map_err(js_error)
    }

    /// Caret offset to use when the field gains focus.
    #[wasm_bindgen]
    pub fn caret_offset(&self, text: &str) -> usize {
        self.formatter.caret_offset(text)
    }
}

/// Currency or number input field.
#[wasm_bindgen]
pub struct CurrencyInput {
    formatter: NumberFormatter,
}

#[wasm_bindgen]
impl CurrencyInput {
    /// Create a currency input (e.g. `new CurrencyInput("$", ".", ",", false)`).
    #[wasm_bindgen(constructor)]
    pub fn new(
        symbol: &str,
        decimal_separator: char,
        grouping_separator: Option<char>,
        suffix: bool,
    ) -> Result<CurrencyInput, JsValue> {
        let position = if suffix {
            CurrencyPosition::Suffix
        } else {
            CurrencyPosition::Prefix
        };
        let style = NumberStyle::currency(symbol)
            .with_currency(symbol, position)
            .with_decimal_separator(decimal_separator)
            .with_grouping_separator(grouping_separator);
        let formatter = NumberFormatter::new(style).map_err(js_error)?;
        Ok(Self { formatter })
    }

    /// Create an input from a JSON number style.
    #[wasm_bindgen]
    pub fn from_json(style: &str) -> Result<CurrencyInput, JsValue> {
        let style: NumberStyle = serde_json::from_str(style).map_err(js_error)?;
        let formatter = NumberFormatter::new(style).map_err(js_error)?;
        Ok(Self { formatter })
    }

    /// Format a number; `undefined` renders an empty field.
    #[wasm_bindgen]
    pub fn format_number(&self, value: Option<f64>) -> Result<String, JsValue> {
        let value = value
            .map(|v| Decimal::try_from(v).map_err(js_error))
            .transpose()?;
        Ok(self.formatter.format_number(value))
    }

    /// Parse formatted text; `undefined` when no number can be read.
    #[wasm_bindgen]
    pub fn unformat_number(&self, text: &str) -> Option<f64> {
        self.formatter
            .unformat_number(text)
            .and_then(|d| d.to_string().parse().ok())
    }

    /// Apply an edit; returns `{ formatted_text, caret_offset }`.
    #[wasm_bindgen]
    pub fn format_input(
        &self,
        current: &str,
        start: usize,
        length: usize,
        replacement: &str,
    ) -> Result<JsValue, JsValue> {
        let result = self
            .formatter
            .format_input(current, EditRange::new(start, length), replacement);
        serde_wasm_bindgen::to_value(&result).map_err(js_error)
    }

    /// Caret offset to use when the field gains focus.
    #[wasm_bindgen]
    pub fn caret_offset(&self, text: &str) -> usize {
        self.formatter.caret_offset(text)
    }
}
