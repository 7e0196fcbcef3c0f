//! Configuration of named input fields.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ConfigError, Result};
use crate::mask::{
    preset, CharClass, FieldFormatter, MaskFormatter, NumberFormatter, NumberStyle, Pattern,
    DEFAULT_PLACEHOLDER,
};

/// Main configuration for textmask.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextmaskConfig {
    /// Named fields, looked up before presets.
    pub fields: BTreeMap<String, FieldConfig>,

    /// Style used by number commands when no field is named.
    pub number: NumberStyle,
}

impl Default for TextmaskConfig {
    fn default() -> Self {
        let mut fields = BTreeMap::new();
        fields.insert(
            "phone".to_string(),
            FieldConfig::Mask {
                pattern: "(###) ###-####".to_string(),
                placeholder: DEFAULT_PLACEHOLDER,
                class: CharClass::Digit,
            },
        );
        fields.insert(
            "amount".to_string(),
            FieldConfig::Number(NumberStyle::currency("$")),
        );

        Self {
            fields,
            number: NumberStyle::default(),
        }
    }
}

/// How a single field is formatted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldConfig {
    /// Fixed mask such as `(###) ###-####`.
    Mask {
        pattern: String,
        #[serde(default = "default_placeholder")]
        placeholder: char,
        #[serde(default)]
        class: CharClass,
    },

    /// Number or currency amount.
    Number(NumberStyle),

    /// One of the built-in masks.
    Preset { name: String },
}

fn default_placeholder() -> char {
    DEFAULT_PLACEHOLDER
}

impl FieldConfig {
    /// Build the formatter this entry describes.
    pub fn build(&self) -> Result<FieldFormatter> {
        match self {
            FieldConfig::Mask {
                pattern,
                placeholder,
                class,
            } => {
                let pattern = Pattern::with_placeholder(pattern, *placeholder)?.with_class(*class);
                Ok(MaskFormatter::new(pattern).into())
            }
            FieldConfig::Number(style) => Ok(NumberFormatter::new(style.clone())?.into()),
            FieldConfig::Preset { name } => {
                let pattern =
                    preset(name).ok_or_else(|| ConfigError::UnknownPreset(name.clone()))?;
                Ok(MaskFormatter::new(pattern.clone()).into())
            }
        }
    }
}

impl TextmaskConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading config from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Formatter for a configured field name, falling back to presets.
    pub fn field(&self, name: &str) -> Result<FieldFormatter> {
        if let Some(field) = self.fields.get(name) {
            return field.build();
        }
        match preset(name) {
            Some(pattern) => Ok(MaskFormatter::new(pattern.clone()).into()),
            None => Err(ConfigError::UnknownField(name.to_string()).into()),
        }
    }

    /// Formatter for the default number style.
    pub fn number_formatter(&self) -> Result<NumberFormatter> {
        Ok(NumberFormatter::new(self.number.clone())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MaskError;
    use crate::mask::{Formatter, NumericFormatter};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_fields() {
        let config = TextmaskConfig::default();

        let phone = config.field("phone").unwrap();
        assert_eq!(phone.format("5551234567"), "(555) 123-4567");

        let amount = config.field("amount").unwrap();
        assert_eq!(
            amount.format_number(Some(rust_decimal::Decimal::new(12345, 1))),
            "$1,234.50"
        );
    }

    #[test]
    fn test_preset_fallback() {
        let config = TextmaskConfig::default();
        assert_eq!(config.field("nip").unwrap().format("5261040828"), "526-104-08-28");
    }

    #[test]
    fn test_unknown_field() {
        let config = TextmaskConfig::default();
        assert!(matches!(
            config.field("nope"),
            Err(MaskError::Config(ConfigError::UnknownField(name))) if name == "nope"
        ));
    }

    #[test]
    fn test_parse_field_kinds() {
        let json = r#"{
            "fields": {
                "plate": { "kind": "mask", "pattern": "AA-____", "placeholder": "_", "class": "alphanumeric" },
                "price": { "kind": "number", "currency_symbol": "€", "currency_position": "suffix", "decimal_separator": ",", "grouping_separator": "." },
                "card": { "kind": "preset", "name": "card_number" }
            }
        }"#;
        let config: TextmaskConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.field("plate").unwrap().format("ab12x9"), "AA-ab12");
        assert_eq!(config.field("price").unwrap().format("1234,5"), "1.234,5€");
        assert_eq!(config.field("card").unwrap().format("4111111111111111"), "4111 1111 1111 1111");
        assert_eq!(config.number, NumberStyle::default());
    }

    #[test]
    fn test_invalid_field_config() {
        let field = FieldConfig::Number(NumberStyle::default().with_decimal_separator(','));
        assert!(matches!(
            field.build(),
            Err(MaskError::Config(ConfigError::SeparatorClash(',')))
        ));

        let field = FieldConfig::Preset { name: "missing".to_string() };
        assert!(matches!(field.build(), Err(MaskError::Config(ConfigError::UnknownPreset(_)))));

        let field = FieldConfig::Mask {
            pattern: r"##\".to_string(),
            placeholder: '#',
            class: CharClass::Any,
        };
        assert!(matches!(field.build(), Err(MaskError::Pattern(_))));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = TextmaskConfig::default();
        config.save(&path).unwrap();

        let loaded = TextmaskConfig::from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }
}
