//! Fields command - list configured fields and built-in presets.

use console::style;

use textmask_core::mask::presets::PRESET_NAMES;
use textmask_core::mask::{preset, FieldFormatter};
use textmask_core::models::config::TextmaskConfig;

use super::field::load_config;

pub fn run(config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    println!("{}", style("Configured fields:").bold());
    for line in configured(&config) {
        println!("  {}", line);
    }

    println!();
    println!("{}", style("Presets:").bold());
    for name in PRESET_NAMES {
        if let Some(pattern) = preset(name) {
            println!("  {:<16} {}", name, pattern);
        }
    }

    Ok(())
}

fn configured(config: &TextmaskConfig) -> Vec<String> {
    config
        .fields
        .iter()
        .map(|(name, field)| match field.build() {
            Ok(FieldFormatter::Mask(mask)) => format!("{:<16} mask   {}", name, mask.pattern()),
            Ok(FieldFormatter::Number(number)) => {
                let style = number.style();
                let symbol = style.currency_symbol.as_deref().unwrap_or("-");
                format!(
                    "{:<16} number {} ({}..{} fraction digits)",
                    name, symbol, style.min_fraction_digits, style.max_fraction_digits
                )
            }
            Err(e) => format!("{:<16} invalid: {}", name, e),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_fields_are_listed() {
        let lines = configured(&TextmaskConfig::default());
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("amount"));
        assert!(lines[0].contains("number $ (2..2 fraction digits)"));
        assert!(lines[1].contains("mask   (###) ###-####"));
    }
}
