//! Number command - format and parse numeric values.

use std::str::FromStr;

use clap::{Args, Subcommand};
use serde::Serialize;

use textmask_core::mask::{CurrencyPosition, NumberFormatter, NumberStyle, NumericFormatter};
use textmask_core::models::config::TextmaskConfig;
use textmask_core::Decimal;

use super::edit::emit;
use super::field::{load_config, OutputFormat};

/// Arguments for the number command.
#[derive(Args)]
pub struct NumberArgs {
    #[command(subcommand)]
    command: NumberCommand,

    #[command(flatten)]
    style: StyleArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text", global = true)]
    format: OutputFormat,
}

#[derive(Subcommand)]
enum NumberCommand {
    /// Format a numeric value (e.g. 1234.5 -> $1,234.50)
    Format {
        /// Value to format
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Parse formatted text back to a number
    Parse {
        /// Formatted text
        #[arg(allow_hyphen_values = true)]
        text: String,
    },
}

/// Overrides on top of the configured number style.
#[derive(Args, Debug, Default)]
struct StyleArgs {
    /// Use the number style of a configured field
    #[arg(short = 'F', long, global = true)]
    field: Option<String>,

    /// Currency symbol
    #[arg(long, global = true)]
    currency: Option<String>,

    /// Place the currency symbol after the number
    #[arg(long, global = true)]
    suffix: bool,

    /// Grouping separator ("none" disables grouping)
    #[arg(long, global = true)]
    grouping: Option<String>,

    /// Decimal separator
    #[arg(long, global = true)]
    decimal: Option<char>,

    /// Minimum fraction digits
    #[arg(long, global = true)]
    min_fraction: Option<u32>,

    /// Maximum fraction digits
    #[arg(long, global = true)]
    max_fraction: Option<u32>,
}

impl StyleArgs {
    fn build(&self, config: &TextmaskConfig) -> anyhow::Result<NumberFormatter> {
        let mut style = match &self.field {
            Some(name) => match config.field(name)?.as_numeric() {
                Some(formatter) => formatter.style().clone(),
                None => anyhow::bail!("Field {} is not a number field", name),
            },
            None => config.number.clone(),
        };

        if let Some(symbol) = &self.currency {
            let position = if self.suffix {
                CurrencyPosition::Suffix
            } else {
                CurrencyPosition::Prefix
            };
            style = style.with_currency(symbol.clone(), position);
        }
        if let Some(grouping) = &self.grouping {
            style = style.with_grouping_separator(parse_grouping(grouping)?);
        }
        if let Some(decimal) = self.decimal {
            style = style.with_decimal_separator(decimal);
        }
        if self.min_fraction.is_some() || self.max_fraction.is_some() {
            let min = self.min_fraction.unwrap_or(style.min_fraction_digits);
            let max = self.max_fraction.unwrap_or(style.max_fraction_digits.max(min));
            style = style.with_fraction_digits(min, max);
        }

        Ok(NumberFormatter::new(style)?)
    }
}

fn parse_grouping(value: &str) -> anyhow::Result<Option<char>> {
    match value {
        "none" | "" => Ok(None),
        "space" => Ok(Some(' ')),
        _ => {
            let mut chars = value.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(Some(c)),
                _ => anyhow::bail!("Grouping separator must be a single character: {:?}", value),
            }
        }
    }
}

#[derive(Serialize)]
struct Formatted<'a> {
    value: &'a str,
    formatted: String,
}

#[derive(Serialize)]
struct Parsed<'a> {
    text: &'a str,
    value: Option<Decimal>,
}

pub fn run(args: NumberArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let formatter = args.style.build(&config)?;

    match args.command {
        NumberCommand::Format { value } => {
            let number = Decimal::from_str(value.trim())
                .map_err(|e| anyhow::anyhow!("Invalid number {:?}: {}", value, e))?;
            let formatted = formatter.format_number(Some(number));
            let record = Formatted {
                value: &value,
                formatted: formatted.clone(),
            };
            emit(args.format, &record, &formatted)
        }
        NumberCommand::Parse { text } => {
            let value = formatter.unformat_number(&text);
            let plain = match value {
                Some(value) => value.to_string(),
                None => anyhow::bail!("No number could be read from {:?}", text),
            };
            emit(args.format, &Parsed { text: &text, value }, &plain)
        }
    }
}
