//! Field selection and configuration loading shared by the commands.

use std::path::{Path, PathBuf};

use clap::Args;
use tracing::debug;

use textmask_core::mask::{CharClass, FieldFormatter, MaskFormatter, Pattern, DEFAULT_PLACEHOLDER};
use textmask_core::models::config::TextmaskConfig;

/// Which field to format with.
#[derive(Args, Debug)]
pub struct FieldArgs {
    /// Configured field or preset name (e.g. "phone", "card_number")
    #[arg(short = 'F', long, conflicts_with = "pattern")]
    pub field: Option<String>,

    /// Ad-hoc mask pattern (e.g. "(###) ###-####")
    #[arg(short, long)]
    pub pattern: Option<String>,

    /// Placeholder symbol for --pattern
    #[arg(long, default_value_t = DEFAULT_PLACEHOLDER)]
    pub placeholder: char,

    /// Characters accepted by --pattern slots (any, digit, letter, alphanumeric)
    #[arg(long, default_value = "any")]
    pub class: CharClass,
}

impl FieldArgs {
    /// Build the selected formatter.
    pub fn resolve(&self, config: &TextmaskConfig) -> anyhow::Result<FieldFormatter> {
        match (&self.field, &self.pattern) {
            (_, Some(pattern)) => {
                let pattern = Pattern::with_placeholder(pattern, self.placeholder)?
                    .with_class(self.class);
                debug!("Using ad-hoc pattern {}", pattern);
                Ok(MaskFormatter::new(pattern).into())
            }
            (Some(name), None) => {
                debug!("Using field {}", name);
                Ok(config.field(name)?)
            }
            (None, None) => anyhow::bail!("Select a field with --field or give a --pattern"),
        }
    }
}

/// Output format for command results.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text
    Text,
}

pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("textmask")
        .join("config.json")
}

/// Load the explicit config, the default config file, or built-in defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<TextmaskConfig> {
    if let Some(path) = config_path {
        return Ok(TextmaskConfig::from_file(Path::new(path))?);
    }

    let default_path = default_config_path();
    if default_path.exists() {
        Ok(TextmaskConfig::from_file(&default_path)?)
    } else {
        Ok(TextmaskConfig::default())
    }
}
