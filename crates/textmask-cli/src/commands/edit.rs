//! Format, unformat, input and caret commands.

use clap::Args;
use console::style;
use serde::Serialize;
use tracing::info;

use textmask_core::mask::{
    CaretPositioner, EditRange, Formatter, InputFormatter, Unformatter,
};

use super::field::{load_config, FieldArgs, OutputFormat};

/// Arguments for the format command.
#[derive(Args)]
pub struct FormatArgs {
    /// Raw value to format
    #[arg(allow_hyphen_values = true)]
    value: String,

    #[command(flatten)]
    field: FieldArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,
}

/// Arguments for the unformat command.
#[derive(Args)]
pub struct UnformatArgs {
    /// Formatted text
    #[arg(allow_hyphen_values = true)]
    value: String,

    #[command(flatten)]
    field: FieldArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,
}

/// Arguments for the input command.
#[derive(Args)]
pub struct InputArgs {
    /// Current formatted text of the field
    #[arg(allow_hyphen_values = true)]
    current: String,

    /// Start of the replaced range, in characters
    #[arg(short, long)]
    start: usize,

    /// Length of the replaced range, in characters
    #[arg(short, long, default_value = "0")]
    length: usize,

    /// Text replacing the range (empty for a deletion)
    #[arg(short, long, default_value = "", allow_hyphen_values = true)]
    replacement: String,

    #[command(flatten)]
    field: FieldArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,
}

/// Arguments for the caret command.
#[derive(Args)]
pub struct CaretArgs {
    /// Formatted text of the field
    #[arg(allow_hyphen_values = true)]
    value: String,

    #[command(flatten)]
    field: FieldArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Serialize)]
struct Conversion<'a> {
    input: &'a str,
    output: Option<String>,
}

#[derive(Serialize)]
struct Caret<'a> {
    text: &'a str,
    caret_offset: usize,
}

/// Print a record in the requested format; `text` is the plain rendering.
pub fn emit<T: Serialize>(format: OutputFormat, record: &T, text: &str) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(record)?),
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            wtr.serialize(record)?;
            wtr.flush()?;
        }
        OutputFormat::Text => println!("{}", text),
    }
    Ok(())
}

/// Plain rendering of text with a caret marker under it.
fn caret_line(text: &str, caret: usize) -> String {
    format!(
        "{}\n{}{} {}",
        text,
        " ".repeat(caret),
        style("^").cyan(),
        style(format!("caret {}", caret)).dim()
    )
}

pub fn run_format(args: FormatArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let formatter = args.field.resolve(&config)?;

    let formatted = formatter.format(&args.value);
    info!("Formatted {:?} as {:?}", args.value, formatted);

    let record = Conversion {
        input: &args.value,
        output: Some(formatted.clone()),
    };
    emit(args.format, &record, &formatted)
}

pub fn run_unformat(args: UnformatArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let formatter = args.field.resolve(&config)?;

    let raw = formatter.unformat(&args.value);
    let text = match &raw {
        Some(raw) => raw.clone(),
        None => anyhow::bail!("No value could be read from {:?}", args.value),
    };

    let record = Conversion {
        input: &args.value,
        output: raw,
    };
    emit(args.format, &record, &text)
}

pub fn run_input(args: InputArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let formatter = args.field.resolve(&config)?;

    let range = EditRange::new(args.start, args.length);
    let result = formatter.format_input(&args.current, range, &args.replacement);
    info!(
        "Edit {:?} with {:?} produced {:?}",
        range, args.replacement, result.formatted_text
    );

    let text = caret_line(&result.formatted_text, result.caret_offset);
    emit(args.format, &result, &text)
}

pub fn run_caret(args: CaretArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let formatter = args.field.resolve(&config)?;

    let caret_offset = formatter.caret_offset(&args.value);
    let record = Caret {
        text: &args.value,
        caret_offset,
    };
    emit(args.format, &record, &caret_line(&args.value, caret_offset))
}
