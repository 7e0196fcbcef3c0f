//! CLI application for masked text input formatting.

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{batch, config, edit, fields, number};

/// Masked text input - format, unformat and edit values through input masks
#[derive(Parser)]
#[command(name = "textmask")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Format a raw value
    Format(edit::FormatArgs),

    /// Strip formatting from a value
    Unformat(edit::UnformatArgs),

    /// Apply an edit to formatted text and report the new caret
    Input(edit::InputArgs),

    /// Show where the caret goes when a field gains focus
    Caret(edit::CaretArgs),

    /// Format and parse numbers
    Number(number::NumberArgs),

    /// Format every line of one or more files
    Batch(batch::BatchArgs),

    /// List configured fields and presets
    Fields,

    /// Manage configuration
    Config(config::ConfigArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let config_path = cli.config.as_deref();
    match cli.command {
        Commands::Format(args) => edit::run_format(args, config_path),
        Commands::Unformat(args) => edit::run_unformat(args, config_path),
        Commands::Input(args) => edit::run_input(args, config_path),
        Commands::Caret(args) => edit::run_caret(args, config_path),
        Commands::Number(args) => number::run(args, config_path),
        Commands::Batch(args) => batch::run(args, config_path),
        Commands::Fields => fields::run(config_path),
        Commands::Config(args) => config::run(args, config_path),
    }
}
