//! Batch command - format every line of one or more files.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tracing::{debug, warn};

use textmask_core::mask::{FieldFormatter, Formatter, Unformatter};

use super::field::{load_config, FieldArgs, OutputFormat};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern (one value per line)
    #[arg(required = true)]
    input: String,

    #[command(flatten)]
    field: FieldArgs,

    /// Strip formatting instead of applying it
    #[arg(short, long)]
    unformat: bool,

    /// Output directory (default: stdout)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    format: OutputFormat,

    /// Skip empty lines
    #[arg(long)]
    skip_empty: bool,
}

/// One converted line.
#[derive(Debug, Serialize)]
struct LineResult {
    line: usize,
    input: String,
    output: Option<String>,
}

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;
    let formatter = args.field.resolve(&config)?;

    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| p.is_file())
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );
    if args.output_dir.is_none() {
        pb.set_draw_target(indicatif::ProgressDrawTarget::hidden());
    }

    let mut total_lines = 0;
    let mut unreadable = 0;

    for path in &files {
        let results = match convert_file(path, &formatter, &args) {
            Ok(results) => results,
            Err(e) => {
                warn!("Failed to read {}: {}", path.display(), e);
                pb.inc(1);
                continue;
            }
        };

        total_lines += results.len();
        unreadable += results.iter().filter(|r| r.output.is_none()).count();

        let content = render(&results, args.format)?;
        match &args.output_dir {
            Some(output_dir) => {
                let output_path = output_dir.join(output_name(path, args.format));
                fs::write(&output_path, content)?;
                debug!("Wrote output to {}", output_path.display());
            }
            None => print!("{}", content),
        }

        pb.inc(1);
    }

    pb.finish_and_clear();

    if args.output_dir.is_some() {
        println!(
            "{} Converted {} lines from {} files in {:?}",
            style("✓").green(),
            total_lines,
            files.len(),
            start.elapsed()
        );
        if unreadable > 0 {
            println!(
                "   {} lines had no readable value",
                style(unreadable).yellow()
            );
        }
    }

    Ok(())
}

fn convert_file(
    path: &Path,
    formatter: &FieldFormatter,
    args: &BatchArgs,
) -> anyhow::Result<Vec<LineResult>> {
    let content = fs::read_to_string(path)?;

    let results = content
        .lines()
        .enumerate()
        .filter(|(_, line)| !(args.skip_empty && line.trim().is_empty()))
        .map(|(i, line)| {
            let output = if args.unformat {
                formatter.unformat(line)
            } else {
                Some(formatter.format(line))
            };
            LineResult {
                line: i + 1,
                input: line.to_string(),
                output,
            }
        })
        .collect();

    Ok(results)
}

fn render(results: &[LineResult], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(results)? + "\n"),
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(Vec::new());
            for result in results {
                wtr.serialize(result)?;
            }
            Ok(String::from_utf8(wtr.into_inner()?)?)
        }
        OutputFormat::Text => Ok(results
            .iter()
            .map(|r| format!("{}\n", r.output.as_deref().unwrap_or("")))
            .collect()),
    }
}

fn output_name(path: &Path, format: OutputFormat) -> String {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("values");

    let extension = match format {
        OutputFormat::Json => "json",
        OutputFormat::Csv => "csv",
        OutputFormat::Text => "txt",
    };

    format!("{}.{}", stem, extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results() -> Vec<LineResult> {
        vec![
            LineResult {
                line: 1,
                input: "5551234567".to_string(),
                output: Some("(555) 123-4567".to_string()),
            },
            LineResult {
                line: 2,
                input: "$".to_string(),
                output: None,
            },
        ]
    }

    #[test]
    fn test_render_csv() {
        let csv = render(&results(), OutputFormat::Csv).unwrap();
        assert_eq!(
            csv,
            "line,input,output\n1,5551234567,(555) 123-4567\n2,$,\n"
        );
    }

    #[test]
    fn test_render_text() {
        let text = render(&results(), OutputFormat::Text).unwrap();
        assert_eq!(text, "(555) 123-4567\n\n");
    }

    #[test]
    fn test_output_name() {
        assert_eq!(output_name(Path::new("in/phones.txt"), OutputFormat::Json), "phones.json");
    }
}
