//! csv-sift CLI - guess a CSV dialect and split the text into rows

use clap::Parser;
use csv_sift::{Marker, Overrides, SiftError, Sniffer, Table};
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Heuristic CSV dialect guesser and tokenizer.
///
/// Detects the delimiter, enclosure and escape characters of each file and
/// prints the dialect, the parsed rows, or the rows re-emitted as clean CSV.
#[derive(Parser, Debug)]
#[command(name = "csv-sift")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input file(s) to read
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Force the delimiter (single character, 'tab', or 'none')
    #[arg(short = 'd', long)]
    delimiter: Option<String>,

    /// Force the enclosure character (single character, or 'none')
    #[arg(short = 'e', long)]
    enclosure: Option<String>,

    /// Force the escape character (single character, or 'none')
    #[arg(short = 'x', long)]
    escape: Option<String>,

    /// Output format: text (default), json, or csv
    #[arg(short = 'f', long, default_value = "text")]
    format: OutputFormat,

    /// Only output the resolved dialect
    #[arg(long)]
    dialect_only: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Csv,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let sniffer = match build_sniffer(&args) {
        Ok(sniffer) => sniffer,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut exit_code = ExitCode::SUCCESS;

    for file in &args.files {
        if let Err(e) = sift_file(&sniffer, file, &args) {
            eprintln!("Error processing {}: {}", file.display(), e);
            exit_code = ExitCode::FAILURE;
        }
    }

    exit_code
}

fn build_sniffer(args: &Args) -> Result<Sniffer, SiftError> {
    let overrides = Overrides {
        delimiter: args
            .delimiter
            .as_deref()
            .map(|v| parse_marker("delimiter", v))
            .transpose()?,
        enclosure: args
            .enclosure
            .as_deref()
            .map(|v| parse_marker("enclosure", v))
            .transpose()?,
        escape: args
            .escape
            .as_deref()
            .map(|v| parse_marker("escape", v))
            .transpose()?,
    };

    let mut sniffer = Sniffer::new();
    sniffer.overrides(overrides);
    Ok(sniffer)
}

/// Parse a marker flag: one character, `tab`, or `none`.
fn parse_marker(name: &str, value: &str) -> Result<Option<char>, SiftError> {
    match value.to_lowercase().as_str() {
        "none" => return Ok(None),
        "tab" | "\\t" => return Ok(Some('\t')),
        _ => {}
    }

    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(Some(c)),
        _ => Err(SiftError::InvalidConfig(format!(
            "{name} must be a single character, 'tab' or 'none', got {value:?}"
        ))),
    }
}

fn sift_file(sniffer: &Sniffer, path: &Path, args: &Args) -> Result<(), SiftError> {
    let table = sniffer.open_path(path)?;

    match args.format {
        OutputFormat::Text => print_text_output(path, &table, args.dialect_only),
        OutputFormat::Json => print_json_output(path, &table, args.dialect_only),
        OutputFormat::Csv if args.dialect_only => print_text_output(path, &table, true),
        OutputFormat::Csv => print_csv_output(&table)?,
    }

    Ok(())
}

fn print_text_output(path: &Path, table: &Table, dialect_only: bool) {
    let dialect = table.dialect();
    println!("File: {}", path.display());
    println!("  Delimiter: {}", Marker(dialect.delimiter));
    println!("  Enclosure: {}", Marker(dialect.enclosure));
    println!("  Escape: {}", Marker(dialect.escape));

    if !dialect_only {
        println!("  Rows: {}", table.num_rows());
        println!("  Max fields: {}", table.max_field_count());
    }

    println!();
}

fn print_json_output(path: &Path, table: &Table, dialect_only: bool) {
    let value = if dialect_only {
        serde_json::json!({
            "file": path.display().to_string(),
            "dialect": table.dialect(),
        })
    } else {
        serde_json::json!({
            "file": path.display().to_string(),
            "dialect": table.dialect(),
            "rows": table.rows(),
        })
    };
    println!("{value}");
}

fn print_csv_output(table: &Table) -> Result<(), SiftError> {
    let stdout = io::stdout();
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(stdout.lock());

    for row in table.rows() {
        writer.write_record(row)?;
    }

    writer.flush()?;
    Ok(())
}
