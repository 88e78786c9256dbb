//! Output formatting utilities.

use colored::Colorize;
use serde::Serialize;
use tabled::{
    builder::Builder,
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::cli::{Context, OutputFormat};

/// Formats and prints rows based on the specified format.
pub fn print_output<T: Serialize + Tabled>(data: &[T], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => print_table(data),
        OutputFormat::Json => print_json(data),
        OutputFormat::Csv => print_csv(data),
        OutputFormat::Minimal => print_minimal(data),
    }
}

/// Prints a single serializable result as JSON or one CSV record.
pub fn print_single<T: Serialize>(data: &T, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            wtr.serialize(data)?;
            wtr.flush()?;
        }
        OutputFormat::Table | OutputFormat::Json | OutputFormat::Minimal => {
            println!("{}", serde_json::to_string_pretty(data)?);
        }
    }
    Ok(())
}

/// Prints a metric report: a titled key-value table, the JSON/CSV record,
/// or the single `minimal` value.
pub fn print_report<T: Serialize>(
    ctx: &Context,
    title: &str,
    rows: &[KeyValue],
    record: &T,
    minimal: impl std::fmt::Display,
) -> anyhow::Result<()> {
    match ctx.format {
        OutputFormat::Table => {
            if !ctx.quiet {
                print_header(title);
            }
            print_table(rows)
        }
        OutputFormat::Minimal => {
            println!("{}", minimal);
            Ok(())
        }
        OutputFormat::Json | OutputFormat::Csv => print_single(record, ctx.format),
    }
}

/// Prints a grid with a header row.
pub fn print_grid(header: Vec<String>, rows: Vec<Vec<String>>) {
    let mut builder = Builder::default();
    builder.push_record(header);
    for row in rows {
        builder.push_record(row);
    }
    let table = builder
        .build()
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .to_string();
    println!("{}", table);
}

/// Prints data as a formatted table.
fn print_table<T: Tabled>(data: &[T]) -> anyhow::Result<()> {
    if data.is_empty() {
        println!("No results.");
        return Ok(());
    }

    let table = Table::new(data)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .to_string();

    println!("{}", table);
    Ok(())
}

/// Prints data as JSON.
fn print_json<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

/// Prints data as CSV.
fn print_csv<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for item in data {
        wtr.serialize(item)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Prints one compact JSON line per row.
fn print_minimal<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    for item in data {
        println!("{}", serde_json::to_string(item)?);
    }
    Ok(())
}

/// Formats a capital figure or parameter.
pub fn format_value(value: f64) -> String {
    format!("{:.6}", value)
}

/// Formats a risk weight.
pub fn format_weight(value: f64) -> String {
    format!("{:.4}", value)
}

/// Prints a warning message unless quiet.
pub fn print_warning(ctx: &Context, message: &str) {
    if !ctx.quiet {
        eprintln!("{} {}", "⚠".yellow(), message);
    }
}

/// A key-value pair for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct KeyValue {
    #[tabled(rename = "Metric")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl KeyValue {
    /// Creates a new key-value pair.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Creates a key-value pair from a float with six decimals.
    pub fn from_value(key: impl Into<String>, value: f64) -> Self {
        Self::new(key, format_value(value))
    }

    /// Creates a key-value pair from a risk weight.
    pub fn from_weight(key: impl Into<String>, value: f64) -> Self {
        Self::new(key, format_weight(value))
    }
}

/// Prints a header for a section.
pub fn print_header(title: &str) {
    println!("\n{}", title.bold().underline());
}
