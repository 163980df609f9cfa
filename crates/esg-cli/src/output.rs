//! Output formatting utilities.

use colored::Colorize;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use esg_engine::analytics::ExtremeClass;

use crate::cli::OutputFormat;

/// Formats and prints output based on the specified format.
pub fn print_output<T: Serialize + Tabled>(data: &[T], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => print_table(data),
        OutputFormat::Json => print_json(data),
        OutputFormat::Csv => print_csv(data),
    }
}

/// Prints a metric list. JSON output collapses it to one object.
pub fn print_metrics(metrics: &[KeyValue], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            let object: serde_json::Map<String, serde_json::Value> = metrics
                .iter()
                .map(|m| (m.key.clone(), serde_json::Value::String(m.value.clone())))
                .collect();
            println!("{}", serde_json::to_string_pretty(&object)?);
            Ok(())
        }
        _ => print_output(metrics, format),
    }
}

/// Prints a single serializable value as pretty JSON.
pub fn print_json_value<T: Serialize>(data: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
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

/// Formats a score with two decimals.
pub fn format_score(value: f64) -> String {
    format!("{:.2}", value)
}

/// Formats a percentage with one decimal.
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Formats a score with a best/worst marker.
pub fn format_marked(value: Option<f64>, class: ExtremeClass) -> String {
    match (value, class) {
        (None, _) => "-".to_string(),
        (Some(v), ExtremeClass::Max) => format!("{:.2} ▲", v),
        (Some(v), ExtremeClass::Min) => format!("{:.2} ▼", v),
        (Some(v), ExtremeClass::Mid) => format_score(v),
    }
}

/// Prints a success message.
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Prints a warning message.
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message);
}

/// Prints an info message.
pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue(), message);
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

    /// Creates a key-value pair from a score.
    pub fn from_score(key: impl Into<String>, value: f64) -> Self {
        Self::new(key, format_score(value))
    }

    /// Creates a key-value pair formatted as percentage.
    pub fn from_percent(key: impl Into<String>, value: f64) -> Self {
        Self::new(key, format_percent(value))
    }
}

/// Prints a header for a section.
pub fn print_header(title: &str) {
    println!("\n{}", title.bold().underline());
}
