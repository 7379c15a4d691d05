//! Report formatting module
//!
//! After a split the CLI can summarise what it wrote. Reports go to stderr
//! because stdout carries the echoed chunk for `-n K/N`.

use anyhow::Result;
use fsplit_core::{ChunkInfo, SplitReport};
use serde::{Deserialize, Serialize};
use std::io::Write;

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Supported report formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// One `name<TAB>bytes` line per chunk
    Text,
    /// JSON object with every chunk and the byte total
    Json,
}

/// Trait for report formatters
pub trait ReportFormatter {
    /// Format a single written chunk
    fn format_chunk(&mut self, chunk: &ChunkInfo) -> Result<()>;

    /// Finalize output (e.g., write the collected JSON document)
    fn finish(&mut self) -> Result<()>;
}

/// Render `report` to `writer` in the requested format
pub fn write_report<W: Write>(format: ReportFormat, report: &SplitReport, writer: W) -> Result<()> {
    match format {
        ReportFormat::Text => render(TextFormatter::new(writer), report),
        ReportFormat::Json => render(JsonFormatter::new(writer), report),
    }
}

fn render<F: ReportFormatter>(mut formatter: F, report: &SplitReport) -> Result<()> {
    for chunk in &report.chunks {
        formatter.format_chunk(chunk)?;
    }
    formatter.finish()
}
