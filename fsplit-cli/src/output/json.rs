//! JSON report formatter

use super::ReportFormatter;
use anyhow::Result;
use fsplit_core::ChunkInfo;
use serde::Serialize;
use std::io::Write;

/// JSON formatter - collects chunks and writes one document on finish
pub struct JsonFormatter<W: Write> {
    writer: W,
    chunks: Vec<ChunkInfo>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize)]
struct ReportData<'a> {
    chunks: &'a [ChunkInfo],
    total_bytes: u64,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            chunks: Vec::new(),
        }
    }
}

impl<W: Write> ReportFormatter for JsonFormatter<W> {
    fn format_chunk(&mut self, chunk: &ChunkInfo) -> Result<()> {
        self.chunks.push(chunk.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let data = ReportData {
            chunks: &self.chunks,
            total_bytes: self.chunks.iter().map(|chunk| chunk.bytes).sum(),
        };
        serde_json::to_writer_pretty(&mut self.writer, &data)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
