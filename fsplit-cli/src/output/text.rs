//! Plain text report formatter

use super::ReportFormatter;
use anyhow::Result;
use fsplit_core::ChunkInfo;
use std::io::Write;

/// Plain text formatter - outputs one chunk per line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportFormatter for TextFormatter<W> {
    fn format_chunk(&mut self, chunk: &ChunkInfo) -> Result<()> {
        writeln!(self.writer, "{}\t{}", chunk.name, chunk.bytes)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
