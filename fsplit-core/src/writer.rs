//! Sequential chunk allocation
//!
//! [`ChunkWriter`] is the only place that turns indices into names and
//! names into open outputs. Strategies ask it for the next chunk, write to
//! the returned [`OpenChunk`], and hand it back once the chunk is complete.

use crate::config::WRITE_BUFFER_SIZE;
use crate::error::{Result, SplitError};
use crate::naming::NameGenerator;
use crate::report::{ChunkInfo, SplitReport};
use crate::sink::OutputSink;
use std::io::{self, BufWriter, Write};

/// An output chunk that is still being written
#[derive(Debug)]
pub struct OpenChunk<W: Write> {
    index: u64,
    name: String,
    writer: BufWriter<W>,
    bytes: u64,
}

impl<W: Write> OpenChunk<W> {
    /// Zero-based index of this chunk
    pub fn index(&self) -> u64 {
        self.index
    }

    /// Output name of this chunk
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Bytes written so far
    pub fn bytes(&self) -> u64 {
        self.bytes
    }

    /// Append `buf` to the chunk
    pub fn write_all(&mut self, buf: &[u8]) -> Result<()> {
        self.writer
            .write_all(buf)
            .map_err(|e| SplitError::output(&self.name, e))?;
        self.bytes += buf.len() as u64;
        Ok(())
    }

    fn finish(mut self) -> Result<ChunkInfo> {
        self.writer
            .flush()
            .map_err(|e| SplitError::output(&self.name, e))?;
        Ok(ChunkInfo {
            index: self.index,
            name: self.name,
            bytes: self.bytes,
        })
    }
}

/// Hands out sequentially named chunks and records what was written
pub struct ChunkWriter<'a, S: OutputSink> {
    names: &'a NameGenerator,
    sink: S,
    next_index: u64,
    report: SplitReport,
}

impl<'a, S: OutputSink> ChunkWriter<'a, S> {
    /// Create a writer starting at index 0
    pub fn new(names: &'a NameGenerator, sink: S) -> Self {
        Self {
            names,
            sink,
            next_index: 0,
            report: SplitReport::default(),
        }
    }

    /// Number of chunks opened so far
    pub fn opened(&self) -> u64 {
        self.next_index
    }

    /// Check that `count` more chunks can be named before creating any of them
    pub fn ensure_capacity(&self, count: u64) -> Result<()> {
        if count == 0 {
            return Ok(());
        }
        self.names
            .name_for(self.next_index.saturating_add(count - 1))
            .map(|_| ())
    }

    /// Create the output for the next index
    pub fn open_next(&mut self) -> Result<OpenChunk<S::Writer>> {
        let index = self.next_index;
        let name = self.names.name_for(index)?;
        let writer = self
            .sink
            .create(&name)
            .map_err(|e| SplitError::output(&name, e))?;
        log::debug!("opened chunk {index} as {name}");

        self.next_index += 1;
        Ok(OpenChunk {
            index,
            name,
            writer: BufWriter::with_capacity(WRITE_BUFFER_SIZE, writer),
            bytes: 0,
        })
    }

    /// Flush and close a chunk, recording it in the report
    pub fn close(&mut self, chunk: OpenChunk<S::Writer>) -> Result<()> {
        let info = chunk.finish()?;
        log::trace!("closed chunk {} ({} bytes)", info.name, info.bytes);
        self.report.chunks.push(info);
        Ok(())
    }

    /// Copy a closed chunk to `out`
    ///
    /// Returns `false` without writing anything when no chunk with that
    /// index was produced.
    pub fn echo(&mut self, index: u64, out: &mut dyn Write) -> Result<bool> {
        let Some(name) = self.report.get(index).map(|chunk| chunk.name.clone()) else {
            log::debug!("chunk {index} was not produced, nothing to echo");
            return Ok(false);
        };

        let mut reader = self
            .sink
            .open(&name)
            .map_err(|e| SplitError::output(&name, e))?;
        io::copy(&mut reader, out).map_err(|e| SplitError::output(&name, e))?;
        out.flush().map_err(|e| SplitError::output(&name, e))?;
        log::debug!("echoed chunk {name}");
        Ok(true)
    }

    /// Finish and return the report
    pub fn into_report(self) -> SplitReport {
        self.report
    }
}
