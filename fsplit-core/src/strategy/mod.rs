//! Splitting strategies
//!
//! Each strategy implements [`Splitter`]: it reads an [`InputSource`] and
//! writes chunks through a [`ChunkWriter`]. [`SplitStrategy`] is the closed
//! set of strategies a caller can select, and the single entry point that
//! runs one of them end to end.

mod bytes;
mod lines;
mod pieces;

pub use bytes::ByteSplitter;
pub use lines::LineSplitter;
pub use pieces::{PieceSplitter, RoundRobinSplitter};

use crate::chunk_spec::ChunkSpec;
use crate::config::DEFAULT_LINES_PER_CHUNK;
use crate::error::{Result, SplitError};
use crate::naming::NameGenerator;
use crate::report::SplitReport;
use crate::sink::OutputSink;
use crate::source::InputSource;
use crate::writer::ChunkWriter;
use std::io::{self, BufRead, Read, Write};
use std::num::NonZeroU64;

/// A way of partitioning input into chunks
pub trait Splitter {
    /// Split `input`, opening chunks through `out` in index order
    fn split<I, S>(&self, input: &I, out: &mut ChunkWriter<'_, S>) -> Result<()>
    where
        I: InputSource,
        S: OutputSink;

    /// Short name for logging
    fn name(&self) -> &'static str;
}

/// The strategy selected for a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitStrategy {
    /// Fixed number of lines per chunk
    Lines(LineSplitter),
    /// Fixed number of bytes per chunk
    Bytes(ByteSplitter),
    /// Fixed number of chunks
    Pieces(PieceSplitter),
}

impl Default for SplitStrategy {
    fn default() -> Self {
        let lines = NonZeroU64::new(DEFAULT_LINES_PER_CHUNK).unwrap_or(NonZeroU64::MIN);
        SplitStrategy::Lines(LineSplitter::new(lines))
    }
}

impl SplitStrategy {
    /// `lines` lines per chunk
    pub fn lines(lines: NonZeroU64) -> Self {
        SplitStrategy::Lines(LineSplitter::new(lines))
    }

    /// Chunk size from a byte-size descriptor such as `"1k"`
    pub fn bytes(descriptor: &str) -> Result<Self> {
        ByteSplitter::parse(descriptor).map(SplitStrategy::Bytes)
    }

    /// Piece count from a chunk descriptor such as `"r/2/3"`
    pub fn pieces(descriptor: &str) -> Result<Self> {
        ChunkSpec::parse(descriptor).map(|spec| SplitStrategy::Pieces(PieceSplitter::new(spec)))
    }

    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            SplitStrategy::Lines(s) => s.name(),
            SplitStrategy::Bytes(s) => s.name(),
            SplitStrategy::Pieces(s) => s.name(),
        }
    }

    /// Run the strategy to completion
    ///
    /// The name generator is validated before the input is touched. When a
    /// piece descriptor selects a chunk, that chunk's content is copied to
    /// `echo` after every chunk has been closed. Chunks completed before a
    /// failure are left in place.
    pub fn run<I, S>(
        &self,
        input: &I,
        names: &NameGenerator,
        sink: S,
        echo: &mut dyn Write,
    ) -> Result<SplitReport>
    where
        I: InputSource,
        S: OutputSink,
    {
        names.validate()?;
        log::debug!("splitting with the {} strategy", self.name());

        let mut out = ChunkWriter::new(names, sink);
        match self {
            SplitStrategy::Lines(s) => s.split(input, &mut out)?,
            SplitStrategy::Bytes(s) => s.split(input, &mut out)?,
            SplitStrategy::Pieces(s) => {
                s.split(input, &mut out)?;
                if let Some(select) = s.spec().select() {
                    out.echo(select - 1, echo)?;
                }
            }
        }

        let report = out.into_report();
        log::debug!(
            "split finished: {} chunks, {} bytes",
            report.len(),
            report.total_bytes()
        );
        Ok(report)
    }
}

/// Read one `\n`-terminated record into `line`, terminator included
///
/// Returns `false` at end of input.
pub(crate) fn read_record<R: BufRead>(reader: &mut R, line: &mut Vec<u8>) -> Result<bool> {
    line.clear();
    let read = reader
        .read_until(b'\n', line)
        .map_err(SplitError::InputReadFailed)?;
    Ok(read > 0)
}

/// Read into `buf`, retrying on interruption
pub(crate) fn read_block<R: Read>(reader: &mut R, buf: &mut [u8]) -> Result<usize> {
    loop {
        match reader.read(buf) {
            Ok(read) => return Ok(read),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(SplitError::InputReadFailed(e)),
        }
    }
}
