//! Fixed number of lines per chunk

use super::{read_record, Splitter};
use crate::error::{Result, SplitError};
use crate::sink::OutputSink;
use crate::source::InputSource;
use crate::writer::{ChunkWriter, OpenChunk};
use std::io::BufRead;
use std::num::NonZeroU64;

/// Writes every `lines_per_chunk` lines to a new chunk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSplitter {
    lines_per_chunk: NonZeroU64,
}

impl LineSplitter {
    /// Create a splitter with `lines_per_chunk` lines per chunk
    pub fn new(lines_per_chunk: NonZeroU64) -> Self {
        Self { lines_per_chunk }
    }

    /// Lines per chunk
    pub fn lines_per_chunk(&self) -> u64 {
        self.lines_per_chunk.get()
    }
}

impl Splitter for LineSplitter {
    fn split<I, S>(&self, input: &I, out: &mut ChunkWriter<'_, S>) -> Result<()>
    where
        I: InputSource,
        S: OutputSink,
    {
        let reader = input.open().map_err(SplitError::InputReadFailed)?;
        split_lines(reader, self.lines_per_chunk.get(), out)
    }

    fn name(&self) -> &'static str {
        "lines"
    }
}

/// Group consecutive records into chunks of `per_chunk` records
///
/// Records are copied verbatim, so concatenating the chunks reproduces the
/// input exactly. A chunk is only created once its first record has been
/// read; empty input produces no chunks.
pub(crate) fn split_lines<R, S>(mut reader: R, per_chunk: u64, out: &mut ChunkWriter<'_, S>) -> Result<()>
where
    R: BufRead,
    S: OutputSink,
{
    let mut line = Vec::new();
    let mut current: Option<OpenChunk<S::Writer>> = None;
    let mut lines_in_chunk = 0u64;

    while read_record(&mut reader, &mut line)? {
        if current.is_none() {
            current = Some(out.open_next()?);
        }
        if let Some(chunk) = current.as_mut() {
            chunk.write_all(&line)?;
        }

        lines_in_chunk += 1;
        if lines_in_chunk == per_chunk {
            if let Some(chunk) = current.take() {
                out.close(chunk)?;
            }
            lines_in_chunk = 0;
        }
    }

    if let Some(chunk) = current.take() {
        out.close(chunk)?;
    }
    Ok(())
}
