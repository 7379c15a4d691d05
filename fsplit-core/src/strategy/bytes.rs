//! Fixed number of bytes per chunk

use super::{read_block, Splitter};
use crate::config::COPY_BUFFER_SIZE;
use crate::error::{Result, SplitError};
use crate::sink::OutputSink;
use crate::size::parse_byte_size;
use crate::source::InputSource;
use crate::writer::ChunkWriter;
use std::io::Read;
use std::num::NonZeroU64;

/// Writes every `bytes_per_chunk` bytes to a new chunk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteSplitter {
    bytes_per_chunk: NonZeroU64,
}

impl ByteSplitter {
    /// Create a splitter with `bytes_per_chunk` bytes per chunk
    pub fn new(bytes_per_chunk: NonZeroU64) -> Self {
        Self { bytes_per_chunk }
    }

    /// Create a splitter from a size descriptor such as `"1k"` or `"10MB"`
    pub fn parse(descriptor: &str) -> Result<Self> {
        parse_byte_size(descriptor).map(Self::new)
    }

    /// Bytes per chunk
    pub fn bytes_per_chunk(&self) -> u64 {
        self.bytes_per_chunk.get()
    }
}

impl Splitter for ByteSplitter {
    fn split<I, S>(&self, input: &I, out: &mut ChunkWriter<'_, S>) -> Result<()>
    where
        I: InputSource,
        S: OutputSink,
    {
        let reader = input.open().map_err(SplitError::InputReadFailed)?;
        split_bytes(reader, self.bytes_per_chunk.get(), out)
    }

    fn name(&self) -> &'static str {
        "bytes"
    }
}

/// Copy the input into chunks of `per_chunk` bytes through a fixed buffer
///
/// The first block of every chunk is read before the chunk is created, so
/// an input whose length is a multiple of `per_chunk` never leaves an empty
/// trailing chunk behind.
pub(crate) fn split_bytes<R, S>(mut reader: R, per_chunk: u64, out: &mut ChunkWriter<'_, S>) -> Result<()>
where
    R: Read,
    S: OutputSink,
{
    let mut buffer = vec![0u8; COPY_BUFFER_SIZE];

    loop {
        let want = block_len(per_chunk, buffer.len());
        let read = read_block(&mut reader, &mut buffer[..want])?;
        if read == 0 {
            return Ok(());
        }

        let mut chunk = out.open_next()?;
        chunk.write_all(&buffer[..read])?;
        let mut remaining = per_chunk - read as u64;

        while remaining > 0 {
            let want = block_len(remaining, buffer.len());
            let read = read_block(&mut reader, &mut buffer[..want])?;
            if read == 0 {
                break;
            }
            chunk.write_all(&buffer[..read])?;
            remaining -= read as u64;
        }

        out.close(chunk)?;
        if remaining > 0 {
            // input ran out mid-chunk
            return Ok(());
        }
    }
}

fn block_len(remaining: u64, buffer_len: usize) -> usize {
    usize::try_from(remaining).map_or(buffer_len, |remaining| remaining.min(buffer_len))
}
