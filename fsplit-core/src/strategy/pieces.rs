//! Fixed number of chunks
//!
//! The chunk size is derived from the size of the whole input, so these
//! splitters measure the input first (byte length, or a full line count)
//! and only then start the main pass.

use super::bytes::split_bytes;
use super::lines::split_lines;
use super::{read_record, Splitter};
use crate::chunk_spec::{ChunkMode, ChunkSpec};
use crate::error::{Result, SplitError};
use crate::sink::OutputSink;
use crate::source::InputSource;
use crate::writer::ChunkWriter;
use std::num::NonZeroU64;

/// Splits the input into the number of pieces named by a [`ChunkSpec`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceSplitter {
    spec: ChunkSpec,
}

impl PieceSplitter {
    /// Create a splitter for a parsed descriptor
    pub fn new(spec: ChunkSpec) -> Self {
        Self { spec }
    }

    /// Parse a descriptor such as `"3"`, `"l/3"` or `"r/2/3"`
    pub fn parse(descriptor: &str) -> Result<Self> {
        ChunkSpec::parse(descriptor).map(Self::new)
    }

    /// The descriptor this splitter was built from
    pub fn spec(&self) -> &ChunkSpec {
        &self.spec
    }
}

impl Splitter for PieceSplitter {
    fn split<I, S>(&self, input: &I, out: &mut ChunkWriter<'_, S>) -> Result<()>
    where
        I: InputSource,
        S: OutputSink,
    {
        let pieces = self.spec.pieces();

        match self.spec.mode() {
            ChunkMode::ByteSequential => {
                let total = input.byte_len().map_err(SplitError::InputReadFailed)?;
                let per_piece = total.div_ceil(pieces);
                log::debug!("{total} bytes into {pieces} pieces of {per_piece} bytes");
                if per_piece == 0 {
                    return Ok(());
                }
                let reader = input.open().map_err(SplitError::InputReadFailed)?;
                split_bytes(reader, per_piece, out)
            }
            ChunkMode::LineSequential => {
                let total = input.count_lines().map_err(SplitError::InputReadFailed)?;
                let per_piece = total.div_ceil(pieces);
                log::debug!("{total} lines into {pieces} pieces of {per_piece} lines");
                if per_piece == 0 {
                    return Ok(());
                }
                let reader = input.open().map_err(SplitError::InputReadFailed)?;
                split_lines(reader, per_piece, out)
            }
            ChunkMode::LineRoundRobin => match NonZeroU64::new(pieces) {
                Some(pieces) => RoundRobinSplitter::new(pieces).split(input, out),
                None => Ok(()),
            },
        }
    }

    fn name(&self) -> &'static str {
        match self.spec.mode() {
            ChunkMode::ByteSequential => "byte pieces",
            ChunkMode::LineSequential => "line pieces",
            ChunkMode::LineRoundRobin => "round-robin pieces",
        }
    }
}

/// Deals lines out to a fixed set of chunks in turn
///
/// Line `i` (zero-based) is appended to chunk `i mod pieces`. All chunks are
/// created up front and stay open for the whole pass, so concatenating them
/// in index order interleaves the input rather than reproducing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRobinSplitter {
    pieces: NonZeroU64,
}

impl RoundRobinSplitter {
    /// Create a splitter dealing lines to `pieces` chunks
    pub fn new(pieces: NonZeroU64) -> Self {
        Self { pieces }
    }

    /// Number of chunks
    pub fn pieces(&self) -> u64 {
        self.pieces.get()
    }
}

impl Splitter for RoundRobinSplitter {
    fn split<I, S>(&self, input: &I, out: &mut ChunkWriter<'_, S>) -> Result<()>
    where
        I: InputSource,
        S: OutputSink,
    {
        // Every piece is created up front, so the names must all fit first
        out.ensure_capacity(self.pieces.get())?;

        let total = input.count_lines().map_err(SplitError::InputReadFailed)?;
        log::debug!("{total} lines dealt to {} pieces", self.pieces);
        if total == 0 {
            return Ok(());
        }

        let mut chunks = Vec::new();
        for _ in 0..self.pieces.get() {
            chunks.push(out.open_next()?);
        }

        let mut reader = input.open().map_err(SplitError::InputReadFailed)?;
        let mut line = Vec::new();
        let mut slot = 0;
        while read_record(&mut reader, &mut line)? {
            chunks[slot].write_all(&line)?;
            slot = (slot + 1) % chunks.len();
        }

        for chunk in chunks {
            out.close(chunk)?;
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "round-robin"
    }
}
