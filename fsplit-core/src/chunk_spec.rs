//! Chunk descriptors for the piece strategy (`-n`)
//!
//! Grammar, fields separated by `/`:
//!
//! | descriptor | mode            | select | pieces |
//! |------------|-----------------|--------|--------|
//! | `N`        | byte sequential | -      | N      |
//! | `K/N`      | byte sequential | K      | N      |
//! | `l/N`      | line sequential | -      | N      |
//! | `l/K/N`    | line sequential | K      | N      |
//! | `r/N`      | round-robin     | -      | N      |
//! | `r/K/N`    | round-robin     | K      | N      |
//!
//! `N` and `K` are positive decimal integers and `K <= N`.

use crate::error::{Result, SplitError};
use std::fmt;
use std::str::FromStr;

/// How the piece strategy partitions its input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChunkMode {
    /// Contiguous byte ranges of equal size
    ByteSequential,
    /// Contiguous runs of whole lines
    LineSequential,
    /// Line `i` goes to piece `i mod N`
    LineRoundRobin,
}

impl ChunkMode {
    fn from_marker(marker: &str) -> Option<Self> {
        match marker {
            "l" => Some(ChunkMode::LineSequential),
            "r" => Some(ChunkMode::LineRoundRobin),
            _ => None,
        }
    }

    fn marker(self) -> Option<&'static str> {
        match self {
            ChunkMode::ByteSequential => None,
            ChunkMode::LineSequential => Some("l"),
            ChunkMode::LineRoundRobin => Some("r"),
        }
    }
}

/// Parsed chunk descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkSpec {
    pieces: u64,
    select: Option<u64>,
    mode: ChunkMode,
}

impl ChunkSpec {
    /// Build a spec, enforcing `pieces >= 1` and `1 <= select <= pieces`
    pub fn new(pieces: u64, select: Option<u64>, mode: ChunkMode) -> Option<Self> {
        if pieces == 0 {
            return None;
        }
        if let Some(k) = select {
            if k == 0 || k > pieces {
                return None;
            }
        }
        Some(Self {
            pieces,
            select,
            mode,
        })
    }

    /// Parse a descriptor such as `"3"`, `"l/5/10"` or `"r/2/3"`
    pub fn parse(descriptor: &str) -> Result<Self> {
        let invalid = || SplitError::ChunkFormatInvalid {
            descriptor: descriptor.to_string(),
        };

        let fields: Vec<&str> = descriptor.split('/').collect();
        let (mode, select, pieces) = match fields.as_slice() {
            [pieces] => (ChunkMode::ByteSequential, None, *pieces),
            [first, pieces] => match ChunkMode::from_marker(first) {
                Some(mode) => (mode, None, *pieces),
                None => (ChunkMode::ByteSequential, Some(*first), *pieces),
            },
            [marker, select, pieces] => {
                let mode = ChunkMode::from_marker(marker).ok_or_else(invalid)?;
                (mode, Some(*select), *pieces)
            }
            _ => return Err(invalid()),
        };

        let pieces = parse_count(pieces).ok_or_else(invalid)?;
        let select = match select {
            Some(field) => Some(parse_count(field).ok_or_else(invalid)?),
            None => None,
        };

        Self::new(pieces, select, mode).ok_or_else(invalid)
    }

    /// Total number of pieces
    pub fn pieces(&self) -> u64 {
        self.pieces
    }

    /// One-based index of the piece to echo, if any
    pub fn select(&self) -> Option<u64> {
        self.select
    }

    /// Partitioning mode
    pub fn mode(&self) -> ChunkMode {
        self.mode
    }
}

fn parse_count(field: &str) -> Option<u64> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok().filter(|value| *value > 0)
}

impl FromStr for ChunkSpec {
    type Err = SplitError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for ChunkSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(marker) = self.mode.marker() {
            write!(f, "{marker}/")?;
        }
        if let Some(k) = self.select {
            write!(f, "{k}/")?;
        }
        write!(f, "{}", self.pieces)
    }
}
