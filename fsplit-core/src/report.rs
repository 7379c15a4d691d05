//! Summary of a completed split

use serde::Serialize;

/// One written output chunk
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChunkInfo {
    /// Zero-based chunk index
    pub index: u64,
    /// Output name produced by the name generator
    pub name: String,
    /// Number of bytes written
    pub bytes: u64,
}

/// Every chunk written by one split, in index order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SplitReport {
    /// Written chunks
    pub chunks: Vec<ChunkInfo>,
}

impl SplitReport {
    /// Number of chunks written
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// Whether no chunk was written
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Sum of all chunk sizes
    pub fn total_bytes(&self) -> u64 {
        self.chunks.iter().map(|chunk| chunk.bytes).sum()
    }

    /// Chunk with the given index
    pub fn get(&self, index: u64) -> Option<&ChunkInfo> {
        self.chunks.iter().find(|chunk| chunk.index == index)
    }

    /// Output names in index order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.chunks.iter().map(|chunk| chunk.name.as_str())
    }
}
