//! Splitting engine for `fsplit`
//!
//! Partitions a file into ordered output chunks in the manner of the classic
//! `split` utility. Three pieces carry the logic:
//!
//! - [`NameGenerator`] maps a zero-based chunk index to a deterministic name
//!   such as `xaa` or `x007`.
//! - [`ChunkSpec`] parses piece descriptors such as `"3"`, `"l/5/10"` or
//!   `"r/2/3"`.
//! - [`SplitStrategy`] runs one of the line, byte or piece strategies over an
//!   [`InputSource`], writing chunks to an [`OutputSink`].
//!
//! # Example
//!
//! ```rust
//! use fsplit_core::{FileSink, MemoryInput, NameGenerator, SplitStrategy};
//! use std::num::NonZeroU64;
//!
//! let dir = tempfile::tempdir().unwrap();
//! let input = MemoryInput::new("one\ntwo\nthree\n");
//! let names = NameGenerator::default();
//! let strategy = SplitStrategy::lines(NonZeroU64::new(2).unwrap());
//!
//! let report = strategy
//!     .run(&input, &names, FileSink::in_dir(dir.path()), &mut std::io::sink())
//!     .unwrap();
//!
//! assert_eq!(report.names().collect::<Vec<_>>(), vec!["xaa", "xab"]);
//! ```

#![warn(missing_docs)]

pub mod chunk_spec;
pub mod config;
pub mod error;
pub mod naming;
pub mod report;
pub mod sink;
pub mod size;
pub mod source;
pub mod strategy;
pub mod writer;

// Re-export key types
pub use chunk_spec::{ChunkMode, ChunkSpec};
pub use error::{Result, SplitError};
pub use naming::{NameGenerator, SuffixStyle};
pub use report::{ChunkInfo, SplitReport};
pub use sink::{FileSink, OutputSink};
pub use size::parse_byte_size;
pub use source::{FileInput, InputSource, MemoryInput};
pub use strategy::{
    ByteSplitter, LineSplitter, PieceSplitter, RoundRobinSplitter, SplitStrategy, Splitter,
};
pub use writer::{ChunkWriter, OpenChunk};
