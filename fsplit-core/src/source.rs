//! Input sources
//!
//! The piece strategy needs the aggregate size of the input before it can
//! start writing, so a source must be readable from the start more than
//! once: one pass to measure, one pass to split. Both passes must observe
//! the same content; sources are not expected to change between them.

use crate::config::READ_BUFFER_SIZE;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, Cursor, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A re-readable byte source
pub trait InputSource {
    /// Sequential reader positioned at the start of the input
    type Reader: BufRead;

    /// Open a fresh reader from the first byte
    fn open(&self) -> io::Result<Self::Reader>;

    /// Total length of the input in bytes
    fn byte_len(&self) -> io::Result<u64>;

    /// Number of line records, using a pass independent of [`open`](Self::open)
    fn count_lines(&self) -> io::Result<u64> {
        count_lines(self.open()?)
    }
}

/// Count `\n`-terminated records, plus one for a trailing unterminated record
pub fn count_lines<R: BufRead>(mut reader: R) -> io::Result<u64> {
    let mut count = 0u64;
    let mut last = None;

    loop {
        let buf = match reader.fill_buf() {
            Ok(buf) => buf,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if buf.is_empty() {
            break;
        }

        count += buf.iter().filter(|&&b| b == b'\n').count() as u64;
        last = buf.last().copied();
        let consumed = buf.len();
        reader.consume(consumed);
    }

    if matches!(last, Some(byte) if byte != b'\n') {
        count += 1;
    }
    Ok(count)
}

/// A file on disk, re-opened for every pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInput {
    path: PathBuf,
}

impl FileInput {
    /// Create a source for the file at `path`
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Path of the underlying file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl InputSource for FileInput {
    type Reader = BufReader<File>;

    fn open(&self) -> io::Result<Self::Reader> {
        let file = File::open(&self.path)?;
        Ok(BufReader::with_capacity(READ_BUFFER_SIZE, file))
    }

    fn byte_len(&self) -> io::Result<u64> {
        Ok(fs::metadata(&self.path)?.len())
    }
}

/// Input held entirely in memory (standard input, tests)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryInput {
    data: Arc<[u8]>,
}

impl MemoryInput {
    /// Wrap owned bytes
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        let data: Vec<u8> = data.into();
        Self {
            data: Arc::from(data),
        }
    }

    /// Drain a reader into memory
    pub fn from_reader<R: Read>(mut reader: R) -> io::Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Ok(Self::new(data))
    }

    /// The buffered bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl InputSource for MemoryInput {
    type Reader = Cursor<Arc<[u8]>>;

    fn open(&self) -> io::Result<Self::Reader> {
        Ok(Cursor::new(Arc::clone(&self.data)))
    }

    fn byte_len(&self) -> io::Result<u64> {
        Ok(self.data.len() as u64)
    }
}
