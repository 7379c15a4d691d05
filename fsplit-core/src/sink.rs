//! Output sinks

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

/// Destination for named output chunks
pub trait OutputSink {
    /// Writer for a freshly created chunk
    type Writer: Write;
    /// Reader for a previously written chunk
    type Reader: Read;

    /// Create (or truncate) the output called `name`
    fn create(&mut self, name: &str) -> io::Result<Self::Writer>;

    /// Re-open a finished output for reading
    fn open(&mut self, name: &str) -> io::Result<Self::Reader>;
}

impl<S: OutputSink + ?Sized> OutputSink for &mut S {
    type Writer = S::Writer;
    type Reader = S::Reader;

    fn create(&mut self, name: &str) -> io::Result<Self::Writer> {
        (**self).create(name)
    }

    fn open(&mut self, name: &str) -> io::Result<Self::Reader> {
        (**self).open(name)
    }
}

/// Writes chunks as files below a root directory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSink {
    root: PathBuf,
}

impl FileSink {
    /// Sink resolving names against the working directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Sink resolving names against `root`
    pub fn in_dir<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    /// Directory names are resolved against
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Full path for an output name
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

impl OutputSink for FileSink {
    type Writer = File;
    type Reader = File;

    fn create(&mut self, name: &str) -> io::Result<File> {
        File::create(self.path_for(name))
    }

    fn open(&mut self, name: &str) -> io::Result<File> {
        File::open(self.path_for(name))
    }
}
