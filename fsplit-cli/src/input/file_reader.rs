//! Opening the input named on the command line

use crate::error::CliError;
use anyhow::{Context, Result};
use fsplit_core::{FileInput, InputSource, MemoryInput};
use std::fs;
use std::io::{self, BufRead, Read};
use std::path::Path;

/// Input selected by the `FILE` argument
#[derive(Debug, Clone)]
pub enum InputFile {
    /// A regular file, re-opened for every pass
    Path(FileInput),
    /// Standard input, buffered in memory so it can be read twice
    Stdin(MemoryInput),
}

impl InputFile {
    /// Open `path`, or standard input when `path` is `-`
    pub fn open(path: &Path) -> Result<Self> {
        if path.as_os_str() == "-" {
            log::debug!("reading standard input into memory");
            return Self::from_reader(io::stdin().lock());
        }

        let metadata = match fs::metadata(path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(CliError::FileNotFound(path.display().to_string()).into());
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to get metadata for: {}", path.display()));
            }
        };
        if metadata.is_dir() {
            return Err(
                CliError::InvalidOption(format!("{} is a directory", path.display())).into(),
            );
        }

        log::debug!("input {} ({} bytes)", path.display(), metadata.len());
        Ok(InputFile::Path(FileInput::new(path)))
    }

    /// Buffer an arbitrary reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let input = MemoryInput::from_reader(reader).context("Failed to read standard input")?;
        Ok(InputFile::Stdin(input))
    }
}

impl InputSource for InputFile {
    type Reader = Box<dyn BufRead>;

    fn open(&self) -> io::Result<Self::Reader> {
        Ok(match self {
            InputFile::Path(input) => Box::new(input.open()?),
            InputFile::Stdin(input) => Box::new(input.open()?),
        })
    }

    fn byte_len(&self) -> io::Result<u64> {
        match self {
            InputFile::Path(input) => input.byte_len(),
            InputFile::Stdin(input) => input.byte_len(),
        }
    }

    fn count_lines(&self) -> io::Result<u64> {
        match self {
            InputFile::Path(input) => input.count_lines(),
            InputFile::Stdin(input) => input.count_lines(),
        }
    }
}
