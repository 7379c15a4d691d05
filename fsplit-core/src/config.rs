//! Named defaults shared by the splitting engine
//!
//! Nothing in the engine keeps mutable global state; every tunable lives
//! here as a constant and is passed explicitly where it is needed.

/// Prefix used for output names when the caller does not supply one
pub const DEFAULT_PREFIX: &str = "x";

/// Number of suffix characters used when the caller does not specify one
pub const DEFAULT_SUFFIX_LENGTH: usize = 2;

/// Lines per chunk when no strategy is selected explicitly
pub const DEFAULT_LINES_PER_CHUNK: u64 = 1000;

/// Transfer buffer used when copying raw bytes into a chunk
pub const COPY_BUFFER_SIZE: usize = 64 * 1024;

/// Capacity of the buffered writer wrapped around every open chunk
pub const WRITE_BUFFER_SIZE: usize = 64 * 1024;

/// Read-ahead buffer for input sources
pub const READ_BUFFER_SIZE: usize = 64 * 1024;

/// Number of distinct suffix digits in alphabetic mode (`a`..=`z`)
pub const ALPHABETIC_BASE: u64 = 26;

/// Number of distinct suffix digits in numeric mode (`0`..=`9`)
pub const NUMERIC_BASE: u64 = 10;
