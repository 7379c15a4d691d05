//! Human-readable byte sizes (`100`, `1k`, `2MB`, `1e`)

use crate::error::{Result, SplitError};
use regex::Regex;
use std::num::NonZeroU64;
use std::sync::OnceLock;

static BYTE_SIZE_PATTERN: OnceLock<Regex> = OnceLock::new();

fn byte_size_pattern() -> &'static Regex {
    BYTE_SIZE_PATTERN.get_or_init(|| {
        Regex::new(r"(?i)^([0-9]+)([kmgtpe]?)b?$").expect("byte size pattern is a valid regex")
    })
}

/// Parse a byte-size descriptor into a positive byte count
///
/// Accepts a decimal number followed by an optional binary multiplier
/// (`k`, `m`, `g`, `t`, `p`, `e`, each a power of 1024) and an optional
/// trailing `b`, all case-insensitive. Zero and values that overflow `u64`
/// are rejected.
pub fn parse_byte_size(descriptor: &str) -> Result<NonZeroU64> {
    let invalid = || SplitError::SeparateByteInvalid {
        descriptor: descriptor.to_string(),
    };

    let captures = byte_size_pattern().captures(descriptor).ok_or_else(invalid)?;
    let number: u64 = captures[1].parse().map_err(|_| invalid())?;
    let exponent = match captures[2].to_ascii_lowercase().as_str() {
        "" => 0,
        "k" => 1,
        "m" => 2,
        "g" => 3,
        "t" => 4,
        "p" => 5,
        "e" => 6,
        _ => return Err(invalid()),
    };

    number
        .checked_mul(1024u64.pow(exponent))
        .and_then(NonZeroU64::new)
        .ok_or_else(invalid)
}
