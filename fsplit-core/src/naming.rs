//! Deterministic output names
//!
//! Every chunk produced by a split is named `prefix + suffix`, where the
//! suffix encodes the zero-based chunk index in a fixed number of
//! characters. Alphabetic suffixes use base 26 with `a` as zero, numeric
//! suffixes use base 10. Because the width is fixed, names sort in index
//! order for as long as the index fits.

use crate::config::{ALPHABETIC_BASE, DEFAULT_PREFIX, DEFAULT_SUFFIX_LENGTH, NUMERIC_BASE};
use crate::error::{Result, SplitError};

/// Alphabet used for chunk suffixes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SuffixStyle {
    /// `aa`, `ab`, ... `zz`
    #[default]
    Alphabetic,
    /// `00`, `01`, ... `99`
    Numeric,
}

impl SuffixStyle {
    /// Number of distinct digits
    pub fn base(self) -> u64 {
        match self {
            SuffixStyle::Alphabetic => ALPHABETIC_BASE,
            SuffixStyle::Numeric => NUMERIC_BASE,
        }
    }

    fn digit(self, value: u64) -> char {
        let zero = match self {
            SuffixStyle::Alphabetic => b'a',
            SuffixStyle::Numeric => b'0',
        };
        // value < base <= 26, so the addition stays within ASCII
        char::from(zero + value as u8)
    }
}

/// Maps chunk indices to output names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameGenerator {
    prefix: String,
    width: usize,
    style: SuffixStyle,
}

impl Default for NameGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX, DEFAULT_SUFFIX_LENGTH, SuffixStyle::Alphabetic)
    }
}

impl NameGenerator {
    /// Create a generator; an empty prefix falls back to `x`
    ///
    /// The width is not validated here so that callers can surface
    /// [`SplitError::NegativeDigit`] through [`NameGenerator::validate`] or
    /// the first call to [`NameGenerator::create`].
    pub fn new(prefix: impl Into<String>, width: usize, style: SuffixStyle) -> Self {
        let prefix = prefix.into();
        let prefix = if prefix.is_empty() {
            DEFAULT_PREFIX.to_string()
        } else {
            prefix
        };

        Self {
            prefix,
            width,
            style,
        }
    }

    /// Alphabetic generator
    pub fn alphabetic(prefix: impl Into<String>, width: usize) -> Self {
        Self::new(prefix, width, SuffixStyle::Alphabetic)
    }

    /// Numeric generator
    pub fn numeric(prefix: impl Into<String>, width: usize) -> Self {
        Self::new(prefix, width, SuffixStyle::Numeric)
    }

    /// Prefix shared by every name
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Suffix width in characters
    pub fn width(&self) -> usize {
        self.width
    }

    /// Suffix alphabet
    pub fn style(&self) -> SuffixStyle {
        self.style
    }

    /// Number of distinct names, or `None` if it exceeds `u64`
    pub fn capacity(&self) -> Option<u64> {
        u32::try_from(self.width)
            .ok()
            .and_then(|width| self.style.base().checked_pow(width))
    }

    /// Check the configuration without producing a name
    pub fn validate(&self) -> Result<()> {
        if self.width < 1 {
            return Err(SplitError::NegativeDigit { width: self.width });
        }
        Ok(())
    }

    /// Name for a (possibly negative) chunk index
    pub fn create(&self, index: i64) -> Result<String> {
        self.validate()?;
        let index = u64::try_from(index).map_err(|_| SplitError::NegativeIndex { index })?;
        self.name_for(index)
    }

    /// Name for a chunk index
    pub fn name_for(&self, index: u64) -> Result<String> {
        self.validate()?;

        if let Some(capacity) = self.capacity() {
            if index >= capacity {
                return Err(SplitError::TooManyChunks {
                    index,
                    width: self.width,
                });
            }
        }

        let base = self.style.base();
        let mut remaining = index;
        let mut suffix = Vec::with_capacity(self.width);
        for _ in 0..self.width {
            suffix.push(self.style.digit(remaining % base));
            remaining /= base;
        }

        let mut name = String::with_capacity(self.prefix.len() + self.width);
        name.push_str(&self.prefix);
        name.extend(suffix.iter().rev());
        Ok(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabetic_names() {
        let names = NameGenerator::alphabetic("", 2);
        assert_eq!(names.create(0).unwrap(), "xaa");
        assert_eq!(names.create(1).unwrap(), "xab");
        assert_eq!(names.create(25).unwrap(), "xaz");
        assert_eq!(names.create(26).unwrap(), "xba");
        assert_eq!(names.create(675).unwrap(), "xzz");
    }

    #[test]
    fn test_numeric_names() {
        let names = NameGenerator::numeric("part-", 3);
        assert_eq!(names.create(0).unwrap(), "part-000");
        assert_eq!(names.create(7).unwrap(), "part-007");
        assert_eq!(names.create(999).unwrap(), "part-999");
    }

    #[test]
    fn test_custom_prefix() {
        let names = NameGenerator::alphabetic("output", 2);
        assert_eq!(names.create(2).unwrap(), "outputac");
        assert_eq!(names.prefix(), "output");
    }

    #[test]
    fn test_default_generator() {
        let names = NameGenerator::default();
        assert_eq!(names.width(), 2);
        assert_eq!(names.style(), SuffixStyle::Alphabetic);
        assert_eq!(names.create(0).unwrap(), "xaa");
    }

    #[test]
    fn test_too_many_chunks() {
        let names = NameGenerator::alphabetic("x", 2);
        match names.create(676) {
            Err(SplitError::TooManyChunks { index, width }) => {
                assert_eq!(index, 676);
                assert_eq!(width, 2);
            }
            other => panic!("Expected TooManyChunks, got {other:?}"),
        }

        let names = NameGenerator::numeric("x", 1);
        assert!(matches!(
            names.create(10),
            Err(SplitError::TooManyChunks { .. })
        ));
    }

    #[test]
    fn test_zero_width_is_rejected_first() {
        let names = NameGenerator::alphabetic("x", 0);
        assert!(matches!(
            names.validate(),
            Err(SplitError::NegativeDigit { width: 0 })
        ));
        assert!(matches!(
            names.create(-1),
            Err(SplitError::NegativeDigit { .. })
        ));
        assert!(matches!(
            names.create(0),
            Err(SplitError::NegativeDigit { .. })
        ));
    }

    #[test]
    fn test_negative_index() {
        let names = NameGenerator::numeric("x", 4);
        assert!(matches!(
            names.create(-3),
            Err(SplitError::NegativeIndex { index: -3 })
        ));
    }

    #[test]
    fn test_capacity() {
        assert_eq!(NameGenerator::alphabetic("x", 2).capacity(), Some(676));
        assert_eq!(NameGenerator::numeric("x", 3).capacity(), Some(1000));
        assert_eq!(NameGenerator::numeric("x", 40).capacity(), None);
    }

    #[test]
    fn test_wide_suffix_never_overflows() {
        let names = NameGenerator::numeric("x", 25);
        let name = names.name_for(u64::MAX).unwrap();
        assert_eq!(name, format!("x{:025}", u64::MAX));
    }

    #[test]
    fn test_create_is_idempotent() {
        let names = NameGenerator::alphabetic("chunk_", 3);
        assert_eq!(names.create(1234).unwrap(), names.create(1234).unwrap());
    }
}
