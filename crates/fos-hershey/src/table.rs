//! Font tables
//!
//! A font table is a nominal em height plus one record per character,
//! starting at space (U+0020). Tables are plain `static` data and are never
//! mutated.

use crate::glyph::{self, GlyphPath};
use crate::{HersheyError, Result};

/// Character code of the first record
pub const FIRST_CHAR: u32 = 0x20;

/// A Hershey font table
#[derive(Debug, Clone, Copy)]
pub struct FontTable {
    name: &'static str,
    scale: u16,
    glyphs: &'static [&'static str],
}

impl FontTable {
    pub const fn new(name: &'static str, scale: u16, glyphs: &'static [&'static str]) -> Self {
        Self { name, scale, glyphs }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Nominal em height in font units
    pub fn scale(&self) -> u16 {
        self.scale
    }

    /// Number of glyph records
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn first_char(&self) -> u32 {
        FIRST_CHAR
    }

    /// Last character code with a record, `None` for an empty table
    pub fn last_char(&self) -> Option<u32> {
        (!self.is_empty()).then(|| FIRST_CHAR + self.glyphs.len() as u32 - 1)
    }

    /// Map a character code to its record index
    pub fn glyph_index(&self, code: u32) -> Result<usize> {
        code.checked_sub(FIRST_CHAR)
            .map(|i| i as usize)
            .filter(|&i| i < self.glyphs.len())
            .ok_or(HersheyError::GlyphIndexOutOfRange { code })
    }

    /// Raw record for a character code
    pub fn record(&self, code: u32) -> Result<&'static str> {
        Ok(self.glyphs[self.glyph_index(code)?])
    }

    /// Raw record by index
    pub fn record_at(&self, index: usize) -> Option<&'static str> {
        self.glyphs.get(index).copied()
    }

    /// Decode the glyph for a character code
    pub fn decode_code(&self, code: u32) -> Result<GlyphPath> {
        glyph::decode(self.record(code)?, self.scale)
    }

    /// Decode the glyph for a character
    pub fn decode_char(&self, ch: char) -> Result<GlyphPath> {
        self.decode_code(ch as u32)
    }

    /// Iterate over `(character, record)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (char, &'static str)> + use<> {
        let glyphs = self.glyphs;
        (FIRST_CHAR..)
            .zip(glyphs.iter().copied())
            .filter_map(|(code, record)| char::from_u32(code).map(|c| (c, record)))
    }

    /// Decode every record, reporting the first failure
    pub fn validate(&self) -> Result<()> {
        tracing::debug!("Validating font '{}' ({} glyphs)", self.name, self.len());
        for (index, record) in self.glyphs.iter().enumerate() {
            if let Err(e) = glyph::decode(record, self.scale) {
                tracing::warn!("Font '{}' glyph {} is invalid: {}", self.name, index, e);
                return Err(e);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static TINY: FontTable = FontTable::new("tiny", 32, &["JZ", "MWRFRN", "JZRRSS RTTU"]);

    #[test]
    fn test_glyph_index() {
        assert_eq!(TINY.glyph_index(32).unwrap(), 0);
        assert_eq!(TINY.glyph_index(34).unwrap(), 2);
        assert_eq!(
            TINY.glyph_index(31),
            Err(HersheyError::GlyphIndexOutOfRange { code: 31 })
        );
        assert_eq!(
            TINY.glyph_index(35),
            Err(HersheyError::GlyphIndexOutOfRange { code: 35 })
        );
        assert!(TINY.glyph_index(0).is_err());
    }

    #[test]
    fn test_char_range() {
        assert_eq!(TINY.first_char(), 32);
        assert_eq!(TINY.last_char(), Some(34));
        assert_eq!(FontTable::new("empty", 32, &[]).last_char(), None);
    }

    #[test]
    fn test_decode_char() {
        let glyph = TINY.decode_char('!').unwrap();
        assert_eq!(glyph.segments().len(), 1);
        assert_eq!(glyph.scale(), 32);
    }

    #[test]
    fn test_iter() {
        let chars: Vec<char> = TINY.iter().map(|(c, _)| c).collect();
        assert_eq!(chars, vec![' ', '!', '"']);
    }

    #[test]
    fn test_validate_reports_bad_record() {
        static BAD: FontTable = FontTable::new("bad", 32, &["JZ", "JZK"]);
        assert!(TINY.validate().is_ok());
        assert!(matches!(BAD.validate(), Err(HersheyError::MalformedGlyph { len: 3, .. })));
    }
}
