//! Cursor over a raw glyph record

use crate::coord::{self, PEN_UP};
use crate::{HersheyError, Result};

/// Reason reported when a record ends halfway through a coordinate pair
pub const INCOMPLETE_PAIR: &str =
    "incomplete coordinate pair (pen-up is a single space, not \" R\")";

/// One decoded token of a record body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pair {
    /// Lift the pen and start a new segment
    PenUp,
    /// Raw (x, y) values, not yet offset by the left extent
    Point(i32, i32),
}

/// Record reader with bounds checking
///
/// The extents are decoded when the reader is created; the cursor then
/// walks the body. The body is a run of two-byte coordinate pairs. A space
/// where a pair would start lifts the pen and occupies a single byte, so
/// records with pen-ups often have an odd body length.
pub struct GlyphReader<'a> {
    data: &'a [u8],
    pos: usize,
    left: i32,
    right: i32,
}

impl<'a> GlyphReader<'a> {
    /// Create a reader positioned at the start of the body
    pub fn new(record: &'a str) -> Result<Self> {
        let data = record.as_bytes();
        if data.len() < 2 {
            return Err(HersheyError::MalformedGlyph {
                len: data.len(),
                reason: "missing extents",
            });
        }
        let left = coord::value(data[0], 0)?;
        let right = coord::value(data[1], 1)?;
        Ok(Self { data, pos: 2, left, right })
    }

    /// Get current position
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// The (left, right) extents
    pub fn extents(&self) -> (i32, i32) {
        (self.left, self.right)
    }

    /// Read the next token, `None` at end of record
    pub fn next_pair(&mut self) -> Result<Option<Pair>> {
        let Some(&cx) = self.data.get(self.pos) else {
            return Ok(None);
        };
        let at = self.pos;

        if cx == PEN_UP {
            self.pos += 1;
            return Ok(Some(Pair::PenUp));
        }

        let Some(&cy) = self.data.get(at + 1) else {
            return Err(HersheyError::MalformedGlyph {
                len: self.data.len(),
                reason: INCOMPLETE_PAIR,
            });
        };
        self.pos += 2;

        let x = coord::value(cx, at)?;
        let y = coord::value(cy, at + 1)?;
        Ok(Some(Pair::Point(x, y)))
    }

    /// Remaining body bytes
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }
}
