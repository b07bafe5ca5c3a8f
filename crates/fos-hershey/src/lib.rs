//! fOS Hershey - Stroke Font Decoding
//!
//! This crate decodes Hershey-style stroke fonts for the fOS engine:
//! - Letter-coded glyph records (extents + pen-up/pen-down pairs)
//! - Stroke paths as ordered pen-down polylines
//! - Compiled-in font tables (the "music" font)
//! - Font unit to device unit mapping
//! - Progressive stroke drawing for animation
//! - Optional tiny-skia path construction
//!
//! # Example
//! ```rust
//! use fos_hershey::fonts::MUSIC;
//!
//! let glyph = MUSIC.decode_char('!').unwrap();
//! assert_eq!(glyph.segments().len(), 3);
//! assert_eq!(glyph.advance(), 10);
//! ```

pub mod animate;
pub mod cache;
pub mod config;
pub mod coord;
pub mod font;
pub mod fonts;
pub mod glyph;
pub mod outline;
pub mod reader;
pub mod table;
pub mod transform;

#[cfg(feature = "tiny-skia")]
pub mod skia;

pub use animate::{StrokeAnimator, partial};
pub use cache::GlyphCache;
pub use config::Config;
pub use font::StrokeFont;
pub use glyph::{BoundingBox, GlyphPath, Point, Segment, decode};
pub use outline::{GlyphOutline, OutlineBuilder, OutlineCommand};
pub use table::FontTable;
pub use transform::{Transform, TransformBuilder};

/// Stroke font error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HersheyError {
    #[error("Malformed glyph record ({len} bytes): {reason}")]
    MalformedGlyph { len: usize, reason: &'static str },

    #[error("Character code {code} has no glyph in this font")]
    GlyphIndexOutOfRange { code: u32 },

    #[error("Invalid coordinate byte 0x{byte:02x} at position {position}")]
    InvalidCharacter { position: usize, byte: u8 },

    #[error("Font scale must be positive")]
    InvalidScale,
}

pub type Result<T> = std::result::Result<T, HersheyError>;
