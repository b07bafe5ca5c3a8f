//! Stroke font configuration

/// Options for [`crate::StrokeFont`]
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Device height of one em (pixels)
    pub height: f32,

    /// Negate Y when drawing (for y-up targets)
    pub flip_y: bool,

    /// Keep decoded glyphs in a [`crate::GlyphCache`]
    pub cache: bool,

    /// Character drawn in place of characters the font has no glyph for.
    /// `None` reports the error to the caller instead.
    pub fallback: Option<char>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            height: 16.0,
            flip_y: false,
            cache: true,
            fallback: None,
        }
    }
}
