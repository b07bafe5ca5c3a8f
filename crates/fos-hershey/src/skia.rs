//! tiny-skia path construction
//!
//! Builds a `tiny_skia::Path` from decoded strokes so callers can stroke it
//! with their own paint. Glyph strokes are open, so the path must be
//! stroked, not filled.

use crate::glyph::GlyphPath;
use crate::outline::OutlineBuilder;
use crate::transform::{Transform, TransformBuilder};

/// Outline builder that records into a tiny-skia path
#[derive(Default)]
pub struct SkiaPathBuilder {
    builder: tiny_skia::PathBuilder,
}

impl SkiaPathBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Finish the path, `None` if nothing was drawn
    pub fn finish(self) -> Option<tiny_skia::Path> {
        self.builder.finish()
    }
}

impl OutlineBuilder for SkiaPathBuilder {
    fn move_to(&mut self, x: f32, y: f32) {
        self.builder.move_to(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.builder.line_to(x, y);
    }
}

/// Build a device-space path for one glyph
pub fn glyph_path(glyph: &GlyphPath, transform: Transform) -> Option<tiny_skia::Path> {
    let mut builder = SkiaPathBuilder::new();
    glyph.outline(&mut TransformBuilder::new(&mut builder, transform));
    builder.finish()
}
