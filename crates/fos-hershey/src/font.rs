//! Stroke font facade
//!
//! Bundles a font table with drawing options and an optional decode cache.
//! Draws one glyph at a time; placing glyphs along a line is up to the
//! caller.

use std::sync::Arc;

use crate::cache::GlyphCache;
use crate::config::Config;
use crate::glyph::GlyphPath;
use crate::outline::OutlineBuilder;
use crate::table::FontTable;
use crate::transform::{Transform, TransformBuilder};
use crate::{HersheyError, Result};

/// A font table ready for drawing
#[derive(Debug)]
pub struct StrokeFont {
    table: &'static FontTable,
    config: Config,
    cache: Option<GlyphCache>,
}

impl StrokeFont {
    pub fn new(table: &'static FontTable, config: Config) -> Self {
        tracing::debug!(
            "Stroke font '{}' at {}px (cache: {})",
            table.name(),
            config.height,
            config.cache
        );
        let cache = config.cache.then(GlyphCache::new);
        Self { table, config, cache }
    }

    pub fn table(&self) -> &'static FontTable {
        self.table
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Decoded glyph for `ch`, substituting the configured fallback for
    /// characters outside the table
    pub fn glyph(&self, ch: char) -> Result<Arc<GlyphPath>> {
        match self.lookup(ch as u32) {
            Err(HersheyError::GlyphIndexOutOfRange { code }) => match self.config.fallback {
                Some(fallback) => {
                    tracing::warn!("No glyph for U+{:04X}, using {:?}", code, fallback);
                    self.lookup(fallback as u32)
                }
                None => Err(HersheyError::GlyphIndexOutOfRange { code }),
            },
            other => other,
        }
    }

    /// Font unit to device mapping for the configured height
    pub fn transform(&self) -> Result<Transform> {
        Ok(Transform::for_height(self.table.scale(), self.config.height)?
            .with_flip_y(self.config.flip_y))
    }

    /// Advance width of `ch` in device units
    pub fn advance(&self, ch: char) -> Result<f32> {
        let glyph = self.glyph(ch)?;
        Ok(self.transform()?.apply_distance(glyph.advance() as f32))
    }

    /// Draw `ch` with its left extent at `x` and its zero line at `y`.
    ///
    /// Returns the advance width in device units.
    pub fn draw_glyph<B: OutlineBuilder>(
        &self,
        ch: char,
        x: f32,
        y: f32,
        builder: &mut B,
    ) -> Result<f32> {
        let glyph = self.glyph(ch)?;
        let transform = self.transform()?.then_translate(x, y);
        glyph.outline(&mut TransformBuilder::new(builder, transform));
        Ok(transform.apply_distance(glyph.advance() as f32))
    }

    /// Cached glyph count (0 when caching is disabled)
    pub fn cached_glyphs(&self) -> usize {
        self.cache.as_ref().map_or(0, GlyphCache::len)
    }

    fn lookup(&self, code: u32) -> Result<Arc<GlyphPath>> {
        match &self.cache {
            Some(cache) => cache.get_or_decode(self.table, code),
            None => self.table.decode_code(code).map(Arc::new),
        }
    }
}
