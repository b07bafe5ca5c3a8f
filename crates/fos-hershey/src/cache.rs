//! Decoded glyph cache
//!
//! Decoding is cheap but not free; renderers that draw the same glyphs every
//! frame can keep the results here. Entries are immutable once inserted.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::glyph::{self, GlyphPath};
use crate::table::FontTable;
use crate::Result;

/// Cache of decoded glyphs for one font table, keyed by glyph index
#[derive(Debug, Default)]
pub struct GlyphCache {
    glyphs: RwLock<HashMap<usize, Arc<GlyphPath>>>,
}

impl GlyphCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a decoded glyph, decoding and storing it on a miss.
    ///
    /// Errors are returned to the caller and never stored.
    pub fn get_or_decode(&self, table: &FontTable, code: u32) -> Result<Arc<GlyphPath>> {
        let index = table.glyph_index(code)?;

        if let Some(glyph) = self.read().get(&index) {
            return Ok(Arc::clone(glyph));
        }

        tracing::debug!("Glyph cache miss: font '{}' index {}", table.name(), index);
        let record = table.record(code)?;
        let decoded = Arc::new(glyph::decode(record, table.scale())?);

        let mut glyphs = self.glyphs.write().unwrap_or_else(|e| e.into_inner());
        // Another thread may have raced us here; keep the first entry
        Ok(Arc::clone(glyphs.entry(index).or_insert(decoded)))
    }

    /// Look up an already decoded glyph
    pub fn get(&self, index: usize) -> Option<Arc<GlyphPath>> {
        self.read().get(&index).cloned()
    }

    /// Number of cached glyphs
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all cached glyphs
    pub fn clear(&self) {
        self.glyphs.write().unwrap_or_else(|e| e.into_inner()).clear();
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, HashMap<usize, Arc<GlyphPath>>> {
        // Values are immutable, so a poisoned lock still holds valid data
        self.glyphs.read().unwrap_or_else(|e| e.into_inner())
    }
}
