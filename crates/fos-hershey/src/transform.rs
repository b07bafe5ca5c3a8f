//! Font unit to device unit mapping
//!
//! Decoded glyphs stay in font units. Consumers pick a pixel height and an
//! origin; `device = origin + unit / em * height`.

use crate::outline::OutlineBuilder;
use crate::{HersheyError, Result};

/// Uniform scale plus translation, optionally flipping Y
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Device units per font unit
    pub scale: f32,
    pub origin_x: f32,
    pub origin_y: f32,
    /// Negate Y for y-up targets (Hershey Y grows downward)
    pub flip_y: bool,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    /// Identity mapping
    pub fn identity() -> Self {
        Self {
            scale: 1.0,
            origin_x: 0.0,
            origin_y: 0.0,
            flip_y: false,
        }
    }

    /// Map a font with em height `em` so that one em spans `height` device units
    pub fn for_height(em: u16, height: f32) -> Result<Self> {
        if em == 0 {
            return Err(HersheyError::InvalidScale);
        }
        Ok(Self {
            scale: height / em as f32,
            ..Self::identity()
        })
    }

    /// Shift the origin by (dx, dy) device units
    pub fn then_translate(self, dx: f32, dy: f32) -> Self {
        Self {
            origin_x: self.origin_x + dx,
            origin_y: self.origin_y + dy,
            ..self
        }
    }

    pub fn with_flip_y(self, flip_y: bool) -> Self {
        Self { flip_y, ..self }
    }

    #[inline]
    pub fn apply(&self, x: f32, y: f32) -> (f32, f32) {
        let y = if self.flip_y { -y } else { y };
        (self.origin_x + x * self.scale, self.origin_y + y * self.scale)
    }

    /// Scale a distance (e.g. an advance width); ignores the origin
    #[inline]
    pub fn apply_distance(&self, d: f32) -> f32 {
        d * self.scale
    }
}

/// Outline builder adapter that transforms points before forwarding them
pub struct TransformBuilder<'a, B: OutlineBuilder> {
    inner: &'a mut B,
    transform: Transform,
}

impl<'a, B: OutlineBuilder> TransformBuilder<'a, B> {
    pub fn new(inner: &'a mut B, transform: Transform) -> Self {
        Self { inner, transform }
    }
}

impl<B: OutlineBuilder> OutlineBuilder for TransformBuilder<'_, B> {
    fn move_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.transform.apply(x, y);
        self.inner.move_to(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.transform.apply(x, y);
        self.inner.line_to(x, y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outline::{GlyphOutline, OutlineCommand};

    #[test]
    fn test_for_height() {
        let t = Transform::for_height(96, 48.0).unwrap();
        assert_eq!(t.scale, 0.5);
        assert_eq!(t.apply(96.0, -96.0), (48.0, -48.0));
        assert_eq!(Transform::for_height(0, 48.0), Err(HersheyError::InvalidScale));
    }

    #[test]
    fn test_translate_and_flip() {
        let t = Transform::for_height(10, 20.0)
            .unwrap()
            .then_translate(100.0, 50.0)
            .with_flip_y(true);
        assert_eq!(t.apply(1.0, 1.0), (102.0, 48.0));
        assert_eq!(t.apply_distance(5.0), 10.0);
    }

    #[test]
    fn test_transform_builder() {
        let mut outline = GlyphOutline::new();
        {
            let t = Transform::identity().then_translate(10.0, 0.0);
            let mut builder = TransformBuilder::new(&mut outline, t);
            builder.move_to(0.0, 0.0);
            builder.line_to(1.0, 2.0);
        }
        assert_eq!(
            outline.commands,
            vec![OutlineCommand::MoveTo(10.0, 0.0), OutlineCommand::LineTo(11.0, 2.0)]
        );
    }
}
