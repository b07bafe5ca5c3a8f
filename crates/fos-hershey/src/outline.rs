//! Stroke outline building

/// Stroke outline builder trait (compatible with tiny-skia)
///
/// Hershey glyphs are open polylines, so only pen moves and straight
/// lines are ever emitted; there is no close or curve command.
pub trait OutlineBuilder {
    /// Lift the pen and move to point
    fn move_to(&mut self, x: f32, y: f32);
    /// Draw a line to point
    fn line_to(&mut self, x: f32, y: f32);
}

/// A recorded stroke outline
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlyphOutline {
    pub commands: Vec<OutlineCommand>,
}

/// Outline command
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutlineCommand {
    MoveTo(f32, f32),
    LineTo(f32, f32),
}

impl GlyphOutline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of pen-down runs
    pub fn stroke_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, OutlineCommand::MoveTo(..)))
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl OutlineBuilder for GlyphOutline {
    fn move_to(&mut self, x: f32, y: f32) {
        self.commands.push(OutlineCommand::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.commands.push(OutlineCommand::LineTo(x, y));
    }
}
