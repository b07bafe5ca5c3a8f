//! Progressive stroke drawing
//!
//! Animates a glyph as if a pen were tracing it: segments are drawn in
//! record order, and progress is measured in ink length so the pen moves at
//! a constant speed regardless of how many points a stroke has.

use crate::glyph::{GlyphPath, Point};
use crate::outline::OutlineBuilder;

/// A polyline in font units
pub type Polyline = Vec<(f32, f32)>;

/// The part of `path` drawn after a fraction `t` of its total ink length.
///
/// `t` is clamped to `[0, 1]` (NaN counts as 0). The last polyline returned
/// ends at an interpolated point when `t` falls mid-edge. Polylines with
/// fewer than two points are never returned.
pub fn partial(path: &GlyphPath, t: f32) -> Vec<Polyline> {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let to_f32 = |p: &Point| (p.x as f32, p.y as f32);

    if t >= 1.0 {
        return path
            .segments()
            .iter()
            .map(|s| s.points().iter().map(to_f32).collect())
            .collect();
    }

    let mut budget = path.stroke_length() * t;
    let mut out = Vec::new();

    'segments: for segment in path.segments() {
        if budget <= 0.0 {
            break;
        }
        let points = segment.points();
        let mut line = vec![to_f32(&points[0])];

        for edge in points.windows(2) {
            let d = edge[0].distance(edge[1]);
            if budget >= d {
                budget -= d;
                line.push(to_f32(&edge[1]));
                continue;
            }
            let f = budget / d;
            let (x0, y0) = to_f32(&edge[0]);
            let (x1, y1) = to_f32(&edge[1]);
            line.push((x0 + (x1 - x0) * f, y0 + (y1 - y0) * f));
            out.push(line);
            break 'segments;
        }
        out.push(line);
    }

    out
}

/// Steps a glyph from blank to fully drawn
///
/// Progress is kept as a count of steps taken, so an animator created with
/// `n` steps finishes on exactly the `n`-th call to [`StrokeAnimator::step`].
#[derive(Debug, Clone)]
pub struct StrokeAnimator {
    path: GlyphPath,
    steps: u32,
    done: u32,
}

impl StrokeAnimator {
    /// Animate `path` over `steps` calls to [`StrokeAnimator::step`]
    pub fn new(path: GlyphPath, steps: u32) -> Self {
        Self { path, steps: steps.max(1), done: 0 }
    }

    pub fn progress(&self) -> f32 {
        self.done as f32 / self.steps as f32
    }

    pub fn is_finished(&self) -> bool {
        self.done >= self.steps
    }

    /// Advance one step; returns true once the glyph is complete
    pub fn step(&mut self) -> bool {
        self.done = (self.done + 1).min(self.steps);
        self.is_finished()
    }

    /// Jump to the step nearest a given fraction of the animation
    pub fn seek(&mut self, progress: f32) {
        let progress = if progress.is_nan() { 0.0 } else { progress.clamp(0.0, 1.0) };
        self.done = ((progress * self.steps as f32).round() as u32).min(self.steps);
    }

    pub fn reset(&mut self) {
        self.done = 0;
    }

    /// Emit the currently drawn part, in font units
    pub fn emit<B: OutlineBuilder>(&self, builder: &mut B) {
        for line in partial(&self.path, self.progress()) {
            let (x, y) = line[0];
            builder.move_to(x, y);
            for &(x, y) in &line[1..] {
                builder.line_to(x, y);
            }
        }
    }
}
