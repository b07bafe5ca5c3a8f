//! Stroke Decoder
//!
//! Turns one Hershey glyph record into an ordered list of pen-down
//! polylines. Decoding is a pure function of the record; the only state is
//! the segment being accumulated, which lives on the stack of one call.

use crate::outline::OutlineBuilder;
use crate::reader::{GlyphReader, Pair};
use crate::{HersheyError, Result};

/// A point in font units, relative to the glyph's left extent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: Point) -> f32 {
        let dx = (other.x - self.x) as f32;
        let dy = (other.y - self.y) as f32;
        dx.hypot(dy)
    }
}

/// A pen-down polyline; always holds at least two points
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    points: Vec<Point>,
}

impl Segment {
    /// Wrap a polyline, `None` if it has fewer than two points
    pub fn new(points: Vec<Point>) -> Option<Self> {
        (points.len() >= 2).then_some(Self { points })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn first(&self) -> Point {
        self.points[0]
    }

    pub fn last(&self) -> Point {
        self.points[self.points.len() - 1]
    }

    /// Ink length in font units
    pub fn length(&self) -> f32 {
        self.points.windows(2).map(|w| w[0].distance(w[1])).sum()
    }
}

/// Bounding box of a glyph's ink
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub x_min: i32,
    pub y_min: i32,
    pub x_max: i32,
    pub y_max: i32,
}

impl BoundingBox {
    pub fn width(&self) -> i32 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> i32 {
        self.y_max - self.y_min
    }
}

/// A decoded glyph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphPath {
    segments: Vec<Segment>,
    left: i32,
    right: i32,
    scale: u16,
}

impl GlyphPath {
    /// Segments in the order they appear in the record
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Take ownership of the segments
    pub fn into_segments(self) -> Vec<Segment> {
        self.segments
    }

    /// Left extent in font units
    pub fn left(&self) -> i32 {
        self.left
    }

    /// Right extent in font units
    pub fn right(&self) -> i32 {
        self.right
    }

    /// Horizontal advance in font units
    pub fn advance(&self) -> i32 {
        self.right - self.left
    }

    /// Nominal em height of the font this glyph was decoded for
    pub fn scale(&self) -> u16 {
        self.scale
    }

    /// True for glyphs with no ink (e.g. space)
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn point_count(&self) -> usize {
        self.segments.iter().map(|s| s.points.len()).sum()
    }

    /// Total ink length in font units
    pub fn stroke_length(&self) -> f32 {
        self.segments.iter().map(Segment::length).sum()
    }

    /// Bounding box of all points, `None` for empty glyphs
    pub fn bounds(&self) -> Option<BoundingBox> {
        let mut points = self.segments.iter().flat_map(|s| s.points.iter());
        let first = points.next()?;
        let init = BoundingBox {
            x_min: first.x,
            y_min: first.y,
            x_max: first.x,
            y_max: first.y,
        };
        Some(points.fold(init, |b, p| BoundingBox {
            x_min: b.x_min.min(p.x),
            y_min: b.y_min.min(p.y),
            x_max: b.x_max.max(p.x),
            y_max: b.y_max.max(p.y),
        }))
    }

    /// Replay the glyph into an outline builder, in font units
    pub fn outline<B: OutlineBuilder>(&self, builder: &mut B) {
        for segment in &self.segments {
            let first = segment.first();
            builder.move_to(first.x as f32, first.y as f32);
            for p in &segment.points[1..] {
                builder.line_to(p.x as f32, p.y as f32);
            }
        }
    }
}

/// Decode a glyph record.
///
/// The first two bytes are the left/right extents; the rest are coordinate
/// pairs, with a single space lifting the pen. Runs of fewer than two
/// points (from back-to-back pen-ups) are dropped. Any error discards the
/// whole glyph.
///
/// The pen-up is one byte, as in the shipped tables. Records written with
/// the two-byte `" R"` pen-up of other Hershey sources read the `R` as the
/// start of a pair and usually fail with an incomplete pair.
pub fn decode(record: &str, scale: u16) -> Result<GlyphPath> {
    if scale == 0 {
        return Err(HersheyError::InvalidScale);
    }

    let mut reader = GlyphReader::new(record)?;
    let (left, right) = reader.extents();

    let mut segments = Vec::new();
    let mut current = Vec::new();

    while let Some(pair) = reader.next_pair()? {
        match pair {
            Pair::PenUp => {
                if let Some(segment) = Segment::new(std::mem::take(&mut current)) {
                    segments.push(segment);
                }
            }
            Pair::Point(x, y) => current.push(Point::new(x - left, y)),
        }
    }
    if let Some(segment) = Segment::new(current) {
        segments.push(segment);
    }

    tracing::trace!(
        "Decoded glyph {:?}: {} segments, advance {}",
        record,
        segments.len(),
        right - left
    );

    Ok(GlyphPath {
        segments,
        left,
        right,
        scale,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outline::{GlyphOutline, OutlineCommand};

    #[test]
    fn test_extents_only() {
        let glyph = decode("JZ", 96).unwrap();
        assert!(glyph.is_empty());
        assert_eq!(glyph.advance(), 16);
        assert_eq!(glyph.left(), -8);
        assert_eq!(glyph.right(), 8);
        assert_eq!(glyph.bounds(), None);
    }

    #[test]
    fn test_exclamation() {
        let glyph = decode("MWRFQHRTSHRF RHRN RYQZR[SZRY", 96).unwrap();
        assert_eq!(glyph.segments().len(), 3);
        assert_eq!(glyph.advance(), 10);

        let first = &glyph.segments()[0];
        // "RF": x = 0 - (-5), y = 'F' - 'R'
        assert_eq!(first.first(), Point::new(5, -12));
        assert_eq!(first.points().len(), 5);
        assert_eq!(glyph.segments()[1].points(), &[Point::new(5, -10), Point::new(5, -4)]);
        assert_eq!(glyph.segments()[2].points().len(), 5);
    }

    #[test]
    fn test_y_not_offset() {
        let glyph = decode("HRRRSS", 96).unwrap();
        let points = glyph.segments()[0].points();
        assert_eq!(points[0], Point::new(10, 0));
        assert_eq!(points[1], Point::new(11, 1));
    }

    #[test]
    fn test_consecutive_pen_ups() {
        let glyph = decode("RRRRSS  TTUU", 96).unwrap();
        assert_eq!(glyph.segments().len(), 2);
    }

    #[test]
    fn test_single_point_runs_dropped() {
        let glyph = decode("RRRR SS", 96).unwrap();
        assert!(glyph.is_empty());

        let glyph = decode("RR  ", 96).unwrap();
        assert!(glyph.is_empty());
    }

    #[test]
    fn test_malformed() {
        assert!(matches!(decode("", 96), Err(HersheyError::MalformedGlyph { .. })));
        assert!(matches!(decode("J", 96), Err(HersheyError::MalformedGlyph { .. })));
        assert!(matches!(decode("JZK", 96), Err(HersheyError::MalformedGlyph { .. })));
    }

    #[test]
    fn test_two_byte_pen_up_rejected() {
        let expected = HersheyError::MalformedGlyph {
            len: 4,
            reason: crate::reader::INCOMPLETE_PAIR,
        };
        assert_eq!(decode("JZ R", 96), Err(expected));

        let err = decode("RRRRSS RTTUU", 96).unwrap_err();
        assert!(err.to_string().contains("single space"), "{err}");
    }

    #[test]
    fn test_bad_byte_aborts_whole_glyph() {
        let err = decode("JZRRSS R\x07", 96).unwrap_err();
        assert_eq!(err, HersheyError::InvalidCharacter { position: 8, byte: 0x07 });
    }

    #[test]
    fn test_zero_scale() {
        assert_eq!(decode("JZ", 0), Err(HersheyError::InvalidScale));
    }

    #[test]
    fn test_bounds_and_length() {
        let glyph = decode("RRRRUV", 96).unwrap();
        let bounds = glyph.bounds().unwrap();
        assert_eq!((bounds.width(), bounds.height()), (3, 4));
        assert_eq!(glyph.stroke_length(), 5.0);
        assert_eq!(glyph.point_count(), 2);
    }

    #[test]
    fn test_outline_replay() {
        let glyph = decode("RRRRSS RTTU", 96).unwrap();
        let mut outline = GlyphOutline::new();
        glyph.outline(&mut outline);

        assert_eq!(
            outline.commands,
            vec![
                OutlineCommand::MoveTo(0.0, 0.0),
                OutlineCommand::LineTo(1.0, 1.0),
                OutlineCommand::MoveTo(0.0, 2.0),
                OutlineCommand::LineTo(2.0, 3.0),
            ]
        );
    }

    #[test]
    fn test_segment_requires_two_points() {
        assert!(Segment::new(vec![Point::new(0, 0)]).is_none());
        assert!(Segment::new(vec![Point::new(0, 0), Point::new(0, 0)]).is_some());
    }
}
