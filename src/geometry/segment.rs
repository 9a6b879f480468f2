use crate::error::ParameterError;
use crate::math::Point2;

/// Smallest stroke width the host accepts.
pub const MIN_STROKE_WIDTH: f64 = 0.01;

/// Largest stroke width the host accepts.
pub const MAX_STROKE_WIDTH: f64 = 362.0;

/// Render classification of a track line.
///
/// The discriminants are the host's numeric line type indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineKind {
    /// Solid line the rider collides with.
    Standard = 0,
    /// Solid line that accelerates the rider.
    Acceleration = 1,
    /// Decorative line without physics.
    #[default]
    Scenery = 2,
}

impl LineKind {
    /// Returns the host's numeric index for this kind.
    #[must_use]
    pub fn index(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for LineKind {
    type Error = ParameterError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Self::Standard),
            1 => Ok(Self::Acceleration),
            2 => Ok(Self::Scenery),
            other => Err(ParameterError::UnknownLineKind(other)),
        }
    }
}

/// Kind and stroke width attached to a synthesized segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    pub kind: LineKind,
    pub stroke_width: f64,
}

impl LineStyle {
    /// Creates a style without touching the width.
    #[must_use]
    pub fn new(kind: LineKind, stroke_width: f64) -> Self {
        Self { kind, stroke_width }
    }

    /// Creates a style with the width forced into
    /// [`MIN_STROKE_WIDTH`, `MAX_STROKE_WIDTH`]. A NaN width becomes `1.0`.
    #[must_use]
    pub fn clamped(kind: LineKind, stroke_width: f64) -> Self {
        let stroke_width = if stroke_width.is_nan() {
            1.0
        } else {
            stroke_width.clamp(MIN_STROKE_WIDTH, MAX_STROKE_WIDTH)
        };
        Self { kind, stroke_width }
    }
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            kind: LineKind::Scenery,
            stroke_width: 1.0,
        }
    }
}

/// An oriented line segment from `start` to `end`.
///
/// `kind` and `stroke_width` travel with the geometry but play no part in
/// any geometric computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point2,
    pub end: Point2,
    pub kind: LineKind,
    pub stroke_width: f64,
}

impl Segment {
    /// Creates a segment with the default [`LineStyle`].
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self::with_style(start, end, LineStyle::default())
    }

    /// Creates a segment from raw endpoint coordinates.
    #[must_use]
    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(Point2::new(x1, y1), Point2::new(x2, y2))
    }

    /// Creates a segment carrying the given style.
    #[must_use]
    pub fn with_style(start: Point2, end: Point2, style: LineStyle) -> Self {
        Self {
            start,
            end,
            kind: style.kind,
            stroke_width: style.stroke_width,
        }
    }

    /// Returns the kind and width of this segment.
    #[must_use]
    pub fn style(&self) -> LineStyle {
        LineStyle::new(self.kind, self.stroke_width)
    }

    /// Returns `true` if both endpoints have finite coordinates.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.start.coords.iter().chain(self.end.coords.iter()).all(|c| c.is_finite())
    }

    /// Returns the Euclidean length.
    #[must_use]
    pub fn length(&self) -> f64 {
        nalgebra::distance(&self.start, &self.end)
    }
}
