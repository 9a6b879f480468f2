use crate::geometry::Segment;
use crate::math::{Point2, ScanFrame, TOLERANCE};

/// A boundary segment expressed in the scan frame.
///
/// Endpoints are ordered so that `p1.x <= p2.x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct RotatedSegment {
    pub(crate) p1: Point2,
    pub(crate) p2: Point2,
}

impl RotatedSegment {
    /// Rotates `segment` into `frame`, swapping endpoints if needed.
    pub(crate) fn new(segment: &Segment, frame: &ScanFrame) -> Self {
        let a = frame.to_scan(&segment.start);
        let b = frame.to_scan(&segment.end);
        if a.x > b.x {
            Self { p1: b, p2: a }
        } else {
            Self { p1: a, p2: b }
        }
    }

    /// Returns `true` if the scan-axis interval is (numerically) a single point.
    pub(crate) fn is_degenerate(&self) -> bool {
        self.p2.x - self.p1.x < TOLERANCE
    }

    /// Returns the crossing of the scan line at `x`, if the segment covers it.
    ///
    /// A degenerate interval yields `p1.y` instead of interpolating.
    pub(crate) fn crossing_at(&self, x: f64) -> Option<f64> {
        if x < self.p1.x || x > self.p2.x {
            return None;
        }
        if self.is_degenerate() {
            return Some(self.p1.y);
        }
        let t = (x - self.p1.x) / (self.p2.x - self.p1.x);
        Some(self.p1.y + t * (self.p2.y - self.p1.y))
    }
}
