use super::Segment;

/// An unordered collection of segments enclosing the area to fill.
///
/// No connectivity, closure, convexity or winding is assumed. A boundary may
/// be an open polyline, a closed polygon, several disjoint shapes or nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Boundary {
    segments: Vec<Segment>,
}

impl Boundary {
    /// Creates an empty boundary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a boundary from a list of segments.
    #[must_use]
    pub fn from_segments(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// Appends a segment.
    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    /// Returns the segments in insertion order.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns an iterator over the segments.
    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    /// Returns the number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` if the boundary has no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Consumes the boundary, returning its segments.
    #[must_use]
    pub fn into_segments(self) -> Vec<Segment> {
        self.segments
    }
}

impl FromIterator<Segment> for Boundary {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Boundary {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

impl From<Vec<Segment>> for Boundary {
    fn from(segments: Vec<Segment>) -> Self {
        Self::from_segments(segments)
    }
}
