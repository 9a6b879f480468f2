use super::{Point2, Rotation2};

/// A rotated 2D frame whose x axis is the scan axis of a fill.
///
/// `to_scan` applies `R(θ)`, `from_scan` applies `R(-θ)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanFrame {
    rotation: Rotation2,
}

impl ScanFrame {
    /// Creates a frame rotated by `angle_degrees` counter-clockwise.
    #[must_use]
    pub fn from_degrees(angle_degrees: f64) -> Self {
        Self {
            rotation: Rotation2::new(angle_degrees.to_radians()),
        }
    }

    /// Returns the rotation angle in radians.
    #[must_use]
    pub fn angle(&self) -> f64 {
        self.rotation.angle()
    }

    /// Maps a point from world coordinates into the scan frame.
    #[must_use]
    pub fn to_scan(&self, p: &Point2) -> Point2 {
        self.rotation.transform_point(p)
    }

    /// Maps a point from the scan frame back to world coordinates.
    #[must_use]
    pub fn from_scan(&self, p: &Point2) -> Point2 {
        self.rotation.inverse_transform_point(p)
    }
}
