use std::fmt;

/// Index of a line endpoint in the host's selection model.
///
/// Every line owns two consecutive point indices, `2 * id` and `2 * id + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PointIndex(pub u32);

/// Identifier of a track line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineId(pub u32);

impl LineId {
    /// Largest id whose point indices fit in a `u32`.
    pub const MAX: Self = Self(u32::MAX >> 1);

    /// Returns the two point indices owned by this line, or `None` for ids
    /// above [`LineId::MAX`].
    #[must_use]
    pub fn point_indices(self) -> Option<[PointIndex; 2]> {
        let first = self.0.checked_mul(2)?;
        Some([PointIndex(first), PointIndex(first | 1)])
    }
}

impl From<PointIndex> for LineId {
    fn from(index: PointIndex) -> Self {
        Self(index.0 >> 1)
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line#{}", self.0)
    }
}
