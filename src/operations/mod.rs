pub mod fill;
pub mod selection;

pub use fill::{FillIter, ScanlineFill};
pub use selection::{LineId, LineLookup, PointIndex, ResolveLines};
