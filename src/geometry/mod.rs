pub mod boundary;
pub mod segment;

pub use boundary::Boundary;
pub use segment::{LineKind, LineStyle, Segment, MAX_STROKE_WIDTH, MIN_STROKE_WIDTH};
