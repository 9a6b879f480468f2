pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod preview;
pub mod track;

pub use error::{Result, TrackFillError};
