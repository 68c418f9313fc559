pub mod geometry;
pub mod tween;

pub use geometry::*;
pub use tween::*;
