mod geometry;
mod joints;

pub use geometry::*;
pub use joints::*;
