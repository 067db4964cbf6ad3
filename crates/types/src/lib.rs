pub mod align;
pub mod geometry;

pub use align::{HorizAlign, VertAlign};
pub use geometry::{Bounds, Size, Vec2};
