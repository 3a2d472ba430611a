//! Geometric primitives: axes, 1-D spans, and named rectangles.

mod axis;
mod error;
mod rect;
mod span;

pub use axis::Axis;
pub use error::GeometryError;
pub use rect::{Reach, Rect};
pub use span::Span;
