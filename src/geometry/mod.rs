pub mod curve;
pub mod direction;
pub mod polygon;
pub mod rect;
pub mod transform;

pub use curve::{Arc, Bezier, Circle, Curve, CurveDomain, Ellipse, Line, Ray, Segment};
pub use direction::{Cardinal, Corner, Octant, Quadrant, Side, Winding};
pub use polygon::{Ngon, Polygon, Quadrilateral, Triangle};
pub use rect::Rect;
pub use transform::AffineTransform;
