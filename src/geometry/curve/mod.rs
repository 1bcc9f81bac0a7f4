mod arc;
mod bezier;
mod circle;
mod ellipse;
mod line;

pub use arc::Arc;
pub use bezier::Bezier;
pub use circle::Circle;
pub use ellipse::Ellipse;
pub use line::{Line, Ray, Segment};

use crate::error::Result;
use crate::math::{Point2, Vector2};

/// Parameter domain for a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveDomain {
    /// Start of the parameter range.
    pub t_min: f64,
    /// End of the parameter range.
    pub t_max: f64,
}

impl CurveDomain {
    /// Creates a new curve domain.
    #[must_use]
    pub fn new(t_min: f64, t_max: f64) -> Self {
        Self { t_min, t_max }
    }
}

/// Trait for parametric curves in the plane.
pub trait Curve {
    /// Evaluates the curve at parameter `t`, returning the point.
    ///
    /// # Errors
    ///
    /// Returns an error if the curve is degenerate and cannot be
    /// evaluated.
    fn evaluate(&self, t: f64) -> Result<Point2>;

    /// Computes the unit tangent vector at parameter `t`.
    ///
    /// # Errors
    ///
    /// Returns an error if the tangent is degenerate (zero-length
    /// derivative) or the curve cannot be evaluated.
    fn tangent(&self, t: f64) -> Result<Vector2>;

    /// Returns the parameter domain of the curve.
    fn domain(&self) -> CurveDomain;

    /// Returns whether the curve is closed.
    fn is_closed(&self) -> bool;
}
