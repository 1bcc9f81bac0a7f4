use crate::math::{Point2, Vector2, TOLERANCE};

use super::direction::{Corner, Side};

/// An axis-aligned rectangle.
///
/// Stored as normalized `min`/`max` corners: `min.x <= max.x` and
/// `min.y <= max.y` hold for every constructed value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Minimum (lower-left) corner.
    pub min: Point2,
    /// Maximum (upper-right) corner.
    pub max: Point2,
}

impl Rect {
    /// Creates a rectangle from two opposite corners, in any order.
    #[must_use]
    pub fn from_corners(a: Point2, b: Point2) -> Self {
        Self {
            min: Point2::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point2::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Creates a rectangle from an origin corner and a size vector.
    ///
    /// Negative size components are normalized away.
    #[must_use]
    pub fn from_origin_size(origin: Point2, size: Vector2) -> Self {
        Self::from_corners(origin, origin + size)
    }

    /// Smallest rectangle containing all of `points`, or `None` for an
    /// empty set.
    #[must_use]
    pub fn from_points(points: &[Point2]) -> Option<Self> {
        let (min, max) = crate::math::polygon_2d::bounds_2d(points)?;
        Some(Self { min, max })
    }

    /// Width of the rectangle (always non-negative).
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Height of the rectangle (always non-negative).
    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Area of the rectangle.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Center point of the rectangle.
    #[must_use]
    pub fn center(&self) -> Point2 {
        Point2::new(
            (self.min.x + self.max.x) * 0.5,
            (self.min.y + self.max.y) * 0.5,
        )
    }

    /// Returns the named corner point.
    #[must_use]
    pub fn corner(&self, corner: Corner) -> Point2 {
        match corner {
            Corner::LowerLeft => self.min,
            Corner::LowerRight => Point2::new(self.max.x, self.min.y),
            Corner::UpperRight => self.max,
            Corner::UpperLeft => Point2::new(self.min.x, self.max.y),
        }
    }

    /// Returns the coordinate of the named side.
    #[must_use]
    pub fn side(&self, side: Side) -> f64 {
        match side {
            Side::Left => self.min.x,
            Side::Bottom => self.min.y,
            Side::Right => self.max.x,
            Side::Top => self.max.y,
        }
    }

    /// Boundary-inclusive containment test.
    #[must_use]
    pub fn contains(&self, point: &Point2) -> bool {
        point.x >= self.min.x - TOLERANCE
            && point.x <= self.max.x + TOLERANCE
            && point.y >= self.min.y - TOLERANCE
            && point.y <= self.max.y + TOLERANCE
    }

    /// Smallest rectangle containing both `self` and `other`.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: Point2::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Point2::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }

    /// Smallest rectangle containing `self` and `point`.
    #[must_use]
    pub fn expanded_to(&self, point: Point2) -> Self {
        Self {
            min: Point2::new(self.min.x.min(point.x), self.min.y.min(point.y)),
            max: Point2::new(self.max.x.max(point.x), self.max.y.max(point.y)),
        }
    }

    /// Translates the rectangle by a displacement.
    #[must_use]
    pub fn translated(&self, by: Vector2) -> Self {
        Self {
            min: self.min + by,
            max: self.max + by,
        }
    }
}
