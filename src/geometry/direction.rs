//! Closed direction enums with cyclic-group operations.
//!
//! Each enum offers `next`/`previous` (one step counter-clockwise /
//! clockwise through the variants) and `opposite` (half a turn).
//! `opposite` is an involution, and applying `next` as many times as
//! there are variants returns to the start.

use crate::math::{Point2, Vector2, TOLERANCE};

/// The four compass directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinal {
    East,
    North,
    West,
    South,
}

impl Cardinal {
    /// All variants in counter-clockwise order starting at `East`.
    pub const ALL: [Self; 4] = [Self::East, Self::North, Self::West, Self::South];

    /// One step counter-clockwise.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::East => Self::North,
            Self::North => Self::West,
            Self::West => Self::South,
            Self::South => Self::East,
        }
    }

    /// One step clockwise.
    #[must_use]
    pub fn previous(self) -> Self {
        match self {
            Self::East => Self::South,
            Self::North => Self::East,
            Self::West => Self::North,
            Self::South => Self::West,
        }
    }

    /// Half a turn.
    #[must_use]
    pub fn opposite(self) -> Self {
        self.next().next()
    }

    /// Unit vector pointing in this direction.
    #[must_use]
    pub fn unit_vector(self) -> Vector2 {
        match self {
            Self::East => Vector2::new(1.0, 0.0),
            Self::North => Vector2::new(0.0, 1.0),
            Self::West => Vector2::new(-1.0, 0.0),
            Self::South => Vector2::new(0.0, -1.0),
        }
    }
}

/// The four quadrants of the plane, counter-clockwise from +x/+y.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quadrant {
    First,
    Second,
    Third,
    Fourth,
}

impl Quadrant {
    /// One step counter-clockwise.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::Third,
            Self::Third => Self::Fourth,
            Self::Fourth => Self::First,
        }
    }

    /// One step clockwise.
    #[must_use]
    pub fn previous(self) -> Self {
        match self {
            Self::First => Self::Fourth,
            Self::Second => Self::First,
            Self::Third => Self::Second,
            Self::Fourth => Self::Third,
        }
    }

    /// The diagonally opposite quadrant.
    #[must_use]
    pub fn opposite(self) -> Self {
        self.next().next()
    }

    /// Classifies a point by quadrant.
    ///
    /// Returns `None` for points on either axis (within tolerance).
    #[must_use]
    pub fn containing(point: &Point2) -> Option<Self> {
        if point.x.abs() < TOLERANCE || point.y.abs() < TOLERANCE {
            return None;
        }
        Some(match (point.x > 0.0, point.y > 0.0) {
            (true, true) => Self::First,
            (false, true) => Self::Second,
            (false, false) => Self::Third,
            (true, false) => Self::Fourth,
        })
    }
}

/// The eight octants of the plane, counter-clockwise from the one
/// between angle 0 and `pi/4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Octant {
    First,
    Second,
    Third,
    Fourth,
    Fifth,
    Sixth,
    Seventh,
    Eighth,
}

impl Octant {
    /// All variants in counter-clockwise order.
    pub const ALL: [Self; 8] = [
        Self::First,
        Self::Second,
        Self::Third,
        Self::Fourth,
        Self::Fifth,
        Self::Sixth,
        Self::Seventh,
        Self::Eighth,
    ];

    fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
            Self::Third => 2,
            Self::Fourth => 3,
            Self::Fifth => 4,
            Self::Sixth => 5,
            Self::Seventh => 6,
            Self::Eighth => 7,
        }
    }

    /// One step counter-clockwise.
    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % 8]
    }

    /// One step clockwise.
    #[must_use]
    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + 7) % 8]
    }

    /// Half a turn.
    #[must_use]
    pub fn opposite(self) -> Self {
        Self::ALL[(self.index() + 4) % 8]
    }

    /// Classifies a non-zero vector by the octant its angle falls in.
    ///
    /// Returns `None` for a zero-length vector. Boundary angles belong
    /// to the counter-clockwise-following octant.
    #[must_use]
    pub fn containing(v: &Vector2) -> Option<Self> {
        if v.norm() < TOLERANCE {
            return None;
        }
        let angle = crate::math::angle::normalize_angle(v.y.atan2(v.x));
        let step = std::f64::consts::FRAC_PI_4;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let idx = ((angle / step).floor() as usize).min(7);
        Some(Self::ALL[idx])
    }
}

/// Traversal direction of a closed boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winding {
    CounterClockwise,
    Clockwise,
}

impl Winding {
    /// The reversed traversal direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::CounterClockwise => Self::Clockwise,
            Self::Clockwise => Self::CounterClockwise,
        }
    }

    /// Sign convention: `+1` for counter-clockwise, `-1` for clockwise.
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Self::CounterClockwise => 1.0,
            Self::Clockwise => -1.0,
        }
    }
}

/// The four corners of an axis-aligned rectangle, counter-clockwise
/// from the lower-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    LowerLeft,
    LowerRight,
    UpperRight,
    UpperLeft,
}

impl Corner {
    /// One step counter-clockwise around the rectangle.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::LowerLeft => Self::LowerRight,
            Self::LowerRight => Self::UpperRight,
            Self::UpperRight => Self::UpperLeft,
            Self::UpperLeft => Self::LowerLeft,
        }
    }

    /// One step clockwise around the rectangle.
    #[must_use]
    pub fn previous(self) -> Self {
        match self {
            Self::LowerLeft => Self::UpperLeft,
            Self::LowerRight => Self::LowerLeft,
            Self::UpperRight => Self::LowerRight,
            Self::UpperLeft => Self::UpperRight,
        }
    }

    /// The diagonally opposite corner.
    #[must_use]
    pub fn opposite(self) -> Self {
        self.next().next()
    }
}

/// The four sides of an axis-aligned rectangle, counter-clockwise
/// starting at the left side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Bottom,
    Right,
    Top,
}

impl Side {
    /// One step counter-clockwise around the rectangle.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Left => Self::Bottom,
            Self::Bottom => Self::Right,
            Self::Right => Self::Top,
            Self::Top => Self::Left,
        }
    }

    /// One step clockwise around the rectangle.
    #[must_use]
    pub fn previous(self) -> Self {
        match self {
            Self::Left => Self::Top,
            Self::Bottom => Self::Left,
            Self::Right => Self::Bottom,
            Self::Top => Self::Right,
        }
    }

    /// The facing side.
    #[must_use]
    pub fn opposite(self) -> Self {
        self.next().next()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn cardinal_four_steps_return_to_start() {
        for c in Cardinal::ALL {
            assert_eq!(c.next().next().next().next(), c);
            assert_eq!(c.next().previous(), c);
        }
    }

    #[test]
    fn cardinal_opposite_is_involution() {
        for c in Cardinal::ALL {
            assert_eq!(c.opposite().opposite(), c);
            assert_ne!(c.opposite(), c);
        }
    }

    #[test]
    fn cardinal_vectors_are_unit() {
        for c in Cardinal::ALL {
            assert!((c.unit_vector().norm() - 1.0).abs() < TOLERANCE);
        }
    }

    #[test]
    fn quadrant_group_laws() {
        let all = [
            Quadrant::First,
            Quadrant::Second,
            Quadrant::Third,
            Quadrant::Fourth,
        ];
        for q in all {
            assert_eq!(q.next().next().next().next(), q);
            assert_eq!(q.opposite().opposite(), q);
            assert_eq!(q.previous().next(), q);
        }
    }

    #[test]
    fn quadrant_classification() {
        assert_eq!(
            Quadrant::containing(&Point2::new(1.0, 1.0)),
            Some(Quadrant::First)
        );
        assert_eq!(
            Quadrant::containing(&Point2::new(-1.0, -1.0)),
            Some(Quadrant::Third)
        );
        assert!(Quadrant::containing(&Point2::new(0.0, 1.0)).is_none());
    }

    #[test]
    fn octant_group_laws() {
        for o in Octant::ALL {
            let mut cur = o;
            for _ in 0..8 {
                cur = cur.next();
            }
            assert_eq!(cur, o);
            assert_eq!(o.opposite().opposite(), o);
            assert_eq!(o.next().previous(), o);
        }
    }

    #[test]
    fn octant_classification() {
        assert_eq!(
            Octant::containing(&Vector2::new(2.0, 1.0)),
            Some(Octant::First)
        );
        assert_eq!(
            Octant::containing(&Vector2::new(-1.0, -2.0)),
            Some(Octant::Sixth)
        );
        assert!(Octant::containing(&Vector2::new(0.0, 0.0)).is_none());
    }

    #[test]
    fn winding_opposite_is_involution() {
        assert_eq!(
            Winding::Clockwise.opposite(),
            Winding::CounterClockwise
        );
        assert_eq!(Winding::Clockwise.opposite().opposite(), Winding::Clockwise);
        assert!((Winding::CounterClockwise.sign() - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn corner_and_side_group_laws() {
        let corners = [
            Corner::LowerLeft,
            Corner::LowerRight,
            Corner::UpperRight,
            Corner::UpperLeft,
        ];
        for c in corners {
            assert_eq!(c.next().next().next().next(), c);
            assert_eq!(c.opposite().opposite(), c);
        }
        let sides = [Side::Left, Side::Bottom, Side::Right, Side::Top];
        for s in sides {
            assert_eq!(s.next().next().next().next(), s);
            assert_eq!(s.opposite().opposite(), s);
        }
        assert_eq!(Side::Left.opposite(), Side::Right);
        assert_eq!(Corner::LowerLeft.opposite(), Corner::UpperRight);
    }
}
