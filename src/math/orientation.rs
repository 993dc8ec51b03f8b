use super::{Point2, Vector2};

/// Direction of travel when going along `u` and then along `v`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Turn {
    /// Clockwise.
    Right = -1,
    Collinear = 0,
    /// Counter-clockwise.
    Left = 1,
}

impl Turn {
    /// Returns the turn as `-1`, `0` or `+1`.
    #[must_use]
    pub fn sign(self) -> i8 {
        self as i8
    }

    /// Returns the turn seen from the mirrored winding.
    #[must_use]
    pub fn reversed(self) -> Self {
        match self {
            Self::Right => Self::Left,
            Self::Collinear => Self::Collinear,
            Self::Left => Self::Right,
        }
    }

    fn from_cross(cross: f64) -> Self {
        if cross > 0.0 {
            Self::Left
        } else if cross < 0.0 {
            Self::Right
        } else {
            Self::Collinear
        }
    }
}

/// Returns the vector from `start` to `end`.
#[must_use]
pub fn vector_between(start: &Point2, end: &Point2) -> Vector2 {
    end - start
}

/// Classifies the turn from `u` to `v` by the sign of the cross product `u × v`.
///
/// The comparison against zero is exact, so integer coordinates never
/// produce a spurious collinear or non-collinear answer.
#[must_use]
pub fn left_turn(u: &Vector2, v: &Vector2) -> Turn {
    Turn::from_cross(u.perp(v))
}

/// Turn made at `b` when walking `a → b → c`.
#[must_use]
pub fn turn_at(a: &Point2, b: &Point2, c: &Point2) -> Turn {
    left_turn(&vector_between(a, b), &vector_between(b, c))
}
