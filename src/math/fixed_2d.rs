//! Fixed-point 2D vector.
//!
//! Components are stored as integers in units of `1 / SCALE`, so repeated
//! integer deltas never accumulate floating drift. Conversion to and from
//! [`Vector2`] is always explicit.

use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use super::Vector2;

/// A 2D vector stored as integer multiples of `1 / FixedVector2::SCALE`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FixedVector2 {
    raw_x: i64,
    raw_y: i64,
}

impl FixedVector2 {
    /// Raw units per unit length.
    pub const SCALE: i64 = 1000;

    /// The zero vector.
    pub const ZERO: Self = Self { raw_x: 0, raw_y: 0 };

    /// Creates a vector directly from raw fixed-point components.
    #[must_use]
    pub const fn from_raw(raw_x: i64, raw_y: i64) -> Self {
        Self { raw_x, raw_y }
    }

    /// Converts a floating vector, rounding each component to the nearest
    /// raw unit.
    ///
    /// Components outside the `i64` range saturate; NaN maps to zero.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn from_vector(v: &Vector2) -> Self {
        let scale = Self::SCALE as f64;
        Self {
            raw_x: (v.x * scale).round() as i64,
            raw_y: (v.y * scale).round() as i64,
        }
    }

    /// Converts back to a floating vector.
    #[must_use]
    pub fn to_vector(self) -> Vector2 {
        Vector2::new(self.x(), self.y())
    }

    /// Raw X component.
    #[must_use]
    pub const fn raw_x(self) -> i64 {
        self.raw_x
    }

    /// Raw Y component.
    #[must_use]
    pub const fn raw_y(self) -> i64 {
        self.raw_y
    }

    /// X component in units.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn x(self) -> f64 {
        self.raw_x as f64 / Self::SCALE as f64
    }

    /// Y component in units.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn y(self) -> f64 {
        self.raw_y as f64 / Self::SCALE as f64
    }

    /// Offsets the vector by raw units.
    #[must_use]
    pub const fn translate_raw(self, dx: i64, dy: i64) -> Self {
        Self {
            raw_x: self.raw_x + dx,
            raw_y: self.raw_y + dy,
        }
    }

    /// Multiplies both components by an integer factor.
    #[must_use]
    pub const fn scale(self, factor: i64) -> Self {
        Self {
            raw_x: self.raw_x * factor,
            raw_y: self.raw_y * factor,
        }
    }
}

impl Add for FixedVector2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            raw_x: self.raw_x + rhs.raw_x,
            raw_y: self.raw_y + rhs.raw_y,
        }
    }
}

impl AddAssign for FixedVector2 {
    fn add_assign(&mut self, rhs: Self) {
        self.raw_x += rhs.raw_x;
        self.raw_y += rhs.raw_y;
    }
}

impl Sub for FixedVector2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            raw_x: self.raw_x - rhs.raw_x,
            raw_y: self.raw_y - rhs.raw_y,
        }
    }
}

impl SubAssign for FixedVector2 {
    fn sub_assign(&mut self, rhs: Self) {
        self.raw_x -= rhs.raw_x;
        self.raw_y -= rhs.raw_y;
    }
}

impl Neg for FixedVector2 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            raw_x: -self.raw_x,
            raw_y: -self.raw_y,
        }
    }
}
