use super::vector_2d::rotate;
use super::{Point2, Vector2};
use crate::error::{GeometryError, Result};

/// An axis-aligned bounding box.
///
/// `min <= max` component-wise holds for every constructed box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb2 {
    min: Point2,
    max: Point2,
}

impl Aabb2 {
    /// Creates the box spanned by two opposite corners, in any order.
    #[must_use]
    pub fn new(a: Point2, b: Point2) -> Self {
        Self {
            min: Point2::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point2::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Creates a zero-size box at `p`.
    #[must_use]
    pub fn from_point(p: Point2) -> Self {
        Self { min: p, max: p }
    }

    /// Smallest box containing every point, or `None` for an empty slice.
    #[must_use]
    pub fn from_points(points: &[Point2]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bounds = Self::from_point(*first);
        for p in rest {
            bounds.encapsulate(p);
        }
        Some(bounds)
    }

    /// Grows the box to include `p`.
    pub fn encapsulate(&mut self, p: &Point2) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    /// Minimum corner.
    #[must_use]
    pub fn min(&self) -> Point2 {
        self.min
    }

    /// Maximum corner.
    #[must_use]
    pub fn max(&self) -> Point2 {
        self.max
    }

    /// Whether `p` lies inside or on the boundary.
    #[must_use]
    pub fn contains(&self, p: &Point2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Whether the two boxes share at least one point.
    #[must_use]
    pub fn overlaps(&self, other: &Aabb2) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
    }

    #[must_use]
    pub fn center(&self) -> Point2 {
        nalgebra::center(&self.min, &self.max)
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    #[must_use]
    pub fn size(&self) -> Vector2 {
        self.max - self.min
    }
}

/// An oriented bounding box: center, half extents and a counter-clockwise
/// rotation in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obb2 {
    center: Point2,
    half_extents: Vector2,
    rotation: f64,
}

impl Obb2 {
    /// Creates a new oriented box.
    ///
    /// # Errors
    ///
    /// Returns an error if either half extent is negative or NaN.
    pub fn new(center: Point2, half_extents: Vector2, rotation: f64) -> Result<Self> {
        let extents = [
            ("half_extents.x", half_extents.x),
            ("half_extents.y", half_extents.y),
        ];
        for (parameter, value) in extents {
            if value.is_nan() || value < 0.0 {
                return Err(GeometryError::ParameterOutOfRange {
                    parameter,
                    value,
                    min: 0.0,
                    max: f64::INFINITY,
                }
                .into());
            }
        }
        Ok(Self {
            center,
            half_extents,
            rotation,
        })
    }

    /// Creates an unrotated box covering `aabb`.
    #[must_use]
    pub fn from_aabb(aabb: &Aabb2) -> Self {
        Self {
            center: aabb.center(),
            half_extents: aabb.size() * 0.5,
            rotation: 0.0,
        }
    }

    #[must_use]
    pub fn center(&self) -> Point2 {
        self.center
    }

    #[must_use]
    pub fn half_extents(&self) -> Vector2 {
        self.half_extents
    }

    /// Rotation in degrees, counter-clockwise.
    #[must_use]
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.half_extents.x * 2.0
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.half_extents.y * 2.0
    }

    /// Local X and Y axes as unit vectors.
    #[must_use]
    pub fn axes(&self) -> [Vector2; 2] {
        [
            rotate(&Vector2::x(), self.rotation),
            rotate(&Vector2::y(), self.rotation),
        ]
    }

    /// Corners in counter-clockwise order, starting at local `(-x, -y)`.
    #[must_use]
    pub fn corners(&self) -> [Point2; 4] {
        let [ax, ay] = self.axes();
        let ex = ax * self.half_extents.x;
        let ey = ay * self.half_extents.y;
        [
            self.center - ex - ey,
            self.center + ex - ey,
            self.center + ex + ey,
            self.center - ex + ey,
        ]
    }

    /// Whether `p` lies inside or on the boundary.
    #[must_use]
    pub fn contains(&self, p: &Point2) -> bool {
        let local = rotate(&(p - self.center), -self.rotation);
        local.x.abs() <= self.half_extents.x && local.y.abs() <= self.half_extents.y
    }

    /// Separating-axis overlap test against another oriented box.
    #[must_use]
    pub fn overlaps(&self, other: &Obb2) -> bool {
        let mine = self.corners();
        let theirs = other.corners();
        self.axes()
            .iter()
            .chain(other.axes().iter())
            .all(|axis| {
                let (a_min, a_max) = project_onto(&mine, axis);
                let (b_min, b_max) = project_onto(&theirs, axis);
                a_min <= b_max && b_min <= a_max
            })
    }

    /// Axis-aligned box enclosing this one.
    #[must_use]
    pub fn to_aabb(&self) -> Aabb2 {
        let [first, rest @ ..] = self.corners();
        let mut bounds = Aabb2::from_point(first);
        for p in &rest {
            bounds.encapsulate(p);
        }
        bounds
    }
}

fn project_onto(corners: &[Point2; 4], axis: &Vector2) -> (f64, f64) {
    corners
        .iter()
        .map(|c| c.coords.dot(axis))
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), d| (lo.min(d), hi.max(d)))
}
