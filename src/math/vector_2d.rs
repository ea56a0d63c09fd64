use super::{Point2, Point3, Vector2, Vector3, DEG_TO_RAD, TOLERANCE};
use crate::error::{GeometryError, Result};

/// Z component of the 3D cross product of `a` and `b` lifted to the XY plane.
///
/// Positive when `b` turns counter-clockwise from `a`.
#[must_use]
pub fn cross(a: &Vector2, b: &Vector2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Returns the left-pointing normal of `v` (`v` rotated by +90°).
#[must_use]
pub fn perp(v: &Vector2) -> Vector2 {
    Vector2::new(-v.y, v.x)
}

/// Rotates `v` counter-clockwise by `degrees`.
#[must_use]
pub fn rotate(v: &Vector2, degrees: f64) -> Vector2 {
    let (sin, cos) = (degrees * DEG_TO_RAD).sin_cos();
    Vector2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

/// Rotates `p` counter-clockwise by `degrees` around `pivot`.
#[must_use]
pub fn rotate_about(p: &Point2, pivot: &Point2, degrees: f64) -> Point2 {
    *pivot + rotate(&(p - pivot), degrees)
}

/// Projects `v` onto the direction of `onto`.
///
/// Yields NaN components when `onto` is the zero vector.
#[must_use]
pub fn project(v: &Vector2, onto: &Vector2) -> Vector2 {
    *onto * (v.dot(onto) / onto.norm_squared())
}

/// Turn direction from `from` to `to`: `-1.0` counter-clockwise, `1.0`
/// clockwise or collinear.
///
/// This is the sign applied to unsigned angles: a positive cross product
/// yields a negative angle.
#[must_use]
pub fn turn_sign(from: &Vector2, to: &Vector2) -> f64 {
    if cross(from, to) > 0.0 {
        -1.0
    } else {
        1.0
    }
}

/// Unit normal of the triangle `a`, `b`, `c` (right-hand rule).
///
/// # Errors
///
/// Returns `GeometryError::ZeroVector` if the three points are collinear or
/// coincident.
pub fn normal_from_points(a: &Point3, b: &Point3, c: &Point3) -> Result<Vector3> {
    let n: Vector3 = (b - a).cross(&(c - a));
    let len = n.norm();
    if len < TOLERANCE {
        return Err(GeometryError::ZeroVector.into());
    }
    Ok(n / len)
}

/// Whether two points coincide within `tolerance` (squared distance).
#[must_use]
pub fn points_coincide(a: &Point2, b: &Point2, tolerance: f64) -> bool {
    (b - a).norm_squared() <= tolerance
}
