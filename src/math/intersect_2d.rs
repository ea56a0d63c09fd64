use super::vector_2d::{cross, perp};
use super::{Point2, Vector2, NEAR_ZERO, TOLERANCE};
use crate::error::{GeometryError, Result};

/// How far a pair of endpoints extends when intersected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extent {
    /// The infinite line through both endpoints.
    Line,
    /// Only the bounded piece between the endpoints.
    Segment,
}

/// Whether two directions are parallel (cross product below [`NEAR_ZERO`]).
#[must_use]
pub fn parallel(dir_a: &Vector2, dir_b: &Vector2) -> bool {
    cross(dir_a, dir_b).abs() < NEAR_ZERO
}

/// Linear interpolation: `origin + dir * t`.
#[must_use]
pub fn point_at(origin: &Point2, dir: &Vector2, t: f64) -> Point2 {
    origin + dir * t
}

/// Parametric intersection of `a1 → a2` with `b1 → b2`.
///
/// Returns `(t, u)` such that `a1 + t * (a2 - a1) == b1 + u * (b2 - b1)`, or
/// `None` when the determinant is within [`NEAR_ZERO`] of zero (parallel or
/// coincident).
#[must_use]
pub fn intersection_params(
    a1: &Point2,
    a2: &Point2,
    b1: &Point2,
    b2: &Point2,
) -> Option<(f64, f64)> {
    let r = a2 - a1;
    let s = b2 - b1;
    let denom = cross(&r, &s);
    if denom.abs() < NEAR_ZERO {
        return None;
    }
    let q = b1 - a1;
    let t = cross(&q, &s) / denom;
    let u = cross(&q, &r) / denom;
    Some((t, u))
}

/// Intersection point of `a1 → a2` with `b1 → b2`.
///
/// With [`Extent::Segment`] both parameters must lie in `[0, 1]`, so touching
/// endpoints count. With [`Extent::Line`] the point may lie anywhere on the
/// two infinite lines.
#[must_use]
pub fn intersection(
    a1: &Point2,
    a2: &Point2,
    b1: &Point2,
    b2: &Point2,
    extent: Extent,
) -> Option<Point2> {
    let (t, u) = intersection_params(a1, a2, b1, b2)?;
    let bounded = (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u);
    if extent == Extent::Segment && !bounded {
        return None;
    }
    Some(point_at(a1, &(a2 - a1), t))
}

/// Intersection of the infinite lines through `a1, a2` and `b1, b2`.
#[must_use]
pub fn line_intersection(a1: &Point2, a2: &Point2, b1: &Point2, b2: &Point2) -> Option<Point2> {
    intersection(a1, a2, b1, b2, Extent::Line)
}

/// Intersection of the bounded segments `a1 → a2` and `b1 → b2`.
#[must_use]
pub fn segment_intersection(
    a1: &Point2,
    a2: &Point2,
    b1: &Point2,
    b2: &Point2,
) -> Option<Point2> {
    intersection(a1, a2, b1, b2, Extent::Segment)
}

fn ccw(a: &Point2, b: &Point2, c: &Point2) -> bool {
    (c.y - a.y) * (b.x - a.x) > (b.y - a.y) * (c.x - a.x)
}

/// Orientation-only segment crossing test.
///
/// Cheaper than [`segment_intersection`] but endpoint-exclusive: segments
/// sharing an endpoint (exact coordinate equality) never intersect here.
#[must_use]
pub fn fast_intersection_test(a1: &Point2, a2: &Point2, b1: &Point2, b2: &Point2) -> bool {
    if a1 == b1 || a1 == b2 || a2 == b1 || a2 == b2 {
        return false;
    }
    ccw(a1, b1, b2) != ccw(a2, b1, b2) && ccw(a1, a2, b1) != ccw(a1, a2, b2)
}

/// Whether `p` lies on the segment `a → b`.
///
/// `p` must be collinear with the segment (cross product below
/// [`NEAR_ZERO`]) and project within it. A zero-length segment contains
/// nothing.
#[must_use]
pub fn point_on_segment(p: &Point2, a: &Point2, b: &Point2) -> bool {
    let ab = b - a;
    let len_sq = ab.norm_squared();
    if len_sq < TOLERANCE {
        return false;
    }
    let ap = p - a;
    if cross(&ap, &ab).abs() >= NEAR_ZERO {
        return false;
    }
    (0.0..=len_sq).contains(&ap.dot(&ab))
}

/// Whether `a`, `b` and `c` are collinear.
///
/// The determinant of `(a - c, b - c)` must lie in `(-NEAR_ZERO, epsilon)`.
/// The bounds are asymmetric: `epsilon` only widens the
/// positive side.
#[must_use]
pub fn collinear(a: &Point2, b: &Point2, c: &Point2, epsilon: f64) -> bool {
    let det = (a.x - c.x) * (b.y - c.y) - (a.y - c.y) * (b.x - c.x);
    -NEAR_ZERO < det && det < epsilon
}

/// Unit direction bisecting the angle at `vertex` between its arms toward
/// `prev` and `next`.
///
/// Computed as the normalized sum of the two unit arm directions. When the
/// arms are opposite (a straight angle) the sum vanishes and the left normal
/// of the incoming direction `prev → vertex` is returned instead.
///
/// # Errors
///
/// Returns `GeometryError::ZeroVector` if either arm has zero length.
pub fn angular_bisector(prev: &Point2, vertex: &Point2, next: &Point2) -> Result<Vector2> {
    let to_prev = prev - vertex;
    let to_next = next - vertex;
    let len_prev = to_prev.norm();
    let len_next = to_next.norm();
    if len_prev < TOLERANCE || len_next < TOLERANCE {
        return Err(GeometryError::ZeroVector.into());
    }

    let sum = to_prev / len_prev + to_next / len_next;
    let sum_len = sum.norm();
    if sum_len < NEAR_ZERO {
        return Ok(perp(&(-to_prev / len_prev)));
    }
    Ok(sum / sum_len)
}
