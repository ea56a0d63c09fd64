use super::{centroid, edges, require_polygon};
use crate::error::Result;
use crate::math::bounds_2d::Aabb2;
use crate::math::intersect_2d::fast_intersection_test;
use crate::math::vector_2d::cross;
use crate::math::{Point2, NEAR_ZERO};

/// Whether `p` lies strictly inside the triangle `p0, p1, p2`.
///
/// Works for either winding. Points on the boundary are outside.
#[must_use]
pub fn point_in_triangle(p: &Point2, p0: &Point2, p1: &Point2, p2: &Point2) -> bool {
    let mut s = p0.y * p2.x - p0.x * p2.y + (p2.y - p0.y) * p.x + (p0.x - p2.x) * p.y;
    let mut t = p0.x * p1.y - p0.y * p1.x + (p0.y - p1.y) * p.x + (p1.x - p0.x) * p.y;
    if (s < 0.0) != (t < 0.0) {
        return false;
    }

    let mut doubled_area =
        -p1.y * p2.x + p0.y * (p2.x - p1.x) + p0.x * (p1.y - p2.y) + p1.x * p2.y;
    if doubled_area < 0.0 {
        s = -s;
        t = -t;
        doubled_area = -doubled_area;
    }
    s > 0.0 && t > 0.0 && s + t < doubled_area
}

/// Ray-casting point-in-polygon test.
///
/// Points outside the polygon's bounds are rejected first. Otherwise a
/// horizontal ray from `p` past the right edge of the bounds is tested
/// against every edge with [`fast_intersection_test`]; an odd crossing count
/// means inside.
///
/// # Errors
///
/// Returns `OperationError::TooFewVertices` for fewer than three vertices.
pub fn point_in_polygon(p: &Point2, polygon: &[Point2]) -> Result<bool> {
    require_polygon(polygon, "point_in_polygon")?;
    let Some(bounds) = Aabb2::from_points(polygon) else {
        return Ok(false);
    };
    if !bounds.contains(p) {
        return Ok(false);
    }

    let ray_end = Point2::new(bounds.max().x + 1.0, p.y);
    let crossings = edges(polygon)
        .filter(|(a, b)| fast_intersection_test(p, &ray_end, a, b))
        .count();
    Ok(crossings % 2 == 1)
}

/// Whether every turn of the polygon has the same direction.
///
/// The walk starts at the vertex farthest from the centroid. Turns whose
/// cross product is within [`NEAR_ZERO`] (collinear or duplicate vertices)
/// carry no direction and are skipped; a polygon with no directed turn at
/// all is not convex.
///
/// # Errors
///
/// Returns `OperationError::TooFewVertices` for fewer than three vertices.
pub fn is_convex(points: &[Point2]) -> Result<bool> {
    require_polygon(points, "is_convex")?;
    let n = points.len();
    let center = centroid(points);

    let mut start = 0;
    let mut farthest = f64::NEG_INFINITY;
    for (i, p) in points.iter().enumerate() {
        let d = (p - center).norm_squared();
        if d > farthest {
            farthest = d;
            start = i;
        }
    }

    let mut orientation: Option<bool> = None;
    for i in 0..n {
        let a = &points[(start + i) % n];
        let b = &points[(start + i + 1) % n];
        let c = &points[(start + i + 2) % n];
        let turn = cross(&(b - a), &(c - b));
        if turn.abs() < NEAR_ZERO {
            continue;
        }
        let left = turn > 0.0;
        match orientation {
            None => orientation = Some(left),
            Some(o) if o != left => return Ok(false),
            Some(_) => {}
        }
    }
    Ok(orientation.is_some())
}

/// Whether any two non-adjacent edges of the polygon cross.
///
/// Uses [`fast_intersection_test`], so edges meeting at a shared vertex are
/// never reported. Polygons with fewer than four vertices cannot
/// self-intersect.
#[must_use]
pub fn shape_self_intersects(points: &[Point2]) -> bool {
    let n = points.len();
    if n < 4 {
        return false;
    }
    for i in 0..n {
        let a1 = &points[i];
        let a2 = &points[(i + 1) % n];
        for j in (i + 2)..n {
            if i == 0 && j == n - 1 {
                continue;
            }
            if fast_intersection_test(a1, a2, &points[j], &points[(j + 1) % n]) {
                return true;
            }
        }
    }
    false
}

/// Whether two simple polygons overlap.
///
/// True when any pair of edges crosses, or when either polygon lies inside the
/// other (tested with its first vertex). Both polygons must be simple.
///
/// # Errors
///
/// Returns `OperationError::TooFewVertices` if either polygon has fewer than
/// three vertices.
pub fn shapes_intersect(a: &[Point2], b: &[Point2]) -> Result<bool> {
    require_polygon(a, "shapes_intersect")?;
    require_polygon(b, "shapes_intersect")?;

    for (a1, a2) in edges(a) {
        if edges(b).any(|(b1, b2)| fast_intersection_test(a1, a2, b1, b2)) {
            return Ok(true);
        }
    }
    Ok(point_in_polygon(&a[0], b)? || point_in_polygon(&b[0], a)?)
}
