use super::{edges, require_polygon};
use crate::error::Result;
use crate::math::bounds_2d::Aabb2;
use crate::math::{Point2, Vector2, CENTROID_AREA_EPSILON};

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise, zero for fewer
/// than three vertices.
#[must_use]
pub fn signed_area(points: &[Point2]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    edges(points)
        .map(|(a, b)| a.x * b.y - b.x * a.y)
        .sum::<f64>()
        * 0.5
}

/// Unsigned area of a polygon.
///
/// # Errors
///
/// Returns `OperationError::TooFewVertices` for fewer than three vertices.
pub fn area(points: &[Point2]) -> Result<f64> {
    require_polygon(points, "area")?;
    Ok(signed_area(points).abs())
}

/// Area of `outer` minus the area of each hole.
///
/// Holes are subtracted once each; nesting and containment are not checked.
///
/// # Errors
///
/// Returns `OperationError::TooFewVertices` if the outline or any hole has
/// fewer than three vertices.
pub fn area_with_holes<H: AsRef<[Point2]>>(outer: &[Point2], holes: &[H]) -> Result<f64> {
    let mut total = area(outer)?;
    for hole in holes {
        total -= area(hole.as_ref())?;
    }
    Ok(total)
}

/// Area-weighted centroid of a polygon.
///
/// Returns the origin when the signed area is within
/// [`CENTROID_AREA_EPSILON`] of zero, including for fewer than three
/// vertices.
#[must_use]
pub fn centroid(points: &[Point2]) -> Point2 {
    let mut doubled_area = 0.0;
    let mut cx = 0.0;
    let mut cy = 0.0;
    for (a, b) in edges(points) {
        let w = a.x * b.y - b.x * a.y;
        doubled_area += w;
        cx += (a.x + b.x) * w;
        cy += (a.y + b.y) * w;
    }

    let signed = doubled_area * 0.5;
    if signed.abs() < CENTROID_AREA_EPSILON {
        return Point2::origin();
    }
    let k = 1.0 / (6.0 * signed);
    Point2::new(cx * k, cy * k)
}

/// Plain average of the vertices, or `None` for an empty slice.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn vertex_average(points: &[Point2]) -> Option<Point2> {
    if points.is_empty() {
        return None;
    }
    let sum = points.iter().fold(Vector2::zeros(), |acc, p| acc + p.coords);
    Some(Point2::from(sum / points.len() as f64))
}

/// Axis-aligned bounds of the vertices, or `None` for an empty slice.
#[must_use]
pub fn bounds(points: &[Point2]) -> Option<Aabb2> {
    Aabb2::from_points(points)
}
