use crate::math::intersect_2d::collinear;
use crate::math::vector_2d::points_coincide;
use crate::math::{Point2, NEAR_ZERO, TOLERANCE};

/// Parameters controlling polygon simplification.
#[derive(Debug, Clone, Copy)]
pub struct SimplifyParams {
    /// Upper bound passed to [`collinear`] when testing a vertex against its
    /// neighbours.
    pub collinear_epsilon: f64,
    /// Squared distance below which consecutive vertices are duplicates.
    pub duplicate_tolerance: f64,
}

impl Default for SimplifyParams {
    fn default() -> Self {
        Self {
            collinear_epsilon: NEAR_ZERO,
            duplicate_tolerance: TOLERANCE,
        }
    }
}

/// Simplifies a polygon with the given collinearity `epsilon` and the
/// default duplicate tolerance. See [`simplify_with`].
#[must_use]
pub fn simplify(points: &[Point2], epsilon: f64) -> Vec<Point2> {
    simplify_with(
        points,
        &SimplifyParams {
            collinear_epsilon: epsilon,
            ..SimplifyParams::default()
        },
    )
}

/// Removes duplicate and collinear vertices from a closed polygon.
///
/// 1. Consecutive duplicates are dropped, including a last vertex repeating
///    the first.
/// 2. Interior vertices collinear with their neighbours are dropped.
/// 3. The closing vertices (last, and first) are checked across the wrap.
///
/// Surviving vertices keep their relative order.
#[must_use]
pub fn simplify_with(points: &[Point2], params: &SimplifyParams) -> Vec<Point2> {
    let eps = params.collinear_epsilon;

    let mut unique: Vec<Point2> = Vec::with_capacity(points.len());
    for p in points {
        if unique
            .last()
            .is_none_or(|q| !points_coincide(q, p, params.duplicate_tolerance))
        {
            unique.push(*p);
        }
    }
    while unique.len() > 1
        && points_coincide(&unique[0], &unique[unique.len() - 1], params.duplicate_tolerance)
    {
        unique.pop();
    }
    if unique.len() < 3 {
        return unique;
    }

    let n = unique.len();
    let mut kept: Vec<Point2> = Vec::with_capacity(n);
    kept.push(unique[0]);
    for i in 1..n - 1 {
        let prev = kept[kept.len() - 1];
        if !collinear(&prev, &unique[i], &unique[i + 1], eps) {
            kept.push(unique[i]);
        }
    }
    kept.push(unique[n - 1]);

    loop {
        let m = kept.len();
        if m < 3 {
            break;
        }
        if collinear(&kept[m - 2], &kept[m - 1], &kept[0], eps) {
            kept.pop();
        } else if collinear(&kept[m - 1], &kept[0], &kept[1], eps) {
            kept.remove(0);
        } else {
            break;
        }
    }

    tracing::trace!(before = points.len(), after = kept.len(), "simplified polygon");
    kept
}
