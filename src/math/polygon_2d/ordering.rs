use super::bounds;
use crate::math::angle::sort_indices_by_angle;
use crate::math::{Point2, NEAR_ZERO};

/// Orders points by their signed angle from "up" around the center of their
/// bounding box.
///
/// Angles ascend from `-180` (exclusive) to `180`, so the result runs
/// clockwise starting just past straight down. Ties keep input order.
#[must_use]
pub fn order_points_by_angle(points: &[Point2]) -> Vec<Point2> {
    let Some(bounds) = bounds(points) else {
        return Vec::new();
    };
    sort_indices_by_angle(points, &bounds.center())
        .into_iter()
        .map(|i| points[i])
        .collect()
}

/// Indices of the `k` points nearest to `point`, closest first.
///
/// Points within [`NEAR_ZERO`] of `point` are treated as `point` itself and
/// skipped, so fewer than `k` indices may come back. Equal distances resolve
/// to the lower index.
#[must_use]
pub fn nearest_point_indices(point: &Point2, points: &[Point2], k: usize) -> Vec<usize> {
    let mut distances: Vec<f64> = points
        .iter()
        .map(|q| {
            let d = (q - point).norm_squared();
            if d < NEAR_ZERO * NEAR_ZERO {
                f64::INFINITY
            } else {
                d
            }
        })
        .collect();

    let mut picked = Vec::with_capacity(k.min(points.len()));
    for _ in 0..k {
        let mut best: Option<usize> = None;
        for (i, &d) in distances.iter().enumerate() {
            if d.is_finite() && best.is_none_or(|b| d < distances[b]) {
                best = Some(i);
            }
        }
        let Some(i) = best else {
            break;
        };
        picked.push(i);
        distances[i] = f64::INFINITY;
    }
    picked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn orders_square_corners() {
        let pts = vec![p(1.0, 1.0), p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0)];
        // Center (0.5, 0.5): (0,0) at -135, (0,1) at -45, (1,1) at 45, (1,0) at 135.
        assert_eq!(
            order_points_by_angle(&pts),
            vec![p(0.0, 0.0), p(0.0, 1.0), p(1.0, 1.0), p(1.0, 0.0)]
        );
        assert!(order_points_by_angle(&[]).is_empty());
    }

    #[test]
    fn nearest_excludes_self_and_ranks() {
        let pts = vec![p(0.0, 0.0), p(5.0, 0.0), p(1.0, 0.0), p(0.0, 2.0), p(3.0, 0.0)];
        assert_eq!(nearest_point_indices(&p(0.0, 0.0), &pts, 3), vec![2, 3, 4]);
    }

    #[test]
    fn nearest_returns_fewer_when_exhausted() {
        let pts = vec![p(0.0, 0.0), p(1.0, 0.0)];
        assert_eq!(nearest_point_indices(&p(0.0, 0.0), &pts, 5), vec![1]);
        assert!(nearest_point_indices(&p(0.0, 0.0), &[], 2).is_empty());
    }

    #[test]
    fn nearest_ties_prefer_lower_index() {
        let pts = vec![p(0.0, 1.0), p(1.0, 0.0), p(-1.0, 0.0)];
        assert_eq!(nearest_point_indices(&p(0.0, 0.0), &pts, 2), vec![0, 1]);
    }
}
