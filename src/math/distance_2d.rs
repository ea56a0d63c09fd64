use super::intersect_2d::segment_intersection;
use super::Point2;

/// Closest point to `p` on the infinite line through `a` and `b`.
///
/// Uses the scalar projection `t = (p - a)·(b - a) / |b - a|²`; when `a == b`
/// the result is NaN.
#[must_use]
pub fn closest_point_on_line(p: &Point2, a: &Point2, b: &Point2) -> Point2 {
    let ab = b - a;
    let t = (p - a).dot(&ab) / ab.norm_squared();
    a + ab * t
}

/// Closest point to `p` on the segment `a → b`.
///
/// When the projection falls outside the segment, the endpoint with the
/// smaller squared distance to `p` wins, ties going to `a`. A zero-length
/// segment therefore yields `a`.
#[must_use]
pub fn closest_point_on_segment(p: &Point2, a: &Point2, b: &Point2) -> Point2 {
    let ab = b - a;
    let t = (p - a).dot(&ab) / ab.norm_squared();
    if (0.0..=1.0).contains(&t) {
        return a + ab * t;
    }
    if (p - a).norm_squared() <= (p - b).norm_squared() {
        *a
    } else {
        *b
    }
}

/// Distance from `p` to the segment `a → b`.
#[must_use]
pub fn point_to_segment_distance(p: &Point2, a: &Point2, b: &Point2) -> f64 {
    (p - closest_point_on_segment(p, a, b)).norm()
}

/// Distance from `p` to the infinite line through `a` and `b`.
#[must_use]
pub fn point_to_line_distance(p: &Point2, a: &Point2, b: &Point2) -> f64 {
    (p - closest_point_on_line(p, a, b)).norm()
}

/// Result of [`min_distance_between_segments`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentDistance {
    /// Minimum distance between the two segments.
    pub distance: f64,
    /// Point on the first segment realising the distance.
    pub closest_on_a: Point2,
    /// Point on the second segment realising the distance.
    pub closest_on_b: Point2,
}

/// Minimum distance between segments `p1 → p2` and `p3 → p4`.
///
/// Crossing segments report distance `0` with the intersection point on both
/// sides. Otherwise the four endpoint-to-segment distances are compared and
/// the first smallest one wins.
#[must_use]
pub fn min_distance_between_segments(
    p1: &Point2,
    p2: &Point2,
    p3: &Point2,
    p4: &Point2,
) -> SegmentDistance {
    if let Some(hit) = segment_intersection(p1, p2, p3, p4) {
        return SegmentDistance {
            distance: 0.0,
            closest_on_a: hit,
            closest_on_b: hit,
        };
    }

    let candidates = [
        (*p1, closest_point_on_segment(p1, p3, p4)),
        (*p2, closest_point_on_segment(p2, p3, p4)),
        (closest_point_on_segment(p3, p1, p2), *p3),
        (closest_point_on_segment(p4, p1, p2), *p4),
    ];

    let mut best = SegmentDistance {
        distance: f64::INFINITY,
        closest_on_a: *p1,
        closest_on_b: *p3,
    };
    for (on_a, on_b) in candidates {
        let distance = (on_b - on_a).norm();
        if distance < best.distance {
            best = SegmentDistance {
                distance,
                closest_on_a: on_a,
                closest_on_b: on_b,
            };
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    // ── closest point ──

    #[test]
    fn line_projection_beyond_segment() {
        let c = closest_point_on_line(&p(5.0, 1.0), &p(0.0, 0.0), &p(2.0, 0.0));
        assert_relative_eq!(c, p(5.0, 0.0));
    }

    #[test]
    fn line_projection_degenerate_is_nan() {
        let c = closest_point_on_line(&p(1.0, 1.0), &p(0.0, 0.0), &p(0.0, 0.0));
        assert!(c.x.is_nan() && c.y.is_nan());
    }

    #[test]
    fn segment_perpendicular_projection() {
        let c = closest_point_on_segment(&p(1.0, 1.0), &p(0.0, 0.0), &p(2.0, 0.0));
        assert_relative_eq!(c, p(1.0, 0.0));
        let d = point_to_segment_distance(&p(1.0, 1.0), &p(0.0, 0.0), &p(2.0, 0.0));
        assert!((d - 1.0).abs() < TOLERANCE, "d={d}");
    }

    #[test]
    fn segment_endpoint_closest() {
        let (a, b) = (p(0.0, 0.0), p(2.0, 0.0));
        assert_eq!(closest_point_on_segment(&p(-1.0, 0.0), &a, &b), a);
        assert_eq!(closest_point_on_segment(&p(3.0, 5.0), &a, &b), b);
    }

    #[test]
    fn segment_degenerate_returns_start() {
        let c = closest_point_on_segment(&p(1.0, 1.0), &p(0.0, 0.0), &p(0.0, 0.0));
        assert_eq!(c, p(0.0, 0.0));
        let d = point_to_segment_distance(&p(3.0, 4.0), &p(0.0, 0.0), &p(0.0, 0.0));
        assert!((d - 5.0).abs() < TOLERANCE, "d={d}");
    }

    #[test]
    fn line_distance() {
        let d = point_to_line_distance(&p(7.0, -3.0), &p(0.0, 0.0), &p(1.0, 0.0));
        assert!((d - 3.0).abs() < TOLERANCE, "d={d}");
    }

    // ── segment to segment ──

    #[test]
    fn crossing_segments_distance_zero() {
        let r =
            min_distance_between_segments(&p(0.0, 0.0), &p(2.0, 2.0), &p(0.0, 2.0), &p(2.0, 0.0));
        assert!(r.distance.abs() < TOLERANCE);
        assert_relative_eq!(r.closest_on_a, p(1.0, 1.0), epsilon = TOLERANCE);
        assert_relative_eq!(r.closest_on_b, p(1.0, 1.0), epsilon = TOLERANCE);
    }

    #[test]
    fn parallel_segments() {
        let r =
            min_distance_between_segments(&p(0.0, 0.0), &p(2.0, 0.0), &p(1.0, 3.0), &p(5.0, 3.0));
        assert!((r.distance - 3.0).abs() < TOLERANCE, "d={}", r.distance);
        // p2 and p3 both reach 3; the earlier candidate (p2) is kept.
        assert_relative_eq!(r.closest_on_a, p(2.0, 0.0));
        assert_relative_eq!(r.closest_on_b, p(2.0, 3.0));
    }

    #[test]
    fn t_configuration_uses_endpoint() {
        let r =
            min_distance_between_segments(&p(0.0, 0.0), &p(4.0, 0.0), &p(2.0, 1.0), &p(2.0, 5.0));
        assert!((r.distance - 1.0).abs() < TOLERANCE);
        assert_relative_eq!(r.closest_on_a, p(2.0, 0.0));
        assert_relative_eq!(r.closest_on_b, p(2.0, 1.0));
    }
}
