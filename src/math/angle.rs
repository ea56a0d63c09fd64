//! Angle helpers in degrees.
//!
//! Signed angles are measured from a reference direction (by default "up",
//! `+Y`) and are positive when the target lies clockwise of the reference.

use super::scalar::{clamp, clamp01, sign};
use super::vector_2d::{rotate, turn_sign};
use super::{Point2, Vector2, RAD_TO_DEG};

/// The reference direction for [`signed_angle_from_up`].
#[must_use]
pub fn up() -> Vector2 {
    Vector2::new(0.0, 1.0)
}

/// Reduces `angle` to `[0, 360)`.
#[must_use]
pub fn normalize_360(angle: f64) -> f64 {
    let mut r = angle % 360.0;
    if r < 0.0 {
        r += 360.0;
    }
    // A tiny negative remainder rounds up to exactly 360 after the shift.
    if r >= 360.0 {
        r -= 360.0;
    }
    r
}

/// Reduces `angle` to `(-180, 180]`.
#[must_use]
pub fn normalize_signed(angle: f64) -> f64 {
    let mut r = angle % 360.0;
    if r > 180.0 {
        r -= 360.0;
    } else if r <= -180.0 {
        r += 360.0;
    }
    r
}

/// Shortest signed rotation from `current` to `target`, in `(-180, 180]`.
#[must_use]
pub fn delta_angle(current: f64, target: f64) -> f64 {
    normalize_signed(target - current)
}

/// Unsigned angle between two directions, in `[0, 180]`.
///
/// The cosine is clamped to `[-1, 1]` before `acos`, so nearly parallel
/// directions never produce NaN from round-off. A zero-length direction still
/// yields NaN.
#[must_use]
pub fn unsigned_angle(from: &Vector2, to: &Vector2) -> f64 {
    let cos = from.dot(to) / (from.norm() * to.norm());
    clamp(cos, -1.0, 1.0).acos() * RAD_TO_DEG
}

/// Signed angle from `from` to `to`, in `[-180, 180]`.
///
/// The sign is taken from the Z component of `from × to`: a positive cross
/// product (counter-clockwise turn) gives a negative angle.
#[must_use]
pub fn signed_angle(from: &Vector2, to: &Vector2) -> f64 {
    unsigned_angle(from, to) * turn_sign(from, to)
}

/// Signed angle from "up" (`+Y`) to `direction`.
///
/// `(1, 0)` maps to `90`, `(-1, 0)` to `-90` and `(0, -1)` to `180`.
/// `direction` must not be the zero vector.
#[must_use]
pub fn signed_angle_from_up(direction: &Vector2) -> f64 {
    signed_angle(&up(), direction)
}

/// Unit direction whose [`signed_angle_from_up`] is `degrees`.
#[must_use]
pub fn direction_from_angle(degrees: f64) -> Vector2 {
    rotate(&up(), -degrees)
}

/// Unsigned angle at vertex `b` of the triangle `a`, `b`, `c`, in degrees.
#[must_use]
pub fn angle_between_vectors(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    unsigned_angle(&(a - b), &(c - b))
}

/// Interpolates from `a` to `b` along the shorter arc.
///
/// `t` is clamped to `[0, 1]`. The result is not normalized, so
/// `wrap_lerp(350.0, 10.0, 0.5)` is `360.0`.
#[must_use]
pub fn wrap_lerp(a: f64, b: f64, t: f64) -> f64 {
    a + delta_angle(a, b) * clamp01(t)
}

/// Steps `current` toward `target` by at most `max_delta` degrees along the
/// shorter arc, landing exactly on `target` once it is within reach.
#[must_use]
pub fn move_towards_angle(current: f64, target: f64, max_delta: f64) -> f64 {
    let delta = delta_angle(current, target);
    if delta.abs() <= max_delta {
        return target;
    }
    current + sign(delta) * max_delta
}

/// Indices of `points` ordered by ascending [`signed_angle_from_up`] of
/// `point - center`.
///
/// Selection order: ties keep their input order. Quadratic, intended for
/// polygon-sized inputs.
#[must_use]
pub fn sort_indices_by_angle(points: &[Point2], center: &Point2) -> Vec<usize> {
    let keys: Vec<f64> = points
        .iter()
        .map(|p| signed_angle_from_up(&(p - center)))
        .collect();

    let mut remaining: Vec<usize> = (0..points.len()).collect();
    let mut order = Vec::with_capacity(points.len());
    while !remaining.is_empty() {
        let mut best = 0;
        for pos in 1..remaining.len() {
            if keys[remaining[pos]] < keys[remaining[best]] {
                best = pos;
            }
        }
        order.push(remaining.remove(best));
    }
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn normalize_360_ranges() {
        assert_abs_diff_eq!(normalize_360(-30.0), 330.0);
        assert_abs_diff_eq!(normalize_360(720.0), 0.0);
        assert_abs_diff_eq!(normalize_360(405.0), 45.0);
        let tiny = normalize_360(-1e-20);
        assert!((0.0..360.0).contains(&tiny), "tiny={tiny}");
    }

    #[test]
    fn normalize_signed_ranges() {
        assert_abs_diff_eq!(normalize_signed(190.0), -170.0);
        assert_abs_diff_eq!(normalize_signed(-180.0), 180.0);
        assert_abs_diff_eq!(normalize_signed(180.0), 180.0);
        assert_abs_diff_eq!(normalize_signed(-190.0), 170.0);
        assert_abs_diff_eq!(normalize_signed(540.0), 180.0);
    }

    #[test]
    fn signed_angle_from_up_quadrants() {
        assert_abs_diff_eq!(signed_angle_from_up(&Vector2::new(0.0, 1.0)), 0.0);
        assert_abs_diff_eq!(
            signed_angle_from_up(&Vector2::new(1.0, 0.0)),
            90.0,
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            signed_angle_from_up(&Vector2::new(-1.0, 0.0)),
            -90.0,
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            signed_angle_from_up(&Vector2::new(0.0, -1.0)),
            180.0,
            epsilon = 1e-12
        );
        assert!(signed_angle_from_up(&Vector2::zeros()).is_nan());
    }

    #[test]
    fn direction_from_angle_inverts_signed_angle() {
        for deg in [-135.0, -45.0, 0.0, 30.0, 120.0] {
            let dir = direction_from_angle(deg);
            assert_abs_diff_eq!(signed_angle_from_up(&dir), deg, epsilon = 1e-9);
        }
    }

    #[test]
    fn angle_between_nearly_parallel_is_finite() {
        let a = Point2::new(1.0, 1e-17);
        let b = Point2::new(0.0, 0.0);
        let c = Point2::new(3.0, 0.0);
        let angle = angle_between_vectors(&a, &b, &c);
        assert!(angle.is_finite());
        assert_abs_diff_eq!(angle, 0.0, epsilon = 1e-6);
        let right = angle_between_vectors(&Point2::new(0.0, 2.0), &b, &c);
        assert_abs_diff_eq!(right, 90.0, epsilon = 1e-12);
    }

    #[test]
    fn wrap_lerp_crosses_zero() {
        let mid = wrap_lerp(350.0, 10.0, 0.5);
        assert_abs_diff_eq!(normalize_360(mid), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(wrap_lerp(350.0, 10.0, 2.0), 370.0, epsilon = 1e-9);
        assert_abs_diff_eq!(wrap_lerp(10.0, 350.0, 0.25), 5.0, epsilon = 1e-9);
    }

    #[test]
    fn move_towards_angle_snaps_and_steps() {
        assert_abs_diff_eq!(move_towards_angle(350.0, 10.0, 30.0), 10.0);
        assert_abs_diff_eq!(move_towards_angle(350.0, 10.0, 5.0), 355.0);
        assert_abs_diff_eq!(move_towards_angle(10.0, 350.0, 5.0), 5.0);
    }

    #[test]
    fn sort_indices_by_angle_clockwise_from_up() {
        let center = Point2::new(0.0, 0.0);
        let points = [
            Point2::new(0.0, -1.0), // 180
            Point2::new(1.0, 0.0),  // 90
            Point2::new(-1.0, 0.0), // -90
            Point2::new(0.0, 1.0),  // 0
        ];
        assert_eq!(sort_indices_by_angle(&points, &center), vec![2, 3, 1, 0]);
    }

    #[test]
    fn sort_indices_ties_keep_input_order() {
        let center = Point2::new(0.0, 0.0);
        let points = [
            Point2::new(2.0, 0.0),
            Point2::new(0.0, 1.0),
            Point2::new(1.0, 0.0),
        ];
        assert_eq!(sort_indices_by_angle(&points, &center), vec![1, 0, 2]);
    }
}
