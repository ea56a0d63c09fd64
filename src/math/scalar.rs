//! Scalar helpers shared by every predicate in the crate.

use super::{NEAR_ZERO, TOLERANCE};

/// Clamps `value` to `[min, max]`.
///
/// Unlike [`f64::clamp`] this never panics when `min > max`; `min` wins.
#[must_use]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Clamps `value` to `[0, 1]`.
#[must_use]
pub fn clamp01(value: f64) -> f64 {
    clamp(value, 0.0, 1.0)
}

/// Linear interpolation from `a` to `b` with `t` clamped to `[0, 1]`.
#[must_use]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * clamp01(t)
}

/// Returns the `t` in `[0, 1]` such that `lerp(a, b, t) == value`.
///
/// Returns `0.0` when `a` and `b` coincide.
#[must_use]
pub fn inverse_lerp(a: f64, b: f64, value: f64) -> f64 {
    if (b - a).abs() < TOLERANCE {
        return 0.0;
    }
    clamp01((value - a) / (b - a))
}

/// Sign of `value`: `1.0` for zero and positive values, `-1.0` otherwise.
#[must_use]
pub fn sign(value: f64) -> f64 {
    if value >= 0.0 {
        1.0
    } else {
        -1.0
    }
}

/// Wraps `t` into `[0, length)`.
#[must_use]
pub fn repeat(t: f64, length: f64) -> f64 {
    clamp(t - (t / length).floor() * length, 0.0, length)
}

/// Moves `current` toward `target` by at most `max_delta`.
#[must_use]
pub fn move_towards(current: f64, target: f64, max_delta: f64) -> f64 {
    if (target - current).abs() <= max_delta {
        return target;
    }
    current + sign(target - current) * max_delta
}

/// Approximate equality scaled by the magnitude of the operands.
#[must_use]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= TOLERANCE * a.abs().max(b.abs()).max(1.0)
}

/// Whether `value` is within [`NEAR_ZERO`] of zero.
#[must_use]
pub fn is_near_zero(value: f64) -> bool {
    value.abs() < NEAR_ZERO
}
