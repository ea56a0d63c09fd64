//! Closed-form circle formulas. Central angles are in degrees.

use std::f64::consts::PI;

use super::{DEG_TO_RAD, RAD_TO_DEG};

/// Circumference of a circle of `radius`.
#[must_use]
pub fn circumference(radius: f64) -> f64 {
    2.0 * PI * radius
}

/// Length of the arc subtending `angle` degrees.
#[must_use]
pub fn arc_length(radius: f64, angle: f64) -> f64 {
    radius * angle * DEG_TO_RAD
}

/// Central angle in degrees of an arc of `length`; inverse of [`arc_length`].
#[must_use]
pub fn arc_angle(radius: f64, length: f64) -> f64 {
    length / radius * RAD_TO_DEG
}

/// Length of the chord subtending `angle` degrees.
#[must_use]
pub fn chord_length(radius: f64, angle: f64) -> f64 {
    2.0 * radius * (angle * DEG_TO_RAD * 0.5).sin()
}

/// Height (sagitta) of the circular segment cut by a chord subtending
/// `angle` degrees.
#[must_use]
pub fn segment_height(radius: f64, angle: f64) -> f64 {
    radius * (1.0 - (angle * DEG_TO_RAD * 0.5).cos())
}

/// Area of the circular segment cut by a chord subtending `angle` degrees.
#[must_use]
pub fn segment_area(radius: f64, angle: f64) -> f64 {
    let theta = angle * DEG_TO_RAD;
    radius * radius * 0.5 * (theta - theta.sin())
}

/// Radius of the circle through a chord of `chord` length with sagitta
/// `height`.
#[must_use]
pub fn radius_from_chord(chord: f64, height: f64) -> f64 {
    height * 0.5 + chord * chord / (8.0 * height)
}
