//! End-to-end scenarios composing the predicate and polygon layers.

#![allow(clippy::unwrap_used)]

use approx::assert_relative_eq;
use polyform::math::distance_2d::{closest_point_on_segment, min_distance_between_segments};
use polyform::math::intersect_2d::{fast_intersection_test, point_on_segment, segment_intersection};
use polyform::math::polygon_2d::{
    area, centroid, is_convex, point_in_polygon, shapes_intersect, simplify, split_shape,
};
use polyform::{OperationError, Point2, PolyformError};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn p(x: f64, y: f64) -> Point2 {
    Point2::new(x, y)
}

fn unit_square() -> Vec<Point2> {
    vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)]
}

#[test]
fn unit_square_scenario() {
    init_tracing();
    let sq = unit_square();
    assert!((area(&sq).unwrap() - 1.0).abs() < f64::EPSILON);
    assert_relative_eq!(centroid(&sq), p(0.5, 0.5), epsilon = 1e-12);
    assert!(point_in_polygon(&p(0.5, 0.5), &sq).unwrap());
    assert!(!point_in_polygon(&p(2.0, 2.0), &sq).unwrap());
    assert!(is_convex(&sq).unwrap());
}

#[test]
fn degenerate_segment_scenario() {
    init_tracing();
    let a = p(0.0, 0.0);
    let b = p(0.0, 0.0);
    let q = p(1.0, 1.0);
    assert!(!point_on_segment(&q, &a, &b));
    assert_eq!(closest_point_on_segment(&q, &a, &b), a);
}

#[test]
fn crossing_segments_scenario() {
    init_tracing();
    let (a1, a2, b1, b2) = (p(0.0, 0.0), p(2.0, 2.0), p(0.0, 2.0), p(2.0, 0.0));
    let hit = segment_intersection(&a1, &a2, &b1, &b2).unwrap();
    assert_relative_eq!(hit, p(1.0, 1.0), epsilon = 1e-12);
    assert!(fast_intersection_test(&a1, &a2, &b1, &b2));
    assert!(min_distance_between_segments(&a1, &a2, &b1, &b2).distance.abs() < f64::EPSILON);
}

#[test]
fn malformed_polygons_fail_fast() {
    init_tracing();
    let line = [p(0.0, 0.0), p(1.0, 1.0)];
    for result in [
        area(&line).map(|_| ()),
        point_in_polygon(&p(0.0, 0.0), &line).map(|_| ()),
        is_convex(&line).map(|_| ()),
        shapes_intersect(&line, &unit_square()).map(|_| ()),
    ] {
        assert!(matches!(
            result,
            Err(PolyformError::Operation(OperationError::TooFewVertices { found: 2, .. }))
        ));
    }
}

#[test]
fn simplified_outline_stays_consistent() {
    init_tracing();
    // A square traced with midpoints and a repeated corner.
    let noisy = vec![
        p(0.0, 0.0),
        p(2.0, 0.0),
        p(4.0, 0.0),
        p(4.0, 0.0),
        p(4.0, 4.0),
        p(2.0, 4.0),
        p(0.0, 4.0),
        p(0.0, 2.0),
    ];
    let clean = simplify(&noisy, 1e-6);
    assert_eq!(clean.len(), 4);
    assert!((area(&clean).unwrap() - area(&noisy).unwrap()).abs() < 1e-12);
    let c = centroid(&clean);
    assert!(point_in_polygon(&c, &clean).unwrap());
    assert!(point_in_polygon(&c, &noisy).unwrap());
    assert!(is_convex(&clean).unwrap());
}

#[test]
fn subdivided_outline_keeps_area() {
    init_tracing();
    let sq = vec![p(0.0, 0.0), p(3.0, 0.0), p(3.0, 3.0), p(0.0, 3.0)];
    let dense = split_shape(&sq, 1.0).unwrap();
    assert_eq!(dense.len(), 12);
    assert!((area(&dense).unwrap() - 9.0).abs() < 1e-9);
    assert_eq!(simplify(&dense, 1e-6).len(), 4);
}
