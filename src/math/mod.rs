pub mod angle;
pub mod arc_2d;
pub mod bounds_2d;
pub mod distance_2d;
pub mod fixed_2d;
pub mod intersect_2d;
pub mod intersect_3d;
pub mod polygon_2d;
pub mod scalar;
pub mod vector_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Tolerance below which a floating quantity is treated as zero.
///
/// Used by parallelism, intersection determinants, on-segment and
/// collinearity tests, convexity turns and nearest-point self-exclusion.
pub const NEAR_ZERO: f64 = 1e-6;

/// Global tolerance for approximate equality comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Accumulated signed area below which a polygon has no centroid.
pub const CENTROID_AREA_EPSILON: f64 = 1e-7;

/// Degrees to radians.
pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// Radians to degrees.
pub const RAD_TO_DEG: f64 = 180.0 / std::f64::consts::PI;
