//! Deterministic 2D geometry predicates and polygon algorithms.
//!
//! Every routine is a pure function of its inputs and the constants in
//! [`math`]; nothing here holds state between calls.

pub mod error;
pub mod math;

pub use error::{GeometryError, OperationError, PolyformError, Result};
pub use math::{Point2, Point3, Vector2, Vector3};
