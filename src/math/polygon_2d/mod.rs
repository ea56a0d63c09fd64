//! Algorithms over implicitly closed polygons given as vertex slices.
//!
//! Edge `i` connects vertex `i` to vertex `(i + 1) % n`. No winding order is
//! assumed.
//!
//! Operations that need a real polygon (area, containment, convexity)
//! reject fewer than three vertices with
//! [`OperationError::TooFewVertices`]. The rest are total.

mod containment;
mod measure;
mod ordering;
mod simplify;
mod subdivide;

pub use containment::{
    is_convex, point_in_polygon, point_in_triangle, shape_self_intersects, shapes_intersect,
};
pub use measure::{area, area_with_holes, bounds, centroid, signed_area, vertex_average};
pub use ordering::{nearest_point_indices, order_points_by_angle};
pub use simplify::{simplify, simplify_with, SimplifyParams};
pub use subdivide::{split_shape, MAX_EDGE_PIECES};

use super::Point2;
use crate::error::{OperationError, Result};

/// Iterates the edges `(v[i], v[(i + 1) % n])` of a closed polygon.
pub(crate) fn edges(points: &[Point2]) -> impl Iterator<Item = (&Point2, &Point2)> + '_ {
    points.iter().zip(points.iter().cycle().skip(1))
}

/// Fails with [`OperationError::TooFewVertices`] if `points` has fewer than
/// three vertices.
pub(crate) fn require_polygon(points: &[Point2], operation: &'static str) -> Result<()> {
    if points.len() < 3 {
        tracing::debug!(operation, found = points.len(), "rejecting degenerate polygon");
        return Err(OperationError::TooFewVertices {
            operation,
            required: 3,
            found: points.len(),
        }
        .into());
    }
    Ok(())
}
