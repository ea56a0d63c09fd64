use super::edges;
use crate::error::{GeometryError, Result};
use crate::math::Point2;

/// Most pieces a single edge may be split into by [`split_shape`].
pub const MAX_EDGE_PIECES: usize = 1 << 20;

/// Subdivides every edge into equal pieces no shorter than
/// `minimum_edge_length`.
///
/// Each edge of length `L` becomes `max(1, floor(L / minimum_edge_length))`
/// pieces. The end point of every piece is emitted in edge order, so the
/// output ends with the first vertex (the end of the closing edge) and
/// every input vertex survives.
///
/// # Errors
///
/// Returns `GeometryError::ParameterOutOfRange` if `minimum_edge_length` is
/// not a positive finite number, or if it is so small that some edge would
/// need more than [`MAX_EDGE_PIECES`] pieces.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn split_shape(points: &[Point2], minimum_edge_length: f64) -> Result<Vec<Point2>> {
    if !(minimum_edge_length.is_finite() && minimum_edge_length > 0.0) {
        tracing::debug!(minimum_edge_length, "rejecting edge length");
        return Err(GeometryError::ParameterOutOfRange {
            parameter: "minimum_edge_length",
            value: minimum_edge_length,
            min: 0.0,
            max: f64::INFINITY,
        }
        .into());
    }

    let mut out = Vec::with_capacity(points.len());
    for (a, b) in edges(points) {
        let edge = b - a;
        let length = edge.norm();
        let pieces = (length / minimum_edge_length).floor().max(1.0);
        if pieces > MAX_EDGE_PIECES as f64 {
            tracing::debug!(length, minimum_edge_length, "edge needs too many pieces");
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "minimum_edge_length",
                value: minimum_edge_length,
                min: length / MAX_EDGE_PIECES as f64,
                max: f64::INFINITY,
            }
            .into());
        }
        let count = pieces as usize;
        for j in 1..count {
            out.push(a + edge * (j as f64 / pieces));
        }
        out.push(*b);
    }

    tracing::trace!(before = points.len(), after = out.len(), "split polygon edges");
    Ok(out)
}
