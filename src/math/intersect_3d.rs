use super::{Point3, Vector3, TOLERANCE};

/// A ray `origin + t * direction` for `t >= 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray3 {
    pub origin: Point3,
    pub direction: Vector3,
}

impl Ray3 {
    #[must_use]
    pub fn new(origin: Point3, direction: Vector3) -> Self {
        Self { origin, direction }
    }

    /// Point at parameter `t`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point3 {
        self.origin + self.direction * t
    }
}

/// Ray–triangle intersection (Möller–Trumbore).
///
/// Returns the ray parameter `t` of the hit, or `None` when the ray is
/// parallel to the triangle plane, misses it, or hits behind the origin.
/// Both faces are hit.
#[must_use]
pub fn ray_triangle_intersect(ray: &Ray3, v0: &Point3, v1: &Point3, v2: &Point3) -> Option<f64> {
    let e1 = v1 - v0;
    let e2 = v2 - v0;
    let pvec = ray.direction.cross(&e2);
    let det = e1.dot(&pvec);
    if det.abs() < TOLERANCE {
        return None;
    }
    let inv_det = 1.0 / det;

    let tvec = ray.origin - v0;
    let u = tvec.dot(&pvec) * inv_det;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let qvec = tvec.cross(&e1);
    let v = ray.direction.dot(&qvec) * inv_det;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = e2.dot(&qvec) * inv_det;
    (t >= 0.0).then_some(t)
}

/// Ray–quad intersection for a planar quad `v0, v1, v2, v3` given in
/// boundary order, tested as the triangles `v0 v1 v2` and `v0 v2 v3`.
#[must_use]
pub fn ray_quad_intersect(
    ray: &Ray3,
    v0: &Point3,
    v1: &Point3,
    v2: &Point3,
    v3: &Point3,
) -> Option<f64> {
    ray_triangle_intersect(ray, v0, v1, v2).or_else(|| ray_triangle_intersect(ray, v0, v2, v3))
}
