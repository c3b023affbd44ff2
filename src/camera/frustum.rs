//! View frustum for culling
//!
//! Extracts frustum planes from the combined (projection · view) matrix and
//! provides intersection tests for points and spheres.

use glam::{DMat4, DVec3, DVec4};

/// A plane in 3D space, represented as (normal.x, normal.y, normal.z, distance)
/// where the plane equation is: ax + by + cz + d = 0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Unit normal pointing into the positive half-space.
    pub normal: DVec3,
    /// Signed distance from origin (`n · p + d = 0`).
    pub distance: f64,
}

impl Plane {
    /// Create a plane from coefficients and normalize it
    #[must_use]
    pub fn from_coefficients(coefficients: DVec4) -> Self {
        let normal = coefficients.truncate();
        let len = normal.length();
        if len > 0.0 {
            Self {
                normal: normal / len,
                distance: coefficients.w / len,
            }
        } else {
            Self {
                normal: DVec3::ZERO,
                distance: 0.0,
            }
        }
    }

    /// Signed distance from point to plane (positive = in front, negative =
    /// behind)
    #[inline]
    #[must_use]
    pub fn distance_to_point(&self, point: DVec3) -> f64 {
        self.normal.dot(point) + self.distance
    }
}

/// View frustum consisting of 6 planes
#[derive(Debug, Clone, PartialEq)]
pub struct Frustum {
    /// Six clipping planes: left, right, bottom, top, near, far.
    pub planes: [Plane; 6],
}

impl Default for Frustum {
    fn default() -> Self {
        Self::from_combined(DMat4::IDENTITY)
    }
}

impl Frustum {
    /// Extract frustum planes from a combined matrix.
    /// Uses the Gribb/Hartmann method for plane extraction.
    /// Planes point inward (positive half-space is inside the frustum).
    #[must_use]
    pub fn from_combined(m: DMat4) -> Self {
        let row0 = m.row(0);
        let row1 = m.row(1);
        let row2 = m.row(2);
        let row3 = m.row(3);

        // OpenGL clip convention: -w <= z <= w
        Self {
            planes: [
                Plane::from_coefficients(row3 + row0),
                Plane::from_coefficients(row3 - row0),
                Plane::from_coefficients(row3 + row1),
                Plane::from_coefficients(row3 - row1),
                Plane::from_coefficients(row3 + row2),
                Plane::from_coefficients(row3 - row2),
            ],
        }
    }

    /// Test if a point is inside the frustum
    #[inline]
    #[must_use]
    pub fn contains_point(&self, point: DVec3) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.distance_to_point(point) >= 0.0)
    }

    /// Test if a sphere intersects or is inside the frustum
    #[inline]
    #[must_use]
    pub fn intersects_sphere(&self, center: DVec3, radius: f64) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.distance_to_point(center) >= -radius)
    }

    /// Test if a sphere is completely inside the frustum (not just
    /// intersecting)
    #[inline]
    #[must_use]
    pub fn contains_sphere(&self, center: DVec3, radius: f64) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.distance_to_point(center) >= radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn looking_down_z() -> Frustum {
        let proj =
            DMat4::perspective_rh_gl(45.0_f64.to_radians(), 1.0, 0.1, 100.0);
        let view = DMat4::look_at_rh(
            DVec3::new(0.0, 0.0, 10.0),
            DVec3::ZERO,
            DVec3::Y,
        );
        Frustum::from_combined(proj * view)
    }

    #[test]
    fn test_frustum_contains_origin() {
        let frustum = looking_down_z();

        // Origin should be inside the frustum
        assert!(frustum.contains_point(DVec3::ZERO));

        // Point far behind camera should be outside
        assert!(!frustum.contains_point(DVec3::new(0.0, 0.0, 20.0)));

        // Beyond the far plane
        assert!(!frustum.contains_point(DVec3::new(0.0, 0.0, -95.0)));
    }

    #[test]
    fn test_sphere_intersection() {
        let frustum = looking_down_z();

        // Sphere at origin should intersect
        assert!(frustum.intersects_sphere(DVec3::ZERO, 1.0));

        // Large sphere behind camera that doesn't reach frustum
        assert!(!frustum.intersects_sphere(DVec3::new(0.0, 0.0, 50.0), 1.0));

        // Straddles the near plane: intersects but is not contained
        let center = DVec3::new(0.0, 0.0, 9.9);
        assert!(frustum.intersects_sphere(center, 0.5));
        assert!(!frustum.contains_sphere(center, 0.5));
    }

    #[test]
    fn planes_are_normalized() {
        for plane in &looking_down_z().planes {
            assert!((plane.normal.length() - 1.0).abs() < 1e-12);
        }
    }
}
