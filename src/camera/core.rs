use glam::{DMat4, DVec2, DVec3, DVec4};

use super::frustum::Frustum;
use super::uniform::CameraUniform;
use crate::geo::{Extent, GroundConverter, LonLat, WORLD_UP};

/// Near distance of the stable projection used for ray unprojection.
pub const STABLE_NEAR: f64 = 1.0;
/// Far distance of the stable projection used for ray unprojection.
pub const STABLE_FAR: f64 = 10_000.0;

/// Below this length the extent center is treated as degenerate.
const DEGENERATE_CENTER: f64 = 1e-6;
/// Below this length `up × n` is treated as parallel.
const DEGENERATE_CROSS: f64 = 1e-12;

/// Perspective camera described by an eye point and an orthonormal
/// `u, v, n` basis.
///
/// `n` points backward (from the look target toward the eye), `u` is the
/// right axis and `v` the up axis. Every mutating operation recomputes the
/// derived matrices before returning, so readers always see a consistent
/// view.
#[derive(Debug, Clone)]
pub struct Camera {
    eye: DVec3,
    u: DVec3,
    v: DVec3,
    n: DVec3,

    view_angle: f64,
    aspect: f64,
    near: f64,
    far: f64,
    viewport: DVec2,

    projection: DMat4,
    projection_stable: DMat4,
    view: DMat4,
    combined: DMat4,
    inverse_combined: DMat4,
    combined_stable: DMat4,
    inverse_combined_stable: DMat4,
    frustum: Frustum,

    altitude: f64,
    revision: u64,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(35.0, (1, 1), 0.1, 10_000.0)
    }
}

impl Camera {
    /// Create a camera at the origin looking down `-Z` with `+Y` up.
    #[must_use]
    pub fn new(
        view_angle: f64,
        viewport: (u32, u32),
        near: f64,
        far: f64,
    ) -> Self {
        let viewport =
            DVec2::new(f64::from(viewport.0), f64::from(viewport.1));
        let mut camera = Self {
            eye: DVec3::ZERO,
            u: DVec3::X,
            v: DVec3::Y,
            n: DVec3::Z,
            view_angle,
            aspect: aspect_of(viewport),
            near,
            far,
            viewport,
            projection: DMat4::IDENTITY,
            projection_stable: DMat4::IDENTITY,
            view: DMat4::IDENTITY,
            combined: DMat4::IDENTITY,
            inverse_combined: DMat4::IDENTITY,
            combined_stable: DMat4::IDENTITY,
            inverse_combined_stable: DMat4::IDENTITY,
            frustum: Frustum::default(),
            altitude: 0.0,
            revision: 0,
        };
        camera.refresh();
        camera
    }

    // ── Accessors ────────────────────────────────────────────────────────

    /// Eye position in world space.
    #[must_use]
    pub fn eye(&self) -> DVec3 {
        self.eye
    }

    /// Right axis.
    #[must_use]
    pub fn u(&self) -> DVec3 {
        self.u
    }

    /// Up axis.
    #[must_use]
    pub fn v(&self) -> DVec3 {
        self.v
    }

    /// Backward axis (from the look target toward the eye).
    #[must_use]
    pub fn n(&self) -> DVec3 {
        self.n
    }

    /// Forward viewing direction (`-n`).
    #[must_use]
    pub fn forward(&self) -> DVec3 {
        -self.n
    }

    /// Vertical field of view in degrees.
    #[must_use]
    pub fn view_angle(&self) -> f64 {
        self.view_angle
    }

    /// Viewport aspect ratio (width / height).
    #[must_use]
    pub fn aspect(&self) -> f64 {
        self.aspect
    }

    /// Live near clipping distance.
    #[must_use]
    pub fn near(&self) -> f64 {
        self.near
    }

    /// Live far clipping distance.
    #[must_use]
    pub fn far(&self) -> f64 {
        self.far
    }

    /// Surface size in pixels.
    #[must_use]
    pub fn viewport(&self) -> DVec2 {
        self.viewport
    }

    /// Projection matrix for the live clip range.
    #[must_use]
    pub fn projection(&self) -> DMat4 {
        self.projection
    }

    /// World → eye matrix.
    #[must_use]
    pub fn view(&self) -> DMat4 {
        self.view
    }

    /// `projection · view`.
    #[must_use]
    pub fn combined(&self) -> DMat4 {
        self.combined
    }

    /// Inverse of [`combined`](Self::combined).
    #[must_use]
    pub fn inverse_combined(&self) -> DMat4 {
        self.inverse_combined
    }

    /// `projection · view` with the fixed stable clip range.
    #[must_use]
    pub fn combined_stable(&self) -> DMat4 {
        self.combined_stable
    }

    /// Inverse of [`combined_stable`](Self::combined_stable).
    #[must_use]
    pub fn inverse_combined_stable(&self) -> DMat4 {
        self.inverse_combined_stable
    }

    /// Frustum planes of the live projection.
    #[must_use]
    pub fn frustum(&self) -> &Frustum {
        &self.frustum
    }

    /// Height last set by [`set_ground_position`](Self::set_ground_position).
    #[must_use]
    pub fn altitude(&self) -> f64 {
        self.altitude
    }

    /// Incremented by every [`update`](Self::update); compare against a
    /// stored value to detect a changed view.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    // ── Projection ───────────────────────────────────────────────────────

    /// Store projection parameters and rebuild both projection matrices.
    ///
    /// The stable projection always spans
    /// [`STABLE_NEAR`]..[`STABLE_FAR`] regardless of the live range.
    /// Call [`update`](Self::update) afterwards (the setters below do).
    pub fn set_projection(
        &mut self,
        view_angle: f64,
        aspect: f64,
        near: f64,
        far: f64,
    ) {
        self.view_angle = view_angle;
        self.aspect = aspect;
        self.near = near;
        self.far = far;
        let fovy = view_angle.to_radians();
        self.projection = DMat4::perspective_rh_gl(fovy, aspect, near, far);
        self.projection_stable =
            DMat4::perspective_rh_gl(fovy, aspect, STABLE_NEAR, STABLE_FAR);
    }

    /// Rebuild the projection from the stored parameters and the viewport
    /// aspect, then update.
    pub fn refresh(&mut self) {
        self.set_projection(
            self.view_angle,
            aspect_of(self.viewport),
            self.near,
            self.far,
        );
        self.update();
    }

    /// Resize the rendering surface.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.viewport = DVec2::new(f64::from(width), f64::from(height));
        self.refresh();
    }

    /// Change the vertical field of view (degrees).
    pub fn set_view_angle(&mut self, view_angle: f64) {
        self.view_angle = view_angle;
        self.refresh();
    }

    /// Change the far clipping distance.
    pub fn set_far_distance(&mut self, far: f64) {
        self.far = far;
        self.refresh();
    }

    /// Change the near clipping distance.
    pub fn set_near_distance(&mut self, near: f64) {
        self.near = near;
        self.refresh();
    }

    /// Move the near plane, keeping a visible depth of `distance` beyond it.
    ///
    /// With `None` the current `far - near` span is preserved.
    pub fn set_near_point_visibility(
        &mut self,
        near: f64,
        distance: Option<f64>,
    ) {
        let span = distance.unwrap_or(self.far - self.near);
        self.near = near;
        self.far = near + span;
        self.refresh();
    }

    // ── Pose ─────────────────────────────────────────────────────────────

    /// Place the eye and aim it at `look`, using `up` as the up hint.
    pub fn set(&mut self, eye: DVec3, look: DVec3, up: DVec3) {
        self.eye = eye;
        self.rebuild_basis(look, up);
        self.update();
    }

    /// Aim the camera at `look` from its current eye.
    ///
    /// Without `up` the current up axis is reused as the hint.
    pub fn look_at(&mut self, look: DVec3, up: Option<DVec3>) {
        let up = up.unwrap_or(self.v);
        self.rebuild_basis(look, up);
        self.update();
    }

    /// Anchor the eye to a geodetic position.
    pub fn set_ground_position(
        &mut self,
        converter: &impl GroundConverter,
        lonlat: LonLat,
    ) {
        self.altitude = lonlat.height;
        self.eye = converter.to_cartesian(lonlat);
        self.update();
    }

    /// Translate the eye along the basis axes.
    pub fn slide(&mut self, du: f64, dv: f64, dn: f64) {
        self.eye += du * self.u + dv * self.v + dn * self.n;
        self.update();
    }

    /// Rotate around the viewing axis (`u`, `v` plane), in degrees.
    pub fn roll(&mut self, angle: f64) {
        (self.u, self.v) = rotate_pair(self.u, self.v, angle);
        self.update();
    }

    /// Rotate around the right axis (`n`, `v` plane), in degrees.
    pub fn pitch(&mut self, angle: f64) {
        (self.n, self.v) = rotate_pair(self.n, self.v, angle);
        self.update();
    }

    /// Rotate around the up axis (`u`, `n` plane), in degrees.
    pub fn yaw(&mut self, angle: f64) {
        (self.u, self.n) = rotate_pair(self.u, self.n, angle);
        self.update();
    }

    fn rebuild_basis(&mut self, look: DVec3, up: DVec3) {
        self.n = (self.eye - look).normalize();
        let mut right = up.cross(self.n);
        if right.length() < DEGENERATE_CROSS {
            let hint = least_aligned_axis(self.n);
            log::warn!(
                "up hint {up} is parallel to the view axis, substituting \
                 {hint}"
            );
            right = hint.cross(self.n);
        }
        self.u = right.normalize();
        self.v = self.n.cross(self.u);
    }

    // ── Derived matrices ─────────────────────────────────────────────────

    /// Recompute view, combined and inverse matrices and the frustum.
    pub fn update(&mut self) {
        let (u, v, n, eye) = (self.u, self.v, self.n, self.eye);
        self.view = DMat4::from_cols(
            DVec4::new(u.x, v.x, n.x, 0.0),
            DVec4::new(u.y, v.y, n.y, 0.0),
            DVec4::new(u.z, v.z, n.z, 0.0),
            DVec4::new(-eye.dot(u), -eye.dot(v), -eye.dot(n), 1.0),
        );
        self.combined = self.projection * self.view;
        self.inverse_combined = self.combined.inverse();
        self.combined_stable = self.projection_stable * self.view;
        self.inverse_combined_stable = self.combined_stable.inverse();
        self.frustum = Frustum::from_combined(self.combined);
        self.revision = self.revision.wrapping_add(1);
    }

    // ── Screen mapping ───────────────────────────────────────────────────

    /// World-space unit direction of the ray through pixel `(x, y)`.
    #[must_use]
    pub fn unproject(&self, x: f64, y: f64) -> DVec3 {
        let half = self.viewport * 0.5;
        let px = (x - half.x) / half.x;
        let py = -(y - half.y) / half.y;

        let near = self
            .inverse_combined_stable
            .project_point3(DVec3::new(px, py, -1.0));
        let mid = self
            .inverse_combined_stable
            .project_point3(DVec3::new(px, py, 0.0));
        (mid - near).normalize()
    }

    /// Pixel coordinates of a world-space point.
    #[must_use]
    pub fn project(&self, point: DVec3) -> DVec2 {
        let ndc = self.combined.project_point3(point);
        DVec2::new(
            (1.0 + ndc.x) * self.viewport.x * 0.5,
            (1.0 - ndc.y) * self.viewport.y * 0.5,
        )
    }

    /// World size of half the screen height at the distance of `point`.
    #[must_use]
    pub fn projected_size(&self, point: DVec3) -> f64 {
        self.eye.distance(point) * (self.view_angle.to_radians() * 0.5).tan()
    }

    // ── Extent fitting ───────────────────────────────────────────────────

    /// Eye position from which `extent` exactly fills the field of view.
    #[must_use]
    pub fn extent_position(
        &self,
        extent: &Extent,
        converter: &impl GroundConverter,
    ) -> DVec3 {
        let (west, south, north) =
            (extent.west(), extent.south(), extent.north());
        let mut east = extent.east();
        if west > east {
            east += 360.0;
        }

        let north_east = converter.to_cartesian(LonLat::new(east, north));
        let south_east = converter.to_cartesian(LonLat::new(east, south));
        let south_west = converter.to_cartesian(LonLat::new(west, south));
        let north_west = converter.to_cartesian(LonLat::new(west, north));

        let mut center = south_west + (north_east - south_west) * 0.5;
        let mut mag = center.length();
        if mag < DEGENERATE_CENTER {
            log::debug!("extent chord center collapsed, using mid lon/lat");
            center = converter.to_cartesian(LonLat::new(
                (east + west) * 0.5,
                (north + south) * 0.5,
            ));
            mag = center.length();
        }

        let corners = [
            north_west - center,
            south_east - center,
            north_east - center,
            south_west - center,
        ];

        let direction = center.normalize();
        let mut right = direction.cross(WORLD_UP);
        if right.length() < DEGENERATE_CROSS {
            right = direction.cross(DVec3::Z);
        }
        let right = right.normalize();
        let up = right.cross(direction).normalize();

        let height = corners
            .iter()
            .map(|c| up.dot(*c).abs())
            .fold(0.0, f64::max);
        let width = corners
            .iter()
            .map(|c| right.dot(*c).abs())
            .fold(0.0, f64::max);

        let tan_phi = (self.view_angle.to_radians() * 0.5).tan();
        let tan_theta = self.aspect * tan_phi;
        let d = (width / tan_theta).max(height / tan_phi);

        direction * (mag + d)
    }

    /// GPU uniform block for the current view.
    #[must_use]
    pub fn uniform(&self) -> CameraUniform {
        CameraUniform::from(self)
    }

    /// Move to [`extent_position`](Self::extent_position) and look at the
    /// globe center with world up.
    pub fn fly_to_extent(
        &mut self,
        extent: &Extent,
        converter: &impl GroundConverter,
    ) {
        let eye = self.extent_position(extent, converter);
        self.set(eye, DVec3::ZERO, WORLD_UP);
    }
}

fn aspect_of(viewport: DVec2) -> f64 {
    if viewport.y > 0.0 {
        viewport.x / viewport.y
    } else {
        1.0
    }
}

/// Rotate `a` toward `-b` and `b` toward `a` by `angle` degrees.
fn rotate_pair(a: DVec3, b: DVec3, angle: f64) -> (DVec3, DVec3) {
    let (sn, cs) = angle.to_radians().sin_cos();
    (cs * a - sn * b, sn * a + cs * b)
}

fn least_aligned_axis(dir: DVec3) -> DVec3 {
    let abs = dir.abs();
    if abs.x <= abs.y && abs.x <= abs.z {
        DVec3::X
    } else if abs.y <= abs.z {
        DVec3::Y
    } else {
        DVec3::Z
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::Ellipsoid;

    const EPS: f64 = 1e-6;

    fn assert_orthonormal(camera: &Camera) {
        let (u, v, n) = (camera.u(), camera.v(), camera.n());
        for axis in [u, v, n] {
            assert!(
                (axis.length() - 1.0).abs() < EPS,
                "axis {axis} is not unit length"
            );
        }
        assert!(u.dot(v).abs() < EPS, "u·v = {}", u.dot(v));
        assert!(u.dot(n).abs() < EPS, "u·n = {}", u.dot(n));
        assert!(v.dot(n).abs() < EPS, "v·n = {}", v.dot(n));
        // right-handed
        assert!((u.cross(v) - n).length() < EPS);
    }

    fn camera_800x600() -> Camera {
        Camera::new(35.0, (800, 600), 0.1, 1000.0)
    }

    #[test]
    fn set_builds_orthonormal_basis() {
        let poses = [
            (
                DVec3::new(3.0, -7.0, 12.0),
                DVec3::new(-1.0, 2.0, 0.5),
                DVec3::new(0.2, 1.0, 0.1),
            ),
            // steep: looking almost straight down
            (
                DVec3::new(0.01, 50.0, 0.0),
                DVec3::ZERO,
                DVec3::Y,
            ),
            // near-polar hint, barely off the view axis
            (
                DVec3::new(0.0, 10.0, 0.0),
                DVec3::ZERO,
                DVec3::new(1e-6, 1.0, 0.0),
            ),
            // hint pointing away from the eye, not unit length
            (
                DVec3::new(0.0, 0.0, 10.0),
                DVec3::ZERO,
                DVec3::new(0.0, -3.0, -0.5),
            ),
            // globe scale, eye above the north pole
            (
                DVec3::new(0.0, 6.4e6, 1.0),
                DVec3::ZERO,
                DVec3::Z,
            ),
        ];
        for (eye, look, up) in poses {
            let mut camera = camera_800x600();
            camera.set(eye, look, up);
            assert_orthonormal(&camera);
            assert!(
                (camera.n() - (eye - look).normalize()).length() < EPS,
                "n does not point back from {look} to {eye}"
            );
        }
    }

    #[test]
    fn rotations_preserve_orthonormality() {
        let mut camera = camera_800x600();
        camera.set(DVec3::new(0.0, 0.0, 10.0), DVec3::ZERO, DVec3::Y);
        camera.roll(17.0);
        camera.pitch(-33.0);
        camera.yaw(71.0);
        assert_orthonormal(&camera);
    }

    #[test]
    fn yaw_turns_view_direction() {
        let mut camera = camera_800x600();
        camera.set(DVec3::new(0.0, 0.0, 10.0), DVec3::ZERO, DVec3::Y);
        camera.yaw(90.0);
        // up axis untouched
        assert!((camera.v() - DVec3::Y).length() < EPS);
        assert!(camera.forward().dot(DVec3::NEG_Z).abs() < EPS);
    }

    #[test]
    fn look_at_without_up_reuses_current_up() {
        let mut camera = camera_800x600();
        camera.set(DVec3::new(0.0, 0.0, 10.0), DVec3::ZERO, DVec3::Y);
        camera.look_at(DVec3::new(5.0, 0.0, 0.0), None);
        assert_orthonormal(&camera);
        assert!((camera.v() - DVec3::Y).length() < EPS);
    }

    #[test]
    fn parallel_up_hint_is_substituted() {
        let mut camera = camera_800x600();
        camera.set(DVec3::new(0.0, 10.0, 0.0), DVec3::ZERO, DVec3::Y);
        assert!(camera.u().is_finite());
        assert!(camera.combined().is_finite());
        assert_orthonormal(&camera);
    }

    #[test]
    fn slide_moves_along_basis() {
        let mut camera = camera_800x600();
        camera.set(DVec3::new(0.0, 0.0, 10.0), DVec3::ZERO, DVec3::Y);
        camera.slide(1.0, 2.0, -3.0);
        assert!((camera.eye() - DVec3::new(1.0, 2.0, 7.0)).length() < EPS);
        assert!((camera.n() - DVec3::Z).length() < EPS);
    }

    #[test]
    fn update_is_idempotent() {
        let mut camera = camera_800x600();
        camera.set(
            DVec3::new(1.5, 2.5, 9.0),
            DVec3::new(0.3, -0.2, 0.0),
            DVec3::Y,
        );
        camera.update();
        let first = (
            camera.view(),
            camera.combined(),
            camera.inverse_combined(),
            camera.inverse_combined_stable(),
            camera.frustum().clone(),
        );
        camera.update();
        assert_eq!(first.0, camera.view());
        assert_eq!(first.1, camera.combined());
        assert_eq!(first.2, camera.inverse_combined());
        assert_eq!(first.3, camera.inverse_combined_stable());
        assert_eq!(&first.4, camera.frustum());
    }

    #[test]
    fn view_matches_look_at() {
        let mut camera = camera_800x600();
        let eye = DVec3::new(4.0, 3.0, 8.0);
        camera.set(eye, DVec3::ZERO, DVec3::Y);
        let reference = DMat4::look_at_rh(eye, DVec3::ZERO, DVec3::Y);
        assert!(camera.view().abs_diff_eq(reference, 1e-9));
    }

    #[test]
    fn project_unproject_round_trip() {
        let mut camera = camera_800x600();
        let eye = DVec3::new(2.0, 1.0, 20.0);
        camera.set(eye, DVec3::ZERO, DVec3::Y);

        for point in [
            DVec3::ZERO,
            DVec3::new(1.5, -2.0, 3.0),
            DVec3::new(-4.0, 2.5, -10.0),
        ] {
            assert!(camera.frustum().contains_point(point));
            let pixel = camera.project(point);
            let ray = camera.unproject(pixel.x, pixel.y);
            let expected = (point - eye).normalize();
            assert!(
                (ray - expected).length() < 1e-6,
                "ray {ray} vs {expected}"
            );
        }
    }

    #[test]
    fn unproject_ignores_live_clip_range() {
        let mut camera = camera_800x600();
        camera.set(DVec3::new(0.0, 0.0, 50.0), DVec3::ZERO, DVec3::Y);
        let before = camera.unproject(123.0, 456.0);
        camera.set_near_point_visibility(0.001, Some(1.0e9));
        let after = camera.unproject(123.0, 456.0);
        assert_eq!(before, after);
    }

    #[test]
    fn center_pixel_unprojects_forward() {
        let mut camera = camera_800x600();
        camera.set(DVec3::new(0.0, 0.0, 10.0), DVec3::ZERO, DVec3::Y);
        let ray = camera.unproject(400.0, 300.0);
        assert!((ray - DVec3::NEG_Z).length() < 1e-9);
    }

    #[test]
    fn near_point_visibility_preserves_span() {
        let mut camera = camera_800x600();
        camera.set_near_point_visibility(10.0, None);
        assert_eq!(camera.near(), 10.0);
        assert!((camera.far() - (1010.0 - 0.1)).abs() < 1e-9);
        camera.set_near_point_visibility(1.0, Some(50.0));
        assert_eq!(camera.far(), 51.0);
    }

    #[test]
    fn viewport_drives_aspect() {
        let mut camera = camera_800x600();
        camera.set_viewport(1920, 1080);
        assert!((camera.aspect() - 1920.0 / 1080.0).abs() < 1e-12);
    }

    #[test]
    fn ground_position_sets_eye_and_altitude() {
        let mut camera = camera_800x600();
        let sphere = Ellipsoid::sphere(100.0);
        camera.set_ground_position(
            &sphere,
            LonLat::with_height(0.0, 0.0, 25.0),
        );
        assert_eq!(camera.altitude(), 25.0);
        assert!((camera.eye() - DVec3::new(0.0, 0.0, 125.0)).length() < 1e-9);
    }

    #[test]
    fn revision_advances_on_update() {
        let mut camera = camera_800x600();
        let before = camera.revision();
        camera.slide(1.0, 0.0, 0.0);
        assert_eq!(camera.revision(), before + 1);
    }

    fn fitted_camera(extent: &Extent, viewport: (u32, u32)) -> Camera {
        let mut camera = Camera::new(35.0, viewport, 1.0, 1.0e8);
        let eye = camera.extent_position(extent, &Ellipsoid::WGS84);
        camera.set(eye, DVec3::ZERO, WORLD_UP);
        camera
    }

    fn assert_corners_in_view(camera: &Camera, extent: &Extent) {
        let mut east = extent.east();
        if extent.west() > east {
            east += 360.0;
        }
        for (lon, lat) in [
            (extent.west(), extent.south()),
            (extent.west(), extent.north()),
            (east, extent.south()),
            (east, extent.north()),
        ] {
            let corner =
                Ellipsoid::WGS84.to_cartesian(LonLat::new(lon, lat));
            let ndc = camera.combined().project_point3(corner);
            assert!(
                ndc.x.abs() <= 1.0 + 1e-9 && ndc.y.abs() <= 1.0 + 1e-9,
                "corner ({lon}, {lat}) projects to {ndc}"
            );
        }
    }

    #[test]
    fn extent_fit_keeps_corners_in_view() {
        let extent = Extent::from_bounds(-10.0, -10.0, 10.0, 10.0);
        let camera = fitted_camera(&extent, (800, 600));
        assert_corners_in_view(&camera, &extent);

        let wide = Extent::from_bounds(-30.0, -5.0, 30.0, 5.0);
        let camera = fitted_camera(&wide, (600, 800));
        assert_corners_in_view(&camera, &wide);
    }

    #[test]
    fn extent_fit_handles_antimeridian() {
        let extent = Extent::from_bounds(170.0, -5.0, -170.0, 5.0);
        let camera = fitted_camera(&extent, (800, 600));
        // looks at the 180th meridian
        assert!(camera.eye().z < 0.0);
        assert!(camera.eye().x.abs() < 1.0);
        assert_corners_in_view(&camera, &extent);
    }

    #[test]
    fn extent_fit_falls_back_for_hemisphere() {
        // NE and SW corners are antipodal, the chord midpoint is the origin
        let extent = Extent::from_bounds(-90.0, -45.0, 90.0, 45.0);
        let camera = camera_800x600();
        let eye = camera.extent_position(&extent, &Ellipsoid::sphere(1000.0));
        assert!(eye.is_finite());
        // mid lon/lat is (0, 0) which lies on +Z
        assert!(eye.normalize().dot(DVec3::Z) > 1.0 - 1e-9);
        assert!(eye.length() > 1000.0);
    }
}
