//! Geodetic primitives consumed by the camera.
//!
//! The camera never does geodesy itself. It receives a [`GroundConverter`]
//! that turns longitude/latitude/height into world-space Cartesian
//! coordinates. [`Ellipsoid`] is the stock converter (WGS84 or a perfect
//! sphere) using the viewer's world axes: `+Y` is the polar axis, the prime
//! meridian crosses `+Z`, and longitude 90°E crosses `+X`.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// World "up" reference used when building local tangent bases.
pub const WORLD_UP: DVec3 = DVec3::Y;

/// Geodetic position in degrees, with height in world units above the
/// reference surface.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LonLat {
    /// Longitude in degrees, east positive.
    pub lon: f64,
    /// Latitude in degrees, north positive.
    pub lat: f64,
    /// Height above the reference surface.
    pub height: f64,
}

impl LonLat {
    /// Position on the reference surface.
    #[must_use]
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self {
            lon,
            lat,
            height: 0.0,
        }
    }

    /// Position at the given height above the reference surface.
    #[must_use]
    pub const fn with_height(lon: f64, lat: f64, height: f64) -> Self {
        Self { lon, lat, height }
    }
}

/// Geographic bounding box in degrees.
///
/// `west > east` denotes a box crossing the antimeridian.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    /// South-west corner.
    pub south_west: LonLat,
    /// North-east corner.
    pub north_east: LonLat,
}

impl Extent {
    /// Build an extent from its corners.
    #[must_use]
    pub const fn new(south_west: LonLat, north_east: LonLat) -> Self {
        Self {
            south_west,
            north_east,
        }
    }

    /// Build an extent from `west, south, east, north` bounds.
    #[must_use]
    pub const fn from_bounds(
        west: f64,
        south: f64,
        east: f64,
        north: f64,
    ) -> Self {
        Self::new(LonLat::new(west, south), LonLat::new(east, north))
    }

    /// Western bound in degrees.
    #[must_use]
    pub const fn west(&self) -> f64 {
        self.south_west.lon
    }

    /// Eastern bound in degrees.
    #[must_use]
    pub const fn east(&self) -> f64 {
        self.north_east.lon
    }

    /// Southern bound in degrees.
    #[must_use]
    pub const fn south(&self) -> f64 {
        self.south_west.lat
    }

    /// Northern bound in degrees.
    #[must_use]
    pub const fn north(&self) -> f64 {
        self.north_east.lat
    }
}

/// Geodetic → Cartesian conversion supplied by the geodesy collaborator.
pub trait GroundConverter {
    /// Convert a geodetic position to world-space Cartesian coordinates.
    fn to_cartesian(&self, lonlat: LonLat) -> DVec3;
}

/// Reference ellipsoid of revolution around the world `Y` axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipsoid {
    equatorial_radius: f64,
    polar_radius: f64,
    eccentricity_sq: f64,
}

impl Ellipsoid {
    /// WGS84 reference ellipsoid, in metres.
    pub const WGS84: Self = Self::new(6_378_137.0, 6_356_752.314_245_18);

    /// Build an ellipsoid from its equatorial and polar radii.
    #[must_use]
    pub const fn new(equatorial_radius: f64, polar_radius: f64) -> Self {
        let a2 = equatorial_radius * equatorial_radius;
        let b2 = polar_radius * polar_radius;
        Self {
            equatorial_radius,
            polar_radius,
            eccentricity_sq: (a2 - b2) / a2,
        }
    }

    /// A perfect sphere of the given radius.
    #[must_use]
    pub const fn sphere(radius: f64) -> Self {
        Self::new(radius, radius)
    }

    /// Equatorial radius.
    #[must_use]
    pub const fn equatorial_radius(&self) -> f64 {
        self.equatorial_radius
    }

    /// Polar radius.
    #[must_use]
    pub const fn polar_radius(&self) -> f64 {
        self.polar_radius
    }
}

impl GroundConverter for Ellipsoid {
    fn to_cartesian(&self, lonlat: LonLat) -> DVec3 {
        let (sin_lat, cos_lat) = lonlat.lat.to_radians().sin_cos();
        let (sin_lon, cos_lon) = lonlat.lon.to_radians().sin_cos();
        // prime vertical radius of curvature
        let n = self.equatorial_radius
            / (1.0 - self.eccentricity_sq * sin_lat * sin_lat).sqrt();
        let h = lonlat.height;
        DVec3::new(
            (n + h) * cos_lat * sin_lon,
            (n * (1.0 - self.eccentricity_sq) + h) * sin_lat,
            (n + h) * cos_lat * cos_lon,
        )
    }
}
