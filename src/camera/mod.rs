//! Camera system for 3D scene viewing.
//!
//! Provides a basis-driven perspective camera with navigation operations,
//! screen ↔ world mapping, extent fitting, frustum culling, and a GPU
//! uniform block.

/// Core camera struct: pose, projection, and derived matrices.
pub mod core;
/// View frustum extraction and intersection tests.
pub mod frustum;
/// GPU uniform block built from a camera.
pub mod uniform;

pub use self::core::{Camera, STABLE_FAR, STABLE_NEAR};
pub use frustum::{Frustum, Plane};
pub use uniform::CameraUniform;
