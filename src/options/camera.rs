use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 10.0, max = 120.0), extend("step" = 1.0))]
    pub view_angle: f64,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub near: f64,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub far: f64,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            view_angle: 35.0,
            near: 0.1,
            far: 10_000.0,
        }
    }
}
