use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::state::CameraState;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection, orbit control and initial pose parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Rotation sensitivity multiplier.
    #[schemars(title = "Rotate Speed", range(min = 0.1, max = 2.0), extend("step" = 0.05))]
    pub rotate_speed: f32,
    /// Pan sensitivity multiplier.
    #[schemars(title = "Pan Speed", range(min = 0.1, max = 2.0), extend("step" = 0.05))]
    pub pan_speed: f32,
    /// Zoom sensitivity multiplier.
    #[schemars(title = "Zoom Speed", range(min = 0.01, max = 0.5), extend("step" = 0.01))]
    pub zoom_speed: f32,
    /// Closest the orbit may bring the eye to the target.
    #[schemars(title = "Min Distance", range(min = 0.5, max = 5.0), extend("step" = 0.1))]
    pub min_distance: f32,
    /// Farthest the orbit may take the eye from the target.
    #[schemars(title = "Max Distance", range(min = 5.0, max = 50.0), extend("step" = 0.5))]
    pub max_distance: f32,
    /// Eye position before any scroll segment applies.
    #[schemars(skip)]
    pub position: [f32; 3],
    /// Look-at target before any scroll segment applies.
    #[schemars(skip)]
    pub target: [f32; 3],
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 45.0,
            znear: 0.1,
            zfar: 100.0,
            rotate_speed: 0.5,
            pan_speed: 0.5,
            zoom_speed: 0.1,
            min_distance: 1.5,
            max_distance: 12.0,
            position: [0.0, 0.0, 5.0],
            target: [0.0, 0.0, 0.0],
        }
    }
}

impl CameraOptions {
    /// The configured initial pose, with controls disabled.
    #[must_use]
    pub fn initial_state(&self) -> CameraState {
        CameraState::new(
            Vec3::from_array(self.position),
            Vec3::from_array(self.target),
        )
    }
}
