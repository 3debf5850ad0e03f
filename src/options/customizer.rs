use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::easing::EasingFunction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Customizer", inline)]
#[serde(default)]
/// Where the interactive customizer parks the camera, and how fast.
pub struct CustomizerOptions {
    /// Eye position while customizing.
    #[schemars(skip)]
    pub position: [f32; 3],
    /// Look-at target while customizing.
    #[schemars(skip)]
    pub target: [f32; 3],
    /// Length of the hand-off into interactive mode.
    #[schemars(title = "Enter Duration (ms)", range(min = 0, max = 5000), extend("step" = 50))]
    pub enter_duration_ms: u64,
    /// Length of the hand-off back to the scroll choreography.
    #[schemars(title = "Exit Duration (ms)", range(min = 0, max = 5000), extend("step" = 50))]
    pub exit_duration_ms: u64,
    /// Curve shared by both hand-offs.
    #[schemars(skip)]
    pub easing: EasingFunction,
}

impl Default for CustomizerOptions {
    fn default() -> Self {
        Self {
            position: [3.0, 1.7, -3.9],
            target: [-0.08, -0.32, -0.15],
            enter_duration_ms: 2000,
            exit_duration_ms: 1000,
            easing: EasingFunction::QuarticInOut,
        }
    }
}
