use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::state::CameraField;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Segment", inline)]
#[serde(default)]
/// One scroll-driven keyframe as written in a preset.
pub struct SegmentConfig {
    /// Selector of the section whose pass through the viewport drives the
    /// segment.
    pub section: String,
    /// Camera vector to animate.
    pub field: CameraField,
    /// Value reached at the end of the range.
    pub end_value: [f32; 3],
    /// Scroll position where progress is 0 (e.g. `"top bottom"`).
    pub start: String,
    /// Scroll position where progress is 1 (e.g. `"bottom top"`, `"+=100%"`).
    pub end: String,
    /// Follow scroll in both directions rather than jumping on entry.
    pub scrub: bool,
}

impl Default for SegmentConfig {
    fn default() -> Self {
        Self {
            section: String::new(),
            field: CameraField::Position,
            end_value: [0.0; 3],
            start: "top bottom".to_owned(),
            end: "bottom top".to_owned(),
            scrub: true,
        }
    }
}

impl SegmentConfig {
    fn spanning_viewport(
        section: &str,
        field: CameraField,
        end_value: [f32; 3],
    ) -> Self {
        Self {
            section: section.to_owned(),
            field,
            end_value,
            end: "+=100%".to_owned(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Timeline", inline)]
#[serde(default)]
/// The presentation choreography: segments in declaration order.
pub struct TimelineOptions {
    /// Later segments override earlier ones on the same field.
    pub segments: Vec<SegmentConfig>,
}

impl Default for TimelineOptions {
    fn default() -> Self {
        use CameraField::{Position, Target};
        Self {
            segments: vec![
                SegmentConfig::spanning_viewport(".second", Position, [0.61, 0.12, -3.04]),
                SegmentConfig::spanning_viewport(".second", Target, [-0.67, -0.21, 0.09]),
                SegmentConfig::spanning_viewport(".third", Position, [3.1, 4.82, -3.6]),
                SegmentConfig::spanning_viewport(".third", Target, [0.71, -0.7, 0.5]),
                SegmentConfig {
                    end: "top top".to_owned(),
                    ..SegmentConfig::spanning_viewport(".fourth", Position, [2.03, 0.31, 3.9])
                },
                SegmentConfig::spanning_viewport(".fourth", Target, [0.25, 0.12, 0.26]),
            ],
        }
    }
}
