use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A camera vector that timelines and tweens can drive.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum CameraField {
    /// Eye position in world space.
    Position,
    /// Look-at target in world space.
    Target,
}

impl CameraField {
    /// Both fields, in slot order.
    pub const ALL: [Self; 2] = [Self::Position, Self::Target];

    /// Stable slot index for per-field storage.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Position => 0,
            Self::Target => 1,
        }
    }
}

/// The single source of truth for where the camera is and what it looks at.
///
/// `controls_enabled` is only writable inside the crate: the mode controller
/// owns it, and it is true only while the viewer is in interactive mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    /// Eye position in world space.
    pub position: Vec3,
    /// Look-at target in world space.
    pub target: Vec3,
    pub(crate) controls_enabled: bool,
}

impl Default for CameraState {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO)
    }
}

impl CameraState {
    /// Create a camera state with free-orbit controls disabled.
    #[must_use]
    pub const fn new(position: Vec3, target: Vec3) -> Self {
        Self {
            position,
            target,
            controls_enabled: false,
        }
    }

    /// Whether free-orbit input is currently accepted.
    #[must_use]
    pub const fn controls_enabled(&self) -> bool {
        self.controls_enabled
    }

    /// Read one field.
    #[inline]
    #[must_use]
    pub const fn get(&self, field: CameraField) -> Vec3 {
        match field {
            CameraField::Position => self.position,
            CameraField::Target => self.target,
        }
    }

    /// Overwrite one field.
    #[inline]
    pub fn set(&mut self, field: CameraField, value: Vec3) {
        match field {
            CameraField::Position => self.position = value,
            CameraField::Target => self.target = value,
        }
    }

    /// Whether position and target both lie within `epsilon` of `other`'s.
    /// The controls flag is ignored.
    #[must_use]
    pub fn pose_approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.position.abs_diff_eq(other.position, epsilon)
            && self.target.abs_diff_eq(other.target, epsilon)
    }

    /// Whether position or target differ from `other`'s.
    #[must_use]
    pub fn pose_differs(&self, other: &Self) -> bool {
        self.position != other.position || self.target != other.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_access_round_trips() {
        let mut state = CameraState::default();
        state.set(CameraField::Target, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(state.get(CameraField::Target), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(state.get(CameraField::Position), Vec3::new(0.0, 0.0, 5.0));
    }

    #[test]
    fn new_state_has_controls_disabled() {
        let state = CameraState::new(Vec3::ONE, Vec3::ZERO);
        assert!(!state.controls_enabled());
    }

    #[test]
    fn pose_comparison_ignores_controls_flag() {
        let a = CameraState::new(Vec3::ONE, Vec3::ZERO);
        let mut b = a;
        b.controls_enabled = true;
        assert!(!a.pose_differs(&b));
        b.position.x += 1e-4;
        assert!(a.pose_differs(&b));
        assert!(a.pose_approx_eq(&b, 1e-3));
    }

    #[test]
    fn slot_indices_are_distinct() {
        assert_eq!(CameraField::ALL.map(CameraField::index), [0, 1]);
    }
}
