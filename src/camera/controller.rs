use glam::{Quat, Vec2, Vec3};

use crate::context::ViewerContext;
use crate::options::CameraOptions;

/// Radians of orbit per pixel of drag at `rotate_speed = 1.0`.
const BASE_ROTATE: f32 = 0.01;
/// World units of pan per pixel of drag at `pan_speed = 1.0`.
const BASE_PAN: f32 = 0.01;
/// Fraction of the orbit distance per wheel notch at `zoom_speed = 1.0`.
const BASE_ZOOM: f32 = 0.5;
/// Keeps the orbit away from the poles where yaw degenerates.
const MAX_ELEVATION_COS: f32 = 0.995;

/// Free-orbit input path for interactive mode.
///
/// Every operation is gated on [`CameraState::controls_enabled`]: while the
/// viewer is presenting (or transitioning) input is dropped and the method
/// returns `false`. Accepted input moves the shared camera and marks the
/// context dirty.
///
/// [`CameraState::controls_enabled`]: crate::camera::state::CameraState::controls_enabled
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitControls {
    rotate_speed: f32,
    pan_speed: f32,
    zoom_speed: f32,
    min_distance: f32,
    max_distance: f32,
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self::new(&CameraOptions::default())
    }
}

impl OrbitControls {
    /// Build controls from the camera options' sensitivity settings.
    #[must_use]
    pub fn new(options: &CameraOptions) -> Self {
        Self {
            rotate_speed: BASE_ROTATE * options.rotate_speed,
            pan_speed: BASE_PAN * options.pan_speed,
            zoom_speed: BASE_ZOOM * options.zoom_speed,
            min_distance: options.min_distance,
            max_distance: options.max_distance,
        }
    }

    /// Orbit the eye around the target by a screen-space drag delta.
    pub fn rotate(&self, ctx: &mut ViewerContext, delta: Vec2) -> bool {
        if !ctx.camera.controls_enabled() || delta == Vec2::ZERO {
            return false;
        }
        let offset = ctx.camera.position - ctx.camera.target;
        if offset == Vec3::ZERO {
            return false;
        }

        // Horizontal rotation around the world up axis
        let yaw = Quat::from_axis_angle(Vec3::Y, -delta.x * self.rotate_speed);
        let mut offset = yaw * offset;

        // Vertical rotation around the camera's right vector, rejected if it
        // would carry the eye over a pole
        let right = Vec3::Y.cross(offset).normalize_or_zero();
        if right != Vec3::ZERO {
            let pitch =
                Quat::from_axis_angle(right, -delta.y * self.rotate_speed);
            let pitched = pitch * offset;
            if pitched.normalize().dot(Vec3::Y).abs() < MAX_ELEVATION_COS {
                offset = pitched;
            }
        }

        ctx.camera.position = ctx.camera.target + offset;
        ctx.dirty.mark_dirty();
        true
    }

    /// Translate eye and target together in the view plane.
    pub fn pan(&self, ctx: &mut ViewerContext, delta: Vec2) -> bool {
        if !ctx.camera.controls_enabled() || delta == Vec2::ZERO {
            return false;
        }
        let forward =
            (ctx.camera.target - ctx.camera.position).normalize_or_zero();
        let right = forward.cross(Vec3::Y).normalize_or_zero();
        if right == Vec3::ZERO {
            return false;
        }
        let up = right.cross(forward);

        let translation = right * (-delta.x * self.pan_speed)
            + up * (delta.y * self.pan_speed);
        ctx.camera.position += translation;
        ctx.camera.target += translation;
        ctx.dirty.mark_dirty();
        true
    }

    /// Dolly toward (positive) or away from (negative) the target.
    pub fn zoom(&self, ctx: &mut ViewerContext, delta: f32) -> bool {
        if !ctx.camera.controls_enabled() || delta == 0.0 {
            return false;
        }
        let offset = ctx.camera.position - ctx.camera.target;
        let distance = offset.length();
        if distance == 0.0 {
            return false;
        }
        let new_distance = (distance * (1.0 - delta * self.zoom_speed))
            .clamp(self.min_distance, self.max_distance);
        ctx.camera.position =
            ctx.camera.target + offset * (new_distance / distance);
        ctx.dirty.mark_dirty();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::state::CameraState;

    fn interactive_ctx() -> ViewerContext {
        let mut camera =
            CameraState::new(Vec3::new(0.0, 0.0, 4.0), Vec3::ZERO);
        camera.controls_enabled = true;
        let mut ctx = ViewerContext::new(camera);
        let _ = ctx.dirty.consume_if_dirty();
        ctx
    }

    #[test]
    fn input_is_dropped_while_controls_disabled() {
        let controls = OrbitControls::default();
        let mut ctx = interactive_ctx();
        ctx.camera.controls_enabled = false;
        let before = ctx.camera;
        assert!(!controls.rotate(&mut ctx, Vec2::new(10.0, 5.0)));
        assert!(!controls.pan(&mut ctx, Vec2::new(10.0, 5.0)));
        assert!(!controls.zoom(&mut ctx, 1.0));
        assert_eq!(ctx.camera, before);
        assert!(!ctx.dirty.is_dirty());
    }

    #[test]
    fn rotate_preserves_orbit_distance() {
        let controls = OrbitControls::default();
        let mut ctx = interactive_ctx();
        assert!(controls.rotate(&mut ctx, Vec2::new(40.0, 15.0)));
        assert!(ctx.dirty.is_dirty());
        assert!((ctx.camera.position.length() - 4.0).abs() < 1e-4);
        assert_eq!(ctx.camera.target, Vec3::ZERO);
    }

    #[test]
    fn pan_moves_target_and_eye_together() {
        let controls = OrbitControls::default();
        let mut ctx = interactive_ctx();
        let offset = ctx.camera.position - ctx.camera.target;
        assert!(controls.pan(&mut ctx, Vec2::new(20.0, -10.0)));
        let moved = ctx.camera.position - ctx.camera.target;
        assert!(moved.abs_diff_eq(offset, 1e-5));
        assert_ne!(ctx.camera.target, Vec3::ZERO);
    }

    #[test]
    fn zoom_clamps_distance() {
        let controls = OrbitControls::default();
        let mut ctx = interactive_ctx();
        for _ in 0..100 {
            let _ = controls.zoom(&mut ctx, 1.0);
        }
        let min = CameraOptions::default().min_distance;
        assert!((ctx.camera.position.length() - min).abs() < 1e-4);
    }
}
