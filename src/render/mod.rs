//! Renderer boundary and frame scheduling.
//!
//! The actual rendering pipeline (post-processing, tone mapping, asset
//! loading) lives outside this crate. It is reached through the
//! [`Renderer`] trait, which mirrors the handful of viewer operations the
//! choreography needs.

pub mod headless;
pub mod scheduler;

use crate::camera::state::CameraState;

/// Operations consumed from the external renderer/viewer.
pub trait Renderer {
    /// Request a redraw on the next frame.
    fn set_dirty(&mut self);

    /// Recompute view/projection matrices from `camera`. With `force`, the
    /// recompute happens even if the renderer believes nothing moved.
    fn position_target_updated(&mut self, camera: &CameraState, force: bool);

    /// Enable or disable the active camera's own free-orbit input.
    fn set_controls_enabled(&mut self, enabled: bool);

    /// Recolor a material by name. Returns `false` if no such material
    /// exists.
    fn set_material_color(&mut self, material: &str, linear_rgb: [f32; 3])
        -> bool;

    /// Draw a frame if one was requested since the last call.
    fn render_frame(&mut self);
}
