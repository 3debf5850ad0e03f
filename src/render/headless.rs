//! A renderer that keeps camera matrices but draws nothing.
//!
//! Used by the demo binary and by tests to observe exactly how often the
//! scheduler lets recomputes and redraws through.

use rustc_hash::FxHashMap;

use super::scheduler::RedrawRequest;
use super::Renderer;
use crate::camera::core::{Camera, CameraUniform};
use crate::camera::state::CameraState;
use crate::options::CameraOptions;

/// Work counters for a [`HeadlessRenderer`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderCounters {
    /// Matrix recomputes performed.
    pub recomputes: u64,
    /// Redraw requests received via [`Renderer::set_dirty`].
    pub redraw_requests: u64,
    /// Frames actually drawn.
    pub frames: u64,
}

/// Off-screen [`Renderer`] implementation.
#[derive(Debug, Clone)]
pub struct HeadlessRenderer {
    camera: Camera,
    uniform: CameraUniform,
    controls_enabled: bool,
    materials: FxHashMap<String, [f32; 3]>,
    redraw: RedrawRequest,
    counters: RenderCounters,
}

impl HeadlessRenderer {
    /// Create a renderer with default projection settings.
    #[must_use]
    pub fn new(aspect: f32) -> Self {
        Self::with_options(&CameraOptions::default(), aspect)
    }

    /// Create a renderer using the given projection settings.
    #[must_use]
    pub fn with_options(options: &CameraOptions, aspect: f32) -> Self {
        let state = options.initial_state();
        let camera = Camera::from_options(options, aspect, &state);
        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(&camera);
        Self {
            camera,
            uniform,
            controls_enabled: false,
            materials: FxHashMap::default(),
            redraw: RedrawRequest::default(),
            counters: RenderCounters::default(),
        }
    }

    /// Register a material so color swaps can find it.
    #[must_use]
    pub fn with_material(mut self, name: &str, linear_rgb: [f32; 3]) -> Self {
        let _ = self.materials.insert(name.to_owned(), linear_rgb);
        self
    }

    /// The camera as of the last recompute.
    #[must_use]
    pub const fn camera(&self) -> &Camera {
        &self.camera
    }

    /// The uniform block as of the last recompute.
    #[must_use]
    pub const fn uniform(&self) -> &CameraUniform {
        &self.uniform
    }

    /// Whether the renderer's camera currently accepts orbit input.
    #[must_use]
    pub const fn controls_enabled(&self) -> bool {
        self.controls_enabled
    }

    /// Current linear color of a material.
    #[must_use]
    pub fn material_color(&self, name: &str) -> Option<[f32; 3]> {
        self.materials.get(name).copied()
    }

    /// Work performed so far.
    #[must_use]
    pub const fn counters(&self) -> RenderCounters {
        self.counters
    }
}

impl Renderer for HeadlessRenderer {
    fn set_dirty(&mut self) {
        self.redraw.request();
        self.counters.redraw_requests += 1;
    }

    fn position_target_updated(&mut self, camera: &CameraState, force: bool) {
        let moved = self.camera.sync_from_state(camera);
        if moved || force {
            self.uniform.update_view_proj(&self.camera);
            self.counters.recomputes += 1;
        }
    }

    fn set_controls_enabled(&mut self, enabled: bool) {
        self.controls_enabled = enabled;
    }

    fn set_material_color(
        &mut self,
        material: &str,
        linear_rgb: [f32; 3],
    ) -> bool {
        match self.materials.get_mut(material) {
            Some(color) => {
                *color = linear_rgb;
                self.redraw.request();
                true
            }
            None => false,
        }
    }

    fn render_frame(&mut self) {
        if self.redraw.take() {
            self.counters.frames += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    #[test]
    fn frames_only_drawn_on_request() {
        let mut renderer = HeadlessRenderer::new(1.0);
        renderer.render_frame();
        assert_eq!(renderer.counters().frames, 0);
        renderer.set_dirty();
        renderer.set_dirty();
        renderer.render_frame();
        renderer.render_frame();
        assert_eq!(renderer.counters().frames, 1);
        assert_eq!(renderer.counters().redraw_requests, 2);
    }

    #[test]
    fn recompute_follows_camera_state() {
        let mut renderer = HeadlessRenderer::new(1.0);
        let state = CameraState::new(Vec3::new(1.0, 2.0, 3.0), Vec3::ZERO);
        renderer.position_target_updated(&state, false);
        assert_eq!(renderer.uniform().position, [1.0, 2.0, 3.0]);
        renderer.position_target_updated(&state, false);
        assert_eq!(renderer.counters().recomputes, 1);
        renderer.position_target_updated(&state, true);
        assert_eq!(renderer.counters().recomputes, 2);
    }

    #[test]
    fn unknown_material_is_rejected() {
        let mut renderer =
            HeadlessRenderer::new(1.0).with_material("Body", [1.0; 3]);
        assert!(!renderer.set_material_color("Missing", [0.0; 3]));
        assert!(renderer.set_material_color("Body", [0.5; 3]));
        assert_eq!(renderer.material_color("Body"), Some([0.5; 3]));
    }
}
