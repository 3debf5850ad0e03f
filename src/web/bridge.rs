//! [`Renderer`] backed by a JavaScript viewer object.

use wasm_bindgen::prelude::*;

use crate::camera::state::CameraState;
use crate::render::scheduler::RedrawRequest;
use crate::render::Renderer;

#[wasm_bindgen]
extern "C" {
    /// The JS-side viewer. Must expose `setDirty()`,
    /// `positionTargetUpdated(px, py, pz, tx, ty, tz, force)`,
    /// `setControlsEnabled(enabled)`, `setMaterialColor(name, r, g, b)` and
    /// `renderFrame()`.
    ///
    /// `renderFrame()` is only called on ticks that followed a
    /// `setDirty()`, at most once per tick.
    pub type ViewerBridge;

    #[wasm_bindgen(method, js_name = setDirty)]
    fn set_dirty(this: &ViewerBridge);

    #[wasm_bindgen(method, js_name = positionTargetUpdated)]
    fn position_target_updated(
        this: &ViewerBridge,
        px: f32,
        py: f32,
        pz: f32,
        tx: f32,
        ty: f32,
        tz: f32,
        force: bool,
    );

    #[wasm_bindgen(method, js_name = setControlsEnabled)]
    fn set_controls_enabled(this: &ViewerBridge, enabled: bool);

    #[wasm_bindgen(method, js_name = setMaterialColor)]
    fn set_material_color(
        this: &ViewerBridge,
        name: &str,
        r: f32,
        g: f32,
        b: f32,
    ) -> bool;

    #[wasm_bindgen(method, js_name = renderFrame)]
    fn render_frame(this: &ViewerBridge);
}

/// Forwards renderer calls to a [`ViewerBridge`].
pub struct JsRenderer {
    bridge: ViewerBridge,
    redraw: RedrawRequest,
}

impl JsRenderer {
    /// Wrap a JS viewer.
    #[must_use]
    pub fn new(bridge: ViewerBridge) -> Self {
        Self {
            bridge,
            redraw: RedrawRequest::default(),
        }
    }
}

impl Renderer for JsRenderer {
    fn set_dirty(&mut self) {
        self.redraw.request();
        self.bridge.set_dirty();
    }

    fn position_target_updated(&mut self, camera: &CameraState, force: bool) {
        let [px, py, pz] = camera.position.to_array();
        let [tx, ty, tz] = camera.target.to_array();
        self.bridge
            .position_target_updated(px, py, pz, tx, ty, tz, force);
    }

    fn set_controls_enabled(&mut self, enabled: bool) {
        self.bridge.set_controls_enabled(enabled);
    }

    fn set_material_color(
        &mut self,
        material: &str,
        linear_rgb: [f32; 3],
    ) -> bool {
        let [r, g, b] = linear_rgb;
        self.bridge.set_material_color(material, r, g, b)
    }

    fn render_frame(&mut self) {
        if self.redraw.take() {
            self.bridge.render_frame();
        }
    }
}
