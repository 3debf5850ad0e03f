//! Command dispatch for VantageEngine

use web_time::Instant;

use super::{VantageCommand, VantageEngine};
use crate::host::{PageHost, ScrollBehavior};
use crate::render::Renderer;
use crate::ui::UiAction;

impl<P: PageHost, R: Renderer> VantageEngine<P, R> {
    /// Execute a command.
    ///
    /// This is the single entry point for page events. `now` timestamps any
    /// hand-off tween the command starts.
    ///
    /// # Example
    ///
    /// ```ignore
    /// engine.page_mut().set_scroll(1200.0);
    /// engine.execute(VantageCommand::Scrolled, Instant::now());
    /// ```
    pub fn execute(&mut self, command: VantageCommand, now: Instant) {
        match command {
            VantageCommand::Scrolled => self.sync_to_scroll(),
            VantageCommand::Resized => {
                self.timeline.resolve(&self.page);
                self.sync_to_scroll();
            }
            VantageCommand::Click { selector } => {
                match self.options.bindings.lookup(&selector).cloned() {
                    Some(action) => action.execute(self, now),
                    None => log::debug!("no binding for `{selector}`"),
                }
            }
            VantageCommand::Ui(action) => action.execute(self, now),
            VantageCommand::Orbit { delta } => {
                let _ = self.controls.rotate(&mut self.ctx, delta);
            }
            VantageCommand::Pan { delta } => {
                let _ = self.controls.pan(&mut self.ctx, delta);
            }
            VantageCommand::Zoom { delta } => {
                let _ = self.controls.zoom(&mut self.ctx, delta);
            }
        }
    }

    fn enter_customizer(&mut self, now: Instant) {
        let transition = self.mode.enter(&self.ctx, now);
        self.apply_effects(&transition.effects);
    }

    fn exit_customizer(&mut self, now: Instant) {
        let return_to = self.timeline.evaluate(self.page.scroll_y());
        let transition = self.mode.exit(&mut self.ctx, &return_to, now);
        self.apply_effects(&transition.effects);
    }

    fn scroll_page_to(&mut self, top: f32) {
        self.page.scroll_to(top, ScrollBehavior::Smooth);
        // Hosts that jump synchronously won't fire a separate scroll event.
        self.sync_to_scroll();
    }

    fn apply_palette_color(&mut self, name: &str) {
        let Some(rgb) = self.options.palette.linear(name) else {
            log::warn!("palette has no usable color `{name}`");
            return;
        };
        let material = self.options.palette.material.as_str();
        if self.renderer.set_material_color(material, rgb) {
            self.ctx.dirty.mark_dirty();
        } else {
            log::warn!("material `{material}` not found");
        }
    }
}

// ── UiAction execution ──

impl UiAction {
    /// Execute this action on the given engine.
    pub fn execute<P: PageHost, R: Renderer>(
        self,
        engine: &mut VantageEngine<P, R>,
        now: Instant,
    ) {
        if let Some(top) = self.scroll_target(&engine.page) {
            engine.scroll_page_to(top);
            return;
        }
        match self {
            Self::EnterCustomizer => engine.enter_customizer(now),
            Self::ExitCustomizer => engine.exit_customizer(now),
            Self::SetColor { color } => engine.apply_palette_color(&color),
            // Scroll actions whose section is missing: already logged.
            Self::ScrollTo { .. } | Self::ScrollToTop => {}
        }
    }
}
