//! The viewer engine: owns the camera context and routes page events to the
//! timeline, mode controller, orbit controls and renderer.
//!
//! A frame has three phases, always in this order:
//!
//! 1. [`frame`](VantageEngine::frame) advances hand-off tweens and applies
//!    any mode completion they trigger;
//! 2. the [`FrameScheduler`] consumes the dirty flag and has the renderer
//!    recompute camera matrices once;
//! 3. the renderer draws.
//!
//! Page events arrive between frames through
//! [`execute`](VantageEngine::execute) and only ever mutate the context.

mod command;
mod input;
mod options;

pub use command::VantageCommand;
use web_time::Instant;

use crate::camera::controller::OrbitControls;
use crate::camera::state::CameraState;
use crate::context::ViewerContext;
use crate::error::VantageError;
use crate::host::PageHost;
use crate::mode::{CustomizerPreset, Mode, ModeController, ModeEffect};
use crate::options::Options;
use crate::render::scheduler::{FrameScheduler, FrameStats};
use crate::render::Renderer;
use crate::timeline::{AnimationSegment, ScrollTimeline};

/// Build the scroll timeline described by `options`.
fn build_timeline(options: &Options) -> Result<ScrollTimeline, VantageError> {
    let segments = options
        .timeline
        .segments
        .iter()
        .map(AnimationSegment::from_config)
        .collect::<Result<Vec<_>, _>>()?;
    ScrollTimeline::bind(options.camera.initial_state(), segments)
}

/// Scroll-choreographed camera engine over a page host and a renderer.
pub struct VantageEngine<P: PageHost, R: Renderer> {
    ctx: ViewerContext,
    page: P,
    renderer: R,
    timeline: ScrollTimeline,
    mode: ModeController,
    controls: OrbitControls,
    scheduler: FrameScheduler,
    options: Options,
}

impl<P: PageHost, R: Renderer> VantageEngine<P, R> {
    /// Bind the configured choreography to `page` and `renderer`.
    ///
    /// The camera starts at the pose for the page's current scroll offset,
    /// with orbit input disabled. Fails only on malformed scroll positions
    /// in `options`.
    pub fn new(
        options: Options,
        page: P,
        mut renderer: R,
    ) -> Result<Self, VantageError> {
        let mut timeline = build_timeline(&options)?;
        timeline.resolve(&page);

        let mut ctx = ViewerContext::new(*timeline.base());
        let _ = timeline.apply(&mut ctx, page.scroll_y());
        renderer.set_controls_enabled(false);

        log::info!(
            "vantage engine ready: {} segments, scroll {:.0}",
            timeline.segments().len(),
            page.scroll_y()
        );

        Ok(Self {
            ctx,
            page,
            renderer,
            timeline,
            mode: ModeController::new(CustomizerPreset::from(&options.customizer)),
            controls: OrbitControls::new(&options.camera),
            scheduler: FrameScheduler::new(),
            options,
        })
    }

    /// Render tick: advance tweens, recompute if dirty, draw.
    pub fn frame(&mut self, now: Instant) {
        let transition = self.mode.tick(&mut self.ctx, now);
        self.apply_effects(&transition.effects);
        let _ = self.scheduler.pre_frame(&mut self.ctx, &mut self.renderer);
        self.renderer.render_frame();
    }

    /// Re-sample the timeline at the page's scroll offset. Only the
    /// presentation mode follows scroll.
    fn sync_to_scroll(&mut self) {
        if !self.mode.mode().is_scroll_driven() {
            return;
        }
        let _ = self.timeline.apply(&mut self.ctx, self.page.scroll_y());
    }

    /// Apply mode side effects to the page and renderer, in order.
    fn apply_effects(&mut self, effects: &[ModeEffect]) {
        for effect in effects {
            log::debug!("mode effect: {effect:?}");
            match *effect {
                ModeEffect::SetNarrativeVisible(visible) => {
                    self.page.set_narrative_visible(visible);
                }
                ModeEffect::SetPointerEvents(enabled) => {
                    self.page.set_pointer_events(enabled);
                }
                ModeEffect::SetCursor(cursor) => self.page.set_cursor(cursor),
                ModeEffect::SetControlsEnabled(enabled) => {
                    self.renderer.set_controls_enabled(enabled);
                }
                ModeEffect::SetExitVisible(visible) => {
                    self.page.set_exit_visible(visible);
                }
                ModeEffect::SetCustomizerVisible(visible) => {
                    self.page.set_customizer_visible(visible);
                }
                // The page may have scrolled during the return tween.
                ModeEffect::Completed(Mode::Presentation) => self.sync_to_scroll(),
                ModeEffect::Completed(_) => {}
            }
        }
    }
}

// ── Accessors ──

impl<P: PageHost, R: Renderer> VantageEngine<P, R> {
    /// Current control mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode.mode()
    }

    /// The shared camera state.
    #[must_use]
    pub fn camera(&self) -> &CameraState {
        &self.ctx.camera
    }

    /// Camera state plus dirty flag.
    #[must_use]
    pub fn context(&self) -> &ViewerContext {
        &self.ctx
    }

    /// The page host.
    #[must_use]
    pub fn page(&self) -> &P {
        &self.page
    }

    /// Mutable page host, e.g. to move the scroll offset before sending
    /// [`VantageCommand::Scrolled`].
    pub fn page_mut(&mut self) -> &mut P {
        &mut self.page
    }

    /// The renderer.
    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// The bound scroll timeline.
    #[must_use]
    pub fn timeline(&self) -> &ScrollTimeline {
        &self.timeline
    }

    /// The mode state machine.
    #[must_use]
    pub fn mode_controller(&self) -> &ModeController {
        &self.mode
    }

    /// Active options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Pre-frame statistics.
    #[must_use]
    pub fn frame_stats(&self) -> FrameStats {
        self.scheduler.stats()
    }
}
