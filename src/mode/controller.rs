use glam::Vec3;
use web_time::{Duration, Instant};

use super::tween::{CameraTween, TweenSlots};
use crate::camera::state::{CameraField, CameraState};
use crate::context::ViewerContext;
use crate::host::Cursor;
use crate::options::CustomizerOptions;
use crate::util::easing::EasingFunction;

/// Who controls the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Scroll drives the camera; orbit input is off.
    #[default]
    Presentation,
    /// Tweening toward the customizer preset.
    TransitioningToInteractive,
    /// The user orbits freely; scroll no longer moves the camera.
    Interactive,
    /// Tweening back to the pose for the current scroll offset.
    TransitioningToPresentation,
}

impl Mode {
    /// Whether scroll events should drive the camera.
    #[must_use]
    pub const fn is_scroll_driven(self) -> bool {
        matches!(self, Self::Presentation)
    }

    /// Whether a hand-off tween is in flight.
    #[must_use]
    pub const fn is_transitioning(self) -> bool {
        matches!(
            self,
            Self::TransitioningToInteractive | Self::TransitioningToPresentation
        )
    }
}

/// A side effect requested by a mode transition, applied by the engine to
/// the page and renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeEffect {
    /// Show or hide the narrative sections.
    SetNarrativeVisible(bool),
    /// Route pointer events to the render surface or past it.
    SetPointerEvents(bool),
    /// Change the page cursor.
    SetCursor(Cursor),
    /// The renderer's orbit input was enabled or disabled. The shared
    /// camera state has already been updated.
    SetControlsEnabled(bool),
    /// Show or hide the exit affordance.
    SetExitVisible(bool),
    /// Show or hide the customizer panel.
    SetCustomizerVisible(bool),
    /// A hand-off tween finished and the given mode is now settled.
    Completed(Mode),
}

/// Result of a transition function: the mode afterwards plus the effects to
/// apply, in order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModeTransition {
    /// Mode after the transition.
    pub mode: Mode,
    /// Effects to apply, in order.
    pub effects: Vec<ModeEffect>,
}

impl ModeTransition {
    fn unchanged(mode: Mode) -> Self {
        Self {
            mode,
            effects: Vec::new(),
        }
    }

    /// Whether the call changed nothing.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.effects.is_empty()
    }
}

/// Customizer pose and hand-off timings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CustomizerPreset {
    /// Eye position inside the customizer.
    pub position: Vec3,
    /// Look-at target inside the customizer.
    pub target: Vec3,
    /// Duration of the tween into the customizer.
    pub enter_duration: Duration,
    /// Duration of the tween back to presentation.
    pub exit_duration: Duration,
    /// Easing for both tweens.
    pub easing: EasingFunction,
}

impl From<&CustomizerOptions> for CustomizerPreset {
    fn from(options: &CustomizerOptions) -> Self {
        Self {
            position: Vec3::from_array(options.position),
            target: Vec3::from_array(options.target),
            enter_duration: Duration::from_millis(options.enter_duration_ms),
            exit_duration: Duration::from_millis(options.exit_duration_ms),
            easing: options.easing,
        }
    }
}

/// Finite-state machine arbitrating presentation and interactive control.
///
/// Transition functions mutate the shared camera only through tweens and
/// the controls flag, and describe every other side effect as a
/// [`ModeEffect`]. Cancelling an in-flight hand-off is a plain replacement
/// of the tween slots.
#[derive(Debug, Clone)]
pub struct ModeController {
    mode: Mode,
    tweens: TweenSlots,
    preset: CustomizerPreset,
}

impl ModeController {
    /// Create a controller in presentation mode.
    #[must_use]
    pub fn new(preset: CustomizerPreset) -> Self {
        Self {
            mode: Mode::Presentation,
            tweens: TweenSlots::new(),
            preset,
        }
    }

    /// Current mode.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// The customizer preset.
    #[must_use]
    pub const fn preset(&self) -> &CustomizerPreset {
        &self.preset
    }

    /// Replace the preset. In-flight tweens keep their old destination.
    pub fn set_preset(&mut self, preset: CustomizerPreset) {
        self.preset = preset;
    }

    /// In-flight tweens.
    #[must_use]
    pub const fn tweens(&self) -> &TweenSlots {
        &self.tweens
    }

    fn start_tweens(
        &mut self,
        ctx: &ViewerContext,
        destination: &CameraState,
        duration: Duration,
        now: Instant,
    ) {
        for field in CameraField::ALL {
            self.tweens.start(CameraTween {
                field,
                from: ctx.camera.get(field),
                to: destination.get(field),
                start: now,
                duration,
                easing: self.preset.easing,
            });
        }
    }

    /// "Enter customizer": start tweening toward the preset.
    ///
    /// Accepted from `Presentation` and from `TransitioningToPresentation`
    /// (the return tween is overridden). Ignored while already entering or
    /// interactive.
    pub fn enter(&mut self, ctx: &ViewerContext, now: Instant) -> ModeTransition {
        match self.mode {
            Mode::Interactive | Mode::TransitioningToInteractive => {
                log::debug!("enter customizer ignored in {:?}", self.mode);
                return ModeTransition::unchanged(self.mode);
            }
            Mode::Presentation | Mode::TransitioningToPresentation => {}
        }

        let destination =
            CameraState::new(self.preset.position, self.preset.target);
        self.start_tweens(ctx, &destination, self.preset.enter_duration, now);
        self.mode = Mode::TransitioningToInteractive;
        log::info!("mode: entering customizer");

        ModeTransition {
            mode: self.mode,
            effects: vec![
                ModeEffect::SetNarrativeVisible(false),
                ModeEffect::SetPointerEvents(true),
                ModeEffect::SetCursor(Cursor::Grab),
            ],
        }
    }

    /// "Exit customizer": disable orbit input, then tween back to
    /// `return_to` (the pose for the page's current scroll offset).
    ///
    /// Controls are switched off synchronously before the return tween is
    /// created, so orbit input can never race the scripted move. Accepted
    /// from `Interactive` and from `TransitioningToInteractive` (the entry
    /// tween is overridden before it ever enables controls). Ignored while
    /// presenting or already exiting.
    pub fn exit(
        &mut self,
        ctx: &mut ViewerContext,
        return_to: &CameraState,
        now: Instant,
    ) -> ModeTransition {
        match self.mode {
            Mode::Presentation | Mode::TransitioningToPresentation => {
                log::debug!("exit customizer ignored in {:?}", self.mode);
                return ModeTransition::unchanged(self.mode);
            }
            Mode::Interactive | Mode::TransitioningToInteractive => {}
        }

        ctx.camera.controls_enabled = false;
        self.start_tweens(ctx, return_to, self.preset.exit_duration, now);
        self.mode = Mode::TransitioningToPresentation;
        log::info!("mode: leaving customizer");

        ModeTransition {
            mode: self.mode,
            effects: vec![
                ModeEffect::SetControlsEnabled(false),
                ModeEffect::SetExitVisible(false),
                ModeEffect::SetCustomizerVisible(false),
            ],
        }
    }

    /// Advance in-flight tweens to `now`. When the last one finishes, settle
    /// into the destination mode.
    pub fn tick(&mut self, ctx: &mut ViewerContext, now: Instant) -> ModeTransition {
        if !self.mode.is_transitioning() || !self.tweens.tick(ctx, now) {
            return ModeTransition::unchanged(self.mode);
        }

        match self.mode {
            Mode::TransitioningToInteractive => {
                self.mode = Mode::Interactive;
                ctx.camera.controls_enabled = true;
                log::info!("mode: interactive");
                ModeTransition {
                    mode: self.mode,
                    effects: vec![
                        ModeEffect::SetControlsEnabled(true),
                        ModeEffect::SetExitVisible(true),
                        ModeEffect::SetCustomizerVisible(true),
                        ModeEffect::Completed(Mode::Interactive),
                    ],
                }
            }
            Mode::TransitioningToPresentation => {
                self.mode = Mode::Presentation;
                log::info!("mode: presentation");
                ModeTransition {
                    mode: self.mode,
                    effects: vec![
                        ModeEffect::SetNarrativeVisible(true),
                        ModeEffect::SetPointerEvents(false),
                        ModeEffect::SetCursor(Cursor::Default),
                        ModeEffect::Completed(Mode::Presentation),
                    ],
                }
            }
            Mode::Presentation | Mode::Interactive => {
                ModeTransition::unchanged(self.mode)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> ModeController {
        ModeController::new(CustomizerPreset::from(&CustomizerOptions::default()))
    }

    fn scroll_pose() -> CameraState {
        CameraState::new(Vec3::new(2.03, 0.31, 3.9), Vec3::new(0.25, 0.12, 0.26))
    }

    fn ms(t0: Instant, ms: u64) -> Instant {
        t0 + Duration::from_millis(ms)
    }

    #[test]
    fn enter_reaches_preset_before_enabling_controls() {
        let t0 = Instant::now();
        let mut ctx = ViewerContext::new(scroll_pose());
        let mut mc = controller();

        let t = mc.enter(&ctx, t0);
        assert_eq!(t.mode, Mode::TransitioningToInteractive);
        assert!(t.effects.contains(&ModeEffect::SetCursor(Cursor::Grab)));

        let t = mc.tick(&mut ctx, ms(t0, 1000));
        assert!(t.is_noop());
        assert!(!ctx.camera.controls_enabled());

        let t = mc.tick(&mut ctx, ms(t0, 2000));
        assert_eq!(t.mode, Mode::Interactive);
        assert!(ctx.camera.controls_enabled());
        assert_eq!(ctx.camera.position, mc.preset().position);
        assert_eq!(ctx.camera.target, mc.preset().target);
        assert_eq!(
            t.effects.last(),
            Some(&ModeEffect::Completed(Mode::Interactive))
        );
    }

    #[test]
    fn settled_modes_do_not_tick() {
        let t0 = Instant::now();
        let mut ctx = ViewerContext::new(scroll_pose());
        let _ = ctx.dirty.consume_if_dirty();
        let mut mc = controller();
        assert!(!mc.mode().is_transitioning());
        assert!(mc.tick(&mut ctx, ms(t0, 5000)).is_noop());
        assert!(!ctx.dirty.is_dirty());

        let _ = mc.enter(&ctx, t0);
        assert!(mc.mode().is_transitioning());
        let _ = mc.tick(&mut ctx, ms(t0, 2000));
        assert!(!mc.mode().is_transitioning());
        assert!(mc.tick(&mut ctx, ms(t0, 4000)).is_noop());
        assert_eq!(ctx.camera.position, mc.preset().position);
    }

    #[test]
    fn exit_disables_controls_before_camera_moves() {
        let t0 = Instant::now();
        let mut ctx = ViewerContext::new(scroll_pose());
        let mut mc = controller();
        let _ = mc.enter(&ctx, t0);
        let _ = mc.tick(&mut ctx, ms(t0, 2000));
        assert!(ctx.camera.controls_enabled());

        let at_exit = ctx.camera;
        let t = mc.exit(&mut ctx, &scroll_pose(), ms(t0, 3000));
        assert_eq!(t.effects.first(), Some(&ModeEffect::SetControlsEnabled(false)));
        assert!(!ctx.camera.controls_enabled());
        // The return tween has not written anything yet
        assert!(!at_exit.pose_differs(&ctx.camera));

        let t = mc.tick(&mut ctx, ms(t0, 4000));
        assert_eq!(t.mode, Mode::Presentation);
        assert!(ctx.camera.pose_approx_eq(&scroll_pose(), 0.0));
    }

    #[test]
    fn exit_during_entry_overrides_and_never_enables_controls() {
        let t0 = Instant::now();
        let mut ctx = ViewerContext::new(scroll_pose());
        let mut mc = controller();
        let _ = mc.enter(&ctx, t0);
        let _ = mc.tick(&mut ctx, ms(t0, 300));
        let t = mc.exit(&mut ctx, &scroll_pose(), ms(t0, 400));
        assert_eq!(t.mode, Mode::TransitioningToPresentation);

        for step in (500..=3000).step_by(100) {
            let _ = mc.tick(&mut ctx, ms(t0, step));
            assert!(!ctx.camera.controls_enabled());
        }
        assert_eq!(mc.mode(), Mode::Presentation);
        assert!(ctx.camera.pose_approx_eq(&scroll_pose(), 0.0));
    }

    #[test]
    fn repeated_requests_are_ignored() {
        let t0 = Instant::now();
        let mut ctx = ViewerContext::new(scroll_pose());
        let mut mc = controller();
        assert!(mc.exit(&mut ctx, &scroll_pose(), t0).is_noop());
        let _ = mc.enter(&ctx, t0);
        assert!(mc.enter(&ctx, ms(t0, 10)).is_noop());
        assert_eq!(mc.mode(), Mode::TransitioningToInteractive);
    }

    #[test]
    fn re_entering_during_exit_overrides_return_tween() {
        let t0 = Instant::now();
        let mut ctx = ViewerContext::new(scroll_pose());
        let mut mc = controller();
        let _ = mc.enter(&ctx, t0);
        let _ = mc.tick(&mut ctx, ms(t0, 2000));
        let _ = mc.exit(&mut ctx, &scroll_pose(), ms(t0, 2100));
        let _ = mc.tick(&mut ctx, ms(t0, 2400));
        let t = mc.enter(&ctx, ms(t0, 2500));
        assert_eq!(t.mode, Mode::TransitioningToInteractive);
        assert_eq!(
            mc.tweens().get(CameraField::Position).map(|tw| tw.to),
            Some(mc.preset().position)
        );
        let _ = mc.tick(&mut ctx, ms(t0, 4500));
        assert_eq!(mc.mode(), Mode::Interactive);
    }
}
