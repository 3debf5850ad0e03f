//! Time-based camera tweens with one slot per field.

use glam::Vec3;
use web_time::{Duration, Instant};

use crate::camera::state::CameraField;
use crate::context::ViewerContext;
use crate::util::easing::EasingFunction;

/// An eased, duration-based move of one camera field.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraTween {
    /// Field being driven.
    pub field: CameraField,
    /// Value at progress 0.
    pub from: Vec3,
    /// Value at progress 1.
    pub to: Vec3,
    /// When the tween started.
    pub start: Instant,
    /// Total duration.
    pub duration: Duration,
    /// Easing curve applied to linear time progress.
    pub easing: EasingFunction,
}

impl CameraTween {
    /// Linear time progress (0.0 to 1.0).
    #[inline]
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Whether the tween has reached its end at `now`.
    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    /// Field value at `now`. Exactly `to` once finished.
    #[must_use]
    pub fn value_at(&self, now: Instant) -> Vec3 {
        let t = self.progress(now);
        if t >= 1.0 {
            return self.to;
        }
        self.from.lerp(self.to, self.easing.evaluate(t))
    }
}

/// In-flight tweens, at most one per camera field.
///
/// Starting a tween on an occupied field replaces the old one (last request
/// wins), so two transitions can never compound motion on the same field.
#[derive(Debug, Clone, Default)]
pub struct TweenSlots {
    slots: [Option<CameraTween>; 2],
}

impl TweenSlots {
    /// Create empty slots.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start `tween`, cancelling whatever was running on its field.
    pub fn start(&mut self, tween: CameraTween) {
        let slot = &mut self.slots[tween.field.index()];
        if let Some(previous) = slot.as_ref() {
            log::debug!(
                "tween on {:?} overridden (was heading to {:?})",
                previous.field,
                previous.to
            );
        }
        *slot = Some(tween);
    }

    /// Whether no tween is running.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// The tween currently driving `field`.
    #[must_use]
    pub fn get(&self, field: CameraField) -> Option<&CameraTween> {
        self.slots[field.index()].as_ref()
    }

    /// Advance every tween to `now`, writing the camera and marking the
    /// context dirty on every tick. Finished tweens are removed after
    /// writing their exact end value.
    ///
    /// Returns `true` on the tick where the last running tween finished.
    pub fn tick(&mut self, ctx: &mut ViewerContext, now: Instant) -> bool {
        if self.is_idle() {
            return false;
        }
        for slot in &mut self.slots {
            let Some(tween) = slot.as_ref() else {
                continue;
            };
            ctx.camera.set(tween.field, tween.value_at(now));
            ctx.dirty.mark_dirty();
            if tween.is_finished(now) {
                *slot = None;
            }
        }
        self.is_idle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tween(field: CameraField, to: Vec3, start: Instant, ms: u64) -> CameraTween {
        CameraTween {
            field,
            from: Vec3::ZERO,
            to,
            start,
            duration: Duration::from_millis(ms),
            easing: EasingFunction::QuarticInOut,
        }
    }

    #[test]
    fn value_hits_exact_end() {
        let t0 = Instant::now();
        let tw = tween(CameraField::Position, Vec3::new(3.0, 1.7, -3.9), t0, 100);
        assert_eq!(tw.value_at(t0), Vec3::ZERO);
        assert_eq!(tw.value_at(t0 + Duration::from_millis(250)), tw.to);
        assert!(tw.is_finished(t0 + Duration::from_millis(100)));
    }

    #[test]
    fn zero_duration_is_instant() {
        let t0 = Instant::now();
        let tw = tween(CameraField::Target, Vec3::ONE, t0, 0);
        assert_eq!(tw.progress(t0), 1.0);
        assert_eq!(tw.value_at(t0), Vec3::ONE);
    }

    #[test]
    fn new_tween_replaces_old_on_same_field() {
        let t0 = Instant::now();
        let mut slots = TweenSlots::new();
        slots.start(tween(CameraField::Position, Vec3::ONE, t0, 100));
        slots.start(tween(CameraField::Position, Vec3::NEG_ONE, t0, 100));
        assert_eq!(
            slots.get(CameraField::Position).map(|t| t.to),
            Some(Vec3::NEG_ONE)
        );
        assert!(slots.get(CameraField::Target).is_none());
    }

    #[test]
    fn tick_writes_marks_and_reports_completion() {
        let t0 = Instant::now();
        let mut ctx = ViewerContext::default();
        let _ = ctx.dirty.consume_if_dirty();
        let mut slots = TweenSlots::new();
        slots.start(tween(CameraField::Position, Vec3::ONE, t0, 100));
        slots.start(tween(CameraField::Target, Vec3::NEG_ONE, t0, 200));

        assert!(!slots.tick(&mut ctx, t0 + Duration::from_millis(50)));
        assert!(ctx.dirty.consume_if_dirty());

        assert!(!slots.tick(&mut ctx, t0 + Duration::from_millis(150)));
        assert_eq!(ctx.camera.position, Vec3::ONE);
        assert!(slots.get(CameraField::Position).is_none());

        assert!(slots.tick(&mut ctx, t0 + Duration::from_millis(200)));
        assert_eq!(ctx.camera.target, Vec3::NEG_ONE);
        assert!(slots.is_idle());
        assert!(!slots.tick(&mut ctx, t0 + Duration::from_millis(300)));
    }
}
