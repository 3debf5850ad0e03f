//! Dirty-flag render scheduling.
//!
//! Mutators call [`DirtyFlag::mark_dirty`] as often as they like; the render
//! loop calls [`FrameScheduler::pre_frame`] exactly once per tick. Any number
//! of marks between two ticks collapse into a single matrix recompute and a
//! single redraw.

use super::Renderer;
use crate::context::ViewerContext;

/// Generation-counted "camera changed since last render" flag.
///
/// Marking bumps a generation; consuming records the generation it saw. A
/// mark that lands after the snapshot leaves the two out of step again, so
/// the next tick still observes dirty and no update is ever lost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirtyFlag {
    /// Monotonically increasing generation; bumped on any mutation.
    generation: u64,
    /// Generation that was last consumed by the render loop.
    consumed: u64,
}

impl Default for DirtyFlag {
    fn default() -> Self {
        Self::new()
    }
}

impl DirtyFlag {
    /// Create a flag that starts dirty, so the first frame always renders.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            generation: 1,
            consumed: 0,
        }
    }

    /// Record that the camera (or anything the renderer samples) changed.
    #[inline]
    pub fn mark_dirty(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    /// Whether a mark is pending.
    #[inline]
    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        self.generation != self.consumed
    }

    /// Return whether work is needed, clearing the flag if so.
    pub fn consume_if_dirty(&mut self) -> bool {
        if !self.is_dirty() {
            return false;
        }
        self.consumed = self.generation;
        true
    }

    /// Current generation, for diagnostics.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }
}

/// One-shot "draw on the next frame" latch for [`Renderer`] implementations.
///
/// Any number of requests between two frames yield a single draw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RedrawRequest {
    pending: bool,
}

impl RedrawRequest {
    /// Ask for a draw on the next frame.
    #[inline]
    pub fn request(&mut self) {
        self.pending = true;
    }

    /// Whether a draw is waiting.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending
    }

    /// Return whether a draw was requested, clearing the request.
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }
}

/// Counters describing how much work the scheduler let through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Pre-frame hooks run.
    pub ticks: u64,
    /// Ticks that found the flag dirty and recomputed camera matrices.
    pub recomputes: u64,
}

/// Explicit pre-frame step: consume the flag, then recompute camera matrices,
/// then request a redraw. Matrices are always up to date before the renderer
/// samples them.
#[derive(Debug, Clone, Default)]
pub struct FrameScheduler {
    stats: FrameStats,
}

impl FrameScheduler {
    /// Create a scheduler with zeroed statistics.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the pre-frame hook. Returns `true` when the tick was dirty and
    /// the renderer has been told to recompute and redraw.
    pub fn pre_frame<R: Renderer + ?Sized>(
        &mut self,
        ctx: &mut ViewerContext,
        renderer: &mut R,
    ) -> bool {
        self.stats.ticks += 1;
        if !ctx.dirty.consume_if_dirty() {
            return false;
        }
        renderer.position_target_updated(&ctx.camera, true);
        renderer.set_dirty();
        self.stats.recomputes += 1;
        log::trace!(
            "pre-frame: recompute #{} at generation {}",
            self.stats.recomputes,
            ctx.dirty.generation()
        );
        true
    }

    /// Statistics gathered so far.
    #[must_use]
    pub const fn stats(&self) -> FrameStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::headless::HeadlessRenderer;

    #[test]
    fn starts_dirty() {
        let mut flag = DirtyFlag::new();
        assert!(flag.consume_if_dirty());
        assert!(!flag.consume_if_dirty());
    }

    #[test]
    fn marks_coalesce_into_one_consume() {
        let mut flag = DirtyFlag::new();
        let _ = flag.consume_if_dirty();
        for _ in 0..17 {
            flag.mark_dirty();
        }
        assert!(flag.consume_if_dirty());
        assert!(!flag.consume_if_dirty());
        assert!(!flag.consume_if_dirty());
        flag.mark_dirty();
        assert!(flag.consume_if_dirty());
    }

    #[test]
    fn mark_after_consume_is_not_lost() {
        let mut flag = DirtyFlag::new();
        assert!(flag.consume_if_dirty());
        // A mutation arriving while the consumer is recomputing
        flag.mark_dirty();
        assert!(flag.is_dirty());
        assert!(flag.consume_if_dirty());
    }

    #[test]
    fn redraw_requests_collapse_into_one_draw() {
        let mut redraw = RedrawRequest::default();
        assert!(!redraw.take());
        for _ in 0..5 {
            redraw.request();
        }
        assert!(redraw.is_pending());
        assert!(redraw.take());
        assert!(!redraw.take());
        assert!(!redraw.is_pending());
    }

    #[test]
    fn pre_frame_recomputes_once_per_dirty_tick() {
        let mut ctx = ViewerContext::default();
        let mut renderer = HeadlessRenderer::new(1.0);
        let mut scheduler = FrameScheduler::new();

        assert!(scheduler.pre_frame(&mut ctx, &mut renderer));
        ctx.camera.position.x += 1.0;
        ctx.dirty.mark_dirty();
        ctx.dirty.mark_dirty();
        ctx.dirty.mark_dirty();
        assert!(scheduler.pre_frame(&mut ctx, &mut renderer));
        assert!(!scheduler.pre_frame(&mut ctx, &mut renderer));

        assert_eq!(
            scheduler.stats(),
            FrameStats {
                ticks: 3,
                recomputes: 2
            }
        );
        assert_eq!(renderer.counters().recomputes, 2);
        assert_eq!(renderer.camera().eye, ctx.camera.position);
    }
}
