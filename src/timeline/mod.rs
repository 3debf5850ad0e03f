//! Scroll-driven camera timeline.
//!
//! A [`ScrollTimeline`] is an ordered list of [`AnimationSegment`]s, each
//! bound to a page section's scroll range. The camera pose is a pure
//! function of the scroll offset: segments are folded in declaration order,
//! each active one overwriting its field with an interpolation from the
//! value that field held where the segment begins. Because nothing depends
//! on the path taken to reach an offset, scrubbing backward retraces the
//! forward path exactly.

/// Segment declarations and resolved scroll ranges.
pub mod segment;
pub mod trigger;

use glam::Vec3;

pub use segment::{AnimationSegment, ResolvedRange};
pub use trigger::{Edge, Length, ScrollPosition};

use crate::camera::state::CameraState;
use crate::context::ViewerContext;
use crate::error::VantageError;
use crate::host::PageHost;

/// A segment's page-dependent data, recomputed on every resize.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ResolvedSegment {
    range: ResolvedRange,
    /// Field value at the segment's start offset.
    from: Vec3,
}

/// Ordered scroll-to-camera keyframes.
#[derive(Debug, Clone)]
pub struct ScrollTimeline {
    base: CameraState,
    segments: Vec<AnimationSegment>,
    /// Parallel to `segments`; `None` for sections missing from the page.
    resolved: Vec<Option<ResolvedSegment>>,
}

impl ScrollTimeline {
    /// Bind `segments` (in declaration order) on top of the viewer's initial
    /// camera pose. Ranges stay unresolved until [`resolve`](Self::resolve).
    pub fn bind(
        base: CameraState,
        segments: Vec<AnimationSegment>,
    ) -> Result<Self, VantageError> {
        for segment in &segments {
            segment.validate()?;
        }
        let resolved = vec![None; segments.len()];
        Ok(Self {
            base,
            segments,
            resolved,
        })
    }

    /// The declared segments.
    #[must_use]
    pub fn segments(&self) -> &[AnimationSegment] {
        &self.segments
    }

    /// The initial camera pose segments interpolate from.
    #[must_use]
    pub const fn base(&self) -> &CameraState {
        &self.base
    }

    /// Resolved range of segment `index`, if its section exists.
    #[must_use]
    pub fn resolved_range(&self, index: usize) -> Option<ResolvedRange> {
        self.resolved
            .get(index)
            .copied()
            .flatten()
            .map(|r| r.range)
    }

    /// Recompute every segment's scroll range from current page geometry.
    /// Call on startup and whenever the page is resized.
    ///
    /// Segments whose section is absent are left unresolved and never write.
    pub fn resolve<P: PageHost + ?Sized>(&mut self, page: &P) {
        let viewport_height = page.viewport_height();
        for i in 0..self.segments.len() {
            let segment = &self.segments[i];
            let Some(rect) = page.section_rect(&segment.section) else {
                log::warn!(
                    "timeline segment {i}: section `{}` not found; segment \
                     disabled",
                    segment.section
                );
                self.resolved[i] = None;
                continue;
            };
            let Some(range) = segment.resolve(rect, viewport_height) else {
                self.resolved[i] = None;
                continue;
            };
            // Earlier segments are already resolved, so the fold up to `i`
            // gives the field's value where this segment takes over.
            let from = self.fold(i, range.start).get(segment.field);
            log::debug!(
                "timeline segment {i}: {:?} on `{}` over [{:.1}, {:.1}]",
                segment.field,
                segment.section,
                range.start,
                range.end
            );
            self.resolved[i] = Some(ResolvedSegment { range, from });
        }
    }

    /// Camera pose produced by segments `0..upto` at `scroll_y`.
    fn fold(&self, upto: usize, scroll_y: f32) -> CameraState {
        let mut state = self.base;
        for (segment, resolved) in
            self.segments.iter().zip(&self.resolved).take(upto)
        {
            let Some(resolved) = resolved else {
                continue;
            };
            let Some(progress) = resolved.range.progress(scroll_y) else {
                continue;
            };
            let value = if segment.scrub {
                resolved.from.lerp(segment.end_value, progress)
            } else {
                segment.end_value
            };
            state.set(segment.field, value);
        }
        state
    }

    /// Camera pose for a scroll offset. Pure: the same offset always yields
    /// the same pose regardless of scroll history.
    #[must_use]
    pub fn evaluate(&self, scroll_y: f32) -> CameraState {
        self.fold(self.segments.len(), scroll_y)
    }

    /// Write the pose for `scroll_y` into the context, marking it dirty if
    /// position or target changed. Returns whether anything changed.
    pub fn apply(&self, ctx: &mut ViewerContext, scroll_y: f32) -> bool {
        let next = self.evaluate(scroll_y);
        if !next.pose_differs(&ctx.camera) {
            return false;
        }
        if log::log_enabled!(log::Level::Trace) {
            let active: Vec<usize> = self.active_segments(scroll_y).collect();
            log::trace!("scroll {scroll_y:.1}: active segments {active:?}");
        }
        ctx.camera.position = next.position;
        ctx.camera.target = next.target;
        ctx.dirty.mark_dirty();
        true
    }

    /// Indices of segments currently inside their range.
    pub fn active_segments(
        &self,
        scroll_y: f32,
    ) -> impl Iterator<Item = usize> + '_ {
        self.resolved.iter().enumerate().filter_map(move |(i, r)| {
            let range = r.as_ref()?.range;
            (scroll_y >= range.start && scroll_y <= range.end).then_some(i)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::state::CameraField;
    use crate::host::memory::MemoryPage;

    const EPS: f32 = 1e-5;

    fn base() -> CameraState {
        CameraState::new(Vec3::new(4.0, 1.0, 4.0), Vec3::ZERO)
    }

    fn timeline(segments: Vec<AnimationSegment>) -> ScrollTimeline {
        let page = MemoryPage::four_sections(800.0);
        let mut timeline = ScrollTimeline::bind(base(), segments).unwrap();
        timeline.resolve(&page);
        timeline
    }

    fn seg(field: CameraField, end: Vec3, section: &str) -> AnimationSegment {
        AnimationSegment::new(field, end, section)
            .with_range("top bottom", "+=100%")
            .unwrap()
    }

    #[test]
    fn halfway_through_second_section() {
        let end = Vec3::new(0.61, 0.12, -3.04);
        let tl = timeline(vec![seg(CameraField::Position, end, ".second")]);
        let state = tl.evaluate(400.0);
        let expected = base().position.lerp(end, 0.5);
        assert!(state.position.abs_diff_eq(expected, EPS));
        assert_eq!(state.target, base().target);
    }

    #[test]
    fn before_and_after_range() {
        let end = Vec3::new(0.61, 0.12, -3.04);
        let tl = timeline(vec![seg(CameraField::Position, end, ".third")]);
        // .third resolves to [800, 1600]
        assert_eq!(tl.evaluate(300.0).position, base().position);
        assert_eq!(tl.evaluate(1600.0).position, end);
        assert_eq!(tl.evaluate(2400.0).position, end);
    }

    #[test]
    fn later_segment_starts_from_earlier_end() {
        let a = Vec3::new(1.0, 0.0, 0.0);
        let b = Vec3::new(3.0, 0.0, 0.0);
        let tl = timeline(vec![
            seg(CameraField::Position, a, ".second"),
            seg(CameraField::Position, b, ".third"),
        ]);
        // Halfway through .third: between a and b
        let state = tl.evaluate(1200.0);
        assert!(state.position.abs_diff_eq(Vec3::new(2.0, 0.0, 0.0), EPS));
    }

    #[test]
    fn overlapping_segments_last_declared_wins() {
        let first = Vec3::new(1.0, 1.0, 1.0);
        let second = Vec3::new(-1.0, -1.0, -1.0);
        let tl = timeline(vec![
            seg(CameraField::Target, first, ".second"),
            seg(CameraField::Target, second, ".second"),
        ]);
        assert_eq!(tl.evaluate(800.0).target, second);
        // The second segment's own start value is the base target
        let mid = tl.evaluate(400.0).target;
        assert!(mid.abs_diff_eq(base().target.lerp(second, 0.5), EPS));
    }

    #[test]
    fn path_independent_and_reversible() {
        let tl = timeline(vec![
            seg(CameraField::Position, Vec3::new(0.61, 0.12, -3.04), ".second"),
            seg(CameraField::Target, Vec3::new(-0.67, -0.21, 0.09), ".second"),
        ]);
        let direct = {
            let mut ctx = ViewerContext::new(base());
            let _ = tl.apply(&mut ctx, 600.0);
            ctx.camera
        };
        let stepped = {
            let mut ctx = ViewerContext::new(base());
            for s in [100.0, 250.0, 600.0] {
                let _ = tl.apply(&mut ctx, s);
            }
            ctx.camera
        };
        let scrubbed_back = {
            let mut ctx = ViewerContext::new(base());
            for s in [600.0, 790.0, 1500.0, 250.0, 600.0] {
                let _ = tl.apply(&mut ctx, s);
            }
            ctx.camera
        };
        assert_eq!(direct, stepped);
        assert_eq!(direct, scrubbed_back);
    }

    #[test]
    fn unscrubbed_segment_jumps_on_entry() {
        let end = Vec3::new(9.0, 9.0, 9.0);
        let tl = timeline(vec![
            seg(CameraField::Position, end, ".third").scrubbed(false)
        ]);
        assert_eq!(tl.evaluate(799.0).position, base().position);
        assert_eq!(tl.evaluate(801.0).position, end);
    }

    #[test]
    fn zero_length_range_jumps_at_its_start() {
        let end = Vec3::new(-2.0, 0.5, 1.0);
        let tl = timeline(vec![AnimationSegment::new(
            CameraField::Position,
            end,
            ".third",
        )
        .with_range("top top", "+=0px")
        .unwrap()]);
        assert_eq!(
            tl.resolved_range(0),
            Some(ResolvedRange {
                start: 1600.0,
                end: 1600.0
            })
        );
        assert_eq!(tl.evaluate(1599.0).position, base().position);
        assert_eq!(tl.evaluate(1600.0).position, end);
        assert_eq!(tl.evaluate(2000.0).position, end);
    }

    #[test]
    fn missing_section_is_a_no_op() {
        let tl = timeline(vec![seg(
            CameraField::Position,
            Vec3::ONE,
            ".does-not-exist",
        )]);
        assert_eq!(tl.resolved_range(0), None);
        assert_eq!(tl.evaluate(1000.0), base());
    }

    #[test]
    fn apply_marks_dirty_only_on_change() {
        let tl = timeline(vec![seg(CameraField::Position, Vec3::ONE, ".second")]);
        let mut ctx = ViewerContext::new(base());
        let _ = ctx.dirty.consume_if_dirty();
        assert!(!tl.apply(&mut ctx, 0.0));
        assert!(!ctx.dirty.is_dirty());
        assert!(tl.apply(&mut ctx, 200.0));
        assert!(ctx.dirty.is_dirty());
    }

    #[test]
    fn resize_re_resolves_ranges() {
        let mut page = MemoryPage::four_sections(800.0);
        let mut tl = ScrollTimeline::bind(
            base(),
            vec![seg(CameraField::Position, Vec3::ONE, ".third")],
        )
        .unwrap();
        tl.resolve(&page);
        assert_eq!(
            tl.resolved_range(0),
            Some(ResolvedRange {
                start: 800.0,
                end: 1600.0
            })
        );
        page.set_viewport_height(400.0);
        tl.resolve(&page);
        assert_eq!(
            tl.resolved_range(0),
            Some(ResolvedRange {
                start: 1200.0,
                end: 1600.0
            })
        );
    }

    #[test]
    fn active_segments_follow_scroll() {
        let tl = timeline(vec![
            seg(CameraField::Position, Vec3::ONE, ".second"),
            seg(CameraField::Position, Vec3::ONE, ".third"),
        ]);
        assert_eq!(tl.active_segments(400.0).collect::<Vec<_>>(), vec![0]);
        assert_eq!(tl.active_segments(800.0).collect::<Vec<_>>(), vec![0, 1]);
        assert_eq!(tl.active_segments(2000.0).count(), 0);
    }
}
