use glam::Vec3;

use super::trigger::ScrollPosition;
use crate::camera::state::CameraField;
use crate::error::VantageError;
use crate::host::SectionRect;
use crate::options::SegmentConfig;

/// One declarative keyframe: drive `field` to `end_value` as the page
/// scrolls through the bound section's range.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationSegment {
    /// Camera vector this segment writes.
    pub field: CameraField,
    /// Value reached at progress 1.
    pub end_value: Vec3,
    /// Selector of the section the range is measured against.
    pub section: String,
    /// Where progress 0 lies.
    pub start: ScrollPosition,
    /// Where progress 1 lies.
    pub end: ScrollPosition,
    /// Scrubbed segments follow scroll both ways; unscrubbed ones jump to
    /// `end_value` as soon as their start is crossed.
    pub scrub: bool,
}

impl AnimationSegment {
    /// A scrubbed segment spanning the section's whole pass through the
    /// viewport (`"top bottom"` to `"bottom top"`).
    #[must_use]
    pub fn new(
        field: CameraField,
        end_value: Vec3,
        section: impl Into<String>,
    ) -> Self {
        Self {
            field,
            end_value,
            section: section.into(),
            start: ScrollPosition::ENTER,
            end: ScrollPosition::LEAVE,
            scrub: true,
        }
    }

    /// Replace the scroll range, parsing both positions.
    pub fn with_range(mut self, start: &str, end: &str) -> Result<Self, VantageError> {
        self.start = start.parse()?;
        self.end = end.parse()?;
        self.validate()?;
        Ok(self)
    }

    /// Set whether the segment is scrubbed.
    #[must_use]
    pub fn scrubbed(mut self, scrub: bool) -> Self {
        self.scrub = scrub;
        self
    }

    /// Build a segment from its options entry.
    pub fn from_config(config: &SegmentConfig) -> Result<Self, VantageError> {
        Self::new(
            config.field,
            Vec3::from_array(config.end_value),
            config.section.as_str(),
        )
        .scrubbed(config.scrub)
        .with_range(&config.start, &config.end)
    }

    /// Reject ranges that can never resolve.
    pub fn validate(&self) -> Result<(), VantageError> {
        if self.start.is_relative() {
            return Err(VantageError::InvalidScrollPosition(format!(
                "segment on `{}` starts at relative position `{}`; only ends \
                 may be relative",
                self.section, self.start
            )));
        }
        Ok(())
    }

    /// Resolve the scroll range against the section's current geometry.
    #[must_use]
    pub fn resolve(
        &self,
        section: SectionRect,
        viewport_height: f32,
    ) -> Option<ResolvedRange> {
        let start = self.start.resolve(section, viewport_height, None)?;
        let end = self.end.resolve(section, viewport_height, Some(start))?;
        Some(ResolvedRange { start, end })
    }
}

/// A segment's range in document scroll offsets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedRange {
    /// Offset at progress 0.
    pub start: f32,
    /// Offset at progress 1.
    pub end: f32,
}

impl ResolvedRange {
    /// Whether the range collapses to a single offset (or is inverted).
    #[must_use]
    pub fn is_instant(&self) -> bool {
        self.end - self.start <= f32::EPSILON
    }

    /// Fractional progress through the range, clamped to `[0, 1]`.
    ///
    /// `None` before the start: the segment has not been reached and writes
    /// nothing. A zero-length range jumps straight to 1.
    #[must_use]
    pub fn progress(&self, scroll_y: f32) -> Option<f32> {
        if scroll_y < self.start {
            return None;
        }
        if self.is_instant() {
            return Some(1.0);
        }
        Some(((scroll_y - self.start) / (self.end - self.start)).clamp(0.0, 1.0))
    }
}
