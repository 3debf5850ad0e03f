//! Page host boundary.
//!
//! The page (sections, scroll position, affordance styling) is external.
//! [`PageHost`] lists the queries and mutations the choreography needs; the
//! in-memory [`memory::MemoryPage`] implements it for tests and the demo
//! binary, and the `web` feature implements it over the DOM.

/// In-memory page for tests and headless sessions.
pub mod memory;

/// Vertical extent of a page section in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionRect {
    /// Distance from the top of the document to the section's top edge.
    pub top: f32,
    /// Section height.
    pub height: f32,
}

impl SectionRect {
    /// Document offset of the bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// How a programmatic scroll should travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBehavior {
    /// Animated by the host.
    #[default]
    Smooth,
    /// Jump immediately.
    Instant,
}

/// Cursor affordance over the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    /// Platform default arrow.
    #[default]
    Default,
    /// Open hand, signalling the scene can be dragged.
    Grab,
}

impl Cursor {
    /// CSS `cursor` keyword.
    #[must_use]
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Grab => "grab",
        }
    }
}

/// Queries and mutations consumed from the host page.
///
/// Lookups return `None` when the page lacks the element; callers treat
/// that as "this binding does nothing".
pub trait PageHost {
    /// Height of the visible viewport.
    fn viewport_height(&self) -> f32;

    /// Current vertical scroll offset of the document.
    fn scroll_y(&self) -> f32;

    /// Geometry of the element matching `selector`, in document coordinates.
    fn section_rect(&self, selector: &str) -> Option<SectionRect>;

    /// Scroll the document so its offset becomes `top`.
    fn scroll_to(&mut self, top: f32, behavior: ScrollBehavior);

    /// Show or hide the narrative sections layered over the scene.
    fn set_narrative_visible(&mut self, visible: bool);

    /// Route pointer events to (`true`) or past (`false`) the render surface.
    fn set_pointer_events(&mut self, enabled: bool);

    /// Set the page cursor.
    fn set_cursor(&mut self, cursor: Cursor);

    /// Show or hide the "exit customizer" affordance.
    fn set_exit_visible(&mut self, visible: bool);

    /// Show or hide the customizer panel (color buttons).
    fn set_customizer_visible(&mut self, visible: bool);
}
