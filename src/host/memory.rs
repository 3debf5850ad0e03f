use super::{Cursor, PageHost, ScrollBehavior, SectionRect};

/// An in-memory page: sections stacked top to bottom, a scroll offset, and
/// the visibility/cursor state the mode controller toggles.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryPage {
    viewport_height: f32,
    scroll_y: f32,
    sections: Vec<(String, SectionRect)>,
    narrative_visible: bool,
    pointer_events: bool,
    cursor: Cursor,
    exit_visible: bool,
    customizer_visible: bool,
    scroll_requests: Vec<(f32, ScrollBehavior)>,
}

impl MemoryPage {
    /// Create an empty page with the given viewport height.
    #[must_use]
    pub fn new(viewport_height: f32) -> Self {
        Self {
            viewport_height,
            scroll_y: 0.0,
            sections: Vec::new(),
            narrative_visible: true,
            pointer_events: false,
            cursor: Cursor::Default,
            exit_visible: false,
            customizer_visible: false,
            scroll_requests: Vec::new(),
        }
    }

    /// Four full-viewport sections (`.first` .. `.fourth`), the layout the
    /// default choreography is written against.
    #[must_use]
    pub fn four_sections(viewport_height: f32) -> Self {
        [".first", ".second", ".third", ".fourth"]
            .into_iter()
            .fold(Self::new(viewport_height), |page, selector| {
                page.with_section(selector, viewport_height)
            })
    }

    /// Append a section below the existing ones.
    #[must_use]
    pub fn with_section(mut self, selector: &str, height: f32) -> Self {
        let top = self.document_height();
        self.sections
            .push((selector.to_owned(), SectionRect { top, height }));
        self
    }

    /// Total height of all sections.
    #[must_use]
    pub fn document_height(&self) -> f32 {
        self.sections.last().map_or(0.0, |(_, rect)| rect.bottom())
    }

    /// Largest reachable scroll offset.
    #[must_use]
    pub fn max_scroll(&self) -> f32 {
        (self.document_height() - self.viewport_height).max(0.0)
    }

    /// Move the scroll offset as a user would, clamped to the document.
    pub fn set_scroll(&mut self, y: f32) {
        self.scroll_y = y.clamp(0.0, self.max_scroll());
    }

    /// Change the viewport height (a window resize).
    pub fn set_viewport_height(&mut self, height: f32) {
        self.viewport_height = height;
        self.scroll_y = self.scroll_y.min(self.max_scroll());
    }

    /// Whether the narrative sections are shown.
    #[must_use]
    pub const fn narrative_visible(&self) -> bool {
        self.narrative_visible
    }

    /// Whether the render surface receives pointer events.
    #[must_use]
    pub const fn pointer_events(&self) -> bool {
        self.pointer_events
    }

    /// Current cursor.
    #[must_use]
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Whether the exit affordance is shown.
    #[must_use]
    pub const fn exit_visible(&self) -> bool {
        self.exit_visible
    }

    /// Whether the customizer panel is shown.
    #[must_use]
    pub const fn customizer_visible(&self) -> bool {
        self.customizer_visible
    }

    /// Every programmatic scroll requested so far.
    #[must_use]
    pub fn scroll_requests(&self) -> &[(f32, ScrollBehavior)] {
        &self.scroll_requests
    }
}

impl PageHost for MemoryPage {
    fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    fn scroll_y(&self) -> f32 {
        self.scroll_y
    }

    fn section_rect(&self, selector: &str) -> Option<SectionRect> {
        self.sections
            .iter()
            .find(|(s, _)| s == selector)
            .map(|(_, rect)| *rect)
    }

    /// Smooth scrolls settle immediately: there is no compositor to animate
    /// them.
    fn scroll_to(&mut self, top: f32, behavior: ScrollBehavior) {
        self.scroll_requests.push((top, behavior));
        self.set_scroll(top);
    }

    fn set_narrative_visible(&mut self, visible: bool) {
        self.narrative_visible = visible;
    }

    fn set_pointer_events(&mut self, enabled: bool) {
        self.pointer_events = enabled;
    }

    fn set_cursor(&mut self, cursor: Cursor) {
        self.cursor = cursor;
    }

    fn set_exit_visible(&mut self, visible: bool) {
        self.exit_visible = visible;
    }

    fn set_customizer_visible(&mut self, visible: bool) {
        self.customizer_visible = visible;
    }
}
