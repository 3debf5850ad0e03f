//! [`PageHost`] over the browser DOM.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, ScrollToOptions, Window};

use crate::error::VantageError;
use crate::host::{Cursor, PageHost, ScrollBehavior, SectionRect};

/// Selectors of the page elements the mode controller restyles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomSelectors {
    /// Container of the narrative sections.
    pub narrative: String,
    /// Container of the render canvas.
    pub canvas: String,
    /// The "exit customizer" button.
    pub exit: String,
    /// The customizer panel.
    pub customizer: String,
}

impl Default for DomSelectors {
    fn default() -> Self {
        Self {
            narrative: ".container".to_owned(),
            canvas: "#webgi-canvas-container".to_owned(),
            exit: ".button--exit".to_owned(),
            customizer: ".customizer--container".to_owned(),
        }
    }
}

/// The live document.
pub struct DomPage {
    window: Window,
    document: Document,
    selectors: DomSelectors,
}

impl DomPage {
    /// Attach to the current window's document.
    pub fn new(selectors: DomSelectors) -> Result<Self, VantageError> {
        let window = web_sys::window()
            .ok_or_else(|| VantageError::Web("no global window".to_owned()))?;
        let document = window
            .document()
            .ok_or_else(|| VantageError::Web("window has no document".to_owned()))?;
        Ok(Self {
            window,
            document,
            selectors,
        })
    }

    /// The underlying document.
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    fn html_element(&self, selector: &str) -> Option<HtmlElement> {
        let element = self.document.query_selector(selector).ok().flatten();
        let Some(element) = element else {
            log::warn!("element `{selector}` not found");
            return None;
        };
        element.dyn_into::<HtmlElement>().ok()
    }

    fn set_style(&self, selector: &str, property: &str, value: &str) {
        if let Some(element) = self.html_element(selector) {
            if let Err(e) = element.style().set_property(property, value) {
                log::warn!("failed to set {property} on `{selector}`: {e:?}");
            }
        }
    }

    fn set_visibility(&self, selector: &str, visible: bool) {
        let value = if visible { "visible" } else { "hidden" };
        self.set_style(selector, "visibility", value);
    }
}

impl PageHost for DomPage {
    fn viewport_height(&self) -> f32 {
        self.window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or_default() as f32
    }

    fn scroll_y(&self) -> f32 {
        self.window.scroll_y().unwrap_or_default() as f32
    }

    fn section_rect(&self, selector: &str) -> Option<SectionRect> {
        let element = self.document.query_selector(selector).ok().flatten()?;
        let rect = element.get_bounding_client_rect();
        // Client rects are viewport-relative; shift into document space.
        Some(SectionRect {
            top: (rect.top() as f32) + self.scroll_y(),
            height: rect.height() as f32,
        })
    }

    fn scroll_to(&mut self, top: f32, behavior: ScrollBehavior) {
        let options = ScrollToOptions::new();
        options.set_left(0.0);
        options.set_top(f64::from(top));
        options.set_behavior(match behavior {
            ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
            ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
        });
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn set_narrative_visible(&mut self, visible: bool) {
        self.set_visibility(&self.selectors.narrative, visible);
    }

    fn set_pointer_events(&mut self, enabled: bool) {
        let value = if enabled { "all" } else { "none" };
        self.set_style(&self.selectors.canvas, "pointer-events", value);
    }

    fn set_cursor(&mut self, cursor: Cursor) {
        let Some(body) = self.document.body() else {
            return;
        };
        if let Err(e) = body.style().set_property("cursor", cursor.as_css()) {
            log::warn!("failed to set cursor: {e:?}");
        }
    }

    fn set_exit_visible(&mut self, visible: bool) {
        self.set_visibility(&self.selectors.exit, visible);
    }

    fn set_customizer_visible(&mut self, visible: bool) {
        self.set_visibility(&self.selectors.customizer, visible);
    }
}
