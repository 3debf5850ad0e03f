//! Page affordances: what the narrative's buttons do.
//!
//! A [`UiAction`] is bound to a selector in
//! [`BindingOptions`](crate::options::BindingOptions) and executed through
//! [`VantageCommand::Ui`](crate::engine::VantageCommand::Ui). Missing
//! targets (no such section, material or palette entry) turn the action
//! into a logged no-op.

use serde::{Deserialize, Serialize};

use crate::host::{PageHost, SectionRect};

/// Which edge of a section a scroll button lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionEdge {
    /// The section's top edge.
    #[default]
    Top,
    /// The section's bottom edge.
    Bottom,
}

impl SectionEdge {
    /// Document offset of this edge of `rect`.
    #[must_use]
    pub fn offset(self, rect: SectionRect) -> f32 {
        match self {
            Self::Top => rect.top,
            Self::Bottom => rect.bottom(),
        }
    }
}

/// Button actions.
///
/// Serde tags the variant in an `action` key so TOML presets stay flat:
/// ```toml
/// [[bindings.buttons]]
/// selector = ".button--hero"
/// action = "scroll_to"
/// section = ".second"
/// edge = "top"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UiAction {
    /// Smooth-scroll the document to an edge of a section.
    ScrollTo {
        /// Section selector.
        section: String,
        /// Edge to land on.
        #[serde(default)]
        edge: SectionEdge,
    },
    /// Smooth-scroll back to the top of the document.
    ScrollToTop,
    /// Hand the camera over to the interactive customizer.
    EnterCustomizer,
    /// Hand the camera back to the scroll choreography.
    ExitCustomizer,
    /// Recolor the palette material with a named palette entry.
    SetColor {
        /// Palette entry name.
        color: String,
    },
}

impl UiAction {
    /// Document offset a scroll action should travel to.
    ///
    /// `None` for non-scroll actions and for sections the page lacks.
    #[must_use]
    pub fn scroll_target<P: PageHost + ?Sized>(&self, page: &P) -> Option<f32> {
        match self {
            Self::ScrollTo { section, edge } => {
                let Some(rect) = page.section_rect(section) else {
                    log::warn!("scroll target `{section}` not found on page");
                    return None;
                };
                Some(edge.offset(rect))
            }
            Self::ScrollToTop => Some(0.0),
            Self::EnterCustomizer | Self::ExitCustomizer | Self::SetColor { .. } => {
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::memory::MemoryPage;

    fn scroll_to(section: &str, edge: SectionEdge) -> UiAction {
        UiAction::ScrollTo {
            section: section.to_owned(),
            edge,
        }
    }

    #[test]
    fn scroll_targets_use_document_offsets() {
        let page = MemoryPage::four_sections(800.0);
        assert_eq!(
            scroll_to(".second", SectionEdge::Top).scroll_target(&page),
            Some(800.0)
        );
        assert_eq!(
            scroll_to(".third", SectionEdge::Bottom).scroll_target(&page),
            Some(2400.0)
        );
        assert_eq!(UiAction::ScrollToTop.scroll_target(&page), Some(0.0));
    }

    #[test]
    fn missing_section_is_no_target() {
        let page = MemoryPage::four_sections(800.0);
        assert_eq!(
            scroll_to(".fifth", SectionEdge::Top).scroll_target(&page),
            None
        );
        assert_eq!(UiAction::EnterCustomizer.scroll_target(&page), None);
    }

    #[test]
    fn edge_defaults_to_top() {
        let action: UiAction =
            serde_json::from_str(r#"{ "action": "scroll_to", "section": ".second" }"#)
                .unwrap();
        assert_eq!(action, scroll_to(".second", SectionEdge::Top));
    }
}
