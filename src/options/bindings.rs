use serde::{Deserialize, Serialize};

use crate::ui::{SectionEdge, UiAction};

/// A page affordance wired to an action.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ButtonBinding {
    /// CSS selector of the clickable element.
    pub selector: String,
    /// What a click does.
    #[serde(flatten)]
    pub action: UiAction,
}

impl ButtonBinding {
    fn new(selector: &str, action: UiAction) -> Self {
        Self {
            selector: selector.to_owned(),
            action,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable button bindings mapping selectors to actions.
pub struct BindingOptions {
    /// Bindings in lookup order; the first matching selector wins.
    pub buttons: Vec<ButtonBinding>,
}

impl Default for BindingOptions {
    fn default() -> Self {
        let scroll_to = |section: &str, edge| UiAction::ScrollTo {
            section: section.to_owned(),
            edge,
        };
        let set_color = |color: &str| UiAction::SetColor {
            color: color.to_owned(),
        };
        Self {
            buttons: vec![
                ButtonBinding::new(".button--hero", scroll_to(".second", SectionEdge::Top)),
                ButtonBinding::new(".button--second", scroll_to(".third", SectionEdge::Bottom)),
                ButtonBinding::new(".button--third", scroll_to(".fourth", SectionEdge::Bottom)),
                ButtonBinding::new(".button--footer", UiAction::ScrollToTop),
                ButtonBinding::new(".button--customize", UiAction::EnterCustomizer),
                ButtonBinding::new(".button--exit", UiAction::ExitCustomizer),
                ButtonBinding::new(".button--colors.black", set_color("black")),
                ButtonBinding::new(".button--colors.red", set_color("red")),
                ButtonBinding::new(".button--colors.yellow", set_color("yellow")),
            ],
        }
    }
}

impl BindingOptions {
    /// Look up the action bound to a selector.
    #[must_use]
    pub fn lookup(&self, selector: &str) -> Option<&UiAction> {
        self.buttons
            .iter()
            .find(|binding| binding.selector == selector)
            .map(|binding| &binding.action)
    }
}
