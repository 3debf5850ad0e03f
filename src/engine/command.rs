//! The engine's complete interactive vocabulary.
//!
//! Every page event the choreography reacts to (scrolls, resizes, button
//! clicks, drag gestures) is represented as a `VantageCommand`. Hosts
//! construct commands and pass them to
//! [`VantageEngine::execute`](super::VantageEngine::execute).

use glam::Vec2;

use crate::ui::UiAction;

/// A discrete or parameterized operation the engine can perform.
///
/// The engine never cares *how* a command was triggered. A DOM listener, a
/// scripted session and a test all look identical:
///
/// ```ignore
/// engine.execute(VantageCommand::Scrolled, now);
/// engine.execute(VantageCommand::Click { selector: ".button--customize".into() }, now);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum VantageCommand {
    // ── Page ────────────────────────────────────────────────────────
    /// The document scroll offset changed; re-sample the timeline.
    Scrolled,

    /// The viewport or layout changed; re-resolve segment ranges.
    Resized,

    // ── Affordances ─────────────────────────────────────────────────
    /// An element was clicked. Runs its bound action, if any.
    Click {
        /// Selector the click was registered under.
        selector: String,
    },

    /// Run an action directly, bypassing the binding table.
    Ui(UiAction),

    // ── Free orbit (interactive mode only) ──────────────────────────
    /// Orbit the camera by `delta` pixels of pointer movement.
    Orbit {
        /// Horizontal and vertical drag delta.
        delta: Vec2,
    },

    /// Pan the camera by `delta` pixels of pointer movement.
    Pan {
        /// Horizontal and vertical drag delta.
        delta: Vec2,
    },

    /// Zoom the camera (positive = zoom in, negative = zoom out).
    Zoom {
        /// Wheel amount.
        delta: f32,
    },
}
