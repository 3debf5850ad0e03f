//! Presentation/interactive mode arbitration.
//!
//! The [`ModeController`] is an explicit state machine:
//!
//! ```text
//! Presentation --enter--> TransitioningToInteractive --tween done--> Interactive
//!      ^                          |   ^                                  |
//!      |                        exit enter                              exit
//!      |                          v   |                                  |
//!      +--tween done-- TransitioningToPresentation <---------------------+
//! ```
//!
//! Every transition returns the next mode plus a list of [`ModeEffect`]s for
//! the engine to apply to the page and renderer.

/// Mode state machine and its side-effect descriptions.
pub mod controller;
pub mod tween;

pub use controller::{CustomizerPreset, Mode, ModeController, ModeEffect, ModeTransition};
pub use tween::{CameraTween, TweenSlots};
