// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Scroll-choreographed camera engine.
//!
//! Vantage drives a 3D viewer's camera from page-scroll progress and hands
//! control over to a free-orbit "customizer" mode on demand. The renderer and
//! the page are external collaborators reached through the
//! [`render::Renderer`] and [`host::PageHost`] traits.
//!
//! # Key entry points
//!
//! - [`engine::VantageEngine`] - owns the viewer context and routes commands
//! - [`timeline::ScrollTimeline`] - maps scroll ranges to camera keyframes
//! - [`mode::ModeController`] - presentation/interactive state machine
//! - [`render::scheduler::DirtyFlag`] - coalesces mutations into one redraw
//! - [`options::Options`] - TOML-backed choreography and camera settings
//!
//! # Frame loop
//!
//! Every mutator (scroll evaluation, mode tweens, orbit input, color swaps)
//! writes the shared [`context::ViewerContext`] and marks it dirty. Once per
//! render tick, [`engine::VantageEngine::frame`] advances pending tweens,
//! consumes the dirty flag, recomputes the camera matrices and only then asks
//! the renderer for a frame.

pub mod camera;
pub mod context;
pub mod engine;
pub mod error;
pub mod host;
pub mod mode;
pub mod options;
pub mod render;
pub mod timeline;
pub mod ui;
pub mod util;
#[cfg(feature = "web")]
pub mod web;

pub use engine::{VantageCommand, VantageEngine};
pub use error::VantageError;
