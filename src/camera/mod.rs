//! Camera system for the choreographed viewer.
//!
//! Provides the shared camera state, the matrices derived from it on each
//! dirty tick, and the free-orbit controls used in interactive mode.

/// Free-orbit controls (rotate, pan, zoom) gated on the controls flag.
pub mod controller;
/// Perspective camera and GPU uniform types.
pub mod core;
/// Shared camera position/target state.
pub mod state;
