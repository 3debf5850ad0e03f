//! The explicit viewer context shared by every camera mutator.

use crate::camera::state::CameraState;
use crate::render::scheduler::DirtyFlag;

/// Camera state plus its dirty flag.
///
/// Exactly one context exists per viewer. Collaborators (timeline, mode
/// controller, orbit controls, UI bindings) receive it as `&mut`, so the
/// borrow checker enforces a single writer at any point in a frame.
#[derive(Debug, Clone, Default)]
pub struct ViewerContext {
    /// The camera's position, look-at target and controls flag.
    pub camera: CameraState,
    /// Set by every camera mutation, consumed once per render tick.
    pub dirty: DirtyFlag,
}

impl ViewerContext {
    /// Create a context around an initial camera state. The flag starts
    /// dirty so the first tick always computes matrices.
    #[must_use]
    pub fn new(camera: CameraState) -> Self {
        Self {
            camera,
            dirty: DirtyFlag::new(),
        }
    }
}
