//! Shared utilities: easing curves for tweens and sRGB color conversion.

pub mod color;
pub mod easing;
