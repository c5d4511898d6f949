//! Presentation offset for the slide-in animation

use serde::{Deserialize, Serialize};

/// 2-D translation applied to the banner by the renderer.
///
/// The lifecycle only ever parks it at [`Offset::HIDDEN`] or [`Offset::VISIBLE`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Offset {
    pub width: f32,
    pub height: f32,
}

impl Offset {
    /// Above the top edge, out of view
    pub const HIDDEN: Self = Self::new(0.0, -150.0);

    /// Resting on-screen position
    pub const VISIBLE: Self = Self::new(0.0, 0.0);

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn is_hidden(&self) -> bool {
        *self == Self::HIDDEN
    }

    pub fn is_visible(&self) -> bool {
        *self == Self::VISIBLE
    }
}

impl Default for Offset {
    fn default() -> Self {
        Self::HIDDEN
    }
}
