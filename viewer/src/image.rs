//! Decoded source images and the load-ordering guard.

use crate::geometry::Size;

/// A decoded image: pixel dimensions plus whatever handle the surface draws.
///
/// Immutable once built; a new upload replaces it wholesale.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceImage<H> {
    pub width: f64,
    pub height: f64,
    pub handle: H,
}

impl<H> SourceImage<H> {
    #[must_use]
    pub fn new(width: f64, height: f64, handle: H) -> Self {
        Self { width, height, handle }
    }

    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Generation token for one upload.
///
/// Handed out by [`crate::engine::EngineCore::begin_load`]. Only the most
/// recent ticket may install an image; completions carrying an older one are
/// rejected so a slow decode can never overwrite a newer upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LoadTicket(pub(crate) u64);

impl LoadTicket {
    #[must_use]
    pub fn generation(self) -> u64 {
        self.0
    }
}
