//! A headless EduDraw backend rendering into a `tiny-skia` pixmap.

use tiny_skia::Pixmap;

mod common;
mod font;
mod framebuffer;
mod image;
mod rendering;

pub use crate::font::*;
pub use crate::framebuffer::*;
pub use crate::image::*;
pub use tiny_skia;

/// Called with the finished frame every time the backend presents.
pub type Presenter = Box<dyn FnMut(&Pixmap) -> anyhow::Result<()>>;

pub struct SkiaBackend {
   pixmap: Pixmap,
   presenter: Option<Presenter>,
   frames_presented: u64,
}

impl SkiaBackend {
   /// Creates a new backend with a transparent frame of the given size.
   pub fn new(width: u32, height: u32) -> anyhow::Result<Self> {
      let pixmap = Pixmap::new(width, height)
         .ok_or_else(|| anyhow::anyhow!("invalid frame size {}x{}", width, height))?;
      Ok(Self {
         pixmap,
         presenter: None,
         frames_presented: 0,
      })
   }

   /// Sets the function that displays finished frames, e.g. by copying them to a window.
   pub fn with_presenter(
      mut self,
      presenter: impl FnMut(&Pixmap) -> anyhow::Result<()> + 'static,
   ) -> Self {
      self.presenter = Some(Box::new(presenter));
      self
   }

   /// Returns the frame being drawn.
   pub fn pixmap(&self) -> &Pixmap {
      &self.pixmap
   }

   /// Returns how many frames have been presented so far.
   pub fn frames_presented(&self) -> u64 {
      self.frames_presented
   }
}
