use tiny_skia::Pixmap;

use crate::common::download_pixmap;

pub struct Framebuffer {
   pub(crate) pixmap: Pixmap,
}

impl Framebuffer {
   /// Creates a transparent framebuffer. Zero dimensions are clamped to a single pixel.
   ///
   /// Returns `None` if the size exceeds what a pixmap can hold.
   pub(crate) fn new(width: u32, height: u32) -> Option<Self> {
      let pixmap = Pixmap::new(width.max(1), height.max(1))?;
      Some(Self { pixmap })
   }
}

impl edudraw_renderer::Framebuffer for Framebuffer {
   fn size(&self) -> (u32, u32) {
      (self.pixmap.width(), self.pixmap.height())
   }

   fn download_rgba(&self, dest: &mut [u8]) {
      download_pixmap(self.pixmap.pixels(), dest);
   }
}
