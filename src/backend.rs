//! The default rendering backend.

use std::path::Path;

pub use edudraw_renderer_skia::{Font, Framebuffer, Image, Presenter, SkiaBackend as Backend};

use crate::Error;

/// Loads a TrueType or OpenType font for use with [`Canvas::change_font`].
///
/// [`Canvas::change_font`]: crate::Canvas::change_font
pub fn load_font(path: impl AsRef<Path>) -> edudraw::Result<Font> {
   let path = path.as_ref();
   let data = std::fs::read(path)?;
   Font::from_memory(data)
      .map_err(|error| Error::InvalidFont(format!("{}: {}", path.display(), error)))
}

/// Loads an image file for use with [`Canvas::image`].
///
/// [`Canvas::image`]: crate::Canvas::image
pub fn load_image(path: impl AsRef<Path>) -> edudraw::Result<Image> {
   Ok(Image::open(path)?)
}
