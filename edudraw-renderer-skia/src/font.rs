//! Text rasterization based on `ab_glyph`.
//!
//! Does not support shaping or wrapping; glyphs are laid out on a single line with kerning.

use std::path::Path;
use std::rc::Rc;

use ab_glyph::{Font as _, FontVec, Glyph, PxScale, ScaleFont as _};
use edudraw_renderer::Color;
use image::{Rgba, RgbaImage};

#[derive(Clone)]
pub struct Font {
   face: Rc<FontVec>,
}

impl Font {
   /// Loads a TrueType or OpenType font from its file contents.
   pub fn from_memory(data: Vec<u8>) -> anyhow::Result<Self> {
      let face = FontVec::try_from_vec(data)?;
      log::debug!("loaded font with {} glyphs", face.glyph_count());
      Ok(Self { face: Rc::new(face) })
   }

   /// Loads a font from a file on disk.
   pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
      let data = std::fs::read(path)?;
      Self::from_memory(data)
   }

   /// Lays the text out on a single line, returning the positioned glyphs and the line's extent.
   fn layout(&self, text: &str, size: f32) -> (Vec<Glyph>, (u32, u32)) {
      let scale = PxScale::from(size);
      let scaled = self.face.as_scaled(scale);
      let mut glyphs = Vec::with_capacity(text.len());
      let mut caret = 0.0;
      let mut previous = None;
      for c in text.chars() {
         let id = scaled.glyph_id(c);
         if let Some(previous) = previous {
            caret += scaled.kern(previous, id);
         }
         glyphs.push(id.with_scale_and_position(scale, ab_glyph::point(caret, scaled.ascent())));
         caret += scaled.h_advance(id);
         previous = Some(id);
      }
      let extent = (caret.ceil().max(0.0) as u32, scaled.height().ceil().max(0.0) as u32);
      (glyphs, extent)
   }

   pub(crate) fn text_size(&self, text: &str, size: f32) -> (u32, u32) {
      self.layout(text, size).1
   }

   /// Renders text onto a transparent image sized to its measured extent.
   pub(crate) fn rasterize(&self, text: &str, size: f32, color: Color) -> RgbaImage {
      let (glyphs, (width, height)) = self.layout(text, size);
      let mut image = RgbaImage::new(width, height);
      for glyph in glyphs {
         let Some(outline) = self.face.outline_glyph(glyph) else {
            continue;
         };
         let bounds = outline.px_bounds();
         outline.draw(|x, y, coverage| {
            let px = bounds.min.x as i32 + x as i32;
            let py = bounds.min.y as i32 + y as i32;
            if px < 0 || py < 0 || px >= width as i32 || py >= height as i32 {
               return;
            }
            let alpha = (coverage.clamp(0.0, 1.0) * color.a as f32) as u8;
            let pixel = image.get_pixel_mut(px as u32, py as u32);
            // Overlapping glyph edges keep the stronger coverage.
            if alpha > pixel.0[3] {
               *pixel = Rgba([color.r, color.g, color.b, alpha]);
            }
         });
      }
      image
   }
}

impl edudraw_renderer::Font for Font {
   fn text_size(&self, text: &str, size: f32) -> (u32, u32) {
      Font::text_size(self, text, size)
   }
}
