use edudraw_renderer::{Font, Image, Point, RenderBackend};

use super::Canvas;

impl<B: RenderBackend> Canvas<B> {
   /// Draws an image at its own size. Depending on the rect mode, `(x, y)` is its top-left corner
   /// or center.
   pub fn image(&mut self, image: &B::Image, x: f64, y: f64) {
      self.image_with_size(image, x, y, None, None);
   }

   /// Draws an image resized to the given width and height. A size left as `None` is taken from
   /// the image. A negative width mirrors the image, and a negative height flips it.
   pub fn image_with_size(
      &mut self,
      image: &B::Image,
      x: f64,
      y: f64,
      width: Option<f64>,
      height: Option<f64>,
   ) {
      let (image_width, image_height) = image.size();
      let width = width.unwrap_or(image_width as f64);
      let height = height.unwrap_or(image_height as f64);
      let center = self.state().rect_mode.resolve(x, y, width, height, true);
      self.composite_image(image.clone(), center, (width, height));
   }

   /// Draws a line of text with the current font and fill color, at the given pixel size.
   /// Depending on the rect mode, `(x, y)` is the top-left corner or center of the text's box.
   ///
   /// Nothing is drawn if no font was set with [`Canvas::change_font`] or filling is disabled.
   /// There are no bold or italic options; load the bold or italic face of a family as its own
   /// font instead.
   pub fn text(&mut self, text: &str, x: f64, y: f64, size: f32) {
      if text.is_empty() {
         return;
      }
      let state = self.state();
      let Some(font) = state.font.clone() else {
         log::warn!("text() called before a font was set with change_font(), skipping");
         return;
      };
      let Some(color) = state.fill() else {
         return;
      };
      let (width, height) = font.text_size(text, size);
      if width == 0 || height == 0 {
         return;
      }
      let (width, height) = (width as f64, height as f64);

      let transform = &state.transform;
      if !transform.is_rotated() && !transform.is_scaled() {
         let (left, top) = state.rect_mode.resolve(x, y, width, height, false);
         let (left, top) = transform.apply_to_point(left, top, false);
         self.backend.text(Point::round(left, top), &font, text, size, color);
      } else {
         let center = state.rect_mode.resolve(x, y, width, height, true);
         let image = self.backend.render_text(&font, text, size, color);
         self.composite_image(image, center, (width, height));
      }
   }

   /// Composites an image whose logical box is centered on `center` and has the given size.
   ///
   /// The image is mirrored or flipped where the size, after scaling, is negative, resized to the
   /// scaled size, rotated by the cumulative rotation, and finally placed so that its center lands
   /// on the transformed center point.
   pub(super) fn composite_image(
      &mut self,
      image: B::Image,
      center: (f64, f64),
      (width, height): (f64, f64),
   ) {
      if width == 0.0 || height == 0.0 {
         return;
      }
      let transform = &self.state().transform;
      let (width, height) = transform.apply_to_length(width, height);
      let target_width = width.abs().round() as u32;
      let target_height = height.abs().round() as u32;
      if target_width == 0 || target_height == 0 {
         return;
      }

      let mut image = image;
      if width < 0.0 {
         image = image.mirrored();
      }
      if height < 0.0 {
         image = image.flipped();
      }
      if image.size() != (target_width, target_height) {
         image = image.resized(target_width, target_height);
      }
      let rotation = transform.cumulative_rotation();
      if rotation != 0.0 {
         image = image.rotated(rotation);
      }

      let (cx, cy) = transform.apply_to_point(center.0, center.1, false);
      let (rotated_width, rotated_height) = image.size();
      let position =
         Point::round(cx - rotated_width as f64 / 2.0, cy - rotated_height as f64 / 2.0);
      self.backend.image(position, &image);
   }
}
