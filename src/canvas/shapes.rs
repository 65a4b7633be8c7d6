use edudraw_renderer::{Color, Framebuffer, Image, Point, Rect, RenderBackend};

use super::Canvas;

impl<B: RenderBackend> Canvas<B> {
   /// Maps a logical point to the device pixel it lands on.
   fn device_point(&self, x: f64, y: f64) -> Point {
      let (x, y) = self.state().transform.apply_to_point(x, y, false);
      Point::round(x, y)
   }

   /// Fills the whole frame with a color, ignoring transformations. Anything drawn before is
   /// erased, so this is usually called first in `draw`.
   pub fn background(&mut self, color: impl Into<Color>) {
      let color = color.into();
      self.states.current_mut().background = color;
      self.backend.clear(color);
   }

   /// Draws a point with the current stroke color.
   pub fn point(&mut self, x: f64, y: f64) {
      let state = self.state();
      let Some(color) = state.stroke() else {
         return;
      };
      let weight = state.stroke_weight;
      let at = self.device_point(x, y);
      self.backend.point(at, color, weight);
   }

   /// Draws a line between two points with the current stroke.
   pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
      let state = self.state();
      let Some(color) = state.stroke() else {
         return;
      };
      let weight = state.stroke_weight;
      let a = self.device_point(x1, y1);
      let b = self.device_point(x2, y2);
      self.backend.line(a, b, color, weight);
   }

   /// Draws a rectangle. Depending on the rect mode, `(x, y)` is its top-left corner or center.
   pub fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
      let state = self.state();
      let style = state.shape_style();
      if !style.is_visible() {
         return;
      }
      let (left, top) = state.rect_mode.resolve(x, y, width, height, false);
      let (right, bottom) = (left + width, top + height);

      if state.transform.is_rotated() {
         // The backend's rectangles are axis-aligned, so a rotated one is drawn as a polygon.
         let corners = [(left, top), (right, top), (right, bottom), (left, bottom)]
            .map(|(x, y)| self.device_point(x, y));
         self.backend.polygon(&corners, style);
      } else {
         let rect =
            Rect::from_corners(self.device_point(left, top), self.device_point(right, bottom));
         self.backend.rect(rect, style);
      }
   }

   /// Draws a square. Depending on the rect mode, `(x, y)` is its top-left corner or center.
   pub fn square(&mut self, x: f64, y: f64, side: f64) {
      self.rect(x, y, side, side);
   }

   /// Draws a triangle through three points.
   pub fn triangle(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) {
      self.polygon(&[(x1, y1), (x2, y2), (x3, y3)]);
   }

   /// Draws a closed polygon through the given points. Fewer than three points draw nothing.
   pub fn polygon(&mut self, points: &[(f64, f64)]) {
      if points.len() < 3 {
         log::debug!("polygon with {} points has no area, skipping", points.len());
         return;
      }
      let style = self.state().shape_style();
      if !style.is_visible() {
         return;
      }
      let points: Vec<Point> = points.iter().map(|&(x, y)| self.device_point(x, y)).collect();
      self.backend.polygon(&points, style);
   }

   /// Draws a circle. Depending on the circle mode, `(x, y)` is its center or the top-left corner
   /// of its bounding box.
   pub fn circle(&mut self, x: f64, y: f64, radius: f64) {
      self.ellipse(x, y, radius * 2.0, radius * 2.0);
   }

   /// Draws an ellipse. Depending on the circle mode, `(x, y)` is its center or the top-left
   /// corner of its bounding box.
   pub fn ellipse(&mut self, x: f64, y: f64, width: f64, height: f64) {
      let state = self.state();
      let style = state.shape_style();
      if !style.is_visible() || width == 0.0 || height == 0.0 {
         return;
      }
      let transform = &state.transform;

      if !transform.is_rotated() {
         let (left, top) = state.circle_mode.resolve(x, y, width, height, false);
         let rect = Rect::from_corners(
            self.device_point(left, top),
            self.device_point(left + width, top + height),
         );
         self.backend.ellipse(rect, style);
         return;
      }

      let (center_x, center_y) = state.circle_mode.resolve(x, y, width, height, true);
      let (scale_x, scale_y) = transform.cumulative_scale();
      if width.abs() == height.abs() && scale_x.abs() == scale_y.abs() {
         // A circle looks the same at any rotation, only its center has to move.
         let (device_width, device_height) = transform.apply_to_length(width, height);
         let (radius_x, radius_y) = (device_width.abs() / 2.0, device_height.abs() / 2.0);
         let (cx, cy) = transform.apply_to_point(center_x, center_y, false);
         let rect = Rect::from_corners(
            Point::round(cx - radius_x, cy - radius_y),
            Point::round(cx + radius_x, cy + radius_y),
         );
         self.backend.ellipse(rect, style);
         return;
      }

      // Render the ellipse upright on a transparent surface with room for its outline, and let
      // the image path scale and rotate it.
      let padding = style.stroke.map_or(0, |_| style.stroke_weight);
      let (inner_width, inner_height) = (width.abs().round() as u32, height.abs().round() as u32);
      let surface_size = |inner: u32| padding.checked_mul(2)?.checked_add(inner)?.checked_add(1);
      let Some(mut framebuffer) = surface_size(inner_width)
         .zip(surface_size(inner_height))
         .and_then(|(width, height)| self.backend.create_framebuffer(width, height))
      else {
         log::warn!("ellipse of size {}x{} is too large to draw rotated, skipping", width, height);
         return;
      };
      self.backend.draw_to(&mut framebuffer, |backend| {
         let bounds = Rect::new(padding as i32, padding as i32, inner_width, inner_height);
         backend.ellipse(bounds, style);
      });
      let (surface_width, surface_height) = framebuffer.size();
      let mut pixels = vec![0; surface_width as usize * surface_height as usize * 4];
      framebuffer.download_rgba(&mut pixels);
      let image = B::Image::from_rgba(surface_width, surface_height, &pixels);

      self.composite_image(
         image,
         (center_x, center_y),
         (surface_width as f64, surface_height as f64),
      );
   }
}
