use edudraw_renderer::{Color, Point, Rect, RenderBackend, ShapeStyle};
use tiny_skia::{FillRule, LineCap, Path, PathBuilder, PixmapPaint, Stroke, Transform};

use crate::common::*;
use crate::font::Font;
use crate::framebuffer::Framebuffer;
use crate::image::Image;
use crate::SkiaBackend;

impl SkiaBackend {
   fn fill_and_stroke(&mut self, path: &Path, style: ShapeStyle) {
      if let Some(fill) = style.fill {
         self.pixmap.fill_path(
            path,
            &paint(fill),
            FillRule::Winding,
            Transform::identity(),
            None,
         );
      }
      if let Some(color) = style.stroke {
         if style.stroke_weight > 0 {
            let stroke = Stroke {
               width: style.stroke_weight as f32,
               ..Stroke::default()
            };
            self.pixmap.stroke_path(path, &paint(color), &stroke, Transform::identity(), None);
         }
      }
   }
}

impl RenderBackend for SkiaBackend {
   type Image = Image;
   type Font = Font;
   type Framebuffer = Framebuffer;

   fn size(&self) -> (u32, u32) {
      (self.pixmap.width(), self.pixmap.height())
   }

   fn clear(&mut self, color: Color) {
      self.pixmap.fill(to_skia_color(color));
   }

   fn point(&mut self, at: Point, color: Color, weight: u32) {
      let (x, y) = to_skia_point(at);
      if weight <= 1 {
         if let Some(rect) = tiny_skia::Rect::from_xywh(x, y, 1.0, 1.0) {
            self.pixmap.fill_rect(rect, &paint(color), Transform::identity(), None);
         }
      } else if let Some(path) = PathBuilder::from_circle(x, y, weight as f32 / 2.0) {
         self.fill_and_stroke(
            &path,
            ShapeStyle {
               fill: Some(color),
               stroke: None,
               stroke_weight: 0,
            },
         );
      }
   }

   fn line(&mut self, a: Point, b: Point, color: Color, thickness: u32) {
      if thickness == 0 {
         return;
      }
      let (ax, ay) = to_skia_point(a);
      let (bx, by) = to_skia_point(b);
      let mut builder = PathBuilder::new();
      builder.move_to(ax, ay);
      builder.line_to(bx, by);
      if let Some(path) = builder.finish() {
         let stroke = Stroke {
            width: thickness as f32,
            line_cap: LineCap::Butt,
            ..Stroke::default()
         };
         self.pixmap.stroke_path(&path, &paint(color), &stroke, Transform::identity(), None);
      }
   }

   fn rect(&mut self, rect: Rect, style: ShapeStyle) {
      if let Some(rect) = to_skia_rect(rect) {
         self.fill_and_stroke(&PathBuilder::from_rect(rect), style);
      }
   }

   fn ellipse(&mut self, rect: Rect, style: ShapeStyle) {
      if let Some(path) = to_skia_rect(rect).and_then(PathBuilder::from_oval) {
         self.fill_and_stroke(&path, style);
      }
   }

   fn polygon(&mut self, points: &[Point], style: ShapeStyle) {
      let Some((first, rest)) = points.split_first() else {
         return;
      };
      let mut builder = PathBuilder::new();
      let (x, y) = to_skia_point(*first);
      builder.move_to(x, y);
      for &point in rest {
         let (x, y) = to_skia_point(point);
         builder.line_to(x, y);
      }
      builder.close();
      if let Some(path) = builder.finish() {
         self.fill_and_stroke(&path, style);
      }
   }

   fn text(&mut self, position: Point, font: &Font, text: &str, size: f32, color: Color) {
      let image = self.render_text(font, text, size, color);
      self.image(position, &image);
   }

   fn render_text(&mut self, font: &Font, text: &str, size: f32, color: Color) -> Image {
      Image::from_rgba_image(font.rasterize(text, size, color))
   }

   fn image(&mut self, position: Point, image: &Image) {
      if let Some(pixmap) = image.to_pixmap() {
         self.pixmap.draw_pixmap(
            position.x,
            position.y,
            pixmap.as_ref(),
            &PixmapPaint::default(),
            Transform::identity(),
            None,
         );
      }
   }

   fn create_framebuffer(&mut self, width: u32, height: u32) -> Option<Framebuffer> {
      Framebuffer::new(width, height)
   }

   fn draw_to(&mut self, framebuffer: &mut Framebuffer, f: impl FnOnce(&mut Self)) {
      std::mem::swap(&mut self.pixmap, &mut framebuffer.pixmap);
      f(self);
      std::mem::swap(&mut self.pixmap, &mut framebuffer.pixmap);
   }

   fn download_rgba(&self, dest: &mut [u8]) {
      download_pixmap(self.pixmap.pixels(), dest);
   }

   fn present(&mut self) -> anyhow::Result<()> {
      self.frames_presented += 1;
      if let Some(presenter) = &mut self.presenter {
         presenter(&self.pixmap)?;
      }
      Ok(())
   }
}
