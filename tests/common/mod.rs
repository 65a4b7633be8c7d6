//! A backend that records what it was asked to draw instead of rasterizing it.

#![allow(dead_code)]

use edudraw::{Color, Point, Rect, RenderBackend, ShapeStyle, SketchConfig};

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
   Clear(Color),
   Point(Point, Color, u32),
   Line(Point, Point, Color, u32),
   Rect(Rect, ShapeStyle),
   Ellipse(Rect, ShapeStyle),
   Polygon(Vec<Point>, ShapeStyle),
   Text(Point, String, Color),
   Image(Point, TestImage),
   Present,
}

/// An image that remembers how it was transformed.
#[derive(Clone, Debug, PartialEq)]
pub struct TestImage {
   pub width: u32,
   pub height: u32,
   pub mirrored: bool,
   pub flipped: bool,
   pub rotation: f64,
}

impl TestImage {
   pub fn new(width: u32, height: u32) -> Self {
      Self {
         width,
         height,
         mirrored: false,
         flipped: false,
         rotation: 0.0,
      }
   }
}

impl edudraw::Image for TestImage {
   fn from_rgba(width: u32, height: u32, _pixel_data: &[u8]) -> Self {
      Self::new(width, height)
   }

   fn size(&self) -> (u32, u32) {
      (self.width, self.height)
   }

   fn resized(&self, width: u32, height: u32) -> Self {
      Self {
         width,
         height,
         ..self.clone()
      }
   }

   fn rotated(&self, degrees: f64) -> Self {
      let (sin, cos) = degrees.to_radians().sin_cos();
      let (width, height) = (self.width as f64, self.height as f64);
      Self {
         width: (width * cos.abs() + height * sin.abs()).round() as u32,
         height: (width * sin.abs() + height * cos.abs()).round() as u32,
         rotation: self.rotation + degrees,
         ..self.clone()
      }
   }

   fn mirrored(&self) -> Self {
      Self {
         mirrored: !self.mirrored,
         ..self.clone()
      }
   }

   fn flipped(&self) -> Self {
      Self {
         flipped: !self.flipped,
         ..self.clone()
      }
   }
}

/// A monospaced font: every character is half as wide as the font is tall.
#[derive(Clone, Debug, PartialEq)]
pub struct TestFont;

impl edudraw::Font for TestFont {
   fn text_size(&self, text: &str, size: f32) -> (u32, u32) {
      let width = text.chars().count() as f32 * size / 2.0;
      (width.round() as u32, size.round() as u32)
   }
}

pub struct TestFramebuffer {
   width: u32,
   height: u32,
}

impl edudraw::Framebuffer for TestFramebuffer {
   fn size(&self) -> (u32, u32) {
      (self.width, self.height)
   }

   fn download_rgba(&self, dest: &mut [u8]) {
      dest.fill(0);
   }
}

pub struct RecordingBackend {
   pub width: u32,
   pub height: u32,
   pub calls: Vec<Call>,
   pub offscreen_draws: usize,
}

impl RecordingBackend {
   pub fn new(width: u32, height: u32) -> Self {
      Self {
         width,
         height,
         calls: Vec::new(),
         offscreen_draws: 0,
      }
   }

   /// Returns the recorded calls and forgets them.
   pub fn take(&mut self) -> Vec<Call> {
      std::mem::take(&mut self.calls)
   }
}

impl RenderBackend for RecordingBackend {
   type Image = TestImage;
   type Font = TestFont;
   type Framebuffer = TestFramebuffer;

   fn size(&self) -> (u32, u32) {
      (self.width, self.height)
   }

   fn clear(&mut self, color: Color) {
      self.calls.push(Call::Clear(color));
   }

   fn point(&mut self, at: Point, color: Color, weight: u32) {
      self.calls.push(Call::Point(at, color, weight));
   }

   fn line(&mut self, a: Point, b: Point, color: Color, thickness: u32) {
      self.calls.push(Call::Line(a, b, color, thickness));
   }

   fn rect(&mut self, rect: Rect, style: ShapeStyle) {
      self.calls.push(Call::Rect(rect, style));
   }

   fn ellipse(&mut self, rect: Rect, style: ShapeStyle) {
      self.calls.push(Call::Ellipse(rect, style));
   }

   fn polygon(&mut self, points: &[Point], style: ShapeStyle) {
      self.calls.push(Call::Polygon(points.to_vec(), style));
   }

   fn text(&mut self, position: Point, _font: &TestFont, text: &str, _size: f32, color: Color) {
      self.calls.push(Call::Text(position, text.to_owned(), color));
   }

   fn render_text(&mut self, font: &TestFont, text: &str, size: f32, _color: Color) -> TestImage {
      let (width, height) = edudraw::Font::text_size(font, text, size);
      TestImage::new(width, height)
   }

   fn image(&mut self, position: Point, image: &TestImage) {
      self.calls.push(Call::Image(position, image.clone()));
   }

   fn create_framebuffer(&mut self, width: u32, height: u32) -> Option<TestFramebuffer> {
      // Mirrors a pixmap's row limit: 4 bytes per pixel must fit in an `i32` stride.
      if width.max(1) > i32::MAX as u32 / 4 {
         return None;
      }
      Some(TestFramebuffer { width, height })
   }

   fn draw_to(&mut self, _framebuffer: &mut TestFramebuffer, f: impl FnOnce(&mut Self)) {
      // Offscreen drawing is counted, not recorded with the frame's calls.
      let calls = std::mem::take(&mut self.calls);
      f(self);
      self.calls = calls;
      self.offscreen_draws += 1;
   }

   fn download_rgba(&self, dest: &mut [u8]) {
      dest.fill(255);
   }

   fn present(&mut self) -> anyhow::Result<()> {
      self.calls.push(Call::Present);
      Ok(())
   }
}

pub fn config(width: u32, height: u32) -> SketchConfig {
   let mut config = SketchConfig::default();
   config.window.width = width;
   config.window.height = height;
   config
}

pub fn canvas(width: u32, height: u32) -> edudraw::Canvas<RecordingBackend> {
   edudraw::Canvas::new(RecordingBackend::new(width, height), &config(width, height))
}
