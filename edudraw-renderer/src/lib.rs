//! The contract between the EduDraw core and the backends that actually put pixels on a surface.
//!
//! The core resolves anchors and transformations itself; everything that crosses this boundary is
//! already in absolute device coordinates. Backends never see logical coordinates, modes, or the
//! transform stack.

mod geometry;

pub use crate::geometry::*;

/// A bitmap image owned by a backend.
pub trait Image: Clone {
   /// Creates an image from straight (non-premultiplied) RGBA8 pixel data.
   fn from_rgba(width: u32, height: u32, pixel_data: &[u8]) -> Self;

   /// Returns the size of the image, in pixels.
   fn size(&self) -> (u32, u32);

   /// Returns a copy of the image resampled to the given size.
   fn resized(&self, width: u32, height: u32) -> Self;

   /// Returns a copy of the image rotated clockwise by `degrees` about its center.
   ///
   /// The rotation is expanding: the returned image is large enough to hold all of the rotated
   /// content, and the area not covered by the source is transparent.
   fn rotated(&self, degrees: f64) -> Self;

   /// Returns a copy of the image mirrored along the vertical axis (left becomes right).
   fn mirrored(&self) -> Self;

   /// Returns a copy of the image flipped along the horizontal axis (top becomes bottom).
   fn flipped(&self) -> Self;
}

/// A loaded font face.
pub trait Font: Clone {
   /// Returns the measured extent of the text at the given pixel size.
   fn text_size(&self, text: &str, size: f32) -> (u32, u32);
}

/// An offscreen drawing surface.
pub trait Framebuffer {
   /// Returns the size of the framebuffer, in pixels.
   fn size(&self) -> (u32, u32);

   /// Downloads straight RGBA8 pixels into `dest`, which must be exactly `width * height * 4`
   /// bytes long.
   fn download_rgba(&self, dest: &mut [u8]);
}

/// A rasterizer for the primitives the core issues.
///
/// Every shape operation takes a [`ShapeStyle`]. Implementations must paint the fill first and the
/// stroke second, so that the outline is never covered by the fill.
pub trait RenderBackend {
   type Image: Image;
   type Font: Font;
   type Framebuffer: Framebuffer;

   /// Returns the size of the frame being drawn, in pixels.
   fn size(&self) -> (u32, u32);

   /// Fills the entire frame with a color.
   fn clear(&mut self, color: Color);

   /// Draws a single point, `weight` pixels across.
   fn point(&mut self, at: Point, color: Color, weight: u32);

   /// Draws a line segment.
   fn line(&mut self, a: Point, b: Point, color: Color, thickness: u32);

   /// Draws an axis-aligned rectangle.
   fn rect(&mut self, rect: Rect, style: ShapeStyle);

   /// Draws the ellipse inscribed in an axis-aligned rectangle.
   fn ellipse(&mut self, rect: Rect, style: ShapeStyle);

   /// Draws a closed polygon through the given vertices.
   fn polygon(&mut self, points: &[Point], style: ShapeStyle);

   /// Draws text with its top-left corner at `position`.
   fn text(&mut self, position: Point, font: &Self::Font, text: &str, size: f32, color: Color);

   /// Renders text onto a new transparent image sized to the text's measured extent.
   fn render_text(&mut self, font: &Self::Font, text: &str, size: f32, color: Color)
      -> Self::Image;

   /// Composites an image with alpha blending, its top-left corner at `position`.
   fn image(&mut self, position: Point, image: &Self::Image);

   /// Creates a new, fully transparent offscreen framebuffer. Returns `None` if the backend
   /// cannot allocate a surface of that size.
   fn create_framebuffer(&mut self, width: u32, height: u32) -> Option<Self::Framebuffer>;

   /// Redirects all drawing done inside `f` onto the framebuffer.
   fn draw_to(&mut self, framebuffer: &mut Self::Framebuffer, f: impl FnOnce(&mut Self));

   /// Downloads the current frame as straight RGBA8 pixels. See [`Framebuffer::download_rgba`].
   fn download_rgba(&self, dest: &mut [u8]);

   /// Displays the frame drawn so far.
   fn present(&mut self) -> anyhow::Result<()>;
}
