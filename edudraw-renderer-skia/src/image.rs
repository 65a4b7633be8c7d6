use image::imageops::{self, FilterType};
use image::RgbaImage;
use tiny_skia::{FilterQuality, Pixmap, PixmapPaint, Transform};

use crate::common::{pixmap_from_rgba, pixmap_to_rgba};

#[derive(Clone, Debug)]
pub struct Image {
   pixels: RgbaImage,
}

impl Image {
   pub fn from_rgba_image(pixels: RgbaImage) -> Self {
      Self { pixels }
   }

   /// Decodes an image file in any of the supported formats.
   pub fn open(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
      let pixels = image::open(path)?.into_rgba8();
      Ok(Self { pixels })
   }

   /// Get a reference to the image's pixels.
   pub fn pixels(&self) -> &RgbaImage {
      &self.pixels
   }

   pub(crate) fn to_pixmap(&self) -> Option<Pixmap> {
      pixmap_from_rgba(&self.pixels)
   }
}

impl edudraw_renderer::Image for Image {
   fn from_rgba(width: u32, height: u32, pixel_data: &[u8]) -> Self {
      let pixels = RgbaImage::from_raw(width, height, pixel_data.to_vec())
         .unwrap_or_else(|| panic!("pixel data does not match the size {}x{}", width, height));
      Self { pixels }
   }

   fn size(&self) -> (u32, u32) {
      self.pixels.dimensions()
   }

   fn resized(&self, width: u32, height: u32) -> Self {
      if self.pixels.dimensions() == (width, height) {
         return self.clone();
      }
      Self {
         pixels: imageops::resize(&self.pixels, width, height, FilterType::Triangle),
      }
   }

   fn rotated(&self, degrees: f64) -> Self {
      let (width, height) = self.pixels.dimensions();
      let Some(source) = self.to_pixmap() else {
         return self.clone();
      };

      // Bounding box of the rotated image.
      let (sin, cos) = degrees.to_radians().sin_cos();
      let (w, h) = (width as f64, height as f64);
      let new_width = (w * cos.abs() + h * sin.abs()).round().max(1.0) as u32;
      let new_height = (w * sin.abs() + h * cos.abs()).round().max(1.0) as u32;

      let Some(mut target) = Pixmap::new(new_width, new_height) else {
         return self.clone();
      };
      let transform = Transform::from_translate(-(width as f32) / 2.0, -(height as f32) / 2.0)
         .post_concat(Transform::from_rotate(degrees as f32))
         .post_translate(new_width as f32 / 2.0, new_height as f32 / 2.0);
      let paint = PixmapPaint {
         quality: FilterQuality::Bilinear,
         ..PixmapPaint::default()
      };
      target.draw_pixmap(0, 0, source.as_ref(), &paint, transform, None);

      Self {
         pixels: pixmap_to_rgba(&target),
      }
   }

   fn mirrored(&self) -> Self {
      Self {
         pixels: imageops::flip_horizontal(&self.pixels),
      }
   }

   fn flipped(&self) -> Self {
      Self {
         pixels: imageops::flip_vertical(&self.pixels),
      }
   }
}

#[cfg(test)]
mod tests {
   use super::*;
   use edudraw_renderer::Image as _;
   use image::Rgba;

   fn two_pixel_image() -> Image {
      let mut pixels = RgbaImage::from_pixel(2, 1, Rgba([0, 0, 0, 255]));
      pixels.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
      Image::from_rgba_image(pixels)
   }

   #[test]
   fn mirroring_swaps_columns() {
      let mirrored = two_pixel_image().mirrored();
      assert_eq!(mirrored.pixels().get_pixel(1, 0), &Rgba([255, 0, 0, 255]));
      assert_eq!(mirrored.pixels().get_pixel(0, 0), &Rgba([0, 0, 0, 255]));
   }

   #[test]
   fn quarter_turn_swaps_dimensions() {
      let image = Image::from_rgba(40, 10, &vec![255; 40 * 10 * 4]);
      assert_eq!(image.rotated(90.0).size(), (10, 40));
   }

   #[test]
   fn rotation_expands_the_bounds() {
      let image = Image::from_rgba(10, 10, &vec![255; 10 * 10 * 4]);
      let (width, height) = image.rotated(45.0).size();
      assert_eq!((width, height), (14, 14));
   }

   #[test]
   fn resize_changes_size() {
      let image = Image::from_rgba(4, 4, &vec![255; 4 * 4 * 4]);
      assert_eq!(image.resized(8, 2).size(), (8, 2));
   }
}
