use edudraw_renderer::{Color, Point, Rect};
use image::RgbaImage;
use tiny_skia::{ColorU8, Paint, Pixmap, PremultipliedColorU8};

pub(crate) fn paint(color: Color) -> Paint<'static> {
   let mut paint = Paint::default();
   paint.set_color_rgba8(color.r, color.g, color.b, color.a);
   paint.anti_alias = true;
   paint
}

pub(crate) fn to_skia_color(color: Color) -> tiny_skia::Color {
   tiny_skia::Color::from_rgba8(color.r, color.g, color.b, color.a)
}

pub(crate) fn to_skia_rect(rect: Rect) -> Option<tiny_skia::Rect> {
   tiny_skia::Rect::from_xywh(rect.x as f32, rect.y as f32, rect.width as f32, rect.height as f32)
}

pub(crate) fn to_skia_point(point: Point) -> (f32, f32) {
   (point.x as f32, point.y as f32)
}

/// Copies straight RGBA pixels into a premultiplied pixmap.
///
/// Returns `None` for zero-sized images, which tiny-skia cannot represent.
pub(crate) fn pixmap_from_rgba(image: &RgbaImage) -> Option<Pixmap> {
   let mut pixmap = Pixmap::new(image.width(), image.height())?;
   for (dest, source) in pixmap.pixels_mut().iter_mut().zip(image.pixels()) {
      let [r, g, b, a] = source.0;
      *dest = ColorU8::from_rgba(r, g, b, a).premultiply();
   }
   Some(pixmap)
}

/// Writes a pixmap's pixels as straight RGBA into `dest`.
pub(crate) fn download_pixmap(pixels: &[PremultipliedColorU8], dest: &mut [u8]) {
   assert!(
      dest.len() == pixels.len() * 4,
      "destination buffer size does not match the pixmap's dimensions"
   );
   for (dest, pixel) in dest.chunks_exact_mut(4).zip(pixels) {
      let color = pixel.demultiply();
      dest.copy_from_slice(&[color.red(), color.green(), color.blue(), color.alpha()]);
   }
}

pub(crate) fn pixmap_to_rgba(pixmap: &Pixmap) -> RgbaImage {
   let mut data = vec![0; pixmap.width() as usize * pixmap.height() as usize * 4];
   download_pixmap(pixmap.pixels(), &mut data);
   RgbaImage::from_raw(pixmap.width(), pixmap.height(), data)
      .expect("pixel buffer sized from the pixmap's own dimensions")
}
