use std::io::Cursor;
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ColorType, DynamicImage, ImageEncoder, ImageFormat, RgbaImage};

pub struct ImageCoder;

impl ImageCoder {
   /// Encodes an image to PNG data.
   pub fn encode_png_data(image: &RgbaImage) -> edudraw::Result<Vec<u8>> {
      let mut bytes: Vec<u8> = Vec::new();
      match PngEncoder::new(Cursor::new(&mut bytes)).write_image(
         image,
         image.width(),
         image.height(),
         ColorType::Rgba8,
      ) {
         Ok(()) => (),
         Err(error) => {
            log::error!("error while encoding: {}", error);
            return Err(error.into());
         }
      }
      Ok(bytes)
   }

   /// Saves an image to a file, creating its parent directory if needed.
   ///
   /// The format is picked from the file extension. Paths without an extension are saved as PNG.
   pub fn save(image: &RgbaImage, path: &Path) -> edudraw::Result<()> {
      if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
         std::fs::create_dir_all(parent)?;
      }
      match ImageFormat::from_path(path) {
         // JPEG has no alpha channel.
         Ok(ImageFormat::Jpeg) => {
            let rgb = DynamicImage::ImageRgba8(image.clone()).to_rgb8();
            rgb.save_with_format(path, ImageFormat::Jpeg)?
         }
         Ok(format) => image.save_with_format(path, format)?,
         Err(_) => std::fs::write(path, Self::encode_png_data(image)?)?,
      }
      Ok(())
   }
}

#[cfg(test)]
mod tests {
   use super::*;
   use image::Rgba;

   #[test]
   fn png_data_decodes_back() {
      let image = RgbaImage::from_pixel(3, 2, Rgba([1, 2, 3, 255]));
      let data = ImageCoder::encode_png_data(&image).unwrap();
      let decoded = image::load_from_memory(&data).unwrap().into_rgba8();
      assert_eq!(decoded, image);
   }

   #[test]
   fn save_creates_missing_directories() {
      let dir = tempfile::tempdir().unwrap();
      let path = dir.path().join("frames").join("frame");
      ImageCoder::save(&RgbaImage::new(2, 2), &path).unwrap();
      assert!(path.is_file());
      let decoded =
         image::io::Reader::open(&path).unwrap().with_guessed_format().unwrap().decode().unwrap();
      assert_eq!(decoded.into_rgba8().dimensions(), (2, 2));
   }
}
