//! A demo sketch: draws a few frames of a spinning pinwheel and saves the last one.

use std::path::PathBuf;

use edudraw::backend::Backend;
use edudraw::{rgb, App, Canvas, DrawMode, Sketch, SketchConfig};
use log::LevelFilter;
use simple_logger::SimpleLogger;

const FRAMES: u64 = 90;

struct Pinwheel {
   output: Option<PathBuf>,
}

impl Sketch<Backend> for Pinwheel {
   fn setup(&mut self, canvas: &mut Canvas<Backend>) {
      if let Err(error) = canvas.frame_rate(30.0) {
         log::error!("{}", error);
      }
   }

   fn draw(&mut self, canvas: &mut Canvas<Backend>) {
      let (width, height) = (canvas.width() as f64, canvas.height() as f64);
      let frame = canvas.frame_count() as f64;

      canvas.background(rgb(30, 30, 40));
      canvas.rect_mode(DrawMode::Center);
      canvas.translate(width / 2.0, height / 2.0);
      canvas.rotate(frame * 4.0);
      canvas.stroke_weight(2);
      for blade in 0..4 {
         canvas.push();
         canvas.rotate(blade as f64 * 90.0);
         canvas.fill(rgb(230, 120 + blade * 30, 60));
         canvas.triangle(0.0, 0.0, 80.0, -20.0, 80.0, 20.0);
         canvas.pop();
      }
      canvas.fill(rgb(255, 255, 255));
      canvas.circle(0.0, 0.0, 16.0);

      canvas.reset_transformations();
      canvas.no_stroke();
      canvas.fill(rgb(90, 90, 110));
      canvas.rect(width / 2.0, height - 20.0, width * frame / FRAMES as f64, 8.0);

      if canvas.frame_count() >= FRAMES {
         match canvas.save("") {
            Ok(path) => self.output = Some(path),
            Err(error) => log::error!("could not save the frame: {}", error),
         }
         canvas.quit();
      }
   }
}

fn run() -> edudraw::Result<()> {
   let config = SketchConfig::load_or_create()?;
   let backend = Backend::new(config.window.width, config.window.height)?;
   let mut app = App::new(backend, &config)?;
   let mut sketch = Pinwheel { output: None };
   app.run(&mut sketch)?;
   if let Some(path) = sketch.output {
      println!("{}", path.display());
   }
   Ok(())
}

fn main() {
   let _ = SimpleLogger::new().with_level(LevelFilter::Info).env().init();

   match run() {
      Ok(()) => (),
      Err(error) => {
         log::error!("run() returned with an Err:\n{}", error);
         std::process::exit(1);
      }
   }
}
