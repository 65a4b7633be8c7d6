//! The drawing surface sketches draw on.
//!
//! Every primitive goes through the same pipeline: the current drawing state is read, the shape's
//! anchor is resolved according to its draw mode, the transform stack maps the result to device
//! coordinates, and only then is the backend called.

mod images;
mod shapes;

use std::path::PathBuf;
use std::time::Duration;

use edudraw_renderer::RenderBackend;
use image::RgbaImage;

use crate::config::{interval_from_frame_rate, SketchConfig, StyleConfig};
use crate::draw_mode::DrawMode;
use crate::image_coder::ImageCoder;
use crate::state::{StateStack, StyleState};
use crate::transform::TransformKind;
use crate::{Color, Error};

pub struct Canvas<B: RenderBackend> {
   backend: B,
   states: StateStack<B::Font>,
   style_defaults: StyleConfig,
   export_directory: Option<PathBuf>,
   frame_interval: Duration,
   frame_count: u64,
   quit_requested: bool,
   mouse_position: (f64, f64),
}

impl<B: RenderBackend> Canvas<B> {
   /// Creates a canvas drawing onto the backend's frame.
   pub fn new(backend: B, config: &SketchConfig) -> Self {
      Self {
         backend,
         states: StateStack::new(StyleState::new(&config.style)),
         style_defaults: config.style.clone(),
         export_directory: config.export.directory.clone(),
         frame_interval: config.frame_interval(),
         frame_count: 0,
         quit_requested: false,
         mouse_position: (0.0, 0.0),
      }
   }

   /// Returns the backend.
   pub fn backend(&self) -> &B {
      &self.backend
   }

   /// Returns the backend for modification, e.g. for drawing with it directly.
   pub fn backend_mut(&mut self) -> &mut B {
      &mut self.backend
   }

   /// Returns the current drawing state.
   pub fn state(&self) -> &StyleState<B::Font> {
      self.states.current()
   }

   fn state_mut(&mut self) -> &mut StyleState<B::Font> {
      self.states.current_mut()
   }

   /// Width of the frame, in pixels.
   pub fn width(&self) -> u32 {
      self.backend.size().0
   }

   /// Height of the frame, in pixels.
   pub fn height(&self) -> u32 {
      self.backend.size().1
   }

   /// Returns the number of the frame being drawn. The first frame is number 1.
   pub fn frame_count(&self) -> u64 {
      self.frame_count
   }

   pub(crate) fn begin_frame(&mut self) {
      self.frame_count += 1;
   }

   // State --------------------------------------------------------------------------------------

   /// Sets whether coordinates given to rectangles, squares, images, and text are their top-left
   /// corner or their center.
   pub fn rect_mode(&mut self, mode: DrawMode) {
      self.state_mut().rect_mode = mode;
   }

   /// Sets whether coordinates given to circles and ellipses are the top-left corner of their
   /// bounding box or their center.
   pub fn circle_mode(&mut self, mode: DrawMode) {
      self.state_mut().circle_mode = mode;
   }

   /// Fills subsequent shapes with the given color.
   pub fn fill(&mut self, color: impl Into<Color>) {
      let state = self.state_mut();
      state.fill_enabled = true;
      state.fill_color = color.into();
   }

   /// Stops filling subsequent shapes.
   pub fn no_fill(&mut self) {
      self.state_mut().fill_enabled = false;
   }

   /// Outlines subsequent shapes with the given color.
   pub fn stroke(&mut self, color: impl Into<Color>) {
      let state = self.state_mut();
      state.stroke_enabled = true;
      state.stroke_color = color.into();
   }

   /// Stops outlining subsequent shapes.
   pub fn no_stroke(&mut self) {
      self.state_mut().stroke_enabled = false;
   }

   /// Sets the thickness of outlines and lines, in pixels.
   pub fn stroke_weight(&mut self, weight: u32) {
      self.state_mut().stroke_weight = weight;
   }

   /// Sets the font used by [`Canvas::text`].
   pub fn change_font(&mut self, font: B::Font) {
      self.state_mut().font = Some(font);
   }

   /// Starts a temporary state. Everything changed until the matching [`Canvas::pop`] is undone
   /// by it.
   pub fn push(&mut self) {
      self.states.push();
   }

   /// Leaves the current temporary state. Does nothing if no state was pushed.
   pub fn pop(&mut self) {
      self.states.pop();
   }

   /// Resets the whole drawing state to its defaults, discarding any pushed states.
   pub fn reset_state(&mut self) {
      self.states.reset(StyleState::new(&self.style_defaults));
   }

   // Transformations ----------------------------------------------------------------------------

   /// Rotates subsequent drawing clockwise by the given angle, in degrees.
   pub fn rotate(&mut self, degrees: f64) {
      self.state_mut().transform.push_rotate(degrees);
   }

   /// Scales subsequent drawing. A zero factor is ignored.
   pub fn scale(&mut self, sx: f64, sy: f64) {
      self.state_mut().transform.push_scale(sx, sy);
   }

   /// Moves the origin of subsequent drawing.
   pub fn translate(&mut self, dx: f64, dy: f64) {
      self.state_mut().transform.push_translate(dx, dy);
   }

   /// Removes all rotations, keeping other transformations.
   pub fn reset_rotation(&mut self) {
      self.state_mut().transform.remove_all_of_kind(TransformKind::Rotate);
   }

   /// Removes all scaling, keeping other transformations.
   pub fn reset_scale(&mut self) {
      self.state_mut().transform.remove_all_of_kind(TransformKind::Scale);
   }

   /// Removes all translations, keeping other transformations.
   pub fn reset_translation(&mut self) {
      self.state_mut().transform.remove_all_of_kind(TransformKind::Translate);
   }

   /// Removes all transformations.
   pub fn reset_transformations(&mut self) {
      self.state_mut().transform.clear();
   }

   /// Sets whether [`Canvas::mouse_pos`] maps the pointer back through the current
   /// transformations, so that it can be compared against the coordinates shapes were drawn at.
   pub fn account_for_transformations(&mut self, enabled: bool) {
      self.state_mut().account_for_transformations = enabled;
   }

   // Input and timing ---------------------------------------------------------------------------

   /// Returns the pointer position.
   ///
   /// These are device coordinates, unless [`Canvas::account_for_transformations`] is enabled.
   pub fn mouse_pos(&self) -> (f64, f64) {
      let (x, y) = self.mouse_position;
      let state = self.state();
      if state.account_for_transformations {
         state.transform.apply_inverse_to_point(x, y)
      } else {
         (x, y)
      }
   }

   pub(crate) fn set_mouse_position(&mut self, x: f64, y: f64) {
      self.mouse_position = (x, y);
   }

   /// Sets the desired number of frames per second. Non-positive rates are rejected.
   pub fn frame_rate(&mut self, fps: f64) -> edudraw::Result<()> {
      self.frame_interval = interval_from_frame_rate(fps)?;
      Ok(())
   }

   /// Returns the time between two frames.
   pub fn frame_interval(&self) -> Duration {
      self.frame_interval
   }

   /// Stops the sketch. The frame being drawn is finished first.
   pub fn quit(&mut self) {
      self.quit_requested = true;
   }

   /// Returns whether [`Canvas::quit`] was called.
   pub fn quit_requested(&self) -> bool {
      self.quit_requested
   }

   // Export -------------------------------------------------------------------------------------

   /// Returns a copy of the frame drawn so far.
   pub fn snapshot(&self) -> edudraw::Result<RgbaImage> {
      let (width, height) = self.backend.size();
      let mut pixels = vec![0; width as usize * height as usize * 4];
      self.backend.download_rgba(&mut pixels);
      RgbaImage::from_raw(width, height, pixels).ok_or(Error::FrameSizeMismatch { width, height })
   }

   /// Saves a picture of the current frame. The format is picked from the file extension.
   ///
   /// An empty file name saves to `<frame count>.png`. Relative paths are resolved against the
   /// configured export directory. Returns the path the picture was written to.
   pub fn save(&self, filename: &str) -> edudraw::Result<PathBuf> {
      let filename = if filename.is_empty() {
         PathBuf::from(format!("{}.png", self.frame_count))
      } else {
         PathBuf::from(filename)
      };
      let path = match &self.export_directory {
         Some(directory) if filename.is_relative() => directory.join(filename),
         _ => filename,
      };
      ImageCoder::save(&self.snapshot()?, &path)?;
      log::info!("saved frame {} to {}", self.frame_count, path.display());
      Ok(path)
   }
}
