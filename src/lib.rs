//! EduDraw: an educational, Processing-style immediate mode drawing library.
//!
//! A sketch supplies `setup` and `draw` callbacks (see [`Sketch`]) and issues shape, text, and
//! image commands on a [`Canvas`] every frame. The canvas keeps a stack of drawing states and an
//! ordered log of transformations, and resolves every primitive to device coordinates before
//! handing it to a [`RenderBackend`].

// Lets code inside the crate refer to `edudraw::Result` like users of the crate would.
extern crate self as edudraw;

mod app;
#[cfg(feature = "renderer-skia")]
pub mod backend;
mod canvas;
pub mod config;
mod draw_mode;
mod event;
mod image_coder;
mod state;
mod timer;
pub mod transform;

pub use crate::app::*;
pub use crate::canvas::*;
pub use crate::config::SketchConfig;
pub use crate::draw_mode::*;
pub use crate::event::*;
pub use crate::image_coder::ImageCoder;
pub use crate::state::*;
pub use crate::timer::Timer;
pub use edudraw_renderer::{
   point, rgb, rgba, Color, Font, Framebuffer, Image, Point, Rect, RenderBackend, ShapeStyle,
};

#[derive(Debug, thiserror::Error)]
pub enum Error {
   #[error("invalid configuration: {0}")]
   InvalidConfiguration(String),

   #[error("could not load font: {0}")]
   InvalidFont(String),

   #[error("input/output error: {0}")]
   Io(#[from] std::io::Error),

   #[error("image error: {0}")]
   Image(#[from] image::ImageError),

   #[error("could not read config: {0}")]
   ConfigDeserialize(#[from] toml::de::Error),

   #[error("could not write config: {0}")]
   ConfigSerialize(#[from] toml::ser::Error),

   #[error("the frame buffer does not match the frame size {width}x{height}")]
   FrameSizeMismatch { width: u32, height: u32 },

   #[error(transparent)]
   Backend(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
