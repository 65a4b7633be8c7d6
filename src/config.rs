//! Sketch configuration.
//!
//! ## Note for adding new keys
//!
//! New keys added to the config _must_ use `#[serde(default)]` to maintain compatibility with
//! older configs. These keys will be added to the user's configuration automatically.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::draw_mode::DrawMode;
use crate::Error;

/// Size and title of the drawing surface.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct WindowConfig {
   pub width: u32,
   pub height: u32,
   pub title: String,
}

/// Frame timing.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct TimingConfig {
   /// Target number of frames per second.
   pub frame_rate: f64,
   /// Whether all drawing state is reset to its defaults after every frame.
   #[serde(default = "default_reset_after_loop")]
   pub reset_after_loop: bool,
}

fn default_reset_after_loop() -> bool {
   true
}

/// Defaults for the drawing state. These are what the state is reset to.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct StyleConfig {
   #[serde(default = "default_rect_mode")]
   pub rect_mode: DrawMode,
   #[serde(default = "default_circle_mode")]
   pub circle_mode: DrawMode,
   /// RGB background color.
   #[serde(default = "default_background")]
   pub background: [u8; 3],
}

fn default_rect_mode() -> DrawMode {
   DrawMode::TopLeft
}

fn default_circle_mode() -> DrawMode {
   DrawMode::Center
}

fn default_background() -> [u8; 3] {
   [125, 125, 125]
}

impl Default for StyleConfig {
   fn default() -> Self {
      Self {
         rect_mode: default_rect_mode(),
         circle_mode: default_circle_mode(),
         background: default_background(),
      }
   }
}

/// Still image export.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct ExportConfig {
   /// The directory relative file names passed to `save` are resolved against. Defaults to the
   /// working directory.
   #[serde(default)]
   pub directory: Option<PathBuf>,
}

/// A sketch `edudraw.toml` file.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct SketchConfig {
   pub window: WindowConfig,
   pub timing: TimingConfig,
   #[serde(default)]
   pub style: StyleConfig,
   #[serde(default)]
   pub export: ExportConfig,
}

impl SketchConfig {
   /// Returns the platform-specific configuration directory.
   pub fn config_dir() -> edudraw::Result<PathBuf> {
      let project_dirs = ProjectDirs::from("", "", "EduDraw").ok_or_else(|| {
         Error::InvalidConfiguration("cannot determine config directories".to_owned())
      })?;
      Ok(project_dirs.config_dir().to_owned())
   }

   /// Returns the path to the default `edudraw.toml` file.
   pub fn path() -> edudraw::Result<PathBuf> {
      Ok(Self::config_dir()?.join("edudraw.toml"))
   }

   /// Loads the default `edudraw.toml` file.
   ///
   /// If the file doesn't exist, it's created with values inherited from
   /// `SketchConfig::default`. A file that cannot be parsed is reported and replaced by the
   /// defaults for this run.
   pub fn load_or_create() -> edudraw::Result<Self> {
      let config_dir = Self::config_dir()?;
      let config_file = Self::path()?;
      std::fs::create_dir_all(config_dir)?;
      if !config_file.is_file() {
         let config = Self::default();
         config.save_to(&config_file)?;
         Ok(config)
      } else {
         let config = match Self::from_file(&config_file) {
            Ok(config) => config,
            Err(error) => {
               log::error!("error while loading config file: {}", error);
               log::error!("falling back to default config");
               return Ok(Self::default());
            }
         };
         // Preemptively save the config to the disk if any new keys have been added.
         config.save_to(&config_file)?;
         Ok(config)
      }
   }

   /// Reads and validates a config file at an explicit path.
   pub fn from_file(path: impl AsRef<Path>) -> edudraw::Result<Self> {
      let file = std::fs::read_to_string(path)?;
      let config: Self = toml::from_str(&file)?;
      config.validate()?;
      Ok(config)
   }

   /// Saves the configuration to the given file.
   pub fn save_to(&self, path: impl AsRef<Path>) -> edudraw::Result<()> {
      std::fs::write(path, toml::to_string(self)?)?;
      Ok(())
   }

   /// Checks the values serde cannot check by itself.
   pub fn validate(&self) -> edudraw::Result<()> {
      if self.window.width == 0 || self.window.height == 0 {
         return Err(Error::InvalidConfiguration(format!(
            "window size must be non-zero, got {}x{}",
            self.window.width, self.window.height
         )));
      }
      interval_from_frame_rate(self.timing.frame_rate)?;
      Ok(())
   }

   /// The time between two frames. An invalid frame rate falls back to 60 frames per second.
   pub fn frame_interval(&self) -> Duration {
      interval_from_frame_rate(self.timing.frame_rate).unwrap_or(Duration::from_secs(1) / 60)
   }
}

/// Converts frames per second to the time between two frames.
pub(crate) fn interval_from_frame_rate(fps: f64) -> edudraw::Result<Duration> {
   if !(fps.is_finite() && fps > 0.0) {
      return Err(Error::InvalidConfiguration(format!(
         "frame rate must be a positive number, got {}",
         fps
      )));
   }
   Duration::try_from_secs_f64(1.0 / fps).map_err(|_| {
      Error::InvalidConfiguration(format!("frame rate {} is too low to schedule", fps))
   })
}

impl Default for SketchConfig {
   fn default() -> Self {
      Self {
         window: WindowConfig {
            width: 640,
            height: 480,
            title: "EduDraw".to_owned(),
         },
         timing: TimingConfig {
            frame_rate: 60.0,
            reset_after_loop: true,
         },
         style: StyleConfig::default(),
         export: ExportConfig::default(),
      }
   }
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn round_trip_through_a_file() {
      let dir = tempfile::tempdir().unwrap();
      let path = dir.path().join("edudraw.toml");
      let mut config = SketchConfig::default();
      config.window.title = "Bouncing ball".to_owned();
      config.style.rect_mode = DrawMode::Center;
      config.export.directory = Some(PathBuf::from("frames"));
      config.save_to(&path).unwrap();
      assert_eq!(SketchConfig::from_file(&path).unwrap(), config);
   }

   #[test]
   fn missing_sections_use_defaults() {
      let dir = tempfile::tempdir().unwrap();
      let path = dir.path().join("edudraw.toml");
      std::fs::write(
         &path,
         r#"
            [window]
            width = 200
            height = 100
            title = "minimal"

            [timing]
            frame_rate = 30.0
         "#,
      )
      .unwrap();
      let config = SketchConfig::from_file(&path).unwrap();
      assert!(config.timing.reset_after_loop);
      assert_eq!(config.style, StyleConfig::default());
      assert_eq!(config.export.directory, None);
   }

   #[test]
   fn draw_modes_are_read_by_name() {
      let config: SketchConfig = toml::from_str(
         r#"
            [window]
            width = 200
            height = 100
            title = "modes"

            [timing]
            frame_rate = 30.0

            [style]
            rect_mode = "CENTER"
            circle_mode = "TOP_LEFT"
         "#,
      )
      .unwrap();
      assert_eq!(config.style.rect_mode, DrawMode::Center);
      assert_eq!(config.style.circle_mode, DrawMode::TopLeft);
   }

   #[test]
   fn unknown_draw_mode_is_rejected() {
      let dir = tempfile::tempdir().unwrap();
      let path = dir.path().join("edudraw.toml");
      std::fs::write(
         &path,
         r#"
            [window]
            width = 200
            height = 100
            title = "modes"

            [timing]
            frame_rate = 30.0

            [style]
            rect_mode = "MIDDLE"
         "#,
      )
      .unwrap();
      assert!(matches!(SketchConfig::from_file(&path), Err(Error::ConfigDeserialize(_))));
   }

   #[test]
   fn validation() {
      let mut config = SketchConfig::default();
      assert!(config.validate().is_ok());
      config.timing.frame_rate = 0.0;
      assert!(matches!(config.validate(), Err(Error::InvalidConfiguration(_))));
      config.timing.frame_rate = 1e-30;
      assert!(matches!(config.validate(), Err(Error::InvalidConfiguration(_))));
      assert_eq!(config.frame_interval(), Duration::from_secs(1) / 60);
      config.timing.frame_rate = 25.0;
      assert_eq!(config.frame_interval(), Duration::from_millis(40));
      config.window.width = 0;
      assert!(matches!(config.validate(), Err(Error::InvalidConfiguration(_))));
   }
}
