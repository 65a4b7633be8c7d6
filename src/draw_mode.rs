//! Anchor modes, and resolving an anchored box to the top-left origin the backend expects.

use std::{fmt, str};

use serde::{Deserialize, Serialize};

use crate::Error;

/// Whether the coordinate given to a shape is its top-left corner or its center.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DrawMode {
   TopLeft,
   Center,
}

impl DrawMode {
   /// Converts an anchored box to the origin the backend needs.
   ///
   /// Normally this returns the top-left corner of the box. When `inverted` is set it returns the
   /// box's center instead, which is where a shape has to be anchored to be rotated about its
   /// visual center.
   pub fn resolve(self, x: f64, y: f64, width: f64, height: f64, inverted: bool) -> (f64, f64) {
      match (self, inverted) {
         (Self::TopLeft, false) | (Self::Center, true) => (x, y),
         (Self::TopLeft, true) => (x + width / 2.0, y + height / 2.0),
         (Self::Center, false) => (x - width / 2.0, y - height / 2.0),
      }
   }

   /// Returns the name of the mode as accepted by [`str::parse`].
   pub fn name(self) -> &'static str {
      match self {
         Self::TopLeft => "TOP_LEFT",
         Self::Center => "CENTER",
      }
   }
}

impl fmt::Display for DrawMode {
   fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
      f.write_str(self.name())
   }
}

impl str::FromStr for DrawMode {
   type Err = Error;

   fn from_str(s: &str) -> Result<Self, Error> {
      match s {
         "TOP_LEFT" => Ok(Self::TopLeft),
         "CENTER" => Ok(Self::Center),
         _ => Err(Error::InvalidConfiguration(format!(
            "unknown draw mode {:?} (expected TOP_LEFT or CENTER)",
            s
         ))),
      }
   }
}
