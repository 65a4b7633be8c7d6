//! Plain value types shared by the core and the backends.

/// An 8-bit RGBA color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
   pub r: u8,
   pub g: u8,
   pub b: u8,
   pub a: u8,
}

impl Color {
   pub const BLACK: Self = rgb(0, 0, 0);
   pub const WHITE: Self = rgb(255, 255, 255);
   pub const TRANSPARENT: Self = rgba(0, 0, 0, 0);

   /// Returns the color as an `[r, g, b, a]` array.
   pub fn to_array(self) -> [u8; 4] {
      [self.r, self.g, self.b, self.a]
   }
}

impl From<(u8, u8, u8)> for Color {
   fn from((r, g, b): (u8, u8, u8)) -> Self {
      rgb(r, g, b)
   }
}

impl From<[u8; 3]> for Color {
   fn from([r, g, b]: [u8; 3]) -> Self {
      rgb(r, g, b)
   }
}

/// Shorthand for an opaque color.
pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
   Color { r, g, b, a: 255 }
}

/// Shorthand for a color with alpha.
pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Color {
   Color { r, g, b, a }
}

/// A point in device (pixel) coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
   pub x: i32,
   pub y: i32,
}

impl Point {
   pub const fn new(x: i32, y: i32) -> Self {
      Self { x, y }
   }

   /// Rounds a real-valued coordinate pair to the nearest pixel.
   pub fn round(x: f64, y: f64) -> Self {
      Self {
         x: x.round() as i32,
         y: y.round() as i32,
      }
   }
}

/// Shorthand for `Point::new`.
pub const fn point(x: i32, y: i32) -> Point {
   Point::new(x, y)
}

/// An axis-aligned rectangle in device coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
   pub x: i32,
   pub y: i32,
   pub width: u32,
   pub height: u32,
}

impl Rect {
   pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
      Self { x, y, width, height }
   }

   /// Builds the rectangle spanning two opposite corners, given in any order.
   pub fn from_corners(a: Point, b: Point) -> Self {
      let x = a.x.min(b.x);
      let y = a.y.min(b.y);
      Self {
         x,
         y,
         width: a.x.abs_diff(b.x),
         height: a.y.abs_diff(b.y),
      }
   }

   pub fn left(&self) -> i32 {
      self.x
   }

   pub fn top(&self) -> i32 {
      self.y
   }

   pub fn right(&self) -> i32 {
      self.x + self.width as i32
   }

   pub fn bottom(&self) -> i32 {
      self.y + self.height as i32
   }

   pub fn is_empty(&self) -> bool {
      self.width == 0 || self.height == 0
   }
}

/// How a closed shape is painted. The fill is always rendered before the stroke.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShapeStyle {
   /// The fill color, or `None` if the shape is not filled.
   pub fill: Option<Color>,
   /// The outline color, or `None` if the outline is not drawn.
   pub stroke: Option<Color>,
   /// Thickness of the outline in pixels.
   pub stroke_weight: u32,
}

impl ShapeStyle {
   /// Returns whether painting with this style would produce any pixels at all.
   pub fn is_visible(&self) -> bool {
      self.fill.is_some() || (self.stroke.is_some() && self.stroke_weight > 0)
   }
}
