//! The transform stack: an ordered log of scale, translate, and rotate operations.
//!
//! The log is kept flat instead of being folded into a matrix, so that the caller's composition
//! order is preserved exactly and a single kind of operation can be removed without disturbing the
//! others.
//!
//! Each operation transforms the coordinate frame set up by the operations issued before it. When
//! a point is mapped to the device, the most recently issued operation therefore acts on it first:
//! after `translate(50, 50)` and `rotate(90)`, the logical origin still lands on `(50, 50)`.

/// A single transform operation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Transformation {
   /// Multiplies coordinates by the given non-zero factors.
   Scale(f64, f64),
   /// Offsets coordinates by the given amounts, in logical units.
   Translate(f64, f64),
   /// Rotates clockwise about the origin by the given angle, in degrees.
   Rotate(f64),
}

/// The kind of a [`Transformation`], used for selective resets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransformKind {
   Scale,
   Translate,
   Rotate,
}

impl Transformation {
   pub fn kind(&self) -> TransformKind {
      match self {
         Self::Scale(..) => TransformKind::Scale,
         Self::Translate(..) => TransformKind::Translate,
         Self::Rotate(..) => TransformKind::Rotate,
      }
   }

   fn apply(self, (x, y): (f64, f64)) -> (f64, f64) {
      match self {
         Self::Scale(sx, sy) => (x * sx, y * sy),
         Self::Translate(dx, dy) => (x + dx, y + dy),
         Self::Rotate(degrees) => {
            // The Y axis points down, so this standard rotation is clockwise on screen.
            let (sin, cos) = degrees.to_radians().sin_cos();
            (x * cos - y * sin, x * sin + y * cos)
         }
      }
   }

   fn apply_inverse(self, (x, y): (f64, f64)) -> (f64, f64) {
      match self {
         Self::Scale(sx, sy) => (x / sx, y / sy),
         Self::Translate(dx, dy) => (x - dx, y - dy),
         Self::Rotate(degrees) => {
            let (sin, cos) = degrees.to_radians().sin_cos();
            (x * cos + y * sin, -x * sin + y * cos)
         }
      }
   }
}

/// An ordered sequence of transform operations, with cached cumulative rotation and scale.
#[derive(Clone, Debug, PartialEq)]
pub struct TransformStack {
   operations: Vec<Transformation>,
   cumulative_rotation: f64,
   cumulative_scale: (f64, f64),
}

impl TransformStack {
   /// Creates an empty (identity) transform stack.
   pub fn new() -> Self {
      Self {
         operations: Vec::new(),
         cumulative_rotation: 0.0,
         cumulative_scale: (1.0, 1.0),
      }
   }

   /// Returns the operations in the order they were issued.
   pub fn operations(&self) -> &[Transformation] {
      &self.operations
   }

   pub fn len(&self) -> usize {
      self.operations.len()
   }

   pub fn is_empty(&self) -> bool {
      self.operations.is_empty()
   }

   /// Sum of the angles of all rotations currently in the stack, in degrees.
   pub fn cumulative_rotation(&self) -> f64 {
      self.cumulative_rotation
   }

   /// Per-axis product of all scale factors currently in the stack.
   pub fn cumulative_scale(&self) -> (f64, f64) {
      self.cumulative_scale
   }

   /// Returns whether any rotation is in effect.
   pub fn is_rotated(&self) -> bool {
      self.cumulative_rotation != 0.0
   }

   /// Returns whether any scaling is in effect.
   pub fn is_scaled(&self) -> bool {
      self.cumulative_scale != (1.0, 1.0)
   }

   /// Appends a scale operation.
   ///
   /// A zero factor cannot be inverted, so such an operation is dropped. Returns whether the
   /// operation was appended.
   pub fn push_scale(&mut self, sx: f64, sy: f64) -> bool {
      if sx == 0.0 || sy == 0.0 {
         log::debug!("ignoring degenerate scale ({}, {})", sx, sy);
         return false;
      }
      self.operations.push(Transformation::Scale(sx, sy));
      self.cumulative_scale.0 *= sx;
      self.cumulative_scale.1 *= sy;
      true
   }

   /// Appends a translate operation.
   pub fn push_translate(&mut self, dx: f64, dy: f64) {
      self.operations.push(Transformation::Translate(dx, dy));
   }

   /// Appends a clockwise rotation, in degrees.
   pub fn push_rotate(&mut self, degrees: f64) {
      self.operations.push(Transformation::Rotate(degrees));
      self.cumulative_rotation += degrees;
   }

   /// Removes every operation of the given kind, keeping the order of the rest.
   pub fn remove_all_of_kind(&mut self, kind: TransformKind) {
      self.operations.retain(|operation| operation.kind() != kind);
      self.recompute_cumulative();
   }

   /// Removes all operations.
   pub fn clear(&mut self) {
      self.operations.clear();
      self.cumulative_rotation = 0.0;
      self.cumulative_scale = (1.0, 1.0);
   }

   fn recompute_cumulative(&mut self) {
      self.cumulative_rotation = 0.0;
      self.cumulative_scale = (1.0, 1.0);
      for operation in &self.operations {
         match *operation {
            Transformation::Scale(sx, sy) => {
               self.cumulative_scale.0 *= sx;
               self.cumulative_scale.1 *= sy;
            }
            Transformation::Rotate(degrees) => self.cumulative_rotation += degrees,
            Transformation::Translate(..) => (),
         }
      }
   }

   /// Maps a logical point to device coordinates.
   ///
   /// With `skip_rotation`, rotations are left out; this is used when the caller rotates the
   /// rendered content itself.
   pub fn apply_to_point(&self, x: f64, y: f64, skip_rotation: bool) -> (f64, f64) {
      self.operations
         .iter()
         .rev()
         .filter(|operation| !(skip_rotation && operation.kind() == TransformKind::Rotate))
         .fold((x, y), |point, operation| operation.apply(point))
   }

   /// Maps a logical size to device size. Only scaling affects lengths.
   pub fn apply_to_length(&self, width: f64, height: f64) -> (f64, f64) {
      self.operations.iter().fold((width, height), |(width, height), operation| match *operation {
         Transformation::Scale(sx, sy) => (width * sx, height * sy),
         _ => (width, height),
      })
   }

   /// Maps a device point back to the logical point that [`apply_to_point`] would have sent
   /// there.
   ///
   /// [`apply_to_point`]: TransformStack::apply_to_point
   pub fn apply_inverse_to_point(&self, x: f64, y: f64) -> (f64, f64) {
      self.operations.iter().fold((x, y), |point, operation| operation.apply_inverse(point))
   }
}

impl Default for TransformStack {
   fn default() -> Self {
      Self::new()
   }
}

#[cfg(test)]
mod tests {
   use super::*;

   const EPSILON: f64 = 1e-9;

   fn assert_close((ax, ay): (f64, f64), (bx, by): (f64, f64)) {
      assert!(
         (ax - bx).abs() < EPSILON && (ay - by).abs() < EPSILON,
         "({}, {}) is not close to ({}, {})",
         ax,
         ay,
         bx,
         by
      );
   }

   fn stack(operations: &[Transformation]) -> TransformStack {
      let mut stack = TransformStack::new();
      for operation in operations {
         match *operation {
            Transformation::Scale(sx, sy) => {
               stack.push_scale(sx, sy);
            }
            Transformation::Translate(dx, dy) => stack.push_translate(dx, dy),
            Transformation::Rotate(degrees) => stack.push_rotate(degrees),
         }
      }
      stack
   }

   #[test]
   fn inverse_undoes_forward_mapping() {
      use Transformation::*;

      let sequences: &[&[Transformation]] = &[
         &[],
         &[Translate(10.0, -4.0)],
         &[Rotate(30.0), Scale(2.0, 0.5)],
         &[Translate(50.0, 50.0), Rotate(90.0), Scale(2.0, 2.0)],
         &[Scale(-1.0, 3.0), Rotate(-45.0), Translate(7.5, 0.25), Rotate(200.0)],
         &[Rotate(12.0), Rotate(13.0), Translate(-3.0, 9.0), Scale(0.1, 10.0), Rotate(-1.0)],
      ];
      let points = [(0.0, 0.0), (1.0, 2.0), (-37.5, 12.25), (640.0, 480.0)];
      for operations in sequences {
         let stack = stack(operations);
         for &(x, y) in &points {
            let (dx, dy) = stack.apply_to_point(x, y, false);
            assert_close(stack.apply_inverse_to_point(dx, dy), (x, y));
         }
      }
   }

   #[test]
   fn scale_lengths_commute() {
      use Transformation::*;

      let forward = stack(&[Scale(2.0, 3.0), Scale(4.0, 1.0)]);
      let backward = stack(&[Scale(4.0, 1.0), Scale(2.0, 3.0)]);
      assert_eq!(forward.apply_to_length(10.0, 10.0), (80.0, 30.0));
      assert_eq!(backward.apply_to_length(10.0, 10.0), (80.0, 30.0));
   }

   #[test]
   fn rotation_and_translation_do_not_resize_lengths() {
      use Transformation::*;

      let stack = stack(&[Translate(5.0, 5.0), Rotate(33.0), Scale(2.0, 2.0)]);
      assert_eq!(stack.apply_to_length(3.0, 4.0), (6.0, 8.0));
   }

   #[test]
   fn composition_order_matters() {
      use Transformation::*;

      let translate_then_rotate = stack(&[Translate(10.0, 0.0), Rotate(90.0)]);
      let rotate_then_translate = stack(&[Rotate(90.0), Translate(10.0, 0.0)]);

      // The rotation happens inside the translated frame, so the origin only moves.
      assert_eq!(translate_then_rotate.apply_to_point(0.0, 0.0, false), (10.0, 0.0));
      // The translation happens inside the rotated frame, so it points down the screen.
      assert_close(rotate_then_translate.apply_to_point(0.0, 0.0, false), (0.0, 10.0));
   }

   #[test]
   fn rotation_is_clockwise_on_screen() {
      let stack = stack(&[Transformation::Rotate(90.0)]);
      assert_close(stack.apply_to_point(10.0, 0.0, false), (0.0, 10.0));
      assert_close(stack.apply_to_point(0.0, 10.0, false), (-10.0, 0.0));
   }

   #[test]
   fn zero_scale_is_rejected() {
      let mut stack = TransformStack::new();
      stack.push_translate(1.0, 1.0);
      assert!(!stack.push_scale(0.0, 5.0));
      assert!(!stack.push_scale(3.0, 0.0));
      assert_eq!(stack.len(), 1);
      assert_eq!(stack.cumulative_scale(), (1.0, 1.0));
   }

   #[test]
   fn skipping_rotation() {
      use Transformation::*;

      let stack = stack(&[Translate(50.0, 50.0), Rotate(90.0)]);
      assert_eq!(stack.apply_to_point(10.0, 0.0, true), (60.0, 50.0));
   }

   #[test]
   fn cumulative_values_follow_removal() {
      use Transformation::*;

      let mut stack = stack(&[Rotate(30.0), Scale(2.0, 3.0), Rotate(15.0), Translate(1.0, 1.0)]);
      assert_eq!(stack.cumulative_rotation(), 45.0);
      assert_eq!(stack.cumulative_scale(), (2.0, 3.0));

      stack.remove_all_of_kind(TransformKind::Rotate);
      assert_eq!(stack.operations(), &[Scale(2.0, 3.0), Translate(1.0, 1.0)]);
      assert_eq!(stack.cumulative_rotation(), 0.0);
      assert!(!stack.is_rotated());
      assert_eq!(stack.cumulative_scale(), (2.0, 3.0));

      stack.clear();
      assert!(stack.is_empty());
      assert_eq!(stack.cumulative_scale(), (1.0, 1.0));
      assert!(!stack.is_scaled());
   }

   #[test]
   fn point_mapping_matches_the_rotation_formula() {
      use Transformation::*;

      let stack = stack(&[Translate(50.0, 50.0), Rotate(90.0), Scale(2.0, 2.0)]);
      let (sin, cos) = 90f64.to_radians().sin_cos();
      let expected = (50.0 + (20.0 * cos - 0.0 * sin), 50.0 + (20.0 * sin + 0.0 * cos));
      assert_eq!(stack.apply_to_point(10.0, 0.0, false), expected);
      assert_close(expected, (50.0, 70.0));
   }
}
