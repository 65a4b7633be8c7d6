//! Drawing state, and the stack used for temporarily changing it.

use edudraw_renderer::{rgb, Color, ShapeStyle};

use crate::config::StyleConfig;
use crate::draw_mode::DrawMode;
use crate::transform::TransformStack;

/// Everything that affects how a primitive is drawn.
///
/// `F` is the font type of the render backend.
#[derive(Debug, PartialEq)]
pub struct StyleState<F> {
   pub rect_mode: DrawMode,
   pub circle_mode: DrawMode,
   pub stroke_color: Color,
   pub stroke_enabled: bool,
   pub fill_color: Color,
   pub fill_enabled: bool,
   /// Outline thickness in pixels.
   pub stroke_weight: u32,
   pub background: Color,
   pub font: Option<F>,
   pub transform: TransformStack,
   /// Whether pointer queries are mapped back through the transform stack.
   pub account_for_transformations: bool,
}

impl<F> StyleState<F> {
   /// Creates a fresh state, taking the configurable defaults from `config`.
   pub fn new(config: &StyleConfig) -> Self {
      Self {
         rect_mode: config.rect_mode,
         circle_mode: config.circle_mode,
         background: Color::from(config.background),
         ..Self::default()
      }
   }

   /// The stroke color, or `None` if strokes are disabled.
   pub fn stroke(&self) -> Option<Color> {
      self.stroke_enabled.then_some(self.stroke_color)
   }

   /// The fill color, or `None` if fills are disabled.
   pub fn fill(&self) -> Option<Color> {
      self.fill_enabled.then_some(self.fill_color)
   }

   /// The style closed shapes are painted with.
   pub fn shape_style(&self) -> ShapeStyle {
      ShapeStyle {
         fill: self.fill(),
         stroke: self.stroke(),
         stroke_weight: self.stroke_weight,
      }
   }
}

impl<F> Default for StyleState<F> {
   fn default() -> Self {
      Self {
         rect_mode: DrawMode::TopLeft,
         circle_mode: DrawMode::Center,
         stroke_color: Color::BLACK,
         stroke_enabled: true,
         fill_color: Color::BLACK,
         fill_enabled: true,
         stroke_weight: 1,
         background: rgb(125, 125, 125),
         font: None,
         transform: TransformStack::new(),
         account_for_transformations: false,
      }
   }
}

// No two stack levels share a transform log.
impl<F: Clone> Clone for StyleState<F> {
   fn clone(&self) -> Self {
      Self {
         rect_mode: self.rect_mode,
         circle_mode: self.circle_mode,
         stroke_color: self.stroke_color,
         stroke_enabled: self.stroke_enabled,
         fill_color: self.fill_color,
         fill_enabled: self.fill_enabled,
         stroke_weight: self.stroke_weight,
         background: self.background,
         font: self.font.clone(),
         transform: self.transform.clone(),
         account_for_transformations: self.account_for_transformations,
      }
   }
}

/// The base state plus a stack of temporary states pushed on top of it.
///
/// The topmost pushed state is the current one; with nothing pushed, the base state is.
#[derive(Debug)]
pub struct StateStack<F> {
   base: StyleState<F>,
   pushed: Vec<StyleState<F>>,
}

impl<F: Clone> StateStack<F> {
   pub fn new(base: StyleState<F>) -> Self {
      Self {
         base,
         pushed: Vec::new(),
      }
   }

   /// Returns the current state.
   pub fn current(&self) -> &StyleState<F> {
      self.pushed.last().unwrap_or(&self.base)
   }

   /// Returns the current state for modification.
   pub fn current_mut(&mut self) -> &mut StyleState<F> {
      self.pushed.last_mut().unwrap_or(&mut self.base)
   }

   /// Returns how many temporary states are pushed.
   pub fn depth(&self) -> usize {
      self.pushed.len()
   }

   /// Starts a temporary state, initialized to a copy of the current one.
   pub fn push(&mut self) {
      let copy = self.current().clone();
      self.pushed.push(copy);
   }

   /// Leaves the current temporary state. Does nothing if no state is pushed.
   pub fn pop(&mut self) {
      if self.pushed.pop().is_none() {
         log::debug!("pop() without a matching push(), ignoring");
      }
   }

   /// Discards all temporary states and replaces the base state.
   pub fn reset(&mut self, base: StyleState<F>) {
      self.pushed.clear();
      self.base = base;
   }
}

#[cfg(test)]
mod tests {
   use super::*;
   use crate::transform::Transformation;

   type State = StyleState<()>;

   #[test]
   fn defaults() {
      let state = State::default();
      assert_eq!(state.rect_mode, DrawMode::TopLeft);
      assert_eq!(state.circle_mode, DrawMode::Center);
      assert_eq!(state.stroke(), Some(Color::BLACK));
      assert_eq!(state.fill(), Some(Color::BLACK));
      assert_eq!(state.stroke_weight, 1);
      assert_eq!(state.background, rgb(125, 125, 125));
      assert!(state.transform.is_empty());
      assert!(!state.account_for_transformations);
   }

   #[test]
   fn disabled_colors_resolve_to_none() {
      let state = State {
         fill_enabled: false,
         stroke_enabled: false,
         ..State::default()
      };
      let style = state.shape_style();
      assert_eq!(style.fill, None);
      assert_eq!(style.stroke, None);
   }

   #[test]
   fn pushed_state_is_isolated() {
      let mut stack = StateStack::new(State::default());
      stack.current_mut().fill_color = rgb(10, 20, 30);
      stack.current_mut().transform.push_translate(5.0, 5.0);
      let before = stack.current().clone();

      stack.push();
      assert_eq!(stack.depth(), 1);
      assert_eq!(stack.current(), &before);
      stack.current_mut().fill_color = rgb(200, 0, 0);
      stack.current_mut().rect_mode = DrawMode::Center;
      stack.current_mut().transform.push_rotate(45.0);
      stack.current_mut().transform.push_scale(2.0, 2.0);

      stack.pop();
      assert_eq!(stack.depth(), 0);
      assert_eq!(stack.current(), &before);
      assert_eq!(stack.current().transform.operations(), &[Transformation::Translate(5.0, 5.0)]);
   }

   #[test]
   fn nested_levels_restore_independently() {
      let mut stack = StateStack::new(State::default());
      stack.push();
      stack.current_mut().stroke_weight = 2;
      stack.push();
      stack.current_mut().stroke_weight = 3;
      stack.pop();
      assert_eq!(stack.current().stroke_weight, 2);
      stack.pop();
      assert_eq!(stack.current().stroke_weight, 1);
   }

   #[test]
   fn pop_on_empty_stack_is_a_no_op() {
      let mut stack = StateStack::new(State::default());
      stack.current_mut().stroke_weight = 4;
      stack.pop();
      stack.pop();
      assert_eq!(stack.depth(), 0);
      assert_eq!(stack.current().stroke_weight, 4);
   }

   #[test]
   fn reset_discards_pushed_states() {
      let mut stack = StateStack::new(State::default());
      stack.current_mut().fill_enabled = false;
      stack.push();
      stack.push();
      stack.reset(State::default());
      assert_eq!(stack.depth(), 0);
      assert_eq!(stack.current(), &State::default());
   }

   #[test]
   fn new_takes_configured_defaults() {
      let config = StyleConfig {
         rect_mode: DrawMode::Center,
         circle_mode: DrawMode::TopLeft,
         background: [1, 2, 3],
      };
      let state = State::new(&config);
      assert_eq!(state.rect_mode, DrawMode::Center);
      assert_eq!(state.circle_mode, DrawMode::TopLeft);
      assert_eq!(state.background, rgb(1, 2, 3));
      assert_eq!(state.stroke_weight, 1);
   }
}
