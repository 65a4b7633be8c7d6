//! Input events, fed into a running sketch by the host.

use crossbeam_channel::Sender;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MouseButton {
   Left,
   Middle,
   Right,
   Other(u16),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyEvent {
   /// The name of the key, e.g. `"a"`, `"Space"`, or `"Escape"`.
   pub key: String,
   /// Whether the event was generated by the key being held down.
   pub repeat: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MouseMotionEvent {
   /// Pointer position in device coordinates.
   pub x: f64,
   pub y: f64,
   /// Movement since the previous motion event.
   pub dx: f64,
   pub dy: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MouseButtonEvent {
   pub x: f64,
   pub y: f64,
   pub button: MouseButton,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MouseWheelEvent {
   pub dx: f64,
   pub dy: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Event {
   /// The user asked for the sketch to close.
   Quit,
   KeyDown(KeyEvent),
   KeyUp(KeyEvent),
   MouseMotion(MouseMotionEvent),
   MouseButtonDown(MouseButtonEvent),
   MouseButtonUp(MouseButtonEvent),
   MouseWheel(MouseWheelEvent),
}

impl Event {
   /// Returns the pointer position carried by the event, if any.
   pub fn mouse_position(&self) -> Option<(f64, f64)> {
      match self {
         Self::MouseMotion(event) => Some((event.x, event.y)),
         Self::MouseButtonDown(event) | Self::MouseButtonUp(event) => Some((event.x, event.y)),
         _ => None,
      }
   }
}

/// A handle for sending events to a sketch, possibly from another thread.
#[derive(Clone)]
pub struct EventSender {
   pub(crate) sender: Sender<Event>,
}

impl EventSender {
   /// Queues an event. Returns `false` if the sketch is gone.
   pub fn send(&self, event: Event) -> bool {
      self.sender.send(event).is_ok()
   }
}
