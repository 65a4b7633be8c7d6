//! The frame driver: runs a sketch's `setup` once, then its `draw` on every timer tick.

use crossbeam_channel::{select, Receiver, Sender};
use edudraw_renderer::RenderBackend;

use crate::canvas::Canvas;
use crate::config::SketchConfig;
use crate::event::*;
use crate::timer::Timer;

/// A program drawing on a [`Canvas`].
///
/// Only `draw` is required. The input callbacks are called between frames, in the order the
/// events arrived.
#[allow(unused_variables)]
pub trait Sketch<B: RenderBackend> {
   /// Called once, before the first frame.
   fn setup(&mut self, canvas: &mut Canvas<B>) {}

   /// Called once per frame.
   fn draw(&mut self, canvas: &mut Canvas<B>);

   fn key_down(&mut self, canvas: &mut Canvas<B>, event: &KeyEvent) {}

   fn key_up(&mut self, canvas: &mut Canvas<B>, event: &KeyEvent) {}

   fn mouse_motion(&mut self, canvas: &mut Canvas<B>, event: &MouseMotionEvent) {}

   fn mouse_button_down(&mut self, canvas: &mut Canvas<B>, event: &MouseButtonEvent) {}

   fn mouse_button_up(&mut self, canvas: &mut Canvas<B>, event: &MouseButtonEvent) {}

   fn mouse_wheel(&mut self, canvas: &mut Canvas<B>, event: &MouseWheelEvent) {}
}

/// Why the run loop woke up.
enum Wakeup {
   Input,
   Frame,
   TimerStopped,
}

pub struct App<B: RenderBackend> {
   canvas: Canvas<B>,
   title: String,
   reset_after_loop: bool,
   event_sender: Sender<Event>,
   events: Receiver<Event>,
}

impl<B: RenderBackend> App<B> {
   pub fn new(backend: B, config: &SketchConfig) -> edudraw::Result<Self> {
      config.validate()?;
      let (event_sender, events) = crossbeam_channel::unbounded();
      Ok(Self {
         canvas: Canvas::new(backend, config),
         title: config.window.title.clone(),
         reset_after_loop: config.timing.reset_after_loop,
         event_sender,
         events,
      })
   }

   /// Returns a handle the host can feed input events through.
   pub fn event_sender(&self) -> EventSender {
      EventSender {
         sender: self.event_sender.clone(),
      }
   }

   pub fn canvas(&self) -> &Canvas<B> {
      &self.canvas
   }

   pub fn canvas_mut(&mut self) -> &mut Canvas<B> {
      &mut self.canvas
   }

   /// Runs the sketch until it calls [`Canvas::quit`] or a [`Event::Quit`] arrives.
   pub fn run(&mut self, sketch: &mut impl Sketch<B>) -> edudraw::Result<()> {
      log::info!("starting sketch '{}'", self.title);
      sketch.setup(&mut self.canvas);

      let timer = Timer::start(self.canvas.frame_interval())?;
      let events = self.events.clone();
      while !self.canvas.quit_requested() {
         // Input that is already waiting is handled before the next frame.
         while let Ok(event) = events.try_recv() {
            self.dispatch(sketch, event);
         }
         if self.canvas.quit_requested() {
            break;
         }

         let wakeup = select! {
            recv(events) -> event => {
               if let Ok(event) = event {
                  self.dispatch(sketch, event);
               }
               Wakeup::Input
            }
            recv(timer.ticks()) -> tick => tick.map_or(Wakeup::TimerStopped, |_| Wakeup::Frame),
         };
         match wakeup {
            Wakeup::Input => (),
            Wakeup::Frame => {
               self.frame(sketch)?;
               timer.set_interval(self.canvas.frame_interval());
            }
            Wakeup::TimerStopped => {
               log::error!("frame timer stopped unexpectedly");
               break;
            }
         }
      }
      timer.stop();

      log::info!("sketch '{}' stopped after {} frames", self.title, self.canvas.frame_count());
      Ok(())
   }

   fn frame(&mut self, sketch: &mut impl Sketch<B>) -> edudraw::Result<()> {
      self.canvas.begin_frame();
      sketch.draw(&mut self.canvas);
      self.canvas.backend_mut().present()?;
      if self.reset_after_loop {
         self.canvas.reset_state();
      }
      Ok(())
   }

   fn dispatch(&mut self, sketch: &mut impl Sketch<B>, event: Event) {
      if let Some((x, y)) = event.mouse_position() {
         self.canvas.set_mouse_position(x, y);
      }
      let canvas = &mut self.canvas;
      match &event {
         Event::Quit => canvas.quit(),
         Event::KeyDown(event) => sketch.key_down(canvas, event),
         Event::KeyUp(event) => sketch.key_up(canvas, event),
         Event::MouseMotion(event) => sketch.mouse_motion(canvas, event),
         Event::MouseButtonDown(event) => sketch.mouse_button_down(canvas, event),
         Event::MouseButtonUp(event) => sketch.mouse_button_up(canvas, event),
         Event::MouseWheel(event) => sketch.mouse_wheel(canvas, event),
      }
   }
}
