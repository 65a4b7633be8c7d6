//! The frame timer.
//!
//! A dedicated thread posts ticks into a rendezvous channel. A tick is only handed over when the
//! consumer asks for it, so a frame that runs late delays the next tick instead of queuing more.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crossbeam_channel::{select, Receiver, RecvTimeoutError, Sender};

pub struct Timer {
   ticks: Receiver<Instant>,
   interval_nanos: Arc<AtomicU64>,
   stop: Option<Sender<()>>,
   thread: Option<JoinHandle<()>>,
}

impl Timer {
   /// Starts ticking at the given interval.
   pub fn start(interval: Duration) -> edudraw::Result<Self> {
      let (tick_sender, ticks) = crossbeam_channel::bounded(0);
      let (stop, stop_signal) = crossbeam_channel::bounded::<()>(0);
      let interval_nanos = Arc::new(AtomicU64::new(duration_to_nanos(interval)));

      let thread = {
         let interval_nanos = Arc::clone(&interval_nanos);
         thread::Builder::new().name("edudraw-timer".to_owned()).spawn(move || {
            let interval = || Duration::from_nanos(interval_nanos.load(Ordering::Relaxed));
            let mut next = Instant::now() + interval();
            loop {
               let delay = next.saturating_duration_since(Instant::now());
               match stop_signal.recv_timeout(delay) {
                  Err(RecvTimeoutError::Timeout) => (),
                  _ => break,
               }
               let stopped = select! {
                  send(tick_sender, Instant::now()) -> result => result.is_err(),
                  recv(stop_signal) -> _ => true,
               };
               if stopped {
                  break;
               }
               next = (next + interval()).max(Instant::now());
            }
            log::debug!("timer thread exiting");
         })?
      };

      Ok(Self {
         ticks,
         interval_nanos,
         stop: Some(stop),
         thread: Some(thread),
      })
   }

   /// The channel ticks arrive on.
   pub fn ticks(&self) -> &Receiver<Instant> {
      &self.ticks
   }

   /// Changes the interval. Takes effect from the next tick on.
   pub fn set_interval(&self, interval: Duration) {
      self.interval_nanos.store(duration_to_nanos(interval), Ordering::Relaxed);
   }

   /// Returns the current interval.
   pub fn interval(&self) -> Duration {
      Duration::from_nanos(self.interval_nanos.load(Ordering::Relaxed))
   }

   /// Stops the timer thread and waits for it to exit.
   pub fn stop(self) {
      drop(self);
   }
}

impl Drop for Timer {
   fn drop(&mut self) {
      // Disconnecting the stop channel wakes the thread up wherever it is waiting.
      drop(self.stop.take());
      if let Some(thread) = self.thread.take() {
         if thread.join().is_err() {
            log::error!("timer thread panicked");
         }
      }
   }
}

fn duration_to_nanos(duration: Duration) -> u64 {
   u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX)
}
