//! Timed image rotation
//!
//! The awareness banner cycles through a fixed list of frames on its own
//! thread. It shares nothing with the estimator and stops when its handle is
//! cancelled or dropped.

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::{debug, trace};

use crate::error::{Error, Result};

pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(2000);

pub const DEFAULT_FRAMES: [&str; 2] = ["/images/emission1.png", "/images/emission2.png"];

pub const FRAME_ALT_TEXT: &str = "Carbon Emission Awareness";

pub fn default_frames() -> Vec<String> {
    DEFAULT_FRAMES.iter().map(|f| f.to_string()).collect()
}

/// Current position in a non-empty, wrapping list of frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotation {
    index: usize,
    len: usize,
}

impl Rotation {
    pub fn new(len: usize) -> Result<Self> {
        if len == 0 {
            return Err(Error::EmptyRotation);
        }
        Ok(Self { index: 0, len })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn advance(&mut self) -> usize {
        self.index = (self.index + 1) % self.len;
        self.index
    }
}

pub struct Rotator;

impl Rotator {
    /// Start advancing through `frames` every `interval`.
    ///
    /// `on_advance` runs on the rotator thread with the new index and frame.
    /// The first frame (index 0) is current at spawn time and is not reported.
    pub fn spawn<F>(frames: Vec<String>, interval: Duration, mut on_advance: F) -> Result<RotatorHandle>
    where
        F: FnMut(usize, &str) + Send + 'static,
    {
        let mut rotation = Rotation::new(frames.len())?;
        if interval.is_zero() {
            return Err(Error::ZeroInterval);
        }

        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        debug!(frames = frames.len(), interval_ms = interval.as_millis() as u64, "starting rotator");

        let join = thread::spawn(move || {
            let mut advances = 0usize;
            loop {
                match stop_rx.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => {
                        let index = rotation.advance();
                        advances += 1;
                        trace!(index, "rotator advanced");
                        on_advance(index, &frames[index]);
                    }
                    // Explicit stop, or the handle went away
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }
            advances
        });

        Ok(RotatorHandle {
            stop_tx: Some(stop_tx),
            join: Some(join),
        })
    }
}

/// Cancellation handle for a running rotator
pub struct RotatorHandle {
    stop_tx: Option<Sender<()>>,
    join: Option<JoinHandle<usize>>,
}

impl RotatorHandle {
    /// Stop the rotator and wait for it, returning how many times it advanced
    pub fn cancel(mut self) -> Result<usize> {
        self.stop();
        let advances = match self.join.take() {
            Some(join) => join.join().map_err(|_| Error::RotatorPanicked)?,
            None => 0,
        };
        debug!(advances, "rotator stopped");
        Ok(advances)
    }

    fn stop(&mut self) {
        if let Some(tx) = self.stop_tx.take() {
            // The thread may already have exited; nothing to do then
            let _ = tx.send(());
        }
    }
}

impl Drop for RotatorHandle {
    fn drop(&mut self) {
        self.stop();
        if let Some(join) = self.join.take() {
            let _ = join.join();
        }
    }
}
