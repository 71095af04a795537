//! Hand capture plumbing: a single-slot latest-sample cell and a producer
//! thread that owns the capture source for the lifetime of a session.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use thiserror::Error;

use crate::gesture::{HandLandmarks, HandSample};

#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("capture device unavailable: {0}")]
    DeviceUnavailable(String),
    #[error("failed to spawn capture thread: {0}")]
    Spawn(#[from] std::io::Error),
}

#[derive(Debug, Default)]
struct SlotState {
    sample: Option<HandSample>,
    seq: u64,
    ready: bool,
}

/// Last-value-wins cell shared between a capture producer and the frame loop.
///
/// Publishing overwrites whatever was there; readers always see the newest
/// sample and older ones are dropped.
#[derive(Clone, Debug, Default)]
pub struct HandSlot {
    inner: Arc<Mutex<SlotState>>,
}

impl HandSlot {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, SlotState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn publish(&self, sample: Option<HandSample>) {
        let mut state = self.state();
        state.sample = sample;
        state.seq += 1;
    }

    pub fn latest(&self) -> Option<HandSample> {
        self.state().sample
    }

    /// Latest sample together with the number of publishes so far.
    pub fn snapshot(&self) -> (u64, Option<HandSample>) {
        let state = self.state();
        (state.seq, state.sample)
    }

    /// Capture session ready notification.
    pub fn mark_ready(&self) {
        self.state().ready = true;
    }

    pub fn is_ready(&self) -> bool {
        self.state().ready
    }
}

/// Producer of hand landmark frames (camera + tracker, replay, simulation).
pub trait HandSource: Send + 'static {
    /// Acquire the underlying device.
    fn open(&mut self) -> Result<(), CaptureError> {
        Ok(())
    }

    /// Landmarks of the next processed frame, or `None` when no hand is seen.
    fn next_frame(&mut self) -> Option<HandLandmarks>;

    /// Release the underlying device. Called exactly once after a successful
    /// `open`, when the session ends.
    fn close(&mut self) {}

    /// Capture cadence, independent of the render cadence.
    fn frame_interval(&self) -> Duration {
        Duration::from_millis(33)
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use self::session::CaptureSession;

#[cfg(not(target_arch = "wasm32"))]
mod session {
    use super::*;
    use crate::gesture::{classify, GestureThresholds};
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::thread::{self, JoinHandle};

    /// Running capture producer. Dropping it stops the thread and releases
    /// the source.
    pub struct CaptureSession {
        stop: Arc<AtomicBool>,
        handle: Option<JoinHandle<()>>,
        slot: HandSlot,
    }

    impl CaptureSession {
        pub fn start<S: HandSource>(
            mut source: S,
            slot: HandSlot,
            thresholds: GestureThresholds,
        ) -> Result<Self, CaptureError> {
            let stop = Arc::new(AtomicBool::new(false));
            let stop_flag = Arc::clone(&stop);
            let producer_slot = slot.clone();
            let handle = thread::Builder::new()
                .name("hand-capture".into())
                .spawn(move || {
                    if let Err(e) = source.open() {
                        log::warn!("[capture] source failed to open: {e}");
                        return;
                    }
                    producer_slot.mark_ready();
                    log::info!("[capture] ready");
                    let interval = source.frame_interval();
                    while !stop_flag.load(Ordering::Acquire) {
                        let landmarks = source.next_frame();
                        let sample = landmarks.map(|l| classify(&l, &thresholds));
                        producer_slot.publish(sample);
                        thread::sleep(interval);
                    }
                    source.close();
                    log::info!("[capture] stopped");
                })?;
            Ok(Self {
                stop,
                handle: Some(handle),
                slot,
            })
        }

        pub fn slot(&self) -> &HandSlot {
            &self.slot
        }

        /// Stop producing and wait for the source to be released.
        pub fn stop(mut self) {
            self.shutdown();
        }

        fn shutdown(&mut self) {
            self.stop.store(true, Ordering::Release);
            if let Some(handle) = self.handle.take() {
                if handle.join().is_err() {
                    log::error!("[capture] producer thread panicked");
                }
            }
        }
    }

    impl Drop for CaptureSession {
        fn drop(&mut self) {
            self.shutdown();
        }
    }
}
