// Sortscope Engine - Animation Driver
//
// Runs a sort off the presentation thread and paces its snapshots. The
// driver owns the working sequence and the run gate; the renderer is a
// passive observer receiving defensive copies.
//
// # Architecture
//
// ```text
// interactive thread                 worker thread
// ──────────────────                 ─────────────
// generate(size) ──┐
// start(algorithm) ┼─▶ run gate ──▶ take sequence
// set_speed(..) ───┘   (atomic)          │ sort + emit
//                                        ▼
//                                   Snapshot ─▶ Renderer
//                                        │ sleep(105 - speed)
//                                        ▼
//                                   write back, final cleared
//                                   frame, release gate
// ```
//
// There is no mid-run cancel: once started, a run always completes. The
// gate only rejects a second start (or a generate) while one is active.

mod mock;

pub use mock::MockRenderer;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

use rand::Rng;

use sortscope_utils::algorithm::Algorithm;
use sortscope_utils::pace::PaceSource;
use sortscope_utils::render::Renderer;
use sortscope_utils::snapshot::Snapshot;

use crate::sort;

/// Default number of values `generate` produces.
pub const DEFAULT_SIZE: usize = 15;

/// Values are drawn from [10, 510) so every bar is visible.
const VALUE_RANGE: std::ops::Range<i32> = 10..510;

/// Owns one working sequence and runs at most one sort over it at a time.
pub struct AnimationDriver {
    sequence: Arc<Mutex<Vec<i32>>>,
    running: Arc<AtomicBool>,
    pace: PaceSource,
    renderer: Arc<dyn Renderer>,
}

impl AnimationDriver {
    pub fn new(renderer: Arc<dyn Renderer>, pace: PaceSource) -> Self {
        Self {
            sequence: Arc::new(Mutex::new(Vec::new())),
            running: Arc::new(AtomicBool::new(false)),
            pace,
            renderer,
        }
    }

    /// Replace the working sequence with `size` random values and render
    /// the fresh state. Silently ignored while a sort is running.
    pub fn generate(&self, size: usize) {
        let mut rng = rand::thread_rng();
        let values = (0..size).map(|_| rng.gen_range(VALUE_RANGE)).collect();
        self.load(values);
    }

    /// Replace the working sequence with explicit values and render the
    /// fresh state. Silently ignored while a sort is running.
    pub fn load(&self, values: Vec<i32>) {
        if self.running.load(Ordering::Relaxed) {
            log::debug!("load ignored: a sort is in progress");
            return;
        }
        *self.sequence.lock().unwrap() = values.clone();
        self.renderer.render(Snapshot::new(values));
    }

    /// Start sorting on a background worker thread.
    ///
    /// Returns the worker's handle, or `None` when a run is already
    /// active; the rejected start is a silent no-op and the in-flight run
    /// is untouched. The worker forwards every snapshot to the renderer in
    /// emission order, sleeps the current pace delay after each one, then
    /// renders a final frame with all highlights cleared and releases the
    /// run gate. A failed run (negative input to a distribution sort) is
    /// logged, leaves the sequence as it was and still ends cleanly.
    pub fn start(&self, algorithm: Algorithm) -> Option<JoinHandle<()>> {
        if self
            .running
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            log::debug!("start ignored: {} requested while a sort is in progress", algorithm);
            return None;
        }

        let sequence = Arc::clone(&self.sequence);
        let running = Arc::clone(&self.running);
        let renderer = Arc::clone(&self.renderer);
        let pace = self.pace.clone();

        let handle = thread::spawn(move || {
            // Single writer: the worker owns the values for the whole run.
            let mut values = std::mem::take(&mut *sequence.lock().unwrap());
            log::info!("sorting {} values with {}", values.len(), algorithm);

            let result = sort::sort(&mut values, algorithm, &mut |state, touched| {
                renderer.render(Snapshot::with_touched(state.to_vec(), touched));
                thread::sleep(pace.delay());
            });
            if let Err(error) = result {
                log::error!("sort aborted: {}", error);
            }

            let final_frame = Snapshot::new(values.clone());
            *sequence.lock().unwrap() = values;
            renderer.render(final_frame);
            running.store(false, Ordering::SeqCst);
        });
        Some(handle)
    }

    /// Whether a sort run is currently active.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Relaxed)
    }

    /// Copy of the current sequence; the working buffer is never exposed.
    pub fn values(&self) -> Vec<i32> {
        self.sequence.lock().unwrap().clone()
    }

    /// Handle to the live speed control.
    pub fn pace(&self) -> PaceSource {
        self.pace.clone()
    }
}
