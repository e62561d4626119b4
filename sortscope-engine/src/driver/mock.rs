// Sortscope Engine - Mock Renderer
//
// Test double for the presentation collaborator: records every snapshot in
// arrival order so tests can assert emission sequences and counts.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use sortscope_utils::render::Renderer;
use sortscope_utils::snapshot::Snapshot;

/// Recording renderer for driver and integration tests.
#[derive(Debug, Default)]
pub struct MockRenderer {
    snapshots: Mutex<Vec<Snapshot>>,
    render_count: AtomicUsize,
}

impl MockRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `render` calls so far.
    pub fn render_count(&self) -> usize {
        self.render_count.load(Ordering::Relaxed)
    }

    /// All snapshots received, in arrival order.
    pub fn snapshots(&self) -> Vec<Snapshot> {
        self.snapshots.lock().unwrap().clone()
    }

    /// The most recently received snapshot, if any.
    pub fn last_snapshot(&self) -> Option<Snapshot> {
        self.snapshots.lock().unwrap().last().cloned()
    }

    /// Clear recorded snapshots and counters.
    pub fn reset(&self) {
        self.snapshots.lock().unwrap().clear();
        self.render_count.store(0, Ordering::Relaxed);
    }
}

impl Renderer for MockRenderer {
    fn render(&self, snapshot: Snapshot) {
        self.render_count.fetch_add(1, Ordering::Relaxed);
        self.snapshots.lock().unwrap().push(snapshot);
    }
}
