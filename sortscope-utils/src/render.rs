// Sortscope Shared Types - Renderer Interface

use crate::snapshot::Snapshot;

/// Presentation collaborator driven by the animation engine.
///
/// The driver calls `render` once per snapshot, in emission order, and
/// hands over ownership: implementations may keep or drop the snapshot
/// freely. `render` is assumed non-blocking; the driver does all pacing
/// itself between calls.
pub trait Renderer: Send + Sync {
    fn render(&self, snapshot: Snapshot);
}
