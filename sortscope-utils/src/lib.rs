// Sortscope Shared Types
//
// Data types and collaborator interfaces shared between the engine
// (sortscope-engine) and the presentation crates (sortscope-client).

pub mod algorithm;
pub mod pace;
pub mod render;
pub mod snapshot;

pub use algorithm::{Algorithm, Complexity, ParseAlgorithmError};
pub use pace::{PaceSource, DEFAULT_SPEED, MAX_SPEED, MIN_SPEED};
pub use render::Renderer;
pub use snapshot::{Highlight, Snapshot};
