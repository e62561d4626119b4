// Sortscope Engine
//
// The algorithmic core: ten snapshot-emitting sorting strategies and the
// animation driver that runs them off the presentation thread.

pub mod driver;
pub mod sort;

pub use driver::{AnimationDriver, MockRenderer, DEFAULT_SIZE};
pub use sort::{sort, SortError, SortResult};
