// Sortscope Client - Renderers
//
// Two ways to consume engine snapshots: an in-place ANSI bar chart for
// humans and a JSON line stream for external tooling.

mod ansi;
mod json;

pub use ansi::AnsiRenderer;
pub use json::JsonRenderer;
