// Sortscope Client - JSON Line Renderer
//
// Streams one JSON object per snapshot so the binary's output can be piped
// into an external renderer. Highlights travel as raw integer codes.

use std::io::{self, Stdout, Write};
use std::sync::Mutex;

use serde_json::json;
use sortscope_utils::render::Renderer;
use sortscope_utils::snapshot::Snapshot;

/// Line-oriented JSON renderer, flushing after every frame.
pub struct JsonRenderer<W: Write + Send = Stdout> {
    out: Mutex<W>,
}

impl JsonRenderer<Stdout> {
    pub fn new() -> Self {
        Self::with_output(io::stdout())
    }
}

impl Default for JsonRenderer<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write + Send> JsonRenderer<W> {
    pub fn with_output(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    fn write_line(&self, snapshot: &Snapshot) -> io::Result<()> {
        let line = json!({
            "values": snapshot.values(),
            "highlights": snapshot.highlight_codes(),
        });
        let mut out = self.out.lock().unwrap();
        writeln!(out, "{}", line)?;
        out.flush()
    }
}

impl<W: Write + Send> Renderer for JsonRenderer<W> {
    fn render(&self, snapshot: Snapshot) {
        if let Err(error) = self.write_line(&snapshot) {
            log::warn!("JSON renderer write failed: {}", error);
        }
    }
}
