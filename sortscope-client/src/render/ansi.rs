// Sortscope Client - ANSI Bar Renderer
//
// Draws each snapshot as a horizontal bar chart, redrawing in place.
// Colors follow the classic visualizer palette: blue for idle bars, red
// for the active mutation, green for settled elements, orange for accents.

use std::io::{self, Stdout, Write};
use std::sync::Mutex;

use ansi_term::Colour;
use sortscope_utils::render::Renderer;
use sortscope_utils::snapshot::{Highlight, Snapshot};

const DEFAULT_BAR_WIDTH: usize = 60;
const DEFAULT_MAX_VALUE: i32 = 510;
const BAR_GLYPH: char = '█';

/// Terminal bar chart renderer.
///
/// Generic over the output sink so tests can capture frames; the default
/// instance writes to stdout.
pub struct AnsiRenderer<W: Write + Send = Stdout> {
    out: Mutex<W>,
    bar_width: usize,
    max_value: i32,
}

impl AnsiRenderer<Stdout> {
    pub fn new() -> Self {
        Self::with_output(io::stdout())
    }
}

impl Default for AnsiRenderer<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write + Send> AnsiRenderer<W> {
    pub fn with_output(out: W) -> Self {
        Self {
            out: Mutex::new(out),
            bar_width: DEFAULT_BAR_WIDTH,
            max_value: DEFAULT_MAX_VALUE,
        }
    }

    /// Width of the widest bar, in glyphs.
    pub fn with_bar_width(mut self, bar_width: usize) -> Self {
        self.bar_width = bar_width;
        self
    }

    /// Value that maps to a full-width bar.
    pub fn with_max_value(mut self, max_value: i32) -> Self {
        self.max_value = max_value.max(1);
        self
    }

    fn color_for(highlight: Highlight) -> Colour {
        match highlight {
            Highlight::None => Colour::Blue,
            Highlight::Active => Colour::Red,
            Highlight::Done => Colour::Green,
            Highlight::Accent => Colour::Yellow,
        }
    }

    fn bar_length(&self, value: i32) -> usize {
        if value <= 0 {
            return 0;
        }
        let scaled =
            value.min(self.max_value) as usize * self.bar_width / self.max_value as usize;
        // Positive values always show at least one glyph.
        scaled.max(1)
    }

    fn draw(&self, snapshot: &Snapshot) -> io::Result<()> {
        let mut out = self.out.lock().unwrap();
        // Home the cursor and clear the previous frame.
        write!(out, "\x1b[H\x1b[2J")?;
        for (value, highlight) in snapshot.values().iter().zip(snapshot.highlights()) {
            let bar: String = std::iter::repeat(BAR_GLYPH)
                .take(self.bar_length(*value))
                .collect();
            writeln!(out, "{:>4} {}", value, Self::color_for(*highlight).paint(bar))?;
        }
        out.flush()
    }
}

impl<W: Write + Send> Renderer for AnsiRenderer<W> {
    fn render(&self, snapshot: Snapshot) {
        if let Err(error) = self.draw(&snapshot) {
            log::warn!("ANSI renderer write failed: {}", error);
        }
    }
}
