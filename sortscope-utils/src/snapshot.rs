// Sortscope Shared Types - Snapshots
//
// An emitted snapshot is an immutable, defensive copy of the working
// sequence plus per-element highlight metadata. The renderer owns the copy
// it receives and can never observe a torn write of the live buffer.

use serde::{Deserialize, Serialize};

/// Transient visual role of one element in a snapshot.
///
/// Codes mirror the renderer's color table: bars draw in the base color
/// unless tagged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Highlight {
    /// No highlight (base color, blue).
    #[default]
    None,
    /// Element touched by the current mutation (red).
    Active,
    /// Element settled in its final position (green).
    Done,
    /// Secondary marker such as a pivot (orange).
    Accent,
}

impl Highlight {
    /// Wire code for this highlight, 0 meaning "none".
    pub fn code(&self) -> u8 {
        match self {
            Highlight::None => 0,
            Highlight::Active => 1,
            Highlight::Done => 2,
            Highlight::Accent => 3,
        }
    }

    /// Inverse of [`Highlight::code`]; unknown codes fall back to `None`.
    pub fn from_code(code: u8) -> Self {
        match code {
            1 => Highlight::Active,
            2 => Highlight::Done,
            3 => Highlight::Accent,
            _ => Highlight::None,
        }
    }
}

/// Immutable copy of array state emitted after each mutation.
///
/// `highlights` always has the same length as `values`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    values: Vec<i32>,
    highlights: Vec<Highlight>,
}

impl Snapshot {
    /// Snapshot with every highlight cleared.
    pub fn new(values: Vec<i32>) -> Self {
        let highlights = vec![Highlight::None; values.len()];
        Self { values, highlights }
    }

    /// Snapshot tagging `touched` indices as [`Highlight::Active`].
    ///
    /// Out-of-range indices are ignored.
    pub fn with_touched(values: Vec<i32>, touched: &[usize]) -> Self {
        let mut snapshot = Self::new(values);
        for &index in touched {
            if index < snapshot.highlights.len() {
                snapshot.highlights[index] = Highlight::Active;
            }
        }
        snapshot
    }

    pub fn values(&self) -> &[i32] {
        &self.values
    }

    pub fn highlights(&self) -> &[Highlight] {
        &self.highlights
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Copy of this snapshot with every highlight cleared, as emitted for
    /// the final frame of a run.
    pub fn cleared(&self) -> Self {
        Self::new(self.values.clone())
    }

    /// Highlight codes as raw integers, for wire formats.
    pub fn highlight_codes(&self) -> Vec<u8> {
        self.highlights.iter().map(|h| h.code()).collect()
    }
}
