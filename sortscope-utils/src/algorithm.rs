// Sortscope Shared Types - Algorithm Selection
//
// The closed set of selectable sorting strategies. A selection is fixed for
// the duration of one run; changing it mid-run only affects the next run.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strum_macros::EnumIter;
use thiserror::Error;

/// The ten selectable sorting strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Algorithm {
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
    Heap,
    Radix,
    Shell,
    Bucket,
    Counting,
}

/// Best and worst case time complexity of an algorithm, as display strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Complexity {
    pub best: &'static str,
    pub worst: &'static str,
}

impl Algorithm {
    /// Complexity table shown to the user before a run starts.
    pub fn complexity(&self) -> Complexity {
        match self {
            Algorithm::Bubble => Complexity {
                best: "O(n)",
                worst: "O(n^2)",
            },
            Algorithm::Selection => Complexity {
                best: "O(n^2)",
                worst: "O(n^2)",
            },
            Algorithm::Insertion => Complexity {
                best: "O(n)",
                worst: "O(n^2)",
            },
            Algorithm::Merge => Complexity {
                best: "O(n log n)",
                worst: "O(n log n)",
            },
            Algorithm::Quick => Complexity {
                best: "O(n log n)",
                worst: "O(n^2)",
            },
            Algorithm::Heap => Complexity {
                best: "O(n log n)",
                worst: "O(n log n)",
            },
            Algorithm::Radix => Complexity {
                best: "O(nk)",
                worst: "O(nk)",
            },
            Algorithm::Shell => Complexity {
                best: "O(n log n)",
                worst: "O(n^2)",
            },
            Algorithm::Bucket => Complexity {
                best: "O(n+k)",
                worst: "O(n^2)",
            },
            Algorithm::Counting => Complexity {
                best: "O(n+k)",
                worst: "O(n+k)",
            },
        }
    }

    /// Distribution sorts index by value and only accept non-negative input.
    pub fn requires_non_negative(&self) -> bool {
        matches!(
            self,
            Algorithm::Radix | Algorithm::Bucket | Algorithm::Counting
        )
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Selection => "Selection Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::Quick => "Quick Sort",
            Algorithm::Heap => "Heap Sort",
            Algorithm::Radix => "Radix Sort",
            Algorithm::Shell => "Shell Sort",
            Algorithm::Bucket => "Bucket Sort",
            Algorithm::Counting => "Counting Sort",
        };
        write!(f, "{}", name)
    }
}

/// Error returned when an algorithm name cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown algorithm: '{0}'")]
pub struct ParseAlgorithmError(pub String);

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    /// Accepts the display name ("Bubble Sort") as well as the short
    /// lowercase form used on the command line ("bubble", "bubble-sort").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .collect();
        let name = normalized.strip_suffix("sort").unwrap_or(&normalized);
        match name {
            "bubble" => Ok(Algorithm::Bubble),
            "selection" => Ok(Algorithm::Selection),
            "insertion" => Ok(Algorithm::Insertion),
            "merge" => Ok(Algorithm::Merge),
            "quick" => Ok(Algorithm::Quick),
            "heap" => Ok(Algorithm::Heap),
            "radix" => Ok(Algorithm::Radix),
            "shell" => Ok(Algorithm::Shell),
            "bucket" => Ok(Algorithm::Bucket),
            "counting" => Ok(Algorithm::Counting),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}
