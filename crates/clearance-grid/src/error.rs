//! Error types for grid construction.

use std::fmt;

/// Errors arising from grid construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Attempted to construct a grid with zero cells.
    EmptyGrid,
    /// An axis exceeds the maximum supported dimension.
    DimensionTooLarge {
        /// Which axis ("width" or "height").
        name: &'static str,
        /// The offending value.
        value: u32,
        /// The maximum supported value.
        max: u32,
    },
    /// The total cell count exceeds the maximum supported size.
    TooManyCells {
        /// The requested `width * height`.
        cells: u64,
        /// The maximum supported cell count.
        max: u64,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} is {value}, exceeding the maximum of {max}")
            }
            Self::TooManyCells { cells, max } => {
                write!(f, "grid has {cells} cells, exceeding the maximum of {max}")
            }
        }
    }
}

impl std::error::Error for GridError {}
