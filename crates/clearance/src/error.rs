//! Configuration errors for the placement facade.

use clearance_grid::GridError;
use std::fmt;

/// Errors from [`PlacementField`](crate::PlacementField) construction.
///
/// Construction is the only fallible entry point: queries fail closed and
/// propagation never errors, so everything here is fail-fast configuration
/// validation.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The underlying grid rejected its dimensions.
    Grid(GridError),
    /// The inflation radius is not a finite positive number.
    InvalidInflationRadius {
        /// The offending value.
        value: f32,
    },
    /// The per-tick step budget is zero.
    InvalidStepBudget,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(err) => write!(f, "invalid grid: {err}"),
            Self::InvalidInflationRadius { value } => {
                write!(f, "inflation radius must be finite and > 0, got {value}")
            }
            Self::InvalidStepBudget => write!(f, "step budget must be non-zero"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(err) => Some(err),
            _ => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(err: GridError) -> Self {
        Self::Grid(err)
    }
}
