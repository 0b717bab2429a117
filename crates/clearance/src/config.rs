//! Facade configuration.

use std::time::Duration;

/// Construction parameters for a [`PlacementField`](crate::PlacementField).
#[derive(Debug, Clone)]
pub struct PlacementConfig {
    /// Grid width in cells.
    pub width: u32,
    /// Grid height in cells.
    pub height: u32,
    /// How far obstacle distance is propagated. Queries for radii beyond
    /// this are answered best-effort with a warning.
    pub inflation_radius: f32,
    /// Wall-clock budget for one [`tick`](crate::PlacementField::tick).
    pub step_budget: Duration,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            width: 64,
            height: 64,
            inflation_radius: 5.0,
            step_budget: Duration::from_millis(2),
        }
    }
}
