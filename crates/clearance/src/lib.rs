//! Clearance: an incrementally maintained obstacle-distance field for
//! cheap "does a disc of radius r fit here" placement queries.
//!
//! Obstacles are stamped as discs onto a dense grid; a multi-source
//! wavefront then relaxes an octile distance field outward from the newly
//! blocked cells in time-budgeted, data-parallel rings. Queries read the
//! field as a lower bound, so they stay valid (conservatively) even while
//! propagation is mid-flight.
//!
//! # Quick start
//!
//! ```rust
//! use clearance::prelude::*;
//!
//! let mut field = PlacementField::new(PlacementConfig {
//!     width: 32,
//!     height: 32,
//!     inflation_radius: 6.0,
//!     step_budget: std::time::Duration::from_millis(2),
//! })
//! .unwrap();
//!
//! field.add_obstacle(16, 16, 1.5, None);
//! field.complete_now();
//!
//! assert!(!field.can_place(16, 16, 1.0));
//! assert!(field.can_place(2, 2, 3.0));
//! let spot = field.find_closest_available(16, 16, 2.0);
//! assert!(spot.is_some());
//! ```
//!
//! For incremental operation, drive [`PlacementField::tick`] from any
//! external scheduler (frame callback, timer, manual loop) while
//! [`PlacementField::is_propagating`] reports true; the facade never
//! assumes a particular tick source, only "called again later".
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`grid`] | `clearance-grid` | Dense blocked/distance arrays and queries |
//! | [`wavefront`] | `clearance-wavefront` | Frontier queues and budgeted stepping |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod placement;

/// Grid storage and placement queries (`clearance-grid`).
pub use clearance_grid as grid;

/// Frontier queues and budgeted propagation (`clearance-wavefront`).
pub use clearance_wavefront as wavefront;

pub use config::PlacementConfig;
pub use error::ConfigError;
pub use placement::{OnComplete, PlacementField};

/// Common imports for typical usage.
///
/// ```rust
/// use clearance::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::PlacementConfig;
    pub use crate::error::ConfigError;
    pub use crate::placement::{OnComplete, PlacementField};
    pub use clearance_grid::{GridError, GridField};
    pub use clearance_wavefront::WavefrontPropagator;
}
