//! Dense obstacle-distance grid for placement queries.
//!
//! This crate owns the two parallel per-cell arrays at the heart of the
//! clearance system: a monotone `blocked` mask and a `distance` field giving
//! each cell's best known octile distance to the nearest blocked cell.
//! Obstacles are written with [`GridField::stamp_disc`]; the distance field
//! is filled in by the wavefront propagator (the `clearance-wavefront`
//! crate) through [`GridField::relax`].
//!
//! Queries read the field as a lower bound: a disc of radius `r` fits at a
//! cell iff that cell's distance value is at least `r`
//! ([`GridField::is_space_available`]), and [`GridField::nearest_free`]
//! scans expanding rings for the closest cell where it does.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod field;
pub mod query;

pub use error::GridError;
pub use field::GridField;
