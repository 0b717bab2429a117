//! Incremental multi-source wavefront propagation for the clearance grid.
//!
//! Newly blocked cells are seeded into a frontier queue; each
//! [`WavefrontPropagator::step`] relaxes the 8-neighbourhood of every
//! frontier cell in parallel (octile costs: 1 for cardinal moves, sqrt(2)
//! for diagonal), collecting the improved cells into a second buffer that
//! becomes the next frontier. Repeated steps expand the distance field in
//! discrete rings until the frontier drains.
//!
//! [`WavefrontPropagator::step_with_budget`] bounds a run of steps by
//! wall-clock time so an external tick driver can amortise a large
//! propagation across many ticks without ever blocking for more than one
//! budget window (plus at most one ring's overshoot).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod propagator;

pub use propagator::WavefrontPropagator;
