//! The placement facade: obstacle insertion, lifecycle, and queries.

use crate::config::PlacementConfig;
use crate::error::ConfigError;
use clearance_grid::GridField;
use clearance_wavefront::WavefrontPropagator;
use std::time::Duration;

/// Completion callback fired when an obstacle's propagation drains.
pub type OnComplete = Box<dyn FnOnce() + Send>;

/// Search bound for [`PlacementField::find_closest_available`], in rings.
const MAX_SEARCH_RINGS: i32 = 200;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Progress {
    Idle,
    Propagating,
}

/// An incrementally maintained obstacle-clearance field.
///
/// Composes a [`GridField`] and a [`WavefrontPropagator`] behind one
/// lifecycle. Obstacles stamped with [`add_obstacle`](Self::add_obstacle)
/// seed a propagation that an external driver advances one budget slice at
/// a time via [`tick`](Self::tick); callers that need converged answers
/// immediately use [`complete_now`](Self::complete_now).
///
/// Queries are pure reads of the field and may be issued at any time; while
/// propagation is in flight they see a partially converged field whose
/// values are never too small, only transiently too large.
///
/// Dropping the field releases the grid arrays and queues; there is no
/// separate teardown call, and no operation on a released field can be
/// expressed.
pub struct PlacementField {
    field: GridField,
    propagator: WavefrontPropagator,
    inflation_radius: f32,
    step_budget: Duration,
    progress: Progress,
    on_complete: Option<OnComplete>,
}

impl PlacementField {
    /// Build the facade, validating all configuration up front.
    ///
    /// # Errors
    ///
    /// Returns `Err` if either grid dimension is invalid, the inflation
    /// radius is not finite and positive, or the step budget is zero.
    pub fn new(config: PlacementConfig) -> Result<Self, ConfigError> {
        if !(config.inflation_radius > 0.0) || !config.inflation_radius.is_finite() {
            return Err(ConfigError::InvalidInflationRadius {
                value: config.inflation_radius,
            });
        }
        if config.step_budget.is_zero() {
            return Err(ConfigError::InvalidStepBudget);
        }
        Ok(Self {
            field: GridField::new(config.width, config.height)?,
            propagator: WavefrontPropagator::new(),
            inflation_radius: config.inflation_radius,
            step_budget: config.step_budget,
            progress: Progress::Idle,
            on_complete: None,
        })
    }

    /// The underlying grid, for direct distance reads.
    pub fn grid(&self) -> &GridField {
        &self.field
    }

    /// Configured inflation radius.
    pub fn inflation_radius(&self) -> f32 {
        self.inflation_radius
    }

    /// Stamp a disc obstacle at `(x, y)` and seed its propagation.
    ///
    /// The callback slot holds at most one pending callback and is
    /// overwritten on every call — when an obstacle lands mid-propagation
    /// it merges into the in-flight wavefront and only the most recently
    /// supplied `on_complete` will fire (last-writer-wins). A disc with no
    /// in-bounds cells completes immediately.
    pub fn add_obstacle(&mut self, x: i32, y: i32, radius: f32, on_complete: Option<OnComplete>) {
        self.on_complete = on_complete;
        let touched = self.field.stamp_disc(x, y, radius);
        self.propagator.seed(&touched);
        if self.propagator.is_active() {
            if self.progress == Progress::Idle {
                log::debug!(
                    "obstacle at ({x}, {y}) r={radius}: propagation started with {} seed cells",
                    touched.len()
                );
                self.progress = Progress::Propagating;
            }
        } else {
            self.finish();
        }
    }

    /// Advance the in-flight propagation by one budget slice.
    ///
    /// The external tick driver calls this once per tick while
    /// [`is_propagating`](Self::is_propagating) reports true. When the
    /// frontier drains the facade reverts to idle and fires the pending
    /// completion callback exactly once. Returns the number of frontier
    /// entries processed (0 when idle).
    pub fn tick(&mut self) -> usize {
        if self.progress != Progress::Propagating {
            return 0;
        }
        let processed =
            self.propagator
                .step_with_budget(&self.field, self.step_budget, self.inflation_radius);
        if !self.propagator.is_active() {
            log::debug!("propagation drained ({processed} cells in final slice)");
            self.finish();
        }
        processed
    }

    /// Synchronously drain any in-flight propagation, then fire the pending
    /// completion callback exactly once.
    ///
    /// For callers that need converged answers in the same tick an obstacle
    /// was added.
    pub fn complete_now(&mut self) {
        while self.propagator.is_active() {
            self.propagator
                .step_with_budget(&self.field, self.step_budget, self.inflation_radius);
        }
        if self.progress == Progress::Propagating {
            self.finish();
        }
    }

    /// Whether a disc of `radius` fits at `(x, y)`. Fails closed out of
    /// bounds.
    ///
    /// A radius beyond the configured inflation radius is answered
    /// best-effort (the field was never propagated that far) and logged as
    /// a warning.
    pub fn can_place(&self, x: i32, y: i32, radius: f32) -> bool {
        self.warn_if_unpropagated(radius, "can_place");
        self.field.is_space_available(x, y, radius)
    }

    /// Nearest cell to `(x, y)` where a disc of `radius` fits, or `None`
    /// within the internal search bound. Same best-effort policy as
    /// [`can_place`](Self::can_place) for oversized radii.
    pub fn find_closest_available(&self, x: i32, y: i32, radius: f32) -> Option<(i32, i32)> {
        self.warn_if_unpropagated(radius, "find_closest_available");
        self.field.nearest_free(x, y, radius, MAX_SEARCH_RINGS)
    }

    /// Whether frontier cells are still queued for relaxation.
    pub fn has_pending_updates(&self) -> bool {
        self.propagator.is_active()
    }

    /// Whether the facade is between obstacle insertion and frontier drain.
    pub fn is_propagating(&self) -> bool {
        self.progress == Progress::Propagating
    }

    fn finish(&mut self) {
        self.progress = Progress::Idle;
        if let Some(callback) = self.on_complete.take() {
            callback();
        }
    }

    fn warn_if_unpropagated(&self, radius: f32, query: &str) {
        if radius > self.inflation_radius {
            log::warn!(
                "{query}: radius {radius} exceeds inflation radius {}; \
                 the field was never propagated that far, result is best-effort",
                self.inflation_radius
            );
        }
    }
}

impl std::fmt::Debug for PlacementField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlacementField")
            .field("width", &self.field.width())
            .field("height", &self.field.height())
            .field("inflation_radius", &self.inflation_radius)
            .field("step_budget", &self.step_budget)
            .field("progress", &self.progress)
            .field("pending_callback", &self.on_complete.is_some())
            .finish()
    }
}
