//! The dense grid field: blocked mask, distance array, and disc stamping.

use crate::error::GridError;
use std::sync::atomic::{AtomicU32, Ordering};

/// A fixed-size 2D grid holding, per cell, a monotone blocked flag and the
/// best known octile distance to the nearest blocked cell.
///
/// Cells are addressed by `(x, y)` with `0 <= x < width`, `0 <= y < height`
/// and stored flat at `y * width + x`. `distance` starts at `+inf`
/// everywhere and only ever decreases: stamping forces covered cells to
/// exactly `0.0`, and [`relax`](Self::relax) performs monotone-minimum
/// writes during propagation.
///
/// # Concurrency
///
/// `distance` cells are `AtomicU32` (f32 bits) accessed with
/// `Ordering::Relaxed` throughout. During one propagation ring many worker
/// threads call [`relax`](Self::relax) concurrently; the check-then-store is
/// deliberately not a compare-exchange loop. Two racing writers may both
/// store, but both candidates are below the value they read, and a later
/// ring re-relaxes whichever store survives. Outside a ring the field is
/// single-threaded-owned, so no stronger ordering is needed anywhere.
#[derive(Debug)]
pub struct GridField {
    width: u32,
    height: u32,
    blocked: Vec<bool>,
    distance: Vec<AtomicU32>,
}

impl GridField {
    /// Maximum dimension size: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a `width * height` grid with every cell unblocked and at
    /// distance `+inf`.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if either dimension is 0,
    /// `Err(GridError::DimensionTooLarge)` if either exceeds `i32::MAX`, or
    /// `Err(GridError::TooManyCells)` if the product does — flat indices
    /// round-trip through `u32`/`i32`, so the cell count must fit too.
    pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid);
        }
        if width > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "width",
                value: width,
                max: Self::MAX_DIM,
            });
        }
        if height > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "height",
                value: height,
                max: Self::MAX_DIM,
            });
        }
        let total = width as u64 * height as u64;
        if total > Self::MAX_DIM as u64 {
            return Err(GridError::TooManyCells {
                cells: total,
                max: Self::MAX_DIM as u64,
            });
        }
        let cells = total as usize;
        let inf = f32::INFINITY.to_bits();
        Ok(Self {
            width,
            height,
            blocked: vec![false; cells],
            distance: (0..cells).map(|_| AtomicU32::new(inf)).collect(),
        })
    }

    /// Grid width in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in cells.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.distance.len()
    }

    /// Flat index of `(x, y)`. No bounds check; pair with
    /// [`in_bounds`](Self::in_bounds).
    #[inline]
    pub fn index(&self, x: i32, y: i32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Whether `(x, y)` lies inside the grid.
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && (x as u32) < self.width && y >= 0 && (y as u32) < self.height
    }

    /// Whether the cell at `idx` has ever been covered by an obstacle.
    #[inline]
    pub fn is_blocked(&self, idx: usize) -> bool {
        self.blocked[idx]
    }

    /// Number of blocked cells.
    pub fn blocked_count(&self) -> usize {
        self.blocked.iter().filter(|&&b| b).count()
    }

    /// Current distance value of the cell at `idx`.
    #[inline]
    pub fn distance_at(&self, idx: usize) -> f32 {
        f32::from_bits(self.distance[idx].load(Ordering::Relaxed))
    }

    /// Monotone-minimum write: store `candidate` into the cell at `idx` if
    /// it improves on the current value, returning whether it stored.
    ///
    /// Safe to call from many threads at once; see the type-level notes on
    /// the tolerated race.
    #[inline]
    pub fn relax(&self, idx: usize, candidate: f32) -> bool {
        let cell = &self.distance[idx];
        if candidate < f32::from_bits(cell.load(Ordering::Relaxed)) {
            cell.store(candidate.to_bits(), Ordering::Relaxed);
            true
        } else {
            false
        }
    }

    /// Mark every in-bounds cell strictly inside the disc of `radius` around
    /// `(cx, cy)` as blocked, force its distance to `0.0`, and return the
    /// touched flat indices (the propagation seeds).
    ///
    /// Already-blocked cells are re-touched and re-returned: re-seeding a
    /// converged cell is harmless, its neighbours simply see no improvement.
    /// A disc entirely outside the grid returns an empty list, as does a
    /// non-positive (or NaN) radius.
    pub fn stamp_disc(&mut self, cx: i32, cy: i32, radius: f32) -> Vec<u32> {
        let mut touched = Vec::new();
        if !(radius > 0.0) {
            return touched;
        }
        // Clip the scan window to the grid before iterating; an oversized
        // radius must not walk (or square) anything beyond it. The float
        // cast saturates, and the membership test runs in f64 so centres
        // far outside the grid cannot overflow integer squaring.
        let reach = radius.ceil() as i64;
        let x_min = (cx as i64).saturating_sub(reach).max(0);
        let x_max = (cx as i64).saturating_add(reach).min(self.width as i64 - 1);
        let y_min = (cy as i64).saturating_sub(reach).max(0);
        let y_max = (cy as i64).saturating_add(reach).min(self.height as i64 - 1);
        let r2 = f64::from(radius) * f64::from(radius);
        for y in y_min..=y_max {
            for x in x_min..=x_max {
                let dx = (x - cx as i64) as f64;
                let dy = (y - cy as i64) as f64;
                if dx * dx + dy * dy >= r2 {
                    continue;
                }
                let idx = self.index(x as i32, y as i32);
                self.blocked[idx] = true;
                self.distance[idx].store(0.0f32.to_bits(), Ordering::Relaxed);
                touched.push(idx as u32);
            }
        }
        touched
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_allocates_unblocked_infinite() {
        let g = GridField::new(4, 3).unwrap();
        assert_eq!(g.cell_count(), 12);
        for idx in 0..g.cell_count() {
            assert!(!g.is_blocked(idx));
            assert_eq!(g.distance_at(idx), f32::INFINITY);
        }
    }

    #[test]
    fn new_zero_width_returns_error() {
        assert_eq!(GridField::new(0, 5).unwrap_err(), GridError::EmptyGrid);
        assert_eq!(GridField::new(5, 0).unwrap_err(), GridError::EmptyGrid);
    }

    #[test]
    fn new_rejects_cell_count_exceeding_i32_max() {
        // Each axis fits i32, the product does not.
        assert_eq!(
            GridField::new(65_536, 65_536).unwrap_err(),
            GridError::TooManyCells {
                cells: 1 << 32,
                max: i32::MAX as u64,
            }
        );
    }

    #[test]
    fn new_rejects_dims_exceeding_i32_max() {
        let big = i32::MAX as u32 + 1;
        assert!(matches!(
            GridField::new(big, 5),
            Err(GridError::DimensionTooLarge { name: "width", .. })
        ));
        assert!(matches!(
            GridField::new(5, big),
            Err(GridError::DimensionTooLarge { name: "height", .. })
        ));
    }

    #[test]
    fn index_is_row_major() {
        let g = GridField::new(7, 5).unwrap();
        assert_eq!(g.index(0, 0), 0);
        assert_eq!(g.index(6, 0), 6);
        assert_eq!(g.index(0, 1), 7);
        assert_eq!(g.index(3, 2), 17);
    }

    #[test]
    fn in_bounds_edges() {
        let g = GridField::new(4, 3).unwrap();
        assert!(g.in_bounds(0, 0));
        assert!(g.in_bounds(3, 2));
        assert!(!g.in_bounds(4, 0));
        assert!(!g.in_bounds(0, 3));
        assert!(!g.in_bounds(-1, 0));
        assert!(!g.in_bounds(0, -1));
    }

    #[test]
    fn relax_only_improves() {
        let g = GridField::new(3, 3).unwrap();
        assert!(g.relax(4, 2.0));
        assert_eq!(g.distance_at(4), 2.0);
        assert!(!g.relax(4, 3.0), "larger candidate must be rejected");
        assert_eq!(g.distance_at(4), 2.0);
        assert!(g.relax(4, 1.5));
        assert_eq!(g.distance_at(4), 1.5);
    }

    #[test]
    fn stamp_radius_one_covers_only_centre() {
        // The boundary is exclusive: a radius-1 disc is a single cell.
        let mut g = GridField::new(10, 10).unwrap();
        let touched = g.stamp_disc(5, 5, 1.0);
        assert_eq!(touched, vec![g.index(5, 5) as u32]);
        assert!(g.is_blocked(g.index(5, 5)));
        assert_eq!(g.distance_at(g.index(5, 5)), 0.0);
        assert!(!g.is_blocked(g.index(6, 5)));
    }

    #[test]
    fn stamp_larger_disc_covers_neighbourhood() {
        let mut g = GridField::new(10, 10).unwrap();
        let touched = g.stamp_disc(5, 5, 1.5);
        // Centre, four cardinals, and the diagonals at sqrt(2) < 1.5: 9 cells.
        assert_eq!(touched.len(), 9);
        assert!(g.is_blocked(g.index(6, 6)));
        assert_eq!(g.blocked_count(), 9);
    }

    #[test]
    fn stamp_clips_to_bounds() {
        let mut g = GridField::new(10, 10).unwrap();
        let touched = g.stamp_disc(0, 0, 1.5);
        // Only the in-bounds quadrant of the disc.
        assert_eq!(touched.len(), 4);
        assert!(g.is_blocked(g.index(0, 0)));
        assert!(g.is_blocked(g.index(1, 1)));
    }

    #[test]
    fn stamp_huge_radius_is_clipped_to_grid() {
        // Radii past 46341 used to overflow the i32 disc test; the scan
        // window is also clamped so only the 100 grid cells are visited.
        let mut g = GridField::new(10, 10).unwrap();
        let touched = g.stamp_disc(5, 5, 46_342.0);
        assert_eq!(touched.len(), 100);
        assert_eq!(g.blocked_count(), 100);
    }

    #[test]
    fn stamp_extreme_centre_and_radius_cover_grid() {
        let mut g = GridField::new(10, 10).unwrap();
        let touched = g.stamp_disc(i32::MIN, i32::MIN, f32::MAX);
        assert_eq!(touched.len(), 100);
    }

    #[test]
    fn stamp_nonpositive_radius_is_empty() {
        let mut g = GridField::new(10, 10).unwrap();
        assert!(g.stamp_disc(5, 5, 0.0).is_empty());
        assert!(g.stamp_disc(5, 5, -2.0).is_empty());
        assert!(g.stamp_disc(5, 5, f32::NAN).is_empty());
        assert_eq!(g.blocked_count(), 0);
    }

    #[test]
    fn stamp_fully_outside_is_empty() {
        let mut g = GridField::new(10, 10).unwrap();
        assert!(g.stamp_disc(-50, -50, 2.0).is_empty());
        assert_eq!(g.blocked_count(), 0);
    }

    #[test]
    fn stamp_is_idempotent_but_reseeds() {
        let mut g = GridField::new(10, 10).unwrap();
        let first = g.stamp_disc(5, 5, 1.0);
        let second = g.stamp_disc(5, 5, 1.0);
        assert_eq!(first, second, "already-blocked cells are re-returned");
        assert_eq!(g.blocked_count(), 1);
    }

    #[test]
    fn relax_never_perturbs_stamped_zero() {
        let mut g = GridField::new(10, 10).unwrap();
        let idx = g.index(5, 5);
        g.stamp_disc(5, 5, 1.0);
        assert!(!g.relax(idx, 1.0), "0 is already the minimum");
        assert_eq!(g.distance_at(idx), 0.0);
    }
}
