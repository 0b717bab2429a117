//! The frontier queues and the parallel relaxation pass.

use clearance_grid::GridField;
use rayon::prelude::*;
use smallvec::SmallVec;
use std::f32::consts::SQRT_2;
use std::mem;
use std::time::{Duration, Instant};

/// All 8 neighbour offsets with their octile step cost: cardinals at 1,
/// diagonals at sqrt(2).
const OFFSETS_8: [(i32, i32, f32); 8] = [
    (-1, 0, 1.0),
    (1, 0, 1.0),
    (0, -1, 1.0),
    (0, 1, 1.0),
    (-1, -1, SQRT_2),
    (-1, 1, SQRT_2),
    (1, -1, SQRT_2),
    (1, 1, SQRT_2),
];

/// Frontier cells below this count are not worth fanning out to the pool.
const PARALLEL_MIN_CHUNK: usize = 64;

/// Double-buffered frontier queues driving ring-by-ring relaxation of a
/// [`GridField`] distance array.
///
/// Idle while the frontier is empty; [`seed`](Self::seed) makes it active,
/// and a [`step`](Self::step) that produces no next frontier drains it back
/// to idle. The two buffers are swapped each ring, never reallocated.
///
/// Duplicate indices in either buffer are tolerated: re-relaxing a cell
/// whose distance did not improve simply enqueues nothing.
#[derive(Debug, Default)]
pub struct WavefrontPropagator {
    frontier: Vec<u32>,
    next: Vec<u32>,
}

impl WavefrontPropagator {
    /// Create an idle propagator with empty queues.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue freshly stamped cell indices into the frontier.
    ///
    /// Indices must lie in `[0, cell_count)` of the grid later passed to
    /// [`step`](Self::step); this is checked in debug builds there.
    pub fn seed(&mut self, indices: &[u32]) {
        self.frontier.extend_from_slice(indices);
    }

    /// Whether any frontier cells are pending.
    pub fn is_active(&self) -> bool {
        !self.frontier.is_empty()
    }

    /// Number of pending frontier entries (duplicates included).
    pub fn pending(&self) -> usize {
        self.frontier.len()
    }

    /// Run one relaxation ring: relax the 8-neighbourhood of every frontier
    /// cell in parallel, collect the improved cells as the next frontier,
    /// and swap buffers. Returns the number of frontier entries processed
    /// (0 when already idle).
    ///
    /// Cells whose own distance already exceeds `max_distance` are dropped
    /// without expanding; candidates above `max_distance` are never written.
    /// Blocks until the whole ring has joined; rings are strictly
    /// sequential, only the cells *within* one ring run concurrently.
    pub fn step(&mut self, field: &GridField, max_distance: f32) -> usize {
        if self.frontier.is_empty() {
            return 0;
        }
        debug_assert!(
            self.frontier.iter().all(|&i| (i as usize) < field.cell_count()),
            "seeded index out of range"
        );
        let processed = self.frontier.len();
        let width = field.width() as i32;
        let height = field.height() as i32;

        self.next.clear();
        self.next.par_extend(
            self.frontier
                .par_iter()
                .with_min_len(PARALLEL_MIN_CHUNK)
                .flat_map_iter(|&idx| relax_neighbours(field, idx, width, height, max_distance)),
        );
        mem::swap(&mut self.frontier, &mut self.next);
        processed
    }

    /// Run rings until the frontier drains or `budget` of wall-clock time
    /// has elapsed, returning the total entries processed.
    ///
    /// Always runs at least one ring when active, and never preempts a ring
    /// mid-pass — a single large ring may overshoot the budget.
    pub fn step_with_budget(
        &mut self,
        field: &GridField,
        budget: Duration,
        max_distance: f32,
    ) -> usize {
        let start = Instant::now();
        let mut total = 0;
        while self.is_active() {
            total += self.step(field, max_distance);
            if start.elapsed() >= budget {
                break;
            }
        }
        total
    }
}

/// Relax the 8 in-bounds neighbours of one frontier cell, returning the
/// indices whose distance improved.
///
/// `GridField::relax` is the tolerated-race monotone-minimum write; a lost
/// race here costs a duplicate next-frontier entry, never a wrong value.
fn relax_neighbours(
    field: &GridField,
    idx: u32,
    width: i32,
    height: i32,
    max_distance: f32,
) -> SmallVec<[u32; 8]> {
    let mut improved = SmallVec::new();
    let base = field.distance_at(idx as usize);
    if base > max_distance {
        return improved;
    }
    let x = idx as i32 % width;
    let y = idx as i32 / width;
    for (dx, dy, cost) in OFFSETS_8 {
        let (nx, ny) = (x + dx, y + dy);
        if nx < 0 || nx >= width || ny < 0 || ny >= height {
            continue;
        }
        let candidate = base + cost;
        let nidx = field.index(nx, ny);
        if candidate <= max_distance && field.relax(nidx, candidate) {
            improved.push(nidx as u32);
        }
    }
    improved
}
