//! Placement queries over the distance field.

use crate::field::GridField;

impl GridField {
    /// Whether a disc of `radius` fits at `(x, y)`: the cell's distance to
    /// the nearest blocked cell must be at least `radius`.
    ///
    /// Fails closed: out-of-bounds coordinates return `false`.
    pub fn is_space_available(&self, x: i32, y: i32, radius: f32) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }
        self.distance_at(self.index(x, y)) >= radius
    }

    /// Find the nearest cell to `(x, y)` where a disc of `radius` fits,
    /// scanning outward up to `max_search_radius` rings.
    ///
    /// Ring 0 is the query cell itself. Each subsequent ring `r` is the
    /// square annulus `max(|dx|, |dy|) == r` filtered to the disc
    /// `dx^2 + dy^2 <= r^2`; the first ring holding any qualifying cell wins,
    /// and within it the cell with the smallest squared Euclidean offset is
    /// returned (first match on ties).
    ///
    /// The disc filter means cells in the annulus corners are skipped at
    /// every ring, so the result is ring-optimal rather than globally
    /// Euclidean-closest: a qualifying diagonal cell can be passed over in
    /// favour of a slightly farther axis-ward one. Callers rely on this
    /// fast approximation; see `nearest_free_skips_annulus_corners` in the
    /// tests.
    pub fn nearest_free(
        &self,
        x: i32,
        y: i32,
        radius: f32,
        max_search_radius: i32,
    ) -> Option<(i32, i32)> {
        if self.is_space_available(x, y, radius) {
            return Some((x, y));
        }
        // Rings past the farthest in-grid cell hold no in-bounds candidates,
        // so cap the scan there; squared offsets are computed in i64 since
        // the bound is caller-supplied and may not fit i32 squaring.
        let span_x = (x as i64).abs().max((self.width() as i64 - 1 - x as i64).abs());
        let span_y = (y as i64).abs().max((self.height() as i64 - 1 - y as i64).abs());
        let cap = (max_search_radius as i64).min(span_x.max(span_y)) as i32;
        for r in 1..=cap {
            let mut best: Option<(i32, i32)> = None;
            let mut best_d2 = i64::MAX;
            let mut consider = |dx: i32, dy: i32| {
                let d2 = dx as i64 * dx as i64 + dy as i64 * dy as i64;
                if d2 > r as i64 * r as i64 || d2 >= best_d2 {
                    return;
                }
                let (nx, ny) = (x as i64 + dx as i64, y as i64 + dy as i64);
                if nx < 0 || nx >= self.width() as i64 || ny < 0 || ny >= self.height() as i64 {
                    return;
                }
                let (nx, ny) = (nx as i32, ny as i32);
                if self.is_space_available(nx, ny, radius) {
                    best = Some((nx, ny));
                    best_d2 = d2;
                }
            };
            // Top and bottom rows of the annulus, then the side columns.
            for dx in -r..=r {
                consider(dx, -r);
                consider(dx, r);
            }
            for dy in (-r + 1)..r {
                consider(-r, dy);
                consider(r, dy);
            }
            if best.is_some() {
                return best;
            }
        }
        None
    }
}
