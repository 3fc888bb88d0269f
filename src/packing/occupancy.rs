//! Occupancy grid over candidate centers.
//!
//! The grid covers the bounding box of the outer circle with one cell per unit
//! offset from its top-left corner. A cell is free when an inner circle centered
//! on it would sit fully inside the outer circle without overlapping anything
//! placed so far.

use crate::primitives::{Circle2, Point2, Vec2};
use num_traits::Float;

/// A square grid of free/blocked flags, stored row-major as `y * side + x`.
///
/// # Example
///
/// ```
/// use circlepack::packing::OccupancyGrid;
/// use circlepack::primitives::{Circle2, Point2};
///
/// let outer: Circle2<f64> = Circle2::new(Point2::new(0.0, 0.0), 4.0);
/// let mut grid = OccupancyGrid::new(&outer, 1.0);
/// assert_eq!(grid.side(), 8);
/// assert_eq!(grid.free_count(), 29);
///
/// grid.block(&Circle2::new(Point2::new(0.0, 0.0), 1.0));
/// assert_eq!(grid.free_count(), 16);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct OccupancyGrid<F> {
    origin: Point2<F>,
    side: usize,
    cells: Vec<bool>,
}

impl<F: Float> OccupancyGrid<F> {
    /// Creates a grid for `outer` with every containable cell free.
    pub fn new(outer: &Circle2<F>, inner_radius: F) -> Self {
        let mut grid = Self {
            origin: outer.left_up(),
            side: 0,
            cells: Vec::new(),
        };
        grid.rebuild(outer, inner_radius);
        grid
    }

    /// Resets the grid to an empty outer circle.
    ///
    /// The grid is resized to `ceil(2 * radius)` cells per side and a cell is
    /// marked free iff its point lies within `radius - inner_radius` of the
    /// outer center.
    pub fn rebuild(&mut self, outer: &Circle2<F>, inner_radius: F) {
        self.origin = outer.left_up();
        self.side = outer.diameter().ceil().to_usize().unwrap_or(0);

        self.cells.clear();
        self.cells.resize(self.side * self.side, false);

        let reach = outer.radius - inner_radius;
        if reach < F::zero() {
            return;
        }
        let shell = Circle2::new(outer.center, reach);

        for y in 0..self.side {
            for x in 0..self.side {
                self.cells[y * self.side + x] = shell.contains(self.cell_point(x, y));
            }
        }
    }

    /// Blocks the exclusion footprint of a newly placed circle.
    ///
    /// Every cell within twice the circle's radius of its center is marked
    /// blocked. Cells outside the grid are ignored.
    pub fn block(&mut self, circle: &Circle2<F>) {
        let exclusion = circle.scaled(F::one() + F::one());
        let rel = exclusion.center - self.origin;
        let r = exclusion.radius;

        let Some((x0, x1)) = self.clip(rel.x - r, rel.x + r) else {
            return;
        };
        let Some((y0, y1)) = self.clip(rel.y - r, rel.y + r) else {
            return;
        };

        for y in y0..=y1 {
            for x in x0..=x1 {
                if exclusion.contains(self.cell_point(x, y)) {
                    self.cells[y * self.side + x] = false;
                }
            }
        }
    }

    /// Iterates over free cells, x-major then y.
    ///
    /// The scan is recomputed on every call.
    pub fn free_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let side = self.side;
        (0..side)
            .flat_map(move |x| (0..side).map(move |y| (x, y)))
            .filter(move |&(x, y)| self.cells[y * side + x])
    }

    /// Returns the number of free cells.
    pub fn free_count(&self) -> usize {
        self.cells.iter().filter(|&&free| free).count()
    }

    /// Returns `true` if the cell exists and is free.
    #[inline]
    pub fn is_free(&self, x: usize, y: usize) -> bool {
        x < self.side && y < self.side && self.cells[y * self.side + x]
    }

    /// Returns the absolute point of a cell.
    #[inline]
    pub fn cell_point(&self, x: usize, y: usize) -> Point2<F> {
        self.origin + Vec2::from_cell(x, y)
    }

    /// Number of cells along each side.
    #[inline]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Absolute point of cell `(0, 0)`, the outer circle's top-left corner.
    #[inline]
    pub fn origin(&self) -> Point2<F> {
        self.origin
    }

    /// Clips a relative coordinate span to cell indices.
    fn clip(&self, lo: F, hi: F) -> Option<(usize, usize)> {
        if self.side == 0 {
            return None;
        }
        let last = F::from(self.side - 1)?;
        let lo = lo.floor().max(F::zero());
        let hi = hi.ceil().min(last);
        if lo.is_nan() || hi.is_nan() || lo > hi {
            return None;
        }
        Some((lo.to_usize()?, hi.to_usize()?))
    }
}
