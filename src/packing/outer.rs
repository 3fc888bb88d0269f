//! Mutable packing state of the bounding circle.

use super::decoration::decoration_offsets;
use super::occupancy::OccupancyGrid;
use super::result::{PackedCircle, Packing, Placement};
use crate::color::{gradient_color, DECORATION_COLOR};
use crate::error::PackError;
use crate::primitives::{Circle2, Point2};
use num_traits::Float;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::trace;

/// The outer circle together with the inner circles placed in the current
/// attempt and the occupancy grid that tracks the remaining room.
///
/// The radius only ever grows. Every change of radius and every
/// [`reset`](Self::reset) rebuilds the grid from scratch.
#[derive(Debug, Clone)]
pub struct OuterCircle<F> {
    circle: Circle2<F>,
    inner_radius: F,
    inner_circles: Vec<PackedCircle<F>>,
    occupancy: OccupancyGrid<F>,
}

impl<F: Float> OuterCircle<F> {
    /// Creates an empty outer circle.
    pub fn new(center: Point2<F>, radius: F, inner_radius: F) -> Self {
        let circle = Circle2::new(center, radius);
        Self {
            circle,
            inner_radius,
            inner_circles: Vec::new(),
            occupancy: OccupancyGrid::new(&circle, inner_radius),
        }
    }

    /// The outer circle geometry.
    #[inline]
    pub fn circle(&self) -> Circle2<F> {
        self.circle
    }

    /// Current outer radius.
    #[inline]
    pub fn radius(&self) -> F {
        self.circle.radius
    }

    /// Radius given to every inner circle.
    #[inline]
    pub fn inner_radius(&self) -> F {
        self.inner_radius
    }

    /// Inner circles placed so far in this attempt.
    #[inline]
    pub fn inner_circles(&self) -> &[PackedCircle<F>] {
        &self.inner_circles
    }

    /// The occupancy grid for the current radius.
    #[inline]
    pub fn occupancy(&self) -> &OccupancyGrid<F> {
        &self.occupancy
    }

    /// Drops all inner circles and rebuilds the grid for an empty circle.
    pub fn reset(&mut self) {
        self.inner_circles.clear();
        self.occupancy.rebuild(&self.circle, self.inner_radius);
    }

    /// Enlarges the outer radius by `step` and starts over.
    ///
    /// Non-positive steps leave the radius unchanged.
    pub fn grow(&mut self, step: F) {
        if step > F::zero() {
            self.circle.radius = self.circle.radius + step;
        }
        self.reset();
    }

    /// Places one inner circle on a uniformly chosen free cell.
    ///
    /// Returns [`PackError::PlacementExhausted`] when no free cell is left.
    pub fn add_random_circle<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), PackError> {
        let free: Vec<(usize, usize)> = self.occupancy.free_cells().collect();
        let &(x, y) = free.choose(rng).ok_or(PackError::PlacementExhausted)?;

        let center = self.occupancy.cell_point(x, y);
        trace!(x, y, free = free.len(), "placing inner circle");
        self.place(Circle2::new(center, self.inner_radius), Placement::Random);
        Ok(())
    }

    /// Places the fixed decoration pattern around the center.
    ///
    /// Fails with [`PackError::PlacementExhausted`] if any decoration circle
    /// would stick out of the outer circle; nothing is placed in that case.
    pub fn place_decorations(&mut self) -> Result<(), PackError> {
        let circles: Vec<Circle2<F>> = decoration_offsets(self.inner_radius)
            .into_iter()
            .map(|offset| Circle2::new(self.circle.center + offset, self.inner_radius))
            .collect();

        if !circles.iter().all(|c| self.circle.contains_circle(c)) {
            return Err(PackError::PlacementExhausted);
        }
        for circle in circles {
            self.place(circle, Placement::Decoration);
        }
        Ok(())
    }

    /// Freezes the current state into a finished packing.
    pub fn into_packing(self, attempts: usize, growths: usize) -> Packing<F> {
        Packing {
            outer: self.circle,
            circles: self.inner_circles,
            attempts,
            growths,
        }
    }

    fn place(&mut self, circle: Circle2<F>, placement: Placement) {
        let color = match placement {
            Placement::Decoration => DECORATION_COLOR,
            Placement::Random => gradient_color(self.circle.center.distance(circle.center)),
        };
        self.inner_circles.push(PackedCircle {
            center: circle.center,
            radius: circle.radius,
            color,
            placement,
        });
        self.occupancy.block(&circle);
    }
}
