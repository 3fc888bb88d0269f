//! Finished packings handed to renderers.

use crate::color::Rgb;
use crate::primitives::{Circle2, Point2};
use num_traits::Float;

/// How an inner circle got its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Placement {
    /// Part of the fixed decoration pattern.
    Decoration,
    /// Drawn uniformly from the free cells.
    Random,
}

/// An inner circle record.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PackedCircle<F> {
    pub center: Point2<F>,
    pub radius: F,
    pub color: Rgb,
    pub placement: Placement,
}

impl<F: Float> PackedCircle<F> {
    /// Returns the circle geometry.
    #[inline]
    pub fn circle(&self) -> Circle2<F> {
        Circle2::new(self.center, self.radius)
    }
}

/// The accepted layout: the final outer circle and every inner circle in
/// placement order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Packing<F> {
    /// Outer circle at its final radius.
    pub outer: Circle2<F>,
    /// Inner circles, decorations first.
    pub circles: Vec<PackedCircle<F>>,
    /// Attempts made, including the accepted one.
    pub attempts: usize,
    /// How many times the outer circle grew.
    pub growths: usize,
}

impl<F: Float> Packing<F> {
    /// Number of inner circles.
    #[inline]
    pub fn len(&self) -> usize {
        self.circles.len()
    }

    /// Returns `true` if there are no inner circles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.circles.is_empty()
    }

    /// Number of randomly placed circles.
    pub fn random_count(&self) -> usize {
        self.count(Placement::Random)
    }

    /// Number of decoration circles.
    pub fn decoration_count(&self) -> usize {
        self.count(Placement::Decoration)
    }

    /// Fraction of the outer area covered by inner circles.
    pub fn density(&self) -> F {
        let covered = self
            .circles
            .iter()
            .fold(F::zero(), |acc, c| acc + c.circle().area());
        covered / self.outer.area()
    }

    /// Checks that every inner circle is contained in the outer circle and
    /// that no two inner circles overlap.
    pub fn is_valid(&self) -> bool {
        let circles: Vec<Circle2<F>> = self.circles.iter().map(PackedCircle::circle).collect();

        circles.iter().all(|c| self.outer.contains_circle(c))
            && circles.iter().enumerate().all(|(i, a)| {
                circles[i + 1..].iter().all(|b| !a.intersects(b))
            })
    }

    fn count(&self, placement: Placement) -> usize {
        self.circles
            .iter()
            .filter(|c| c.placement == placement)
            .count()
    }
}
