//! 2D circle type.

use super::{Point2, Vec2};
use num_traits::Float;

/// A 2D circle defined by center and radius.
///
/// # Example
///
/// ```
/// use circlepack::primitives::{Circle2, Point2};
///
/// let outer: Circle2<f64> = Circle2::new(Point2::new(0.0, 0.0), 10.0);
/// let inner = Circle2::new(Point2::new(9.0, 0.0), 1.0);
///
/// assert!(outer.contains_circle(&inner));
/// assert!(!inner.intersects(&Circle2::new(Point2::new(11.0, 0.0), 1.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle2<F> {
    /// Center point of the circle
    pub center: Point2<F>,
    /// Radius of the circle (must be non-negative)
    pub radius: F,
}

impl<F: Float> Circle2<F> {
    /// Creates a new circle from center and radius.
    #[inline]
    pub fn new(center: Point2<F>, radius: F) -> Self {
        Self { center, radius }
    }

    /// Creates a circle from center coordinates and radius.
    #[inline]
    pub fn from_coords(cx: F, cy: F, radius: F) -> Self {
        Self {
            center: Point2::new(cx, cy),
            radius,
        }
    }

    /// Returns the diameter of the circle.
    #[inline]
    pub fn diameter(&self) -> F {
        self.radius + self.radius
    }

    /// Returns the area of the circle.
    #[inline]
    pub fn area(&self) -> F {
        F::from(std::f64::consts::PI).unwrap() * self.radius * self.radius
    }

    /// Checks if a point is inside the circle (including boundary).
    #[inline]
    pub fn contains(&self, point: Point2<F>) -> bool {
        self.center.distance_squared(point) <= self.radius * self.radius
    }

    /// Checks if `other` lies entirely inside this circle.
    ///
    /// Internally tangent circles count as contained.
    #[inline]
    pub fn contains_circle(&self, other: &Circle2<F>) -> bool {
        self.center.distance(other.center) <= self.radius - other.radius
    }

    /// Checks if the interiors of two circles overlap.
    ///
    /// Circles that touch at a single point do not intersect.
    #[inline]
    pub fn intersects(&self, other: &Circle2<F>) -> bool {
        self.center.distance(other.center) < self.radius + other.radius
    }

    /// Top-left corner of the bounding box (minimum x and y).
    #[inline]
    pub fn left_up(&self) -> Point2<F> {
        self.center - Vec2::splat(self.radius)
    }

    /// Top-right corner of the bounding box.
    #[inline]
    pub fn right_up(&self) -> Point2<F> {
        Point2::new(self.center.x + self.radius, self.center.y - self.radius)
    }

    /// Bottom-left corner of the bounding box.
    #[inline]
    pub fn left_down(&self) -> Point2<F> {
        Point2::new(self.center.x - self.radius, self.center.y + self.radius)
    }

    /// Bottom-right corner of the bounding box (maximum x and y).
    #[inline]
    pub fn right_down(&self) -> Point2<F> {
        self.center + Vec2::splat(self.radius)
    }

    /// Returns the axis-aligned bounding box as (min, max) points.
    #[inline]
    pub fn bounding_box(&self) -> (Point2<F>, Point2<F>) {
        (self.left_up(), self.right_down())
    }

    /// Returns a circle scaled by the given factor around its center.
    #[inline]
    pub fn scaled(&self, factor: F) -> Self {
        Self {
            center: self.center,
            radius: self.radius * factor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_diameter_and_area() {
        let c: Circle2<f64> = Circle2::new(Point2::origin(), 5.0);
        assert_eq!(c.diameter(), 10.0);
        assert_relative_eq!(c.area(), 25.0 * std::f64::consts::PI, epsilon = 1e-10);
    }

    #[test]
    fn test_contains() {
        let c: Circle2<f64> = Circle2::new(Point2::origin(), 1.0);

        assert!(c.contains(Point2::new(0.0, 0.0))); // Center
        assert!(c.contains(Point2::new(1.0, 0.0))); // On boundary
        assert!(c.contains(Point2::new(0.5, 0.5))); // Inside
        assert!(!c.contains(Point2::new(1.0, 1.0))); // Outside
    }

    #[test]
    fn test_contains_circle() {
        let outer: Circle2<f64> = Circle2::from_coords(0.0, 0.0, 20.0);

        assert!(outer.contains_circle(&Circle2::from_coords(0.0, 0.0, 1.0)));
        // Internally tangent
        assert!(outer.contains_circle(&Circle2::from_coords(19.0, 0.0, 1.0)));
        // Pokes out
        assert!(!outer.contains_circle(&Circle2::from_coords(19.5, 0.0, 1.0)));
        // Larger than the container
        assert!(!outer.contains_circle(&Circle2::from_coords(0.0, 0.0, 21.0)));
    }

    #[test]
    fn test_intersects() {
        let a: Circle2<f64> = Circle2::from_coords(0.0, 0.0, 1.0);

        assert!(a.intersects(&Circle2::from_coords(1.5, 0.0, 1.0)));
        // Touching at a single point
        assert!(!a.intersects(&Circle2::from_coords(2.0, 0.0, 1.0)));
        assert!(!a.intersects(&Circle2::from_coords(0.0, 5.0, 1.0)));
        // Concentric
        assert!(a.intersects(&Circle2::from_coords(0.0, 0.0, 0.5)));
    }

    #[test]
    fn test_corners() {
        let c: Circle2<f64> = Circle2::new(Point2::new(1.0, 2.0), 3.0);
        assert_eq!(c.left_up(), Point2::new(-2.0, -1.0));
        assert_eq!(c.right_up(), Point2::new(4.0, -1.0));
        assert_eq!(c.left_down(), Point2::new(-2.0, 5.0));
        assert_eq!(c.right_down(), Point2::new(4.0, 5.0));

        let (min, max) = c.bounding_box();
        assert_eq!(min, c.left_up());
        assert_eq!(max, c.right_down());
    }

    #[test]
    fn test_scaled() {
        let c: Circle2<f64> = Circle2::new(Point2::new(1.0, 1.0), 2.0);
        let doubled = c.scaled(2.0);
        assert_eq!(doubled.center, c.center);
        assert_eq!(doubled.radius, 4.0);
    }

    #[test]
    fn test_f32_support() {
        let c: Circle2<f32> = Circle2::new(Point2::new(1.0, 2.0), 3.0);
        assert!(c.contains(Point2::new(1.0, 2.0)));
        assert!(c.contains_circle(&c));
    }
}
