//! Fixed decoration pattern placed before random filling.
//!
//! The pattern spells a plus, an "L" and a "T" out of touching inner circles.
//! Offsets are expressed in multiples of the inner radius relative to the
//! outer center, so neighbouring circles sit exactly one diameter apart.

use crate::primitives::Vec2;
use num_traits::Float;

/// Circles in the plus sign.
pub const PLUS_COUNT: usize = 13;
/// Circles in the "L".
pub const L_COUNT: usize = 12;
/// Circles in the "T".
pub const T_COUNT: usize = 14;
/// Circles in the whole pattern.
pub const DECORATION_COUNT: usize = PLUS_COUNT + L_COUNT + T_COUNT;

/// Returns the center offsets of every decoration circle for `inner_radius`.
///
/// # Example
///
/// ```
/// use circlepack::packing::{decoration_offsets, DECORATION_COUNT};
///
/// let offsets = decoration_offsets(1.0_f64);
/// assert_eq!(offsets.len(), DECORATION_COUNT);
/// ```
pub fn decoration_offsets<F: Float>(inner_radius: F) -> Vec<Vec2<F>> {
    plus()
        .chain(letter_l())
        .chain(letter_t())
        .map(|(ux, uy)| Vec2::new(units(ux), units(uy)) * inner_radius)
        .collect()
}

/// Seven circles down, six across; the shared middle one appears once.
fn plus() -> impl Iterator<Item = (i32, i32)> {
    let vertical = (0..7).map(|i| (0, -6 + 2 * i));
    let horizontal = (0..7).filter(|&i| i != 3).map(|i| (-6 + 2 * i, 0));
    vertical.chain(horizontal)
}

/// Eight circles down the stem, four more along the foot.
fn letter_l() -> impl Iterator<Item = (i32, i32)> {
    let stem = (0..8).map(|i| (-14, -7 + 2 * i));
    let foot = (1..5).map(|i| (-14 + 2 * i, 7));
    stem.chain(foot)
}

/// Seven circles across the bar, seven more down from its middle.
fn letter_t() -> impl Iterator<Item = (i32, i32)> {
    let bar = (0..7).map(|i| (8 + 2 * i, -6));
    let stem = (1..8).map(|i| (14, -6 + 2 * i));
    bar.chain(stem)
}

fn units<F: Float>(n: i32) -> F {
    F::from(n).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{Circle2, Point2};

    #[test]
    fn test_counts() {
        assert_eq!(plus().count(), PLUS_COUNT);
        assert_eq!(letter_l().count(), L_COUNT);
        assert_eq!(letter_t().count(), T_COUNT);
        assert_eq!(decoration_offsets(2.0_f64).len(), DECORATION_COUNT);
    }

    #[test]
    fn test_offsets_scale_with_radius() {
        let unit = decoration_offsets(1.0_f64);
        let triple = decoration_offsets(3.0_f64);
        for (a, b) in unit.iter().zip(&triple) {
            assert_eq!(*a * 3.0, *b);
        }
    }

    #[test]
    fn test_pattern_circles_never_overlap() {
        let r = 1.5_f64;
        let circles: Vec<_> = decoration_offsets(r)
            .into_iter()
            .map(|o| Circle2::new(Point2::origin() + o, r))
            .collect();

        for i in 0..circles.len() {
            for j in (i + 1)..circles.len() {
                assert!(
                    !circles[i].intersects(&circles[j]),
                    "decorations {} and {} overlap",
                    i,
                    j
                );
            }
        }
    }

    #[test]
    fn test_pattern_extent() {
        // The far corner of the "T" bar sets the minimum outer radius
        let reach = decoration_offsets(1.0_f64)
            .into_iter()
            .map(|o| o.magnitude() + 1.0)
            .fold(0.0, f64::max);
        assert!(reach > 21.0 && reach < 22.0);
    }
}
