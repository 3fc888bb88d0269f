//! Fill colors for packed circles.
//!
//! Colors fade from warm near the outer center to dark at the rim. The mapping
//! only depends on the distance from the center, so a packing always renders
//! the same way.

use num_traits::Float;
use std::fmt;

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Color given to the fixed decoration circles.
pub const DECORATION_COLOR: Rgb = Rgb::new(10, 160, 10);

impl Rgb {
    /// Creates a new color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Formats the color as `#rrggbb`.
    pub fn to_hex(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Returns the gradient color for a circle at `distance` from the outer center.
///
/// # Example
///
/// ```
/// use circlepack::color::{gradient_color, Rgb};
///
/// assert_eq!(gradient_color(0.0_f64), Rgb::new(255, 205, 185));
/// assert_eq!(gradient_color(100.0_f64), Rgb::new(85, 25, 25));
/// ```
pub fn gradient_color<F: Float>(distance: F) -> Rgb {
    let falloff = distance.to_f64().unwrap_or(0.0).max(0.0).sqrt();

    let r = (255.0 - 20.0 * falloff).max(0.0);
    let g = (180.0 - 35.0 * falloff).max(0.0);
    let b = (160.0 - 35.0 * falloff).max(0.0);

    // Midpoint of each channel's band
    let r_top = (r + 60.0).min(255.0);
    Rgb::new(
        channel((r + r_top) / 2.0),
        channel(g + 25.0),
        channel(b + 25.0),
    )
}

fn channel(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex() {
        assert_eq!(Rgb::new(0, 0, 0).to_hex(), "#000000");
        assert_eq!(Rgb::new(255, 16, 1).to_hex(), "#ff1001");
        assert_eq!(DECORATION_COLOR.to_string(), "#0aa00a");
    }

    #[test]
    fn test_gradient_at_center() {
        assert_eq!(gradient_color(0.0_f64), Rgb::new(255, 205, 185));
    }

    #[test]
    fn test_gradient_darkens_outward() {
        let mut last = gradient_color(0.0_f64);
        for d in [1.0, 4.0, 9.0, 25.0, 64.0] {
            let c = gradient_color(d);
            assert!(c.r <= last.r && c.g <= last.g && c.b <= last.b);
            last = c;
        }
    }

    #[test]
    fn test_gradient_floor() {
        // Channels bottom out instead of wrapping
        assert_eq!(gradient_color(10_000.0_f64), Rgb::new(30, 25, 25));
    }

    #[test]
    fn test_gradient_negative_distance() {
        assert_eq!(gradient_color(-5.0_f32), gradient_color(0.0_f32));
    }
}
