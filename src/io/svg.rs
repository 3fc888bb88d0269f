//! SVG export of packings.
//!
//! Each inner circle becomes a filled `<circle>` element in placement order,
//! followed by the outer circle as an unfilled outline. Coordinates are
//! shifted so the outer circle's top-left corner lands on the SVG origin.
//!
//! # Example
//!
//! ```
//! use circlepack::io::{packing_to_svg, SvgStyle};
//! use circlepack::packing::pack_with_seed;
//! use circlepack::primitives::Point2;
//!
//! let packing = pack_with_seed(Point2::new(0.0_f64, 0.0), 10.0, 1.0, 12, 7).unwrap();
//! let svg = packing_to_svg(&packing, &SvgStyle::default());
//!
//! assert!(svg.starts_with("<svg"));
//! assert_eq!(svg.matches("<circle").count(), 13);
//! ```

use crate::color::Rgb;
use crate::packing::Packing;
use crate::primitives::Point2;
use num_traits::Float;
use std::fmt::{self, Write};

/// Presentation settings for [`packing_to_svg`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SvgStyle {
    /// Multiplier applied to every coordinate and radius.
    pub scale: f64,
    /// Stroke color of the outer circle.
    pub outline: Rgb,
    /// Stroke width of the outer circle, before scaling.
    pub outline_width: f64,
}

impl Default for SvgStyle {
    fn default() -> Self {
        Self {
            scale: 1.0,
            outline: Rgb::new(0, 0, 0),
            outline_width: 0.25,
        }
    }
}

/// Renders a packing as a standalone SVG document.
pub fn packing_to_svg<F: Float>(packing: &Packing<F>, style: &SvgStyle) -> String {
    let origin = packing.outer.left_up();
    let side = to_f64(packing.outer.diameter()) * style.scale;

    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_document(&mut out, packing, origin, side, style);
    out
}

fn write_document<F: Float>(
    out: &mut String,
    packing: &Packing<F>,
    origin: Point2<F>,
    side: f64,
    style: &SvgStyle,
) -> fmt::Result {
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{side:.2}" height="{side:.2}" viewBox="0 0 {side:.2} {side:.2}">"#
    )?;

    for c in &packing.circles {
        let (cx, cy) = project(c.center, origin, style.scale);
        writeln!(
            out,
            r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{}"/>"#,
            cx,
            cy,
            to_f64(c.radius) * style.scale,
            c.color
        )?;
    }

    let (cx, cy) = project(packing.outer.center, origin, style.scale);
    writeln!(
        out,
        r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="none" stroke="{}" stroke-width="{:.2}"/>"#,
        cx,
        cy,
        to_f64(packing.outer.radius) * style.scale,
        style.outline,
        style.outline_width * style.scale
    )?;

    writeln!(out, "</svg>")
}

fn project<F: Float>(p: Point2<F>, origin: Point2<F>, scale: f64) -> (f64, f64) {
    let rel = p - origin;
    (to_f64(rel.x) * scale, to_f64(rel.y) * scale)
}

fn to_f64<F: Float>(v: F) -> f64 {
    v.to_f64().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packing::{PackedCircle, Placement};
    use crate::primitives::Circle2;

    fn sample() -> Packing<f64> {
        Packing {
            outer: Circle2::from_coords(10.0, 10.0, 5.0),
            circles: vec![PackedCircle {
                center: Point2::new(9.0, 12.0),
                radius: 1.0,
                color: Rgb::new(255, 0, 16),
                placement: Placement::Random,
            }],
            attempts: 1,
            growths: 0,
        }
    }

    #[test]
    fn test_document_layout() {
        let svg = packing_to_svg(&sample(), &SvgStyle::default());
        let lines: Vec<&str> = svg.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains(r#"viewBox="0 0 10.00 10.00""#));
        assert_eq!(
            lines[1],
            r##"<circle cx="4.00" cy="7.00" r="1.00" fill="#ff0010"/>"##
        );
        assert!(lines[2].contains(r#"cx="5.00" cy="5.00" r="5.00" fill="none""#));
        assert_eq!(lines[3], "</svg>");
    }

    #[test]
    fn test_scale() {
        let style = SvgStyle {
            scale: 8.0,
            ..SvgStyle::default()
        };
        let svg = packing_to_svg(&sample(), &style);

        assert!(svg.contains(r#"width="80.00""#));
        assert!(svg.contains(r#"cx="32.00" cy="56.00" r="8.00""#));
        assert!(svg.contains(r#"stroke-width="2.00""#));
    }
}
