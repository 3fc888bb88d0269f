//! Output helpers for finished packings.
//!
//! Provides SVG export so a packing can be handed to any viewer.

mod svg;

pub use svg::{packing_to_svg, SvgStyle};
