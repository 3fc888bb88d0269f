//! circlepack - Non-overlapping circle packing
//!
//! Fills a bounding circle with equally sized inner circles. Candidate centers
//! live on an occupancy grid; each placement blocks a disk of twice its radius
//! so later circles cannot overlap it. When an attempt runs out of room a few
//! times in a row, the bounding circle grows and the search starts over.
//!
//! The layout is not the tightest possible packing, but every returned
//! [`Packing`] has all circles inside the container and no two overlapping.

pub mod color;
pub mod error;
pub mod io;
pub mod packing;
pub mod primitives;

pub use color::Rgb;
pub use error::PackError;
pub use packing::{pack, pack_with_seed, PackConfig, PackedCircle, Packer, Packing, Placement};
pub use primitives::{Circle2, Point2, Vec2};
