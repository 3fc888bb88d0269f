//! Circle packing with an occupancy grid and growth on failure.
//!
//! - [`OccupancyGrid`] - free/blocked flags for candidate inner-circle centers
//! - [`OuterCircle`] - the bounding circle with its placed circles and grid
//! - [`Packer`] - repeated attempts, growing the outer circle when they fail
//! - [`pack`] / [`pack_with_seed`] - one-call entry points

mod config;
mod decoration;
mod occupancy;
mod outer;
mod packer;
mod result;

pub use config::{suggested_radius, PackConfig, DEFAULT_FAILURES_BEFORE_GROWTH};
pub use decoration::{decoration_offsets, DECORATION_COUNT, L_COUNT, PLUS_COUNT, T_COUNT};
pub use occupancy::OccupancyGrid;
pub use outer::OuterCircle;
pub use packer::{pack, pack_with_seed, Packer};
pub use result::{PackedCircle, Packing, Placement};
