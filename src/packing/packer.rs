//! Attempt loop with growth on failure.
//!
//! Each attempt starts from an empty outer circle and places the target count
//! of inner circles one by one on random free cells. An attempt that runs out
//! of free cells is thrown away. After a few failures at the same radius the
//! outer circle grows and the grid is rebuilt larger.
//!
//! Termination is probabilistic: growing the radius only adds room, so a
//! layout is found eventually, but no bound is enforced unless
//! [`PackConfig::max_attempts`] is set.

use super::config::PackConfig;
use super::outer::OuterCircle;
use super::result::Packing;
use crate::error::PackError;
use crate::primitives::Point2;
use num_traits::Float;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Packs `target_count` circles of `inner_radius` into a circle that starts at
/// `initial_radius` and grows as needed.
///
/// Uses the thread-local random generator. See [`pack_with_seed`] for
/// reproducible layouts.
///
/// # Example
///
/// ```
/// use circlepack::packing::pack;
/// use circlepack::primitives::Point2;
///
/// let packing = pack(Point2::new(0.0_f64, 0.0), 20.0, 1.0, 4).unwrap();
/// assert_eq!(packing.len(), 4);
/// assert!(packing.is_valid());
/// ```
pub fn pack<F: Float>(
    center: Point2<F>,
    initial_radius: F,
    inner_radius: F,
    target_count: usize,
) -> Result<Packing<F>, PackError> {
    let config = PackConfig::new(center, inner_radius, target_count)
        .with_initial_radius(initial_radius);
    Packer::new(config)?.pack(&mut rand::thread_rng())
}

/// Like [`pack`], with a seeded generator for reproducible results.
pub fn pack_with_seed<F: Float>(
    center: Point2<F>,
    initial_radius: F,
    inner_radius: F,
    target_count: usize,
    seed: u64,
) -> Result<Packing<F>, PackError> {
    let config = PackConfig::new(center, inner_radius, target_count)
        .with_initial_radius(initial_radius);
    Packer::new(config)?.pack(&mut StdRng::seed_from_u64(seed))
}

/// A validated packing configuration that can be run repeatedly.
#[derive(Debug, Clone)]
pub struct Packer<F> {
    config: PackConfig<F>,
}

impl<F: Float> Packer<F> {
    /// Creates a packer, rejecting unusable parameters up front.
    pub fn new(config: PackConfig<F>) -> Result<Self, PackError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration this packer runs with.
    #[inline]
    pub fn config(&self) -> &PackConfig<F> {
        &self.config
    }

    /// Runs attempts until one places every circle.
    ///
    /// The returned packing always satisfies [`Packing::is_valid`] and holds
    /// `target_count` random circles, preceded by the decoration pattern when
    /// enabled.
    pub fn pack<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Packing<F>, PackError> {
        let cfg = &self.config;
        let mut outer = OuterCircle::new(cfg.center, cfg.initial_radius, cfg.inner_radius);

        let mut attempts = 0;
        let mut failures = 0;
        let mut growths = 0;

        loop {
            if cfg.max_attempts.is_some_and(|max| attempts >= max) {
                debug!(attempts, "attempt limit reached");
                return Err(PackError::AttemptLimitReached { attempts });
            }
            attempts += 1;

            outer.reset();
            match self.fill(&mut outer, rng) {
                Ok(()) => {
                    debug!(
                        attempts,
                        growths,
                        placed = outer.inner_circles().len(),
                        "packing accepted"
                    );
                    return Ok(outer.into_packing(attempts, growths));
                }
                Err(PackError::PlacementExhausted) => {
                    failures += 1;
                    debug!(
                        attempt = attempts,
                        placed = outer.inner_circles().len(),
                        "attempt ran out of room"
                    );
                }
                Err(err) => return Err(err),
            }

            if failures >= cfg.failures_before_growth {
                failures = 0;
                growths += 1;
                outer.grow(cfg.growth_step);
                debug!(
                    radius = outer.radius().to_f64().unwrap_or(f64::NAN),
                    growths,
                    "outer circle grown"
                );
            }
        }
    }

    /// One attempt on a freshly reset outer circle.
    fn fill<R: Rng + ?Sized>(
        &self,
        outer: &mut OuterCircle<F>,
        rng: &mut R,
    ) -> Result<(), PackError> {
        if self.config.decorations {
            outer.place_decorations()?;
        }
        for _ in 0..self.config.target_count {
            outer.add_random_circle(rng)?;
        }
        Ok(())
    }
}
