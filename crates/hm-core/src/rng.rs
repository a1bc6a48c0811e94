//! Deterministic simulation-level RNG.
//!
//! The only randomness in the simulation is world set-up (spawn jitter
//! around a town centre).  A single seeded `SmallRng` is enough; the same
//! seed always reproduces the same spawn positions.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Seeded RNG for single-threaded set-up code.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` with a different seed offset.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Uniform offset in `[-half_extent, half_extent)`; zero when
    /// `half_extent` is not positive.
    #[inline]
    pub fn jitter(&mut self, half_extent: f32) -> f32 {
        if half_extent > 0.0 {
            self.0.gen_range(-half_extent..half_extent)
        } else {
            0.0
        }
    }
}
