use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::Result;
use crate::matrix::SquareMatrix;

/// Seed used when the caller does not ask for a specific one, so repeated
/// benchmark runs see the same operands.
pub const DEFAULT_SEED: u64 = 0x5eed;

impl SquareMatrix {
    /// Fill every entry with a uniform value in `[0, 1)` drawn from `rng`.
    pub fn populate_random<R: Rng>(&mut self, rng: &mut R) {
        for v in self.as_mut_slice() {
            *v = rng.gen::<f64>();
        }
    }

    /// Allocate a `size x size` matrix populated from a `StdRng` seeded
    /// with `seed`.
    ///
    /// # Errors
    /// Fails like [`SquareMatrix::zeros`] when the buffer cannot be allocated.
    pub fn random(size: usize, seed: u64) -> Result<Self> {
        let mut m = SquareMatrix::zeros(size)?;
        let mut rng = StdRng::seed_from_u64(seed);
        m.populate_random(&mut rng);
        Ok(m)
    }
}

/// Populate both operands concurrently.
///
/// Each operand draws from its own generator (`seed` for `a`, `seed + 1`
/// for `b`), so the result does not depend on which side finishes first.
pub fn populate_pair(a: &mut SquareMatrix, b: &mut SquareMatrix, seed: u64) {
    rayon::join(
        || a.populate_random(&mut StdRng::seed_from_u64(seed)),
        || b.populate_random(&mut StdRng::seed_from_u64(seed.wrapping_add(1))),
    );
}
