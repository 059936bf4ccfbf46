//! Random index source for password construction and decoy frames.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Uniform draws over `[0, n)`.
pub trait Entropy {
    /// Panics if `n == 0`.
    fn below(&mut self, n: usize) -> usize;

    /// Pick one byte from a non-empty alphabet.
    fn pick(&mut self, alphabet: &[u8]) -> u8 {
        alphabet[self.below(alphabet.len())]
    }
}

// gen_range rejection-samples, so there is no modulo bias for any n.
impl<R: RngCore> Entropy for R {
    #[inline]
    fn below(&mut self, n: usize) -> usize {
        self.gen_range(0..n)
    }
}

/// OS-seeded generator. `Send`, so it can move into an animation task.
pub fn system() -> StdRng {
    StdRng::from_entropy()
}
