use std::any::Any;

use ahash::{
    HashMap,
    HashMapExt,
};
use dexgen_prng::{
    PseudoRandomNumberGenerator,
    RealPseudoRandomNumberGenerator,
};

/// Seeded generator whose draws can be overridden by position.
///
/// Overridden draws still advance the seeded sequence, so the draws around them are the ones the
/// same seed would produce on its own.
pub struct ForcedDrawPrng {
    draws_taken: usize,
    forced: HashMap<usize, u64>,
    inner: RealPseudoRandomNumberGenerator,
}

impl ForcedDrawPrng {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            draws_taken: 0,
            forced: HashMap::new(),
            inner: RealPseudoRandomNumberGenerator::new(seed),
        }
    }

    /// Number of values drawn so far.
    pub fn draws_taken(&self) -> usize {
        self.draws_taken
    }

    /// Forces draws to fixed values. Positions are 1-based.
    pub fn force_draws<I>(&mut self, draws: I)
    where
        I: IntoIterator<Item = (usize, u64)>,
    {
        self.forced.extend(draws);
    }
}

impl PseudoRandomNumberGenerator for ForcedDrawPrng {
    fn initial_seed(&self) -> u64 {
        self.inner.initial_seed()
    }

    fn next(&mut self) -> u64 {
        let seeded = self.inner.next();
        self.draws_taken += 1;
        self.forced.remove(&self.draws_taken).unwrap_or(seeded)
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Recovers a [`ForcedDrawPrng`] that was passed along as a trait object.
pub fn as_forced_draw_prng(
    prng: &mut dyn PseudoRandomNumberGenerator,
) -> Option<&mut ForcedDrawPrng> {
    prng.as_any_mut().downcast_mut::<ForcedDrawPrng>()
}

#[cfg(test)]
mod rng_test {
    use dexgen_prng::PseudoRandomNumberGenerator;

    use crate::{
        ForcedDrawPrng,
        as_forced_draw_prng,
    };

    #[test]
    fn forced_draw_keeps_seeded_neighbours() {
        let mut prng = ForcedDrawPrng::new(Some(42));
        prng.force_draws([(2, 0)]);
        let got = (0..3).map(|_| prng.next()).collect::<Vec<_>>();
        assert_eq!(got, vec![1351016099, 0, 1437834849]);
        assert_eq!(
            as_forced_draw_prng(&mut prng).map(|prng| prng.draws_taken()),
            Some(3)
        );
    }
}
