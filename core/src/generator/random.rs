use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::*;

/// Picks every label in `1..=9` with equal probability, independently per round.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomTargetGenerator<R = SmallRng> {
    rng: R,
}

impl RandomTargetGenerator<SmallRng> {
    pub fn new(seed: u64) -> Self {
        Self::from_rng(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomTargetGenerator<R> {
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> TargetGenerator for RandomTargetGenerator<R> {
    fn generate(&mut self) -> Label {
        let number = self.rng.random_range(Label::MIN.get()..=Label::MAX.get());
        Label::new_unchecked(number)
    }
}
