use std::ops::RangeInclusive;

use rand::Rng;

pub const DRAW_RANGE: RangeInclusive<u8> = 0..=9;
pub const ADVANCE_THRESHOLD: u8 = 4;

/// Source of the numbers a car draws each round.
pub trait NumberGenerator {
    /// Returns a value within [`DRAW_RANGE`].
    fn generate(&mut self) -> u8;
}

/// Draws uniformly from [`DRAW_RANGE`] using any `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomNumberGenerator<R> {
    rng: R,
}

impl<R: Rng> RandomNumberGenerator<R> {
    #[must_use]
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> NumberGenerator for RandomNumberGenerator<R> {
    fn generate(&mut self) -> u8 {
        self.rng.gen_range(DRAW_RANGE)
    }
}

/// Decides whether a car moves forward one step in a round.
#[derive(Debug, Clone)]
pub struct AdvancementPolicy<G> {
    generator: G,
}

impl<G: NumberGenerator> AdvancementPolicy<G> {
    #[must_use]
    pub const fn new(generator: G) -> Self {
        Self { generator }
    }

    #[must_use]
    pub fn should_advance(&mut self) -> bool {
        self.generator.generate() >= ADVANCE_THRESHOLD
    }
}

/// Replays a fixed list of draws, in order.
#[cfg(test)]
#[derive(Debug, Clone)]
pub(crate) struct ScriptedNumbers {
    draws: std::collections::VecDeque<u8>,
}

#[cfg(test)]
impl ScriptedNumbers {
    pub(crate) fn new(draws: impl IntoIterator<Item = u8>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
        }
    }
}

#[cfg(test)]
impl NumberGenerator for ScriptedNumbers {
    fn generate(&mut self) -> u8 {
        self.draws.pop_front().expect("scripted draws exhausted")
    }
}
