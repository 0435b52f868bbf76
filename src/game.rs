use tracing::{debug, info};

use crate::error::{RaceError, Result};
use crate::log::{RaceResult, RoundSnapshot};
use crate::policy::{AdvancementPolicy, NumberGenerator};
use crate::registry::RacerRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    NotStarted,
    Running,
    Finished,
}

/// Plays single rounds: every car, in registration order, draws once and
/// moves forward one step if the policy allows it.
#[derive(Debug)]
pub struct RoundEngine<G> {
    policy: AdvancementPolicy<G>,
}

impl<G: NumberGenerator> RoundEngine<G> {
    #[must_use]
    pub const fn new(policy: AdvancementPolicy<G>) -> Self {
        Self { policy }
    }

    #[must_use]
    pub fn play_round(&mut self, registry: &mut RacerRegistry) -> RoundSnapshot {
        for car in registry.iter_mut() {
            if self.policy.should_advance() {
                car.advance();
            }
        }

        RoundSnapshot::capture(registry)
    }
}

/// One race over a fixed set of cars. A finished game cannot be restarted;
/// build a new one with a new registry instead.
#[derive(Debug)]
pub struct Game<G> {
    state: State,
    registry: RacerRegistry,
    engine: RoundEngine<G>,
}

impl<G: NumberGenerator> Game<G> {
    #[must_use]
    pub const fn new(registry: RacerRegistry, engine: RoundEngine<G>) -> Self {
        Self {
            state: State::NotStarted,
            registry,
            engine,
        }
    }

    #[must_use]
    pub const fn state(&self) -> State {
        self.state
    }

    #[must_use]
    pub const fn registry(&self) -> &RacerRegistry {
        &self.registry
    }

    /// Plays `turns` rounds and returns every snapshot plus the winners.
    ///
    /// # Errors
    ///
    /// Returns [`RaceError::RaceAlreadyStarted`] if this game already ran,
    /// [`RaceError::InvalidTurnCount`] for zero turns and
    /// [`RaceError::NoRacers`] for an empty registry.
    pub fn race(&mut self, turns: u32) -> Result<RaceResult> {
        if self.state != State::NotStarted {
            return Err(RaceError::RaceAlreadyStarted);
        }
        if turns == 0 {
            return Err(RaceError::InvalidTurnCount(turns));
        }
        if self.registry.is_empty() {
            return Err(RaceError::NoRacers);
        }

        self.state = State::Running;
        let mut snapshots = Vec::new();
        for round in 1..=turns {
            let snapshot = self.engine.play_round(&mut self.registry);
            debug!(round, "round played");
            snapshots.push(snapshot);
        }
        self.state = State::Finished;

        let winners = snapshots
            .last()
            .map(RoundSnapshot::leaders)
            .unwrap_or_default();
        info!(rounds = turns, winners = ?winners, "race finished");

        Ok(RaceResult { snapshots, winners })
    }
}
