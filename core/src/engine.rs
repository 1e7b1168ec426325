use alloc::vec::Vec;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    Win,
    Loss,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundState {
    /// Waiting for a guess.
    Active,
    /// A wrong guess was made and tries remain, waiting for the player to continue.
    Paused,
    Resolved(Resolution),
}

impl RoundState {
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }

    pub const fn is_paused(self) -> bool {
        matches!(self, Self::Paused)
    }

    pub const fn resolution(self) -> Option<Resolution> {
        match self {
            Self::Resolved(resolution) => Some(resolution),
            _ => None,
        }
    }
}

impl Default for RoundState {
    fn default() -> Self {
        Self::Active
    }
}

/// One play cycle, from dealing the answer to winning or running out of tries.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Round {
    answer: Card,
    config: RoundConfig,
    tries_remaining: Tries,
    state: RoundState,
    layout: TileLayout,
    rejected: Vec<Card>,
}

impl Round {
    pub fn new(answer: Card, config: RoundConfig, layout: TileLayout) -> Self {
        Self {
            answer,
            config,
            tries_remaining: config.max_tries,
            state: Default::default(),
            layout,
            rejected: Vec::new(),
        }
    }

    /// The hidden card; reading it never changes the round.
    pub fn answer(&self) -> Card {
        self.answer
    }

    pub fn config(&self) -> RoundConfig {
        self.config
    }

    pub fn tries_remaining(&self) -> Tries {
        self.tries_remaining
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn layout(&self) -> &TileLayout {
        &self.layout
    }

    /// Wrong guesses so far, oldest first.
    pub fn rejected(&self) -> &[Card] {
        &self.rejected
    }

    pub fn is_rejected(&self, card: Card) -> bool {
        self.rejected.contains(&card)
    }

    pub fn can_guess(&self, card: Card) -> bool {
        self.state.is_active() && !self.is_rejected(card)
    }

    pub fn guess(&mut self, candidate: Card) -> GuessOutcome {
        use GuessOutcome::*;

        if !self.can_guess(candidate) {
            log::trace!("guess {:?} ignored in state {:?}", candidate, self.state);
            return Ignored;
        }

        if candidate == self.answer {
            self.state = RoundState::Resolved(Resolution::Win);
            log::debug!("round won with {} tries left", self.tries_remaining);
            return Won;
        }

        self.rejected.push(candidate);
        self.tries_remaining = self.tries_remaining.saturating_sub(1);

        if self.tries_remaining == 0 {
            self.state = RoundState::Resolved(Resolution::Loss);
            log::debug!("round lost, answer was {:?}", self.answer);
            Lost
        } else {
            self.state = RoundState::Paused;
            log::debug!("wrong guess, {} tries left", self.tries_remaining);
            Retry {
                tries_left: self.tries_remaining,
            }
        }
    }

    pub fn resume(&mut self) -> ContinueOutcome {
        if self.state.is_paused() {
            self.state = RoundState::Active;
            ContinueOutcome::Resumed
        } else {
            ContinueOutcome::NoChange
        }
    }
}

/// Deals rounds and routes player actions to the current one.
#[derive(Clone, Debug)]
pub struct RoundController {
    rng: SmallRng,
    round: Round,
}

impl RoundController {
    /// Creates a controller and immediately deals its first round.
    pub fn new(seed: u64, config: RoundConfig) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let round = Self::deal(&mut rng, config);
        Self { rng, round }
    }

    fn deal(rng: &mut SmallRng, config: RoundConfig) -> Round {
        let answer = *Card::CATALOG
            .choose(rng)
            .expect("catalog should not be empty");
        let layout = RandomLayoutGenerator::new(rng.random()).generate();
        log::debug!("new round with {} tries", config.max_tries);
        Round::new(answer, config, layout)
    }

    /// Discards the current round and deals a new one.
    pub fn start_round(&mut self, config: RoundConfig) {
        self.round = Self::deal(&mut self.rng, config);
    }

    pub fn submit_guess(&mut self, candidate: Card) -> GuessOutcome {
        self.round.guess(candidate)
    }

    pub fn continue_round(&mut self) -> ContinueOutcome {
        self.round.resume()
    }

    pub fn reveal(&self) -> Card {
        self.round.answer()
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn state(&self) -> RoundState {
        self.round.state()
    }

    pub fn tries_remaining(&self) -> Tries {
        self.round.tries_remaining()
    }
}
