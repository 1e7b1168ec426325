#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use card::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use tile::*;
pub use types::*;

mod card;
mod engine;
mod error;
mod generator;
mod tile;
mod types;

/// Per-round settings chosen by the player before dealing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundConfig {
    pub max_tries: Tries,
}

impl RoundConfig {
    /// With nine cards at most eight wrong guesses can ever happen, so a ninth try is the most that is usable.
    pub const MAX_TRIES: Tries = Card::COUNT as Tries;

    pub const fn new_unchecked(max_tries: Tries) -> Self {
        Self { max_tries }
    }

    pub const fn single_guess() -> Self {
        Self::new_unchecked(1)
    }

    pub fn new(max_tries: Tries) -> Self {
        Self::new_unchecked(max_tries.clamp(1, Self::MAX_TRIES))
    }

    /// Reads the try count out of free-form text input.
    ///
    /// Only the leading integer is considered (so `"4 tries"` is 4). Anything that does not start with a positive
    /// integer falls back to a single guess.
    pub fn from_input(input: &str) -> Self {
        let trimmed = input.trim_start();
        let (negative, unsigned) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };
        let end = unsigned
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(unsigned.len());
        let digits = &unsigned[..end];

        if negative || digits.is_empty() {
            log::warn!("Invalid try count {:?}, fallback to single guess", input);
            return Self::single_guess();
        }

        // only overflows on absurdly long inputs, which still mean "as many as possible"
        let value = digits.parse::<u64>().unwrap_or(u64::MAX);
        if value == 0 {
            log::warn!("Try count must be positive, fallback to single guess");
            return Self::single_guess();
        }

        Self::new(value.min(u64::from(Tries::MAX)) as Tries)
    }
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self::single_guess()
    }
}

/// Outcome of guessing a card
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The round was not accepting guesses, or the card was already rejected.
    Ignored,
    Retry { tries_left: Tries },
    Won,
    Lost,
}

impl GuessOutcome {
    /// Whether this outcome could have caused an update to the round
    pub const fn has_update(self) -> bool {
        use GuessOutcome::*;
        match self {
            Ignored => false,
            Retry { .. } => true,
            Won => true,
            Lost => true,
        }
    }
}

/// Outcome of asking a paused round to continue
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ContinueOutcome {
    NoChange,
    Resumed,
}

impl ContinueOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Resumed => true,
        }
    }
}
