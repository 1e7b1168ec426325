use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::*;

/// One of the nine guessable cards.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Card {
    AceOfSpades,
    KingOfHearts,
    QueenOfDiamonds,
    JackOfClubs,
    TenOfHearts,
    SevenOfSpades,
    FiveOfDiamonds,
    ThreeOfClubs,
    Joker,
}

impl Card {
    pub const COUNT: usize = 9;

    /// Every card in the game, in catalog order.
    pub const CATALOG: [Card; Card::COUNT] = [
        Card::AceOfSpades,
        Card::KingOfHearts,
        Card::QueenOfDiamonds,
        Card::JackOfClubs,
        Card::TenOfHearts,
        Card::SevenOfSpades,
        Card::FiveOfDiamonds,
        Card::ThreeOfClubs,
        Card::Joker,
    ];

    /// Stable identifier, used for image file names and tile alt text.
    pub const fn slug(self) -> &'static str {
        use Card::*;
        match self {
            AceOfSpades => "ace-of-spades",
            KingOfHearts => "king-of-hearts",
            QueenOfDiamonds => "queen-of-diamonds",
            JackOfClubs => "jack-of-clubs",
            TenOfHearts => "ten-of-hearts",
            SevenOfSpades => "seven-of-spades",
            FiveOfDiamonds => "five-of-diamonds",
            ThreeOfClubs => "three-of-clubs",
            Joker => "joker",
        }
    }

    pub const fn name(self) -> &'static str {
        use Card::*;
        match self {
            AceOfSpades => "Ace of Spades",
            KingOfHearts => "King of Hearts",
            QueenOfDiamonds => "Queen of Diamonds",
            JackOfClubs => "Jack of Clubs",
            TenOfHearts => "Ten of Hearts",
            SevenOfSpades => "Seven of Spades",
            FiveOfDiamonds => "Five of Diamonds",
            ThreeOfClubs => "Three of Clubs",
            Joker => "Joker",
        }
    }

    pub fn from_slug(slug: &str) -> Result<Self> {
        Self::CATALOG
            .into_iter()
            .find(|card| card.slug() == slug)
            .ok_or(GameError::UnknownCard)
    }
}

impl FromStr for Card {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_slug(s)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
