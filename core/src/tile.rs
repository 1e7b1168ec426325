use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Placement of the whole catalog on the grid for one round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileLayout {
    cards: Vec<Card>,
}

impl TileLayout {
    pub(crate) fn from_cards_unchecked(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Builds a layout from cards listed in slot order, which must be a permutation of [`Card::CATALOG`].
    pub fn from_cards(cards: Vec<Card>) -> Result<Self> {
        let is_permutation = cards.len() == Card::COUNT
            && Card::CATALOG
                .iter()
                .all(|card| cards.iter().filter(|&c| c == card).count() == 1);
        if is_permutation {
            Ok(Self::from_cards_unchecked(cards))
        } else {
            Err(GameError::InvalidLayout)
        }
    }

    /// Catalog order, mostly useful for tests.
    pub fn ordered() -> Self {
        Self::from_cards_unchecked(Card::CATALOG.to_vec())
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Tiles grouped by grid row, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Card]> + '_ {
        self.cards.chunks(GRID_SIDE)
    }
}
