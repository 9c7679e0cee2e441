use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::types::CardKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub kind: CardKind,
    /// Step count; meaningful only for `Forward` and `Backward`.
    pub value: u8,
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            CardKind::Forward | CardKind::Backward => write!(f, "{} {}", self.kind, self.value),
            _ => write!(f, "{}", self.kind),
        }
    }
}

/// Ordered draw pile with a cursor. The card order only changes on a wrap of
/// the cursor, and only when `shuffle_on_wrap` is set; the permutation comes
/// from the caller-supplied RNG so runs are reproducible.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    cursor: usize,
    shuffle_on_wrap: bool,
}

impl Deck {
    pub fn new(cards: Vec<Card>, shuffle_on_wrap: bool) -> Result<Self, String> {
        if cards.is_empty() {
            return Err("deck must contain at least one card".to_string());
        }
        Ok(Self {
            cards,
            cursor: 0,
            shuffle_on_wrap,
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Peek at the next card to be revealed without advancing.
    #[inline]
    pub fn current(&self) -> Card {
        self.cards[self.cursor]
    }

    #[inline]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Move the cursor forward one card, wrapping modulo the deck size.
    /// On wrap, reshuffles in place iff the deck was built with the flag set.
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cursor = (self.cursor + 1) % self.cards.len();
        if self.cursor == 0 && self.shuffle_on_wrap {
            self.cards.shuffle(rng);
        }
    }
}
