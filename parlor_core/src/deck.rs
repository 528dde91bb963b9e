use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use crate::card::{Card, RankDescriptor, Suit};

pub const DECK_SIZE: usize = 52;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DealError {
    #[error("cannot deal {requested} cards, only {remaining} left in the deck")]
    Underflow { requested: usize, remaining: usize },
}

/// Whether the deck has been shuffled since it was built
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckState {
    Fresh,
    Shuffled,
}

#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    state: DeckState,
    dealt: usize,
}

impl Deck {
    /// Create a standard 52-card deck in suit-major order, unshuffled
    pub fn standard() -> Self {
        let ranks = RankDescriptor::table();
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for &suit in &Suit::ALL {
            for &rank in &ranks {
                cards.push(Card::new(suit, rank));
            }
        }
        Self {
            cards,
            state: DeckState::Fresh,
            dealt: 0,
        }
    }

    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::standard();
        deck.shuffle(rng);
        deck
    }

    pub fn shuffled_with_seed(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::shuffled(&mut rng)
    }

    /// Shuffle the remaining cards in place
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
        self.state = DeckState::Shuffled;
        log::debug!("shuffled {} cards", self.cards.len());
    }

    /// Deal `number` cards off the top, in the order they come off.
    /// Fails without touching the deck if fewer than `number` remain.
    pub fn deal(&mut self, number: usize) -> Result<Vec<Card>, DealError> {
        let remaining = self.cards.len();
        if number > remaining {
            log::warn!("refusing to deal {} cards from {}", number, remaining);
            return Err(DealError::Underflow {
                requested: number,
                remaining,
            });
        }
        let hand: Vec<Card> = self.cards.drain(remaining - number..).rev().collect();
        self.dealt += number;
        log::debug!("dealt {} cards, {} left", number, self.cards.len());
        Ok(hand)
    }

    /// Cards still in the deck
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Cards removed by dealing so far
    pub fn dealt(&self) -> usize {
        self.dealt
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn state(&self) -> DeckState {
        self.state
    }

    /// Remaining cards, bottom first; the last element is dealt next
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}
