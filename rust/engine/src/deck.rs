use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};

/// The card supply. Construction yields a full, shuffled 52-card deck; once
/// the deck runs dry it replaces itself with a freshly shuffled full deck,
/// so dealing never fails, even mid-phase.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        let mut deck = Self {
            cards: full_deck(),
            position: 0,
            rng: ChaCha20Rng::seed_from_u64(seed),
        };
        deck.reshuffle();
        deck
    }

    /// A deck with a known top-down order, for reproducing exact phase
    /// sequences in tests. Falls back to normal reshuffle behavior once the
    /// stacked cards are used up.
    pub fn stacked(cards: Vec<Card>, seed: u64) -> Self {
        Self {
            cards,
            position: 0,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    fn reshuffle(&mut self) {
        self.cards = full_deck();
        self.cards.shuffle(&mut self.rng);
        self.position = 0;
    }

    /// Deal the top card, replacing the exhausted deck first if necessary.
    pub fn deal(&mut self) -> Card {
        if self.position >= self.cards.len() {
            self.reshuffle();
        }
        let c = self.cards[self.position];
        self.position += 1;
        c
    }

    /// Deal and discard the top card.
    pub fn burn(&mut self) {
        let _ = self.deal();
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }
}
