//! Card sources for the engine.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, standard_cards};

/// A source of cards the engine draws from.
///
/// [`Deck`] is the real implementation. The trait exists so a caller can feed
/// the engine a scripted order, e.g. to replay a round.
pub trait Shoe {
    /// Restores every card and randomizes the order.
    fn shuffle(&mut self);

    /// Draws the next card. Never fails; an exhausted shoe refills itself.
    fn draw(&mut self) -> Card;
}

/// A single 52-card deck with a draw cursor.
///
/// Between shuffles no card is drawn twice. Drawing from an exhausted deck
/// reshuffles all 52 cards first, so a long round may see a card again.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: [Card; DECK_SIZE],
    top: usize,
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a shuffled deck with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_table::{Deck, DECK_SIZE};
    ///
    /// let deck = Deck::new(7);
    /// assert_eq!(deck.remaining(), DECK_SIZE);
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut deck = Self {
            cards: standard_cards(),
            top: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        deck.shuffle();
        deck
    }

    /// Number of cards left before the next automatic reshuffle.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        DECK_SIZE - self.top
    }

    /// Resets the cursor and shuffles with Fisher-Yates.
    pub fn shuffle(&mut self) {
        self.top = 0;
        for i in (1..self.cards.len()).rev() {
            let j = self.rng.random_range(0..=i);
            self.cards.swap(i, j);
        }
        tracing::trace!("deck shuffled");
    }

    /// Draws the top card, reshuffling first if the deck is exhausted.
    pub fn draw(&mut self) -> Card {
        if self.top >= self.cards.len() {
            tracing::debug!("deck exhausted, reshuffling mid-round");
            self.shuffle();
        }
        let card = self.cards[self.top];
        self.top += 1;
        card
    }
}

impl Shoe for Deck {
    fn shuffle(&mut self) {
        Self::shuffle(self);
    }

    fn draw(&mut self) -> Card {
        Self::draw(self)
    }
}
