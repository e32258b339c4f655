//! The shuffled deck the game draws from.

extern crate alloc;

use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::EmptyDeckError;

/// A single 52-card deck, drawn from the front without replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Remaining cards, stored back to front so the next card is last.
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a deck shuffled with a seeded `ChaCha8` generator.
    ///
    /// The same seed always produces the same draw order.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::Deck;
    ///
    /// let mut a = Deck::new(7);
    /// let mut b = Deck::new(7);
    /// assert_eq!(a.draw(), b.draw());
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::with_rng(&mut rng)
    }

    /// Creates a deck shuffled with the given random source.
    pub fn with_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = standard_cards();
        cards.shuffle(rng);
        Self { cards }
    }

    /// Creates a stacked deck that deals `draws` in the given order.
    ///
    /// No uniqueness or size check is made, so this can model a partly used
    /// deck or a scripted scenario.
    #[must_use]
    pub fn from_draws(mut draws: Vec<Card>) -> Self {
        draws.reverse();
        Self { cards: draws }
    }

    /// Removes and returns the next card.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyDeckError`] when no cards remain.
    pub fn draw(&mut self) -> Result<Card, EmptyDeckError> {
        self.cards.pop().ok_or(EmptyDeckError)
    }

    /// Returns the number of cards left to draw.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck has been drawn out.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Builds one of every (suit, rank) pair in suit-major order.
fn standard_cards() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            cards.push(Card::new(suit, rank));
        }
    }
    cards
}
