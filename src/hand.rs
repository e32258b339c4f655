//! Hands and hand-value rules.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Totals above this value are bust.
pub const BUST_LIMIT: u8 = 21;

/// Extra value an Ace gets when counted soft.
const SOFT_ACE_BONUS: u8 = 10;

/// Computes the blackjack value of `cards`.
///
/// Every card contributes its rank value (Ace = 1). If the hand holds at
/// least one Ace and the raw total is below 11, a single Ace is counted as
/// 11. Only one Ace is ever promoted, however many the hand holds.
///
/// ```
/// use twentyone::{Card, Rank, Suit, hand_value};
///
/// let cards = [Card::new(Suit::Spades, Rank::Ace), Card::new(Suit::Spades, Rank::Five)];
/// assert_eq!(hand_value(&cards), 16);
/// ```
#[must_use]
pub fn hand_value(cards: &[Card]) -> u8 {
    let raw = cards
        .iter()
        .fold(0u8, |total, card| total.saturating_add(card.rank_value()));

    if has_ace(cards) && raw < 11 {
        raw + SOFT_ACE_BONUS
    } else {
        raw
    }
}

/// Returns whether `cards` total more than [`BUST_LIMIT`].
#[must_use]
pub fn is_busted(cards: &[Card]) -> bool {
    hand_value(cards) > BUST_LIMIT
}

/// Returns whether any card in `cards` is an Ace.
#[must_use]
pub fn has_ace(cards: &[Card]) -> bool {
    cards.iter().any(Card::is_ace)
}

/// The cards held by the player or the dealer for one game.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the order they were dealt.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the first card dealt, which is the dealer's face-up card.
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Calculates the value of the hand. See [`hand_value`].
    #[must_use]
    pub fn value(&self) -> u8 {
        hand_value(&self.cards)
    }

    /// Returns whether the hand is bust (over 21).
    #[must_use]
    pub fn is_busted(&self) -> bool {
        is_busted(&self.cards)
    }

    /// Returns whether the hand holds an Ace.
    #[must_use]
    pub fn has_ace(&self) -> bool {
        has_ace(&self.cards)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}
