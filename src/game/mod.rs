//! Game engine and state management.

use log::warn;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::EmptyDeckError;
use crate::hand::Hand;

mod actions;
mod dealer;
pub mod state;

pub use actions::Decision;
pub use dealer::STAY_LIMIT;
pub use state::GameState;

/// A single game of blackjack between one player and the dealer.
///
/// The game owns the deck and both hands and advances through
/// [`GameState`] one step at a time:
///
/// ```
/// use twentyone::{Game, GameState};
///
/// let mut game = Game::new(42);
/// game.deal().unwrap();
/// game.stand().unwrap();
/// game.dealer_play().unwrap();
/// let result = game.showdown().unwrap();
/// assert_eq!(game.state(), GameState::Done);
/// assert_eq!(result.player_value, game.player_hand().value());
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    /// Cards left to draw.
    deck: Deck,
    /// Current game state.
    state: GameState,
    /// Player's hand.
    player_hand: Hand,
    /// Dealer's hand; the second card is the hole card.
    dealer_hand: Hand,
    /// Whether the player's turn ended in a bust.
    player_busted: bool,
}

impl Game {
    /// Creates a new game with a deck shuffled from the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_deck(Deck::new(seed))
    }

    /// Creates a new game that draws from the given deck.
    #[must_use]
    pub const fn with_deck(deck: Deck) -> Self {
        Self {
            deck,
            state: GameState::InitialDeal,
            player_hand: Hand::new(),
            dealer_hand: Hand::new(),
            player_busted: false,
        }
    }

    /// Draws the next card, ending the game if the deck is empty.
    fn draw(&mut self) -> Result<Card, EmptyDeckError> {
        self.deck.draw().inspect_err(|err| {
            warn!("{err} in {:?}, aborting game", self.state);
        })
    }

    /// Marks the game as over after a fatal error.
    const fn abort(&mut self) {
        self.state = GameState::Done;
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player_hand
    }

    /// Returns the dealer's hand, including the hole card.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer_hand
    }

    /// Returns whether the player busted.
    #[must_use]
    pub const fn player_busted(&self) -> bool {
        self.player_busted
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }
}
