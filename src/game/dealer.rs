extern crate alloc;

use alloc::vec::Vec;

use log::debug;

use crate::card::Card;
use crate::error::ShowdownError;
use crate::result::{GameResult, Outcome};

use super::{Game, GameState};

/// The dealer hits at or below this value and stands above it.
pub const STAY_LIMIT: u8 = 16;

impl Game {
    /// Dealer plays their hand.
    ///
    /// If the player busted the dealer's hand is left as dealt. Otherwise the
    /// dealer draws while their total is at most [`STAY_LIMIT`].
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealer turn state or the deck
    /// is empty while the dealer must draw. An empty deck ends the game.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, ShowdownError> {
        if self.state != GameState::DealerTurn {
            return Err(ShowdownError::InvalidState);
        }

        let mut drawn_cards = Vec::new();

        if !self.player_busted {
            while self.dealer_hand.value() <= STAY_LIMIT {
                let card = match self.draw() {
                    Ok(card) => card,
                    Err(err) => {
                        self.abort();
                        return Err(err.into());
                    }
                };
                self.dealer_hand.add_card(card);
                drawn_cards.push(card);
                debug!("dealer draws {card}, total {}", self.dealer_hand.value());
            }
            debug!("dealer stands on {}", self.dealer_hand.value());
        }

        self.state = GameState::Settlement;
        Ok(drawn_cards)
    }

    /// Settles the game by comparing the final hands.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in settlement state.
    pub fn showdown(&mut self) -> Result<GameResult, ShowdownError> {
        if self.state != GameState::Settlement {
            return Err(ShowdownError::InvalidState);
        }

        let player_value = self.player_hand.value();
        let dealer_value = self.dealer_hand.value();
        let outcome = Outcome::determine(self.player_busted, player_value, dealer_value);
        debug!("settled player {player_value} vs dealer {dealer_value}: {outcome:?}");

        self.state = GameState::Done;

        Ok(GameResult {
            outcome,
            player_value,
            dealer_value,
            player_busted: self.player_busted,
            dealer_busted: self.dealer_hand.is_busted(),
        })
    }
}
