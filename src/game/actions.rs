use log::{debug, trace};

use crate::card::Card;
use crate::error::{ActionError, DealError, EmptyDeckError};

use super::{Game, GameState};

/// Cards needed for the initial deal.
const INITIAL_DEAL_CARDS: usize = 4;

/// A player's choice on their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Draw another card.
    Hit,
    /// Keep the current hand.
    Stand,
}

impl Decision {
    /// Parses raw player input.
    ///
    /// Matching is case-insensitive and looks only at the first character,
    /// so any input starting with `s` stands and any input starting with `h`
    /// hits. Everything else, including empty input, is `None`.
    ///
    /// ```
    /// use twentyone::Decision;
    ///
    /// assert_eq!(Decision::parse("Hit"), Some(Decision::Hit));
    /// assert_eq!(Decision::parse("spaghetti"), Some(Decision::Stand));
    /// assert_eq!(Decision::parse("foo"), None);
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let first = input.chars().next()?.to_lowercase().next()?;
        let decision = match first {
            's' => Some(Self::Stand),
            'h' => Some(Self::Hit),
            _ => None,
        };
        trace!("parsed {input:?} as {decision:?}");
        decision
    }
}

impl Game {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.state != GameState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }
        Ok(())
    }

    /// Deals two cards to each hand, alternating player then dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the initial deal state, or if
    /// the deck holds fewer than four cards. In the latter case nothing is
    /// drawn and the game ends.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.state != GameState::InitialDeal {
            return Err(DealError::InvalidState);
        }

        if self.deck.len() < INITIAL_DEAL_CARDS {
            self.abort();
            return Err(EmptyDeckError.into());
        }

        for _ in 0..2 {
            let card = self.draw()?;
            self.player_hand.add_card(card);
            let card = self.draw()?;
            self.dealer_hand.add_card(card);
        }

        debug!(
            "dealt player {:?} ({}), dealer up card {:?}",
            self.player_hand.cards(),
            self.player_hand.value(),
            self.dealer_hand.up_card()
        );

        self.state = GameState::PlayerTurn;
        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// If the new card busts the hand the player's turn ends.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state or the deck
    /// is empty. An empty deck ends the game.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        let card = match self.draw() {
            Ok(card) => card,
            Err(err) => {
                self.abort();
                return Err(err.into());
            }
        };
        self.player_hand.add_card(card);
        debug!("player hits {card}, total {}", self.player_hand.value());

        if self.player_hand.is_busted() {
            debug!("player busts");
            self.player_busted = true;
            self.state = GameState::DealerTurn;
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;

        debug!("player stands on {}", self.player_hand.value());
        self.state = GameState::DealerTurn;
        Ok(())
    }

    /// Applies a parsed [`Decision`].
    ///
    /// Returns the drawn card when the decision was a hit.
    ///
    /// # Errors
    ///
    /// See [`Game::hit`] and [`Game::stand`].
    pub fn act(&mut self, decision: Decision) -> Result<Option<Card>, ActionError> {
        match decision {
            Decision::Hit => self.hit().map(Some),
            Decision::Stand => self.stand().map(|()| None),
        }
    }
}
