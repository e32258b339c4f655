//! Drives a full game against injected input and display collaborators.

extern crate alloc;

use alloc::string::String;

use log::debug;

use crate::error::GameError;
use crate::game::{Decision, Game, GameState};
use crate::hand::Hand;
use crate::result::GameResult;

/// Supplies the player's raw decisions.
pub trait DecisionSource {
    /// Returns the next line of player input, or `None` once input is closed.
    fn next_decision(&mut self) -> Option<String>;
}

/// Displays the table. The engine decides what to show; the renderer
/// decides how.
pub trait Renderer {
    /// Shows the dealer's face-up card only.
    fn render_dealer_up_card(&mut self, dealer_hand: &Hand);

    /// Shows the back of the dealer's hole card.
    fn render_hole_card(&mut self);

    /// Shows the player's hand and its value.
    fn render_player_hand(&mut self, player_hand: &Hand, value: u8);

    /// Shows the dealer's full hand and its value.
    fn render_dealer_hand(&mut self, dealer_hand: &Hand, value: u8);

    /// Shows the final result.
    fn render_outcome(&mut self, result: &GameResult);

    /// Tells the player their input was not understood.
    fn render_invalid_input(&mut self);
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn render_dealer_up_card(&mut self, dealer_hand: &Hand) {
        (**self).render_dealer_up_card(dealer_hand);
    }

    fn render_hole_card(&mut self) {
        (**self).render_hole_card();
    }

    fn render_player_hand(&mut self, player_hand: &Hand, value: u8) {
        (**self).render_player_hand(player_hand, value);
    }

    fn render_dealer_hand(&mut self, dealer_hand: &Hand, value: u8) {
        (**self).render_dealer_hand(dealer_hand, value);
    }

    fn render_outcome(&mut self, result: &GameResult) {
        (**self).render_outcome(result);
    }

    fn render_invalid_input(&mut self) {
        (**self).render_invalid_input();
    }
}

/// A game wired to its decision source and renderer.
///
/// ```
/// use twentyone::{GameResult, Hand, Renderer, Table};
///
/// struct Quiet;
///
/// impl Renderer for Quiet {
///     fn render_dealer_up_card(&mut self, _: &Hand) {}
///     fn render_hole_card(&mut self) {}
///     fn render_player_hand(&mut self, _: &Hand, _: u8) {}
///     fn render_dealer_hand(&mut self, _: &Hand, _: u8) {}
///     fn render_outcome(&mut self, _: &GameResult) {}
///     fn render_invalid_input(&mut self) {}
/// }
///
/// let decisions = vec![String::from("stand")].into_iter();
/// let mut table = Table::new(3, decisions, Quiet);
/// let result = table.run().unwrap();
/// assert!(!result.player_busted);
/// ```
#[derive(Debug)]
pub struct Table<D, R> {
    game: Game,
    decisions: D,
    renderer: R,
}

impl<D: DecisionSource, R: Renderer> Table<D, R> {
    /// Creates a table with a freshly shuffled game.
    #[must_use]
    pub fn new(seed: u64, decisions: D, renderer: R) -> Self {
        Self::with_game(Game::new(seed), decisions, renderer)
    }

    /// Creates a table around an existing game.
    #[must_use]
    pub const fn with_game(game: Game, decisions: D, renderer: R) -> Self {
        Self {
            game,
            decisions,
            renderer,
        }
    }

    /// Returns the game being played.
    #[must_use]
    pub const fn game(&self) -> &Game {
        &self.game
    }

    /// Consumes the table, returning its parts.
    #[must_use]
    pub fn into_parts(self) -> (Game, D, R) {
        (self.game, self.decisions, self.renderer)
    }

    /// Plays the game from the initial deal to the final result.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck runs out or the decision source closes
    /// during the player's turn. Either ends the game.
    pub fn run(&mut self) -> Result<GameResult, GameError> {
        self.game.deal()?;

        while self.game.state() == GameState::PlayerTurn {
            self.render_table();

            let Some(input) = self.decisions.next_decision() else {
                debug!("decision source closed during player turn");
                return Err(GameError::InputClosed);
            };

            match Decision::parse(&input) {
                Some(decision) => {
                    self.game.act(decision)?;
                }
                None => self.renderer.render_invalid_input(),
            }
        }

        self.game.dealer_play()?;
        let result = self.game.showdown()?;

        let dealer_hand = self.game.dealer_hand();
        self.renderer
            .render_dealer_hand(dealer_hand, dealer_hand.value());
        let player_hand = self.game.player_hand();
        self.renderer
            .render_player_hand(player_hand, player_hand.value());
        self.renderer.render_outcome(&result);

        Ok(result)
    }

    /// Shows the table with the dealer's hole card hidden.
    fn render_table(&mut self) {
        let dealer_hand = self.game.dealer_hand();
        self.renderer.render_dealer_up_card(dealer_hand);
        self.renderer.render_hole_card();
        let player_hand = self.game.player_hand();
        self.renderer
            .render_player_hand(player_hand, player_hand.value());
    }
}

/// Any iterator of lines is a decision source, which covers scripted input.
impl<I: Iterator<Item = String>> DecisionSource for I {
    fn next_decision(&mut self) -> Option<String> {
        self.next()
    }
}
