//! Error types for game operations.

use thiserror::Error;

/// The deck has no cards left to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no cards left in the deck")]
pub struct EmptyDeckError;

/// Errors that can occur during the initial deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// Not enough cards in the deck to deal both hands.
    #[error(transparent)]
    EmptyDeck(#[from] EmptyDeckError),
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// No cards left in the deck.
    #[error(transparent)]
    EmptyDeck(#[from] EmptyDeckError),
}

/// Errors that can occur during dealer play and showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// Invalid game state for showdown.
    #[error("invalid game state for showdown")]
    InvalidState,
    /// No cards left in the deck.
    #[error(transparent)]
    EmptyDeck(#[from] EmptyDeckError),
}

/// Errors that abort a game driven by a [`Table`](crate::table::Table).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// The initial deal failed.
    #[error("deal failed: {0}")]
    Deal(#[from] DealError),
    /// A player action failed.
    #[error("player action failed: {0}")]
    Action(#[from] ActionError),
    /// Dealer play or showdown failed.
    #[error("showdown failed: {0}")]
    Showdown(#[from] ShowdownError),
    /// The decision source closed before the player stood or busted.
    #[error("player input closed")]
    InputClosed,
}
