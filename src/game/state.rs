//! Game state types.

/// Game state.
///
/// A game moves strictly forward through these states. Fatal errors jump
/// straight to [`GameState::Done`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for the two opening cards of each hand.
    InitialDeal,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Both hands are final and the result can be settled.
    Settlement,
    /// Game has ended.
    Done,
}
