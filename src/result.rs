//! Game result types for showdown.

use core::fmt;

/// Win, lose or push from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Player wins.
    Win,
    /// Player loses.
    Lose,
    /// Tie, no winner.
    Push,
}

/// How the game was decided.
///
/// Variants are listed in the order the settlement rules are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Player went over 21. The dealer's hand does not matter.
    PlayerBusted,
    /// Dealer went over 21.
    DealerBusted,
    /// Player's total is higher than the dealer's.
    PlayerBeatsDealer,
    /// Totals are equal.
    Push,
    /// Dealer's total is higher than the player's.
    DealerBeatsPlayer,
}

impl Outcome {
    /// Applies the settlement rules; the first rule that matches wins.
    ///
    /// ```
    /// use twentyone::{Outcome, Verdict};
    ///
    /// assert_eq!(Outcome::determine(false, 20, 19), Outcome::PlayerBeatsDealer);
    /// assert_eq!(Outcome::determine(false, 18, 18).verdict(), Verdict::Push);
    /// ```
    #[must_use]
    pub const fn determine(player_busted: bool, player_value: u8, dealer_value: u8) -> Self {
        if player_busted {
            Self::PlayerBusted
        } else if dealer_value > crate::hand::BUST_LIMIT {
            Self::DealerBusted
        } else if dealer_value < player_value {
            Self::PlayerBeatsDealer
        } else if dealer_value == player_value {
            Self::Push
        } else {
            Self::DealerBeatsPlayer
        }
    }

    /// Collapses the outcome to win, lose or push.
    #[must_use]
    pub const fn verdict(self) -> Verdict {
        match self {
            Self::PlayerBusted | Self::DealerBeatsPlayer => Verdict::Lose,
            Self::DealerBusted | Self::PlayerBeatsDealer => Verdict::Win,
            Self::Push => Verdict::Push,
        }
    }

    /// Returns the message shown to the player.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::PlayerBusted => "You Busted, so you lose.",
            Self::DealerBusted => "Dealer went BUST, Player wins! Yay for you!!",
            Self::PlayerBeatsDealer => "You beat the Dealer!",
            Self::Push => "Push: You tie with the Dealer.",
            Self::DealerBeatsPlayer => "You lost to the Dealer.",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    /// How the game was decided.
    pub outcome: Outcome,
    /// The player's final hand value.
    pub player_value: u8,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Whether the player busted.
    pub player_busted: bool,
    /// Whether the dealer busted.
    pub dealer_busted: bool,
}
