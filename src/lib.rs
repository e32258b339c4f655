//! A single-player blackjack engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs one game from the initial
//! deal through the player's turn, the dealer's fixed hit-to-17 policy and
//! the showdown. A [`Table`] drives a game against an injected
//! [`DecisionSource`] and [`Renderer`], so the same engine backs a terminal
//! front end and scripted tests.
//!
//! # Example
//!
//! ```
//! use twentyone::{Decision, Game};
//!
//! let mut game = Game::new(42);
//! game.deal().unwrap();
//! if game.player_hand().value() < 12 {
//!     game.act(Decision::Hit).unwrap();
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod result;
pub mod table;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{ActionError, DealError, EmptyDeckError, GameError, ShowdownError};
pub use game::{Decision, Game, GameState, STAY_LIMIT};
pub use hand::{BUST_LIMIT, Hand, hand_value, has_ace, is_busted};
pub use result::{GameResult, Outcome, Verdict};
pub use table::{DecisionSource, Renderer, Table};
