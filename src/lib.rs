//! A single-player blackjack game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs one round at a time: the
//! opening deal, player hits and stands, the dealer's automatic play, and the
//! outcome. Rendering and input are left to the caller, which polls the
//! game's state and forwards [`Game::hit`] and [`Game::stand`].
//!
//! # Example
//!
//! ```
//! use blackjack_engine::{Game, GameOptions, Phase};
//!
//! let mut game = Game::new(GameOptions::default(), 42).unwrap();
//! while game.phase() == Phase::PlayerTurn && game.player_value() < 17 {
//!     game.hit().unwrap();
//! }
//! game.stand().unwrap();
//!
//! assert_eq!(game.phase(), Phase::Finished);
//! assert!(game.outcome().is_some());
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
pub mod options;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::GameError;
pub use game::{Game, Phase};
pub use hand::{BLACKJACK, Hand, hand_value, is_bust};
pub use options::GameOptions;
pub use result::{Outcome, RoundResult};
