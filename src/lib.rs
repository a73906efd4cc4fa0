//! A War card game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that deals a shuffled deck round-robin
//! to two or more [`Player`]s and resolves one round per call, including
//! recursive war tie-breaks. Round and game outcomes are reported through a
//! [`GameObserver`] implemented by the embedding layer.
//!
//! # Example
//!
//! ```
//! use warrs::{Game, GameOptions, GameState, Player};
//!
//! let players = vec![Player::new(), Player::new()];
//! let mut game = Game::new(players, GameOptions::default(), 42).unwrap();
//!
//! while game.state() == GameState::AwaitingTurn {
//!     game.do_turn(&mut ()).unwrap();
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
pub mod options;
pub mod player;
pub mod turn;

// Re-export main types
pub use card::{ACE, Card, DECK_SIZE, JACK, KING, QUEEN, Suit};
pub use deck::Deck;
pub use error::{NewGameError, TurnError};
pub use game::{Game, GameObserver, GameState};
pub use options::GameOptions;
pub use player::{Player, PlayerId, SavedPlayer};
pub use turn::Turn;
