//! Game engine and round resolution.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::error::NewGameError;
use crate::options::GameOptions;
use crate::player::{Player, PlayerId};

mod observer;
mod rounds;
pub mod state;

pub use observer::GameObserver;
pub use state::GameState;

/// A War game engine that owns the player roster and resolves rounds.
///
/// The game is single-threaded and synchronous: each [`Game::do_turn`] call
/// runs one full round, including nested wars, to completion. A surrounding
/// scheduler decides when rounds happen; concurrent invocation must be
/// prevented by the caller.
pub struct Game {
    /// The roster, indexed by [`PlayerId`]. Released at game over.
    players: Vec<Player>,
    /// Game options.
    options: GameOptions,
    /// Current game state.
    state: GameState,
    /// Random number generator for the initial shuffle and deck recycling.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given players and seed.
    ///
    /// A fresh 52-card deck is shuffled once and dealt round-robin, bottom
    /// of each draw pile, until exhausted; draw-pile sizes therefore differ
    /// by at most one card. Players are normally handed in with empty piles.
    ///
    /// # Errors
    ///
    /// Returns [`NewGameError::InsufficientPlayers`] if fewer than two
    /// players are supplied. Nothing is dealt in that case.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::{Game, GameOptions, Player};
    ///
    /// let players = vec![Player::new(), Player::new()];
    /// let game = Game::new(players, GameOptions::default(), 42).unwrap();
    /// assert_eq!(game.player_count(), 2);
    /// ```
    pub fn new(
        players: Vec<Player>,
        options: GameOptions,
        seed: u64,
    ) -> Result<Self, NewGameError> {
        let mut game = Self::resume(players, options, seed)?;
        game.deal();
        Ok(game)
    }

    /// Rebuilds a game around already-populated players.
    ///
    /// Used to pick a session back up from persisted [`SavedPlayer`] state:
    /// the roster is validated and bound, but no deck is dealt.
    ///
    /// # Errors
    ///
    /// Returns [`NewGameError::InsufficientPlayers`] if fewer than two
    /// players are supplied.
    ///
    /// [`SavedPlayer`]: crate::SavedPlayer
    pub fn resume(
        players: Vec<Player>,
        options: GameOptions,
        seed: u64,
    ) -> Result<Self, NewGameError> {
        if players.len() < 2 {
            return Err(NewGameError::InsufficientPlayers);
        }

        Ok(Self {
            players,
            options,
            state: GameState::AwaitingTurn,
            rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }

    /// Shuffles a fresh deck and deals it round-robin across the roster.
    fn deal(&mut self) {
        let mut deck = Deck::no_jokers();
        deck.shuffle(&mut self.rng);

        let player_count = self.players.len();
        let mut card_index = 0;
        while let Some(card) = deck.pop() {
            self.players[card_index % player_count]
                .deck_mut()
                .push_bottom(card);
            card_index += 1;
        }
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the number of players on the roster.
    ///
    /// Zero once the game is over and the roster has been released.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Returns the player with the given id, if still rostered.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    /// Iterates over the roster in id order.
    pub fn players(&self) -> impl Iterator<Item = (PlayerId, &Player)> {
        self.players
            .iter()
            .enumerate()
            .map(|(index, player)| (PlayerId::new(index), player))
    }
}
