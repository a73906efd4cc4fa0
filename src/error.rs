//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when starting or resuming a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NewGameError {
    /// Fewer than two players were supplied.
    #[error("a war game requires at least two players")]
    InsufficientPlayers,
}

/// Errors that can occur when a player takes a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TurnError {
    /// The player holds no cards in either pile and cannot reveal one.
    ///
    /// This indicates caller misuse: the game filters to non-lost players
    /// before asking for reveals.
    #[error("player has already lost")]
    AlreadyLost,
}
