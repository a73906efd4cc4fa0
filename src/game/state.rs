//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Steady state: the next call to `do_turn` resolves one round.
    AwaitingTurn,
    /// Terminal state: fewer than two players remained, the roster has been
    /// released, and the outcome hooks have fired.
    GameOver,
}
