//! Outcome notification hooks for the embedding layer.

use crate::player::PlayerId;
use crate::turn::Turn;

/// Observer of round and game outcomes.
///
/// The embedding layer (a chat session, a UI, a simulator) implements this to
/// be told what happened; the engine never consults any result and applies
/// its card movements before notifying, so observer behavior cannot corrupt
/// game state. All methods default to no-ops.
///
/// The unit type implements the trait, so callers without a presentation
/// layer can pass `&mut ()`.
pub trait GameObserver {
    /// Called once per resolved round with the top-level reveals and the
    /// player who took the pot. War-round reveals are not included.
    fn on_turn(&mut self, turns: &[Turn], winner: PlayerId) {
        let _ = (turns, winner);
    }

    /// Called once for the surviving player when the game concludes.
    fn on_game_won(&mut self, player: PlayerId) {
        let _ = player;
    }

    /// Called once for each defeated player when the game concludes.
    fn on_game_lost(&mut self, player: PlayerId) {
        let _ = player;
    }
}

impl GameObserver for () {}
