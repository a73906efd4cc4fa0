//! Single-card reveals and their comparison rules.

use crate::card::Card;
use crate::player::PlayerId;

/// One player's revealed card for one round.
///
/// Turns are ephemeral comparison records: the round resolver creates them,
/// ranks them, and discards them once the pot has been awarded. A turn refers
/// to its player by roster id rather than holding the player itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    /// The player who revealed the card.
    pub player: PlayerId,
    /// The revealed card.
    pub card: Card,
}

impl Turn {
    /// Creates a new turn.
    #[must_use]
    pub const fn new(player: PlayerId, card: Card) -> Self {
        Self { player, card }
    }

    /// Returns whether this turn and `other` open a war.
    ///
    /// War is rank-only: two cards of equal rank tie regardless of suit. The
    /// check is symmetric.
    #[must_use]
    pub const fn is_war(&self, other: &Self) -> bool {
        self.card.rank == other.card.rank
    }

    /// Returns whether `other` should replace this turn as the round's
    /// leading turn.
    ///
    /// Aces are high: an ace is only matched by another ace, and an ace
    /// challenger beats any non-ace leader. Otherwise ranks compare
    /// numerically, with an equal-rank challenger counted as better. The
    /// equal-rank case is only reached transiently because the scan checks
    /// [`Turn::is_war`] on each candidate before consulting this.
    #[must_use]
    pub const fn is_turn_better(&self, other: &Self) -> bool {
        if self.card.is_ace() {
            other.card.is_ace()
        } else if other.card.is_ace() {
            true
        } else {
            self.card.rank <= other.card.rank
        }
    }
}
