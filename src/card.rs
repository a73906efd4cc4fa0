//! Card types and constants.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Suit {
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
    /// Clubs.
    Clubs,
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted but may yield non-standard results during round
    /// resolution.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Returns whether this card is an ace, the highest rank in War.
    #[must_use]
    pub const fn is_ace(&self) -> bool {
        self.rank == ACE
    }
}

/// Number of cards in a full deck without jokers.
pub const DECK_SIZE: usize = 52;

/// Rank of an ace.
pub const ACE: u8 = 1;
/// Rank of a jack.
pub const JACK: u8 = 11;
/// Rank of a queen.
pub const QUEEN: u8 = 12;
/// Rank of a king.
pub const KING: u8 = 13;
