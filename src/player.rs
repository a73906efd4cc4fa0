//! War participants and their saved-session representation.

use alloc::string::String;
use alloc::vec::Vec;

use rand::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::deck::Deck;
use crate::error::TurnError;
use crate::turn::Turn;

/// Identifier of a player within a game's roster.
///
/// Ids are 0-based indices into the roster, assigned in the order players
/// were handed to the game. Turns carry a `PlayerId` instead of a reference
/// so that no cyclic ownership exists between players and the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlayerId(pub usize);

impl PlayerId {
    /// Creates a new player id.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw roster index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A War participant.
///
/// A player owns a draw pile and a pile of won cards. The player has lost
/// only when both piles are empty: an empty draw pile alone is recovered by
/// recycling the won pile on the next reveal.
#[derive(Debug, Clone, Default)]
pub struct Player {
    /// The draw pile, drawn from the top.
    deck: Deck,
    /// Cards captured from resolved rounds, not yet recycled.
    won_cards: Vec<Card>,
}

impl Player {
    /// Creates a new player with no cards.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            deck: Deck::new(),
            won_cards: Vec::new(),
        }
    }

    /// Creates a player from an existing draw pile and won pile.
    #[must_use]
    pub const fn from_parts(deck: Deck, won_cards: Vec<Card>) -> Self {
        Self { deck, won_cards }
    }

    /// Returns the draw pile.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the draw pile for direct manipulation.
    ///
    /// The game uses this to deal; embedding layers normally should not.
    pub const fn deck_mut(&mut self) -> &mut Deck {
        &mut self.deck
    }

    /// Returns the won pile, oldest capture first.
    #[must_use]
    pub fn won_cards(&self) -> &[Card] {
        &self.won_cards
    }

    /// Returns whether this player has lost.
    ///
    /// True only when the draw pile and the won pile are both empty.
    #[must_use]
    pub fn lost(&self) -> bool {
        self.deck.is_empty() && self.won_cards.is_empty()
    }

    /// Appends captured cards to the won pile in the given order.
    pub fn award_cards<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        self.won_cards.extend(cards);
    }

    /// Reveals the top card of the draw pile as a new turn.
    ///
    /// If the draw pile is empty, the won pile is first recycled: its cards
    /// are appended to the deck bottom in won-pile order, the pile is
    /// cleared, and the deck is shuffled. The draw pile then shrinks by
    /// exactly one card.
    ///
    /// # Errors
    ///
    /// Returns [`TurnError::AlreadyLost`] if the player holds no cards in
    /// either pile.
    pub fn do_turn<R: Rng + ?Sized>(
        &mut self,
        id: PlayerId,
        rng: &mut R,
    ) -> Result<Turn, TurnError> {
        if self.lost() {
            return Err(TurnError::AlreadyLost);
        }

        if self.deck.is_empty() {
            for card in self.won_cards.drain(..) {
                self.deck.push_bottom(card);
            }
            self.deck.shuffle(rng);
        }

        // Non-empty after the recycle above.
        match self.deck.pop() {
            Some(card) => Ok(Turn::new(id, card)),
            None => Err(TurnError::AlreadyLost),
        }
    }

    /// Stakes the face-down and face-up cards for one war round.
    ///
    /// Produces up to `war_card_count + 1` turns, the last one being the
    /// face-up card that contends for leadership. If the player runs out of
    /// cards mid-war the list is cut short; the resolver excludes short
    /// lists from leadership but still adds their cards to the pot.
    pub fn do_war<R: Rng + ?Sized>(
        &mut self,
        id: PlayerId,
        war_card_count: usize,
        rng: &mut R,
    ) -> Vec<Turn> {
        let mut turns = Vec::with_capacity(war_card_count + 1);

        for _ in 0..=war_card_count {
            if self.lost() {
                break;
            }
            match self.do_turn(id, rng) {
                Ok(turn) => turns.push(turn),
                Err(TurnError::AlreadyLost) => break,
            }
        }

        turns
    }
}

/// The persistable shape of a player inside a game session.
///
/// Card order is preserved exactly, top to bottom, across a capture/restore
/// round trip. The external player id is whatever the embedding layer uses to
/// identify the real participant (for example a chat-platform user id); the
/// core never interprets it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SavedPlayer {
    /// Identity of the participant in the embedding layer.
    pub external_player_id: String,
    /// The draw pile, top to bottom.
    pub deck: Vec<Card>,
    /// The won pile, oldest capture first.
    pub won_cards: Vec<Card>,
}

impl SavedPlayer {
    /// Snapshots a player together with its external identity.
    #[must_use]
    pub fn capture(player: &Player, external_player_id: String) -> Self {
        Self {
            external_player_id,
            deck: player.deck.to_ordered_list(),
            won_cards: player.won_cards.clone(),
        }
    }

    /// Rebuilds the player and hands the external identity back.
    #[must_use]
    pub fn restore(self) -> (Player, String) {
        let player = Player::from_parts(Deck::from_ordered_list(self.deck), self.won_cards);
        (player, self.external_player_id)
    }
}
