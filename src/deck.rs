//! Ordered deck storage with top/bottom insertion and factory builders.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, JACK, KING, Suit};

/// An ordered stack of cards.
///
/// The "top" is the draw end; the "bottom" is where returned and dealt cards
/// are inserted. A deck never rejects duplicates: composing several source
/// decks is a legal way to build one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    /// Cards from top (front) to bottom (back).
    cards: VecDeque<Card>,
}

impl Deck {
    /// Creates a new empty deck.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: VecDeque::new(),
        }
    }

    /// Returns the number of cards in this deck.
    #[must_use]
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether this deck holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Shuffles the deck in place into a uniformly random permutation.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &mut Self {
        self.cards.make_contiguous().shuffle(rng);
        self
    }

    /// Pushes a card onto the top of the deck.
    pub fn push_top(&mut self, card: Card) -> &mut Self {
        self.cards.push_front(card);
        self
    }

    /// Pushes a card onto the bottom of the deck.
    pub fn push_bottom(&mut self, card: Card) -> &mut Self {
        self.cards.push_back(card);
        self
    }

    /// Removes and returns the top card, or `None` if the deck is empty.
    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Drains every source deck onto the bottom of this deck.
    ///
    /// Sources are processed in iteration order, each one top-to-bottom, so
    /// a source's card order is preserved. The sources are empty afterwards.
    pub fn combine_bottom<'a, I>(&mut self, decks: I) -> &mut Self
    where
        I: IntoIterator<Item = &'a mut Self>,
    {
        for deck in decks {
            while let Some(card) = deck.pop() {
                self.push_bottom(card);
            }
        }
        self
    }

    /// Drains every source deck onto the top of this deck.
    ///
    /// Sources are processed in iteration order, each one top-to-bottom, with
    /// every card pushed to the top in turn, so a source's cards end up in
    /// reversed order with its bottom card topmost. The sources are empty
    /// afterwards.
    pub fn combine_top<'a, I>(&mut self, decks: I) -> &mut Self
    where
        I: IntoIterator<Item = &'a mut Self>,
    {
        for deck in decks {
            while let Some(card) = deck.pop() {
                self.push_top(card);
            }
        }
        self
    }

    /// Returns the cards of this deck, top to bottom.
    ///
    /// This is the serialization boundary: collaborators persisting a deck
    /// use this together with [`Deck::from_ordered_list`] instead of
    /// depending on the internal storage.
    #[must_use]
    pub fn to_ordered_list(&self) -> Vec<Card> {
        self.cards.iter().copied().collect()
    }

    /// Rebuilds a deck from a top-to-bottom card list.
    #[must_use]
    pub fn from_ordered_list(cards: Vec<Card>) -> Self {
        Self {
            cards: cards.into(),
        }
    }

    /// Builds the deck of one suit without face cards, ace through ten, in
    /// ascending rank order from top to bottom.
    #[must_use]
    pub fn suit_deck(suit: Suit) -> Self {
        let mut deck = Self::new();
        for rank in 1..=10 {
            deck.push_bottom(Card::new(suit, rank));
        }
        deck
    }

    /// Builds the deck of one suit including face cards, ace through king, in
    /// ascending rank order from top to bottom.
    #[must_use]
    pub fn royal_suit_deck(suit: Suit) -> Self {
        let mut deck = Self::suit_deck(suit);
        for rank in JACK..=KING {
            deck.push_bottom(Card::new(suit, rank));
        }
        deck
    }

    /// Builds the full 52-card deck without jokers.
    ///
    /// The royal suit decks are appended bottom-wards in club, spade,
    /// diamond, heart order. The result is unshuffled; callers are expected
    /// to shuffle before play.
    #[must_use]
    pub fn no_jokers() -> Self {
        let mut deck = Self::new();
        deck.combine_bottom([
            &mut Self::royal_suit_deck(Suit::Clubs),
            &mut Self::royal_suit_deck(Suit::Spades),
            &mut Self::royal_suit_deck(Suit::Diamonds),
            &mut Self::royal_suit_deck(Suit::Hearts),
        ]);
        deck
    }
}
