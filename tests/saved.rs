//! Saved-session serialization tests.

#![cfg(feature = "serde")]

use warrs::{Card, SavedPlayer, Suit};

#[test]
fn saved_player_json_round_trip_preserves_deck_order() {
    let saved = SavedPlayer {
        external_player_id: "286582708612366337".to_owned(),
        deck: vec![
            Card::new(Suit::Clubs, 13),
            Card::new(Suit::Diamonds, 1),
            Card::new(Suit::Hearts, 7),
        ],
        won_cards: vec![Card::new(Suit::Spades, 2)],
    };

    let json = serde_json::to_string(&saved).unwrap();
    let restored: SavedPlayer = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, saved);
    assert_eq!(restored.deck, saved.deck);
}

#[test]
fn saved_player_deserializes_from_plain_json() {
    let json = r#"{
        "external_player_id": "user-1",
        "deck": [{"suit": "Spades", "rank": 13}],
        "won_cards": []
    }"#;

    let saved: SavedPlayer = serde_json::from_str(json).unwrap();
    assert_eq!(saved.deck, vec![Card::new(Suit::Spades, 13)]);
    assert!(saved.won_cards.is_empty());
}
