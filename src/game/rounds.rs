//! Round resolution, including nested war escalation.

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::TurnError;
use crate::player::PlayerId;
use crate::turn::Turn;

use super::{Game, GameObserver, GameState};

impl Game {
    /// Resolves one round of war, including any nested war rounds.
    ///
    /// If the game is already over this is a no-op. If at most one non-lost
    /// player remains, the call instead concludes the game: each player's
    /// outcome hook fires exactly once, the roster is released, and no cards
    /// are drawn.
    ///
    /// Otherwise every non-lost player reveals one card, wars are escalated
    /// until a single leading turn survives, the entire pot is awarded to
    /// the leading turn's player, and [`GameObserver::on_turn`] fires with
    /// the top-level reveals and the winner.
    ///
    /// # Errors
    ///
    /// Returns [`TurnError::AlreadyLost`] if a reveal is requested from a
    /// player without cards. The game only asks non-lost players to reveal,
    /// so this cannot occur unless the roster is mutated externally.
    pub fn do_turn(&mut self, observer: &mut dyn GameObserver) -> Result<(), TurnError> {
        if self.state == GameState::GameOver {
            return Ok(());
        }

        let valid: Vec<usize> = self
            .players
            .iter()
            .enumerate()
            .filter(|(_, player)| !player.lost())
            .map(|(index, _)| index)
            .collect();

        if valid.len() <= 1 {
            self.conclude(observer);
            return Ok(());
        }

        // Top-level reveals, in roster order.
        let mut turns = Vec::with_capacity(valid.len());
        for &index in &valid {
            let turn = self.players[index].do_turn(PlayerId::new(index), &mut self.rng)?;
            turns.push(turn);
        }

        // Every revealed card joins the pot, in reveal order, no matter how
        // the round resolves.
        let mut cards_won: Vec<Card> = turns.iter().map(|turn| turn.card).collect();

        // Scan for the leading turn: war-check before better-check, with the
        // first-detected leader only entering the war list once.
        let mut winning_turn = turns[0];
        let mut players_in_war: Vec<PlayerId> = Vec::new();

        for turn in &turns[1..] {
            if winning_turn.is_war(turn) {
                if players_in_war.is_empty() {
                    players_in_war.push(winning_turn.player);
                }
                players_in_war.push(turn.player);
            } else if winning_turn.is_turn_better(turn) {
                winning_turn = *turn;
            }
        }

        while !players_in_war.is_empty() {
            let expected = self.options.war_card_count + 1;
            let mut next_in_war: Vec<PlayerId> = Vec::new();
            let mut leading: Option<Turn> = None;

            for &id in &players_in_war {
                let war_turns =
                    self.players[id.index()]
                        .do_war(id, self.options.war_card_count, &mut self.rng);

                cards_won.extend(war_turns.iter().map(|turn| turn.card));

                // A short list means the player ran out of cards mid-war.
                // Their cards stay in the pot but they cannot lead.
                if war_turns.len() != expected {
                    continue;
                }
                let Some(&face_up) = war_turns.last() else {
                    continue;
                };

                match leading {
                    None => leading = Some(face_up),
                    Some(lead) if lead.is_war(&face_up) => {
                        if next_in_war.is_empty() {
                            next_in_war.push(lead.player);
                        }
                        next_in_war.push(face_up.player);
                    }
                    Some(lead) if lead.is_turn_better(&face_up) => leading = Some(face_up),
                    Some(_) => {}
                }
            }

            // If every contender came up short, the pre-war leader stands.
            if let Some(lead) = leading {
                winning_turn = lead;
            }
            players_in_war = next_in_war;
        }

        let winner = winning_turn.player;
        self.players[winner.index()].award_cards(cards_won);

        observer.on_turn(&turns, winner);

        Ok(())
    }

    /// Fires the outcome hooks and releases the roster.
    fn conclude(&mut self, observer: &mut dyn GameObserver) {
        for (index, player) in self.players.iter().enumerate() {
            let id = PlayerId::new(index);
            if player.lost() {
                observer.on_game_lost(id);
            } else {
                observer.on_game_won(id);
            }
        }

        self.players = Vec::new();
        self.state = GameState::GameOver;
    }
}
