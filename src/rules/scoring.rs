//! Scoring and winner resolution.

use std::cmp::Reverse;

use serde::{Deserialize, Serialize};

use crate::core::player::{PlayerId, PlayerMap};
use crate::core::state::{GameState, Player};

/// Outcome of a finished match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: PlayerId,
    /// Host-supplied id of the winning player.
    pub winner_id: String,
    pub scores: PlayerMap<u32>,
    pub cup_counts: PlayerMap<usize>,
}

impl GameResult {
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner == player
    }
}

/// Sum of cup card values: a card scores its color's river slot plus one,
/// or nothing if its color has no slot.
///
/// ```
/// use mandala_engine::core::{Card, Color, Player};
/// use mandala_engine::rules::calculate_score;
///
/// let mut player = Player::new("p");
/// player.river.place(Card::new(0, Color::Red));
/// player.river.place(Card::new(1, Color::Green));
/// player.cup.push_back(Card::new(2, Color::Green));
/// player.cup.push_back(Card::new(3, Color::Green));
/// player.cup.push_back(Card::new(4, Color::Purple));
///
/// assert_eq!(calculate_score(&player), 4);
/// ```
#[must_use]
pub fn calculate_score(player: &Player) -> u32 {
    player
        .cup
        .iter()
        .filter_map(|card| player.river.slot_of(card.color))
        .map(|slot| slot as u32 + 1)
        .sum()
}

/// Current score of each seat.
#[must_use]
pub fn score(state: &GameState) -> PlayerMap<u32> {
    state.players.map(|_, p| calculate_score(p))
}

/// The winner of a finished match, `None` while it is still running.
///
/// Higher score wins; on equal score the smaller cup wins; if cups are
/// equal too, the first seat wins.
#[must_use]
pub fn get_winner(state: &GameState) -> Option<GameResult> {
    if !state.is_over() {
        return None;
    }
    let scores = score(state);
    let cup_counts = state.players.map(|_, p| p.cup.len());

    let rank = |p: PlayerId| (scores[p], Reverse(cup_counts[p]));
    let winner = if rank(PlayerId::SECOND) > rank(PlayerId::FIRST) {
        PlayerId::SECOND
    } else {
        PlayerId::FIRST
    };

    Some(GameResult {
        winner,
        winner_id: state.player(winner).id.clone(),
        scores,
        cup_counts,
    })
}
