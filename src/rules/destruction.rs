//! Mandala destruction: the alternating claim sub-phase.
//!
//! When a mandala reaches six colors, players take turns claiming one
//! mountain color at a time until none remain. Claimed cards open a river
//! slot and fill the cup, unless the claimer has no field in that mandala,
//! in which case they are lost to the discard pile. Afterwards both fields
//! are discarded and the mountain is reseeded, or the match ends if the
//! end-game trigger is set.

use std::cmp::Ordering;

use im::Vector;
use tracing::{debug, info};

use crate::core::card::{Card, Color};
use crate::core::config::GameConfig;
use crate::core::player::PlayerId;
use crate::core::state::{Destruction, EndGameTrigger, GameState, Phase};
use crate::zones::draw_cards;

/// Enter the destruction phase for a mandala that just completed.
pub(crate) fn begin(config: &GameConfig, state: &mut GameState, mandala_index: usize) {
    let mandala = &state.mandalas[mandala_index];
    let completer = state.last_mandala_player.unwrap_or(state.current_player);
    let first = mandala.field(PlayerId::FIRST).len();
    let second = mandala.field(PlayerId::SECOND).len();

    let claimer = match first.cmp(&second) {
        Ordering::Greater => PlayerId::FIRST,
        Ordering::Less => PlayerId::SECOND,
        Ordering::Equal => completer.opponent(),
    };
    let remaining_colors = mandala.mountain_colors();

    debug!(mandala = mandala_index, %claimer, colors = remaining_colors.len(), "destruction begins");
    state.phase = Phase::Destroying;
    state.destruction = Some(Destruction {
        mandala_index,
        current_claimer: claimer,
        remaining_colors,
    });

    // A starved reseed can leave an empty mountain: nothing to claim.
    if remaining_colors.is_empty() {
        finish(config, state, mandala_index);
    }
}

/// Resolve one validated claim.
pub(crate) fn claim(config: &GameConfig, state: &mut GameState, player: PlayerId, color: Color) {
    let Some(mut destruction) = state.destruction else {
        panic!("claim executed without a destruction in progress");
    };
    let index = destruction.mandala_index;

    let (taken, kept): (Vector<Card>, Vector<Card>) = state.mandalas[index]
        .mountain
        .iter()
        .copied()
        .partition(|card| card.color == color);
    state.mandalas[index].mountain = kept;

    if state.mandalas[index].field(player).is_empty() {
        debug!(%player, %color, cards = taken.len(), "claim forfeited, no field");
        state.discard.append(taken);
    } else {
        bank_claim(state, player, color, taken);
    }

    destruction.remaining_colors.remove(color);
    if destruction.remaining_colors.is_empty() {
        state.destruction = Some(destruction);
        finish(config, state, index);
    } else {
        destruction.current_claimer = player.opponent();
        state.destruction = Some(destruction);
    }
}

/// Move claimed cards into the claimer's river and cup.
fn bank_claim(state: &mut GameState, player: PlayerId, color: Color, mut taken: Vector<Card>) {
    let seat = state.player_mut(player);

    if !seat.river.contains(color) {
        let Some(opener) = taken.pop_front() else {
            panic!("claimed {color} with no mountain cards of that color");
        };
        let Some(slot) = seat.river.place(opener) else {
            unreachable!("{player} claimed new color {color} with a full river");
        };
        let filled = seat.river.is_full();
        debug!(%player, %color, slot, surplus = taken.len(), "river slot opened");
        seat.cup.append(taken);

        if filled && state.trigger_end(EndGameTrigger::SixthRiverColor) {
            info!(%player, "sixth river color placed, match will end");
        }
    } else {
        debug!(%player, %color, cards = taken.len(), "claim to cup");
        seat.cup.append(taken);
    }
}

/// Clear the fields, then end the match or reseed the mountain and resume play.
fn finish(config: &GameConfig, state: &mut GameState, mandala_index: usize) {
    for player in PlayerId::all() {
        let field = std::mem::take(&mut state.mandalas[mandala_index].fields[player]);
        state.discard.append(field);
    }
    state.destruction = None;

    if let Some(trigger) = state.end_game_trigger {
        state.phase = Phase::Ended;
        info!(?trigger, turn = state.turn_number, "match ended");
        return;
    }

    let seed = draw_cards(state, config.mountain_seed);
    state.mandalas[mandala_index].mountain.extend(seed);
    state.phase = Phase::Playing;
    state.current_player = state
        .last_mandala_player
        .unwrap_or(state.current_player)
        .opponent();
    state.turn_number += 1;
    debug!(mandala = mandala_index, next = %state.current_player, "destruction finished");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::Color::*;
    use crate::core::rng::GameRng;

    const P0: PlayerId = PlayerId::FIRST;
    const P1: PlayerId = PlayerId::SECOND;

    fn cards(start: u32, colors: &[Color]) -> Vector<Card> {
        colors
            .iter()
            .enumerate()
            .map(|(i, &c)| Card::new(start + i as u32, c))
            .collect()
    }

    /// Completed mandala 0: mountain [Red, Red, Black], fields split the rest.
    fn completed(field0: &[Color], field1: &[Color]) -> GameState {
        let mut state = GameState::new("alice", "bob", GameRng::new(8));
        state.mandalas[0].mountain = cards(0, &[Red, Red, Black]);
        state.mandalas[0].fields[P0] = cards(10, field0);
        state.mandalas[0].fields[P1] = cards(20, field1);
        state.deck = cards(100, &[Yellow; 10]);
        state.last_mandala_player = Some(P0);
        state
    }

    #[test]
    fn test_begin_larger_field_claims_first() {
        let config = GameConfig::default();
        let mut state = completed(&[Orange], &[Yellow, Yellow, Green, Purple]);
        begin(&config, &mut state, 0);

        let d = state.destruction.unwrap();
        assert_eq!(state.phase, Phase::Destroying);
        assert_eq!(d.current_claimer, P1);
        assert_eq!(d.remaining_colors.iter().collect::<Vec<_>>(), vec![Black, Red]);
    }

    #[test]
    fn test_begin_tie_goes_to_non_completer() {
        let config = GameConfig::default();
        let mut state = completed(&[Orange, Yellow], &[Green, Purple]);
        state.last_mandala_player = Some(P1);
        begin(&config, &mut state, 0);
        assert_eq!(state.destruction.unwrap().current_claimer, P0);
    }

    #[test]
    fn test_claim_new_color_opens_river_and_fills_cup() {
        let config = GameConfig::default();
        let mut state = completed(&[Orange, Yellow, Green], &[Purple]);
        begin(&config, &mut state, 0);

        claim(&config, &mut state, P0, Red);

        let seat = state.player(P0);
        assert_eq!(seat.river.slot_of(Red), Some(0));
        assert_eq!(seat.cup.len(), 1);
        assert_eq!(state.mandalas[0].mountain.len(), 1);
        assert_eq!(state.destruction.unwrap().current_claimer, P1);
    }

    #[test]
    fn test_claim_known_color_all_to_cup() {
        let config = GameConfig::default();
        let mut state = completed(&[Orange, Yellow, Green], &[Purple]);
        state.players[P0].river.place(Card::new(99, Red));
        begin(&config, &mut state, 0);

        claim(&config, &mut state, P0, Red);
        assert_eq!(state.player(P0).cup.len(), 2);
        assert_eq!(state.player(P0).river.filled(), 1);
    }

    #[test]
    fn test_claim_without_field_is_lost() {
        let config = GameConfig::default();
        let mut state = completed(&[Orange, Yellow, Green, Purple], &[]);
        begin(&config, &mut state, 0);
        claim(&config, &mut state, P0, Black);

        claim(&config, &mut state, P1, Red);
        let seat = state.player(P1);
        assert_eq!(seat.river.filled(), 0);
        assert!(seat.cup.is_empty());
        // Two lost reds plus four field cards once destruction finished.
        assert_eq!(state.discard.len(), 6);
    }

    #[test]
    fn test_finish_reseeds_and_resumes() {
        let config = GameConfig::default();
        let mut state = completed(&[Orange, Yellow, Green], &[Purple]);
        state.current_player = P0;
        state.turn_number = 4;
        begin(&config, &mut state, 0);

        claim(&config, &mut state, P0, Red);
        claim(&config, &mut state, P1, Black);

        assert_eq!(state.phase, Phase::Playing);
        assert_eq!(state.destruction, None);
        assert!(state.mandalas[0].fields[P0].is_empty());
        assert!(state.mandalas[0].fields[P1].is_empty());
        assert_eq!(state.mandalas[0].mountain.len(), 2);
        assert_eq!(state.discard.len(), 4);
        assert_eq!(state.current_player, P1);
        assert_eq!(state.turn_number, 5);
    }

    #[test]
    fn test_finish_ends_when_triggered() {
        let config = GameConfig::default();
        let mut state = completed(&[Orange, Yellow, Green], &[Purple]);
        state.end_game_trigger = Some(EndGameTrigger::DeckExhausted);
        begin(&config, &mut state, 0);

        claim(&config, &mut state, P0, Red);
        claim(&config, &mut state, P1, Black);

        assert_eq!(state.phase, Phase::Ended);
        assert_eq!(state.destruction, None);
        assert!(state.mandalas[0].mountain.is_empty());
        assert_eq!(state.deck.len(), 10);
    }

    #[test]
    fn test_sixth_river_color_sets_trigger() {
        let config = GameConfig::default();
        let mut state = completed(&[Orange, Yellow, Green], &[Purple]);
        for (i, color) in [Black, Orange, Yellow, Green, Purple].into_iter().enumerate() {
            state.players[P0].river.place(Card::new(500 + i as u32, color));
        }
        begin(&config, &mut state, 0);

        claim(&config, &mut state, P0, Red);
        assert!(state.player(P0).river.is_full());
        assert_eq!(state.end_game_trigger, Some(EndGameTrigger::SixthRiverColor));

        claim(&config, &mut state, P1, Black);
        assert_eq!(state.phase, Phase::Ended);
    }

    #[test]
    fn test_empty_mountain_finishes_immediately() {
        let config = GameConfig::default();
        let mut state = completed(&[Black, Red, Orange], &[Yellow, Green, Purple]);
        state.mandalas[0].mountain.clear();
        begin(&config, &mut state, 0);

        assert_eq!(state.phase, Phase::Playing);
        assert_eq!(state.mandalas[0].mountain.len(), 2);
        assert_eq!(state.discard.len(), 6);
    }
}
