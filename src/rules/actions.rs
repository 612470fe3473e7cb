//! Validation and execution of the four player actions.
//!
//! `validate` is side-effect free. `execute` assumes its input passed
//! `validate` and works on a clone, returning the new state; the input is
//! never touched. A validated card that has vanished by execution time is
//! an internal invariant breach and panics.

use rustc_hash::FxHashSet;
use tracing::debug;

use super::color::{can_play_color_to_field, can_play_color_to_mountain, is_mandala_complete};
use super::destruction;
use crate::core::action::{Action, ActionRecord};
use crate::core::card::{Card, CardId, Color};
use crate::core::config::GameConfig;
use crate::core::player::PlayerId;
use crate::core::state::{GameState, Mandala, Phase, Player};
use crate::error::{ActionError, ColorZone, Result};
use crate::zones::draw_cards;

/// Check whether `player` may take `action` in `state`.
pub fn validate(state: &GameState, player: PlayerId, action: &Action) -> Result<()> {
    match action {
        Action::BuildMountain {
            card_id,
            mandala_index,
        } => {
            require_turn(state, player)?;
            let mandala = mandala_at(state, *mandala_index)?;
            let card = state
                .player(player)
                .hand_card(*card_id)
                .ok_or(ActionError::CardNotInHand(*card_id))?;
            if !can_play_color_to_mountain(mandala, card.color) {
                return Err(ActionError::RuleOfColor {
                    color: card.color,
                    zone: ColorZone::Mountain,
                    mandala: *mandala_index,
                });
            }
            Ok(())
        }
        Action::GrowField {
            card_ids,
            mandala_index,
        } => {
            require_turn(state, player)?;
            let mandala = mandala_at(state, *mandala_index)?;
            let hand = state.player(player);
            let cards = select_from_hand(hand, card_ids)?;
            if cards.len() >= hand.hand.len() {
                return Err(ActionError::MustKeepOneCard);
            }
            let color = single_color(&cards)?;
            if !can_play_color_to_field(mandala, player, color) {
                return Err(ActionError::RuleOfColor {
                    color,
                    zone: ColorZone::Field,
                    mandala: *mandala_index,
                });
            }
            Ok(())
        }
        Action::DiscardRedraw { card_ids } => {
            require_turn(state, player)?;
            let cards = select_from_hand(state.player(player), card_ids)?;
            single_color(&cards)?;
            Ok(())
        }
        Action::ClaimColor { color } => {
            if state.phase != Phase::Destroying {
                return Err(ActionError::WrongPhase(state.phase));
            }
            let destruction = state.destruction.ok_or(ActionError::NoDestruction)?;
            if destruction.current_claimer != player {
                return Err(ActionError::NotYourClaim(player));
            }
            if !destruction.remaining_colors.contains(*color) {
                return Err(ActionError::ColorUnavailable(*color));
            }
            Ok(())
        }
    }
}

/// Apply a validated action, returning the resulting state.
#[must_use]
pub(crate) fn execute(
    config: &GameConfig,
    state: &GameState,
    player: PlayerId,
    action: &Action,
) -> GameState {
    let mut next = state.clone();
    next.history
        .push_back(ActionRecord::new(player, action.clone(), next.turn_number));

    match action {
        Action::BuildMountain {
            card_id,
            mandala_index,
        } => {
            let card = take_validated(&mut next, player, *card_id);
            next.mandalas[*mandala_index].mountain.push_back(card);
            next.last_mandala_player = Some(player);

            let hand_len = next.player(player).hand.len();
            let wanted = config
                .build_draw_limit
                .min(config.hand_size.saturating_sub(hand_len));
            refill_hand(&mut next, player, wanted);

            debug!(%player, card = %card_id, mandala = mandala_index, "built mountain");
            after_mandala_play(config, &mut next, *mandala_index);
        }
        Action::GrowField {
            card_ids,
            mandala_index,
        } => {
            for &id in card_ids {
                let card = take_validated(&mut next, player, id);
                next.mandalas[*mandala_index].fields[player].push_back(card);
            }
            next.last_mandala_player = Some(player);

            debug!(%player, cards = card_ids.len(), mandala = mandala_index, "grew field");
            after_mandala_play(config, &mut next, *mandala_index);
        }
        Action::DiscardRedraw { card_ids } => {
            for &id in card_ids {
                let card = take_validated(&mut next, player, id);
                next.discard.push_back(card);
            }
            refill_hand(&mut next, player, card_ids.len());

            debug!(%player, cards = card_ids.len(), "discarded and redrew");
            next.advance_turn();
        }
        Action::ClaimColor { color } => {
            destruction::claim(config, &mut next, player, *color);
        }
    }

    next
}

fn require_turn(state: &GameState, player: PlayerId) -> Result<()> {
    if state.phase != Phase::Playing {
        return Err(ActionError::WrongPhase(state.phase));
    }
    if state.current_player != player {
        return Err(ActionError::NotYourTurn(player));
    }
    Ok(())
}

fn mandala_at(state: &GameState, index: usize) -> Result<&Mandala> {
    state.mandala(index).ok_or(ActionError::InvalidMandala(index))
}

/// Resolve a non-empty, duplicate-free selection of hand cards.
fn select_from_hand(player: &Player, ids: &[CardId]) -> Result<Vec<Card>> {
    if ids.is_empty() {
        return Err(ActionError::NoCardsSelected);
    }
    let mut seen = FxHashSet::default();
    ids.iter()
        .map(|&id| {
            if !seen.insert(id) {
                return Err(ActionError::DuplicateCard(id));
            }
            player.hand_card(id).ok_or(ActionError::CardNotInHand(id))
        })
        .collect()
}

fn single_color(cards: &[Card]) -> Result<Color> {
    let color = cards.first().ok_or(ActionError::NoCardsSelected)?.color;
    if cards.iter().any(|c| c.color != color) {
        return Err(ActionError::MixedColors);
    }
    Ok(color)
}

fn take_validated(state: &mut GameState, player: PlayerId, id: CardId) -> Card {
    match state.player_mut(player).take_from_hand(id) {
        Some(card) => card,
        None => panic!("validated card {id} missing from {player}'s hand"),
    }
}

fn refill_hand(state: &mut GameState, player: PlayerId, count: usize) {
    let drawn = draw_cards(state, count);
    state.player_mut(player).hand.extend(drawn);
}

/// Completion check shared by mountain and field plays.
fn after_mandala_play(config: &GameConfig, state: &mut GameState, mandala_index: usize) {
    if is_mandala_complete(&state.mandalas[mandala_index]) {
        destruction::begin(config, state, mandala_index);
    } else {
        state.advance_turn();
    }
}
