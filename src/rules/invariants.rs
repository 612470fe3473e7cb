//! Whole-state integrity checks.
//!
//! Not used on the hot path. Hosts can run these after loading a saved
//! state; the test suite runs them after every transition.

use thiserror::Error;

use super::color::rule_of_color_violation;
use crate::core::card::{CardId, Color, ColorSet};
use crate::core::config::GameConfig;
use crate::core::player::PlayerId;
use crate::core::state::{GameState, Phase};
use crate::zones::{duplicate_card, ZoneCensus};

/// A broken structural invariant.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("expected {expected} cards on the table, found {found}")]
    CardCount { expected: usize, found: usize },

    #[error("card {0} is in more than one zone")]
    DuplicateCard(CardId),

    #[error("rule of color broken in mandala {mandala} by {color}")]
    RuleOfColor { mandala: usize, color: Color },

    #[error("{player}'s river holds {color} twice")]
    RiverDuplicate { player: PlayerId, color: Color },

    #[error("phase {phase} does not match destruction record")]
    PhaseMismatch { phase: Phase },
}

/// Check conservation, the Rule of Color, river uniqueness and phase consistency.
pub fn check_invariants(config: &GameConfig, state: &GameState) -> Result<(), InvariantViolation> {
    let found = ZoneCensus::of(state).total();
    if found != config.total_cards() {
        return Err(InvariantViolation::CardCount {
            expected: config.total_cards(),
            found,
        });
    }
    if let Some(id) = duplicate_card(state) {
        return Err(InvariantViolation::DuplicateCard(id));
    }

    for (mandala, m) in state.mandalas.iter().enumerate() {
        if let Some(color) = rule_of_color_violation(m) {
            return Err(InvariantViolation::RuleOfColor { mandala, color });
        }
    }

    for (player, seat) in state.players.iter() {
        let mut seen = ColorSet::empty();
        for color in seat.river.colors() {
            if seen.contains(color) {
                return Err(InvariantViolation::RiverDuplicate { player, color });
            }
            seen.insert(color);
        }
    }

    let destroying = state.phase == Phase::Destroying;
    if destroying != state.destruction.is_some() {
        return Err(InvariantViolation::PhaseMismatch { phase: state.phase });
    }

    Ok(())
}
