//! Error types for the Mandala engine.
//!
//! Every expected rule violation is an [`ActionError`]: the action is
//! rejected and the caller keeps the state it already holds. Internal
//! invariant breaches are not represented here; they panic.

use thiserror::Error;

use crate::core::card::{CardId, Color};
use crate::core::player::PlayerId;
use crate::core::state::Phase;

/// Where a rule-of-color breach would have put the card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorZone {
    Mountain,
    Field,
}

impl std::fmt::Display for ColorZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorZone::Mountain => write!(f, "mountain"),
            ColorZone::Field => write!(f, "field"),
        }
    }
}

/// A recoverable rejection of a submitted action.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ActionError {
    #[error("action not allowed during the {0} phase")]
    WrongPhase(Phase),

    #[error("it is not {0}'s turn")]
    NotYourTurn(PlayerId),

    #[error("card {0} is not in your hand")]
    CardNotInHand(CardId),

    #[error("card {0} was selected more than once")]
    DuplicateCard(CardId),

    #[error("no cards selected")]
    NoCardsSelected,

    #[error("all selected cards must share one color")]
    MixedColors,

    #[error("mandala {0} does not exist")]
    InvalidMandala(usize),

    #[error("rule of color: {color} cannot be played to the {zone} of mandala {mandala}")]
    RuleOfColor {
        color: Color,
        zone: ColorZone,
        mandala: usize,
    },

    #[error("must keep at least one card in hand")]
    MustKeepOneCard,

    #[error("no mandala is being destroyed")]
    NoDestruction,

    #[error("it is not {0}'s claim turn")]
    NotYourClaim(PlayerId),

    #[error("{0} is not available to claim")]
    ColorUnavailable(Color),

    #[error("unknown action: {0}")]
    UnknownAction(String),
}

/// Invalid engine configuration.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{field} must be at least {min}, got {value}")]
    TooSmall {
        field: &'static str,
        min: usize,
        value: usize,
    },

    #[error("setup needs {needed} cards but the deck only has {available}")]
    DeckTooSmall { needed: usize, available: usize },

    #[error("malformed config: {0}")]
    Malformed(String),
}

pub type Result<T> = std::result::Result<T, ActionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_of_color_message() {
        let err = ActionError::RuleOfColor {
            color: Color::Red,
            zone: ColorZone::Mountain,
            mandala: 1,
        };
        assert_eq!(
            err.to_string(),
            "rule of color: red cannot be played to the mountain of mandala 1"
        );
    }

    #[test]
    fn test_must_keep_message() {
        assert_eq!(
            ActionError::MustKeepOneCard.to_string(),
            "must keep at least one card in hand"
        );
    }
}
