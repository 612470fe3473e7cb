//! Actions a player can submit.
//!
//! The set is closed: four variants, matched exhaustively by the rules
//! engine. On the wire an action is a tagged JSON object:
//!
//! ```
//! use mandala_engine::core::{Action, CardId};
//!
//! let action = Action::from_json(r#"{"type": "build_mountain", "card_id": 12, "mandala_index": 0}"#).unwrap();
//! assert_eq!(action, Action::BuildMountain { card_id: CardId(12), mandala_index: 0 });
//!
//! assert!(Action::from_json(r#"{"type": "steal_cup"}"#).is_err());
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::{CardId, Color};
use super::player::PlayerId;
use crate::error::ActionError;

/// Card selection for multi-card actions. Inline for the common case of a few cards.
pub type CardSelection = SmallVec<[CardId; 4]>;

/// A player action.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Play one card from hand into a mandala's shared mountain.
    BuildMountain { card_id: CardId, mandala_index: usize },

    /// Play one or more same-colored cards into your own field of a mandala.
    GrowField {
        card_ids: CardSelection,
        mandala_index: usize,
    },

    /// Discard same-colored cards and draw as many replacements.
    DiscardRedraw { card_ids: CardSelection },

    /// Take every mountain card of one color from the mandala being destroyed.
    ClaimColor { color: Color },
}

impl Action {
    /// Parse a transport JSON payload.
    ///
    /// Unknown tags and malformed payloads are rejected as
    /// [`ActionError::UnknownAction`].
    pub fn from_json(json: &str) -> Result<Self, ActionError> {
        serde_json::from_str(json).map_err(|e| ActionError::UnknownAction(e.to_string()))
    }

    /// Convenience constructor for `GrowField`.
    #[must_use]
    pub fn grow_field(card_ids: &[CardId], mandala_index: usize) -> Self {
        Action::GrowField {
            card_ids: SmallVec::from_slice(card_ids),
            mandala_index,
        }
    }

    /// Convenience constructor for `DiscardRedraw`.
    #[must_use]
    pub fn discard_redraw(card_ids: &[CardId]) -> Self {
        Action::DiscardRedraw {
            card_ids: SmallVec::from_slice(card_ids),
        }
    }

    /// Wire name of this action's variant.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Action::BuildMountain { .. } => "build_mountain",
            Action::GrowField { .. } => "grow_field",
            Action::DiscardRedraw { .. } => "discard_redraw",
            Action::ClaimColor { .. } => "claim_color",
        }
    }
}

/// A recorded action with metadata for history tracking.
///
/// Used for replay and debugging.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Turn number when the action was taken.
    pub turn: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(player: PlayerId, action: Action, turn: u32) -> Self {
        Self {
            player,
            action,
            turn,
        }
    }
}
