//! Player views: what one seat is allowed to see.
//!
//! Hidden from the observer:
//! - the opponent's hand (count stays visible)
//! - the opponent's face-down starting cup cards (cards claimed later are shown)
//! - the whole deck (length stays visible)
//! - the RNG, which would let the deck order be predicted
//!
//! Redacting is idempotent: redacting a view again for the same seat
//! yields the same view.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::action::ActionRecord;
use crate::core::card::Card;
use crate::core::player::{PlayerId, PlayerMap};
use crate::core::state::{
    Destruction, EndGameTrigger, GameState, Mandala, Phase, Player, River, MANDALA_COUNT,
};

/// A card as one observer sees it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardSlot {
    Known(Card),
    Hidden,
}

impl CardSlot {
    #[must_use]
    pub fn card(&self) -> Option<Card> {
        match self {
            CardSlot::Known(card) => Some(*card),
            CardSlot::Hidden => None,
        }
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        matches!(self, CardSlot::Hidden)
    }
}

/// One seat as seen by an observer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatView {
    pub id: String,
    pub hand: Vector<CardSlot>,
    pub cup: Vector<CardSlot>,
    pub river: River,
    pub starting_cup_count: usize,
}

impl SeatView {
    fn reveal(player: &Player) -> Self {
        Self {
            id: player.id.clone(),
            hand: player.hand.iter().copied().map(CardSlot::Known).collect(),
            cup: player.cup.iter().copied().map(CardSlot::Known).collect(),
            river: player.river,
            starting_cup_count: player.starting_cup_count,
        }
    }

    /// Hide what an opponent may not see.
    fn conceal(&self) -> Self {
        let face_down = self.starting_cup_count;
        Self {
            id: self.id.clone(),
            hand: self.hand.iter().map(|_| CardSlot::Hidden).collect(),
            cup: self
                .cup
                .iter()
                .enumerate()
                .map(|(i, slot)| if i < face_down { CardSlot::Hidden } else { *slot })
                .collect(),
            river: self.river,
            starting_cup_count: self.starting_cup_count,
        }
    }
}

/// A safe-to-transmit snapshot of a match for one observer.
///
/// Cannot be fed back into the rules engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub viewer: PlayerId,
    pub deck: Vector<CardSlot>,
    pub discard: Vector<Card>,
    pub players: PlayerMap<SeatView>,
    pub mandalas: [Mandala; MANDALA_COUNT],
    pub current_player: PlayerId,
    pub phase: Phase,
    pub end_game_trigger: Option<EndGameTrigger>,
    pub destruction: Option<Destruction>,
    pub last_mandala_player: Option<PlayerId>,
    pub turn_number: u32,
    pub history: Vector<ActionRecord>,
}

impl PlayerView {
    /// Number of cards left in the deck.
    #[must_use]
    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    #[must_use]
    pub fn seat(&self, player: PlayerId) -> &SeatView {
        &self.players[player]
    }
}

/// Produce the view of a match for one observer.
pub trait Redact {
    fn redact(&self, viewer: PlayerId) -> PlayerView;
}

impl Redact for PlayerView {
    fn redact(&self, viewer: PlayerId) -> PlayerView {
        let players = self.players.map(|seat, view| {
            if seat == viewer {
                view.clone()
            } else {
                view.conceal()
            }
        });
        PlayerView {
            viewer,
            deck: self.deck.iter().map(|_| CardSlot::Hidden).collect(),
            players,
            ..self.clone()
        }
    }
}

impl Redact for GameState {
    fn redact(&self, viewer: PlayerId) -> PlayerView {
        let open = PlayerView {
            viewer,
            deck: self.deck.iter().copied().map(CardSlot::Known).collect(),
            discard: self.discard.clone(),
            players: self.players.map(|_, p| SeatView::reveal(p)),
            mandalas: self.mandalas.clone(),
            current_player: self.current_player,
            phase: self.phase,
            end_game_trigger: self.end_game_trigger,
            destruction: self.destruction,
            last_mandala_player: self.last_mandala_player,
            turn_number: self.turn_number,
            history: self.history.clone(),
        };
        open.redact(viewer)
    }
}
