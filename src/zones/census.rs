//! Zone census: where every card currently is.
//!
//! Rivers count too: each filled slot holds the card that opened it.
//! Cards are never created or destroyed mid-match, so the census total
//! must equal `GameConfig::total_cards` for every reachable state.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::card::{Card, CardId};
use crate::core::player::PlayerMap;
use crate::core::state::{GameState, MANDALA_COUNT};

/// Card counts per zone.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneCensus {
    pub deck: usize,
    pub discard: usize,
    pub hands: PlayerMap<usize>,
    pub cups: PlayerMap<usize>,
    pub rivers: PlayerMap<usize>,
    pub mountains: [usize; MANDALA_COUNT],
    pub fields: [PlayerMap<usize>; MANDALA_COUNT],
}

impl ZoneCensus {
    /// Count every zone of `state`.
    #[must_use]
    pub fn of(state: &GameState) -> Self {
        Self {
            deck: state.deck.len(),
            discard: state.discard.len(),
            hands: state.players.map(|_, p| p.hand.len()),
            cups: state.players.map(|_, p| p.cup.len()),
            rivers: state.players.map(|_, p| p.river.filled()),
            mountains: [state.mandalas[0].mountain.len(), state.mandalas[1].mountain.len()],
            fields: [
                state.mandalas[0].fields.map(|_, f| f.len()),
                state.mandalas[1].fields.map(|_, f| f.len()),
            ],
        }
    }

    /// Sum across all zones.
    #[must_use]
    pub fn total(&self) -> usize {
        let per_player = |m: &PlayerMap<usize>| m.iter().map(|(_, n)| n).sum::<usize>();
        self.deck
            + self.discard
            + per_player(&self.hands)
            + per_player(&self.cups)
            + per_player(&self.rivers)
            + self.mountains.iter().sum::<usize>()
            + self.fields.iter().map(per_player).sum::<usize>()
    }
}

/// Every card on the table, zone by zone.
pub fn all_cards(state: &GameState) -> impl Iterator<Item = &Card> {
    let players = state
        .players
        .iter()
        .flat_map(|(_, p)| p.hand.iter().chain(p.cup.iter()).chain(p.river.cards()));
    let mandalas = state.mandalas.iter().flat_map(|m| {
        m.mountain
            .iter()
            .chain(m.fields.iter().flat_map(|(_, f)| f.iter()))
    });
    state
        .deck
        .iter()
        .chain(state.discard.iter())
        .chain(players)
        .chain(mandalas)
}

/// First card id found in more than one place, if any.
#[must_use]
pub fn duplicate_card(state: &GameState) -> Option<CardId> {
    let mut seen = FxHashSet::default();
    all_cards(state).map(|c| c.id).find(|&id| !seen.insert(id))
}
