//! Game state.
//!
//! ## GameState
//!
//! The complete, canonical state of one match:
//! - Deck, discard pile
//! - Both players (hand, cup, river)
//! - Both mandalas (mountain, two fields)
//! - Phase, turn, end-game trigger, destruction record
//! - Action history and the RNG used for reshuffles
//!
//! Zones use `im` persistent vectors, so cloning a state is O(1) and a
//! transition that works on a clone never disturbs the state it started
//! from.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::ActionRecord;
use super::card::{colors_of, Card, CardId, Color, ColorSet, COLOR_COUNT};
use super::player::{PlayerId, PlayerMap};
use super::rng::GameRng;

/// Number of mandalas on the table.
pub const MANDALA_COUNT: usize = 2;

/// Slots in a river; one per color.
pub const RIVER_SLOTS: usize = COLOR_COUNT;

/// Match phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Players alternate building mountains, growing fields and redrawing.
    Playing,
    /// A completed mandala is being claimed color by color.
    Destroying,
    /// The match is over.
    Ended,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Playing => write!(f, "playing"),
            Phase::Destroying => write!(f, "destroying"),
            Phase::Ended => write!(f, "ended"),
        }
    }
}

/// Why the match is heading for its end.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndGameTrigger {
    /// The deck ran out and the discard pile was reshuffled into it.
    DeckExhausted,
    /// A player filled the last slot of their river.
    SixthRiverColor,
}

/// A player's six-slot scoring track.
///
/// Slots fill lowest index first and are never reassigned. Each slot holds
/// the card that opened it; the card's color is what the slot scores. A
/// color's slot index plus one is what each cup card of that color is worth.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct River([Option<Card>; RIVER_SLOTS]);

impl River {
    /// Slot index holding `color`, if any.
    #[must_use]
    pub fn slot_of(&self, color: Color) -> Option<usize> {
        self.0
            .iter()
            .position(|slot| slot.is_some_and(|card| card.color == color))
    }

    #[must_use]
    pub fn contains(&self, color: Color) -> bool {
        self.slot_of(color).is_some()
    }

    #[must_use]
    pub fn first_empty(&self) -> Option<usize> {
        self.0.iter().position(Option::is_none)
    }

    #[must_use]
    pub fn filled(&self) -> usize {
        self.0.iter().flatten().count()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.first_empty().is_none()
    }

    /// Place `card` in the first empty slot and return that slot.
    ///
    /// Returns `None` when the river is already full.
    pub fn place(&mut self, card: Card) -> Option<usize> {
        let slot = self.first_empty()?;
        self.0[slot] = Some(card);
        Some(slot)
    }

    /// Slot colors, lowest index first.
    #[must_use]
    pub fn slots(&self) -> [Option<Color>; RIVER_SLOTS] {
        self.0.map(|slot| slot.map(|card| card.color))
    }

    /// Cards currently placed.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.0.iter().flatten()
    }

    /// Colors currently placed.
    pub fn colors(&self) -> impl Iterator<Item = Color> + '_ {
        self.cards().map(|card| card.color)
    }
}

/// One seat's private and public holdings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Opaque identifier supplied by the host.
    pub id: String,

    /// Cards in hand, unique by id.
    pub hand: Vector<Card>,

    /// Scoring bin. The first `starting_cup_count` entries were dealt face down.
    pub cup: Vector<Card>,

    pub river: River,

    /// Number of face-down cards dealt into the cup at setup.
    pub starting_cup_count: usize,
}

impl Player {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            hand: Vector::new(),
            cup: Vector::new(),
            river: River::default(),
            starting_cup_count: 0,
        }
    }

    /// Find a hand card by id.
    #[must_use]
    pub fn hand_card(&self, id: CardId) -> Option<Card> {
        self.hand.iter().find(|c| c.id == id).copied()
    }

    /// Remove a hand card by id.
    pub fn take_from_hand(&mut self, id: CardId) -> Option<Card> {
        let pos = self.hand.iter().position(|c| c.id == id)?;
        Some(self.hand.remove(pos))
    }
}

/// A shared board zone: one mountain plus one field per player.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mandala {
    pub mountain: Vector<Card>,
    pub fields: PlayerMap<Vector<Card>>,
}

impl Mandala {
    #[must_use]
    pub fn field(&self, player: PlayerId) -> &Vector<Card> {
        &self.fields[player]
    }

    #[must_use]
    pub fn mountain_colors(&self) -> ColorSet {
        colors_of(&self.mountain)
    }

    #[must_use]
    pub fn field_colors(&self, player: PlayerId) -> ColorSet {
        colors_of(&self.fields[player])
    }

    /// Distinct colors anywhere in this mandala.
    #[must_use]
    pub fn colors(&self) -> ColorSet {
        PlayerId::all().fold(self.mountain_colors(), |acc, p| {
            acc.union(self.field_colors(p))
        })
    }

    /// Total cards in the mountain and both fields.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.mountain.len() + self.fields.iter().map(|(_, f)| f.len()).sum::<usize>()
    }
}

/// Progress of a mandala destruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Destruction {
    pub mandala_index: usize,
    pub current_claimer: PlayerId,
    /// Mountain colors not yet claimed.
    pub remaining_colors: ColorSet,
}

/// Complete state of one match.
///
/// Never mutated once handed out: every transition clones and returns a
/// fresh value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Draw pile; cards are drawn from the front.
    pub deck: Vector<Card>,

    pub discard: Vector<Card>,

    pub players: PlayerMap<Player>,

    pub mandalas: [Mandala; MANDALA_COUNT],

    /// Seat whose turn it is while playing.
    pub current_player: PlayerId,

    pub phase: Phase,

    /// Set once, never overwritten.
    pub end_game_trigger: Option<EndGameTrigger>,

    pub destruction: Option<Destruction>,

    /// Seat that made the most recent mountain or field play.
    pub last_mandala_player: Option<PlayerId>,

    /// Turn number (starts at 1).
    pub turn_number: u32,

    /// Every accepted action, oldest first.
    pub history: Vector<ActionRecord>,

    /// Source of randomness for mid-match reshuffles.
    pub rng: GameRng,
}

impl GameState {
    /// Create an empty table for two players. Nothing is dealt yet.
    #[must_use]
    pub fn new(first_id: impl Into<String>, second_id: impl Into<String>, rng: GameRng) -> Self {
        Self {
            deck: Vector::new(),
            discard: Vector::new(),
            players: PlayerMap::from_pair(Player::new(first_id), Player::new(second_id)),
            mandalas: Default::default(),
            current_player: PlayerId::FIRST,
            phase: Phase::Playing,
            end_game_trigger: None,
            destruction: None,
            last_mandala_player: None,
            turn_number: 1,
            history: Vector::new(),
            rng,
        }
    }

    #[must_use]
    pub fn player(&self, player: PlayerId) -> &Player {
        &self.players[player]
    }

    pub fn player_mut(&mut self, player: PlayerId) -> &mut Player {
        &mut self.players[player]
    }

    /// Look up a mandala by index.
    #[must_use]
    pub fn mandala(&self, index: usize) -> Option<&Mandala> {
        self.mandalas.get(index)
    }

    /// Set the end-game trigger unless one is already set.
    ///
    /// Returns true if this call set it.
    pub fn trigger_end(&mut self, trigger: EndGameTrigger) -> bool {
        if self.end_game_trigger.is_some() {
            return false;
        }
        self.end_game_trigger = Some(trigger);
        true
    }

    /// Seat expected to act next: the claimer during a destruction,
    /// otherwise the current player.
    #[must_use]
    pub fn acting_player(&self) -> PlayerId {
        match (self.phase, self.destruction) {
            (Phase::Destroying, Some(d)) => d.current_claimer,
            _ => self.current_player,
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == Phase::Ended
    }

    /// Pass the turn to the other seat.
    pub fn advance_turn(&mut self) {
        self.current_player = self.current_player.opponent();
        self.turn_number += 1;
    }
}
