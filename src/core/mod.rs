//! Core engine types: cards, players, state, actions, RNG, configuration.
//!
//! Everything here is plain data. Rules live in `rules`, zone movement
//! helpers in `zones`.

pub mod card;
pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use card::{Card, CardId, Color, ColorSet, ALL_COLORS, COLOR_COUNT};
pub use player::{PlayerId, PlayerMap, PLAYER_COUNT};
pub use rng::{GameRng, GameRngState};
pub use config::GameConfig;
pub use action::{Action, ActionRecord, CardSelection};
pub use state::{
    Destruction, EndGameTrigger, GameState, Mandala, Phase, Player, River, MANDALA_COUNT,
    RIVER_SLOTS,
};
