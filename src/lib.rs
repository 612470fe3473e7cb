//! # mandala-engine
//!
//! A deterministic rules engine for Mandala, a two-player card game.
//!
//! ## Design Principles
//!
//! 1. **Pure transitions**: every action maps a state value to a new state
//!    value. Input states are never modified, so earlier snapshots stay
//!    valid.
//!
//! 2. **Closed action set**: `Action` is an enum matched exhaustively.
//!
//! 3. **Recoverable rejections**: rule violations come back as
//!    `ActionError` and leave the caller's state as it was.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) cloning via `im-rs`.
//!
//! - **Deterministic RNG**: the state carries its own ChaCha8 RNG, so the
//!   same state and action always produce the same result.
//!
//! - **No transport**: rooms, sockets and JSON framing belong to the host.
//!   The host must serialize actions per match.
//!
//! ## Modules
//!
//! - `core`: cards, players, state, actions, RNG, configuration
//! - `zones`: deck building, drawing, card census
//! - `rules`: Rule of Color, action execution, destruction, scoring
//! - `view`: per-player redaction
//! - `sim`: random playouts
//!
//! ## Example
//!
//! ```
//! use mandala_engine::{dispatch, initialize_with_seed, redact, valid_actions, PlayerId};
//!
//! let state = initialize_with_seed("alice", "bob", 42);
//! let action = valid_actions(&state, PlayerId::FIRST).into_vec().remove(0);
//! let next = dispatch(&state, PlayerId::FIRST, &action).unwrap();
//!
//! assert_eq!(next.current_player, PlayerId::SECOND);
//! let view = redact(&next, PlayerId::SECOND);
//! assert_eq!(view.deck_len(), next.deck.len());
//! ```

pub mod core;
pub mod error;
pub mod rules;
pub mod sim;
pub mod view;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, Card, CardId, Color, ColorSet, Destruction, EndGameTrigger, GameConfig,
    GameRng, GameState, Mandala, Phase, Player, PlayerId, PlayerMap, River,
};

pub use crate::error::{ActionError, ConfigError};

pub use crate::rules::{GameResult, MandalaRules, RulesEngine, ValidActions};

pub use crate::view::{CardSlot, PlayerView, Redact};

use tracing::instrument;

/// Deal a new match with a random seed.
#[must_use]
pub fn initialize(first_id: &str, second_id: &str) -> GameState {
    MandalaRules::default().initialize(first_id, second_id, GameRng::from_entropy())
}

/// Deal a reproducible match.
#[must_use]
pub fn initialize_with_seed(first_id: &str, second_id: &str, seed: u64) -> GameState {
    MandalaRules::default().initialize(first_id, second_id, GameRng::new(seed))
}

/// Validate and apply one action under the standard rules.
///
/// On `Err` nothing changed: keep using `state`.
#[instrument(skip(state))]
pub fn dispatch(state: &GameState, player: PlayerId, action: &Action) -> error::Result<GameState> {
    MandalaRules::default().apply_action(state, player, action)
}

/// Check an action without applying it.
pub fn validate(state: &GameState, player: PlayerId, action: &Action) -> error::Result<()> {
    rules::actions::validate(state, player, action)
}

/// The match as `viewer` may see it.
#[must_use]
pub fn redact(state: &GameState, viewer: PlayerId) -> PlayerView {
    state.redact(viewer)
}

/// Current score of each seat.
#[must_use]
pub fn score(state: &GameState) -> PlayerMap<u32> {
    rules::score(state)
}

/// Winner and scores, once the match has ended.
#[must_use]
pub fn winner(state: &GameState) -> Option<GameResult> {
    rules::get_winner(state)
}

/// Legal actions for `player`, grouped by kind. Advisory only.
#[must_use]
pub fn valid_actions(state: &GameState, player: PlayerId) -> ValidActions {
    rules::valid_actions(state, player)
}
