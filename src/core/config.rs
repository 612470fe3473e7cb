//! Game configuration.
//!
//! The defaults are the standard Mandala rules. Hosts can tweak the
//! numbers (for shorter test matches, for instance) through the `with_*`
//! builders or by loading JSON, then call [`GameConfig::validate`].

use serde::{Deserialize, Serialize};

use super::card::COLOR_COUNT;
use super::player::PLAYER_COUNT;
use super::state::MANDALA_COUNT;
use crate::error::ConfigError;

/// Numeric rules of a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Cards of each color in the deck.
    pub cards_per_color: usize,

    /// Cards dealt to each hand, and the hand size `build_mountain` refills toward.
    pub hand_size: usize,

    /// Face-down cards dealt to each cup.
    pub starting_cup: usize,

    /// Cards placed in a mountain at setup and after each destruction.
    pub mountain_seed: usize,

    /// Most cards drawn after a `build_mountain`.
    pub build_draw_limit: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            cards_per_color: 18,
            hand_size: 6,
            starting_cup: 2,
            mountain_seed: 2,
            build_draw_limit: 3,
        }
    }
}

impl GameConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Malformed(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn with_cards_per_color(mut self, count: usize) -> Self {
        self.cards_per_color = count;
        self
    }

    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    #[must_use]
    pub fn with_starting_cup(mut self, count: usize) -> Self {
        self.starting_cup = count;
        self
    }

    #[must_use]
    pub fn with_mountain_seed(mut self, count: usize) -> Self {
        self.mountain_seed = count;
        self
    }

    #[must_use]
    pub fn with_build_draw_limit(mut self, count: usize) -> Self {
        self.build_draw_limit = count;
        self
    }

    /// Total cards in the match. Conserved across every transition.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.cards_per_color * COLOR_COUNT
    }

    /// Cards consumed by the initial deal.
    #[must_use]
    pub fn setup_cards(&self) -> usize {
        PLAYER_COUNT * (self.hand_size + self.starting_cup) + MANDALA_COUNT * self.mountain_seed
    }

    /// Check that a match can be dealt and played with these numbers.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let minimums = [
            ("cards_per_color", self.cards_per_color, 1),
            ("hand_size", self.hand_size, 2),
            ("mountain_seed", self.mountain_seed, 1),
        ];
        for (field, value, min) in minimums {
            if value < min {
                return Err(ConfigError::TooSmall { field, min, value });
            }
        }

        if self.setup_cards() > self.total_cards() {
            return Err(ConfigError::DeckTooSmall {
                needed: self.setup_cards(),
                available: self.total_cards(),
            });
        }

        Ok(())
    }
}
