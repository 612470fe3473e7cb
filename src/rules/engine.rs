//! Rules engine trait and the Mandala implementation.
//!
//! The engine is a set of pure functions over `GameState` values:
//! - `initialize`: deal a new match
//! - `validate` / `apply_action`: check and execute one action
//! - `legal_actions`: advisory enumeration for UIs and bots
//! - `is_terminal`: winner of a finished match

use tracing::{debug, instrument};

use super::actions;
use super::legal::{valid_actions, ValidActions};
use super::scoring::{get_winner, GameResult};
use crate::core::action::Action;
use crate::core::config::GameConfig;
use crate::core::player::PlayerId;
use crate::core::rng::GameRng;
use crate::core::state::{GameState, MANDALA_COUNT};
use crate::error::Result;
use crate::zones::{create_deck, draw_cards, shuffle_deck};

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `apply_action` must be deterministic given the state (all randomness
///   comes from the state's RNG) and must never modify its input
/// - `legal_actions`: return empty if the player can't act
/// - `is_terminal`: return None if the match continues
pub trait RulesEngine {
    /// Get the game configuration.
    fn config(&self) -> &GameConfig;

    /// Deal a new match.
    fn initialize(&self, first_id: &str, second_id: &str, rng: GameRng) -> GameState;

    /// Check an action without applying it.
    fn validate(&self, state: &GameState, player: PlayerId, action: &Action) -> Result<()>;

    /// Validate and apply an action, returning the new state.
    ///
    /// On rejection the caller's state is untouched.
    fn apply_action(&self, state: &GameState, player: PlayerId, action: &Action)
        -> Result<GameState>;

    /// Legal actions for a player, grouped by kind.
    fn legal_actions(&self, state: &GameState, player: PlayerId) -> ValidActions;

    /// The result if the match is over.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult>;
}

/// The standard Mandala rules.
#[derive(Clone, Debug, Default)]
pub struct MandalaRules {
    config: GameConfig,
}

impl MandalaRules {
    /// Rules with a custom configuration.
    ///
    /// The config should already have passed `GameConfig::validate`.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }
}

impl RulesEngine for MandalaRules {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    #[instrument(skip(self, rng))]
    fn initialize(&self, first_id: &str, second_id: &str, mut rng: GameRng) -> GameState {
        let deck = shuffle_deck(&create_deck(&self.config), &mut rng);
        let mut state = GameState::new(first_id, second_id, rng);
        state.deck = deck;

        for player in PlayerId::all() {
            let hand = draw_cards(&mut state, self.config.hand_size);
            state.player_mut(player).hand = hand.into_iter().collect();
        }
        for player in PlayerId::all() {
            let cup = draw_cards(&mut state, self.config.starting_cup);
            let seat = state.player_mut(player);
            seat.starting_cup_count = cup.len();
            seat.cup = cup.into_iter().collect();
        }
        for index in 0..MANDALA_COUNT {
            let seed = draw_cards(&mut state, self.config.mountain_seed);
            state.mandalas[index].mountain = seed.into_iter().collect();
        }

        debug!(seed = state.rng.seed(), deck = state.deck.len(), "match dealt");
        state
    }

    fn validate(&self, state: &GameState, player: PlayerId, action: &Action) -> Result<()> {
        actions::validate(state, player, action)
    }

    #[instrument(skip(self, state), fields(phase = %state.phase, turn = state.turn_number))]
    fn apply_action(
        &self,
        state: &GameState,
        player: PlayerId,
        action: &Action,
    ) -> Result<GameState> {
        if let Err(err) = actions::validate(state, player, action) {
            debug!(%err, "action rejected");
            return Err(err);
        }
        Ok(actions::execute(&self.config, state, player, action))
    }

    fn legal_actions(&self, state: &GameState, player: PlayerId) -> ValidActions {
        valid_actions(state, player)
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        get_winner(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::Phase;
    use crate::error::ActionError;
    use crate::rules::check_invariants;

    #[test]
    fn test_initialize_deals_standard_layout() {
        let rules = MandalaRules::default();
        let state = rules.initialize("alice", "bob", GameRng::new(42));

        for (_, seat) in state.players.iter() {
            assert_eq!(seat.hand.len(), 6);
            assert_eq!(seat.cup.len(), 2);
            assert_eq!(seat.starting_cup_count, 2);
        }
        for mandala in &state.mandalas {
            assert_eq!(mandala.mountain.len(), 2);
        }
        assert_eq!(state.deck.len(), 88);
        assert_eq!(state.phase, Phase::Playing);
        assert_eq!(state.current_player, PlayerId::FIRST);
        assert_eq!(state.turn_number, 1);
        assert_eq!(state.player(PlayerId::SECOND).id, "bob");
        assert_eq!(check_invariants(rules.config(), &state), Ok(()));
    }

    #[test]
    fn test_initialize_is_deterministic_per_seed() {
        let rules = MandalaRules::default();
        let a = rules.initialize("a", "b", GameRng::new(7));
        let b = rules.initialize("a", "b", GameRng::new(7));
        let c = rules.initialize("a", "b", GameRng::new(8));
        assert_eq!(a, b);
        assert_ne!(a.deck, c.deck);
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::default()
            .with_cards_per_color(5)
            .with_hand_size(3)
            .with_starting_cup(1)
            .with_mountain_seed(1);
        let rules = MandalaRules::new(config);
        let state = rules.initialize("a", "b", GameRng::new(1));

        assert_eq!(state.player(PlayerId::FIRST).hand.len(), 3);
        assert_eq!(state.deck.len(), 30 - 10);
        assert_eq!(check_invariants(rules.config(), &state), Ok(()));
    }

    #[test]
    fn test_apply_rejection_leaves_state() {
        let rules = MandalaRules::default();
        let state = rules.initialize("a", "b", GameRng::new(3));
        let before = state.clone();

        let card = state.player(PlayerId::SECOND).hand[0];
        let result = rules.apply_action(
            &state,
            PlayerId::SECOND,
            &Action::BuildMountain {
                card_id: card.id,
                mandala_index: 0,
            },
        );

        assert_eq!(result, Err(ActionError::NotYourTurn(PlayerId::SECOND)));
        assert_eq!(state, before);
    }

    #[test]
    fn test_apply_rejects_unknown_mandala() {
        let rules = MandalaRules::default();
        let state = rules.initialize("a", "b", GameRng::new(4));
        let hand = &state.player(PlayerId::FIRST).hand;

        let build = Action::BuildMountain {
            card_id: hand[0].id,
            mandala_index: 7,
        };
        let grow = Action::grow_field(&[hand[0].id], 2);

        for (action, index) in [(build, 7), (grow, 2)] {
            assert_eq!(
                rules.apply_action(&state, PlayerId::FIRST, &action),
                Err(ActionError::InvalidMandala(index))
            );
        }
    }

    #[test]
    fn test_apply_every_legal_opening() {
        let rules = MandalaRules::default();
        let state = rules.initialize("a", "b", GameRng::new(5));

        for action in rules.legal_actions(&state, PlayerId::FIRST).iter() {
            let next = rules.apply_action(&state, PlayerId::FIRST, action).unwrap();
            assert_eq!(check_invariants(rules.config(), &next), Ok(()), "{action:?}");
            assert_eq!(next.history.len(), 1);
        }
        assert!(state.history.is_empty());
    }
}
