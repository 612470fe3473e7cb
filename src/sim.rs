//! Random playouts.
//!
//! Drives a match by picking uniformly among the enumerated legal actions
//! of whichever seat must act. Used for whole-game tests, benchmarks and
//! as a trivial bot.

use tracing::{debug, warn};

use crate::core::action::Action;
use crate::core::rng::GameRng;
use crate::core::state::GameState;
use crate::rules::RulesEngine;

/// Picks a uniformly random legal action.
#[derive(Clone, Debug)]
pub struct RandomPlayer {
    rng: GameRng,
}

impl RandomPlayer {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    /// Choose an action for the seat that must act, or `None` if it has none.
    pub fn choose<E: RulesEngine>(&mut self, engine: &E, state: &GameState) -> Option<Action> {
        let actions = engine
            .legal_actions(state, state.acting_player())
            .into_vec();
        self.rng.choose(&actions).cloned()
    }
}

/// How a playout stopped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlayoutEnd {
    /// The match ended normally.
    Finished,
    /// The acting seat had no legal action.
    Stuck,
    /// The step cap was reached.
    StepLimit,
}

/// Final state of a playout plus every state passed through.
#[derive(Clone, Debug)]
pub struct Playout {
    pub states: Vec<GameState>,
    pub end: PlayoutEnd,
}

impl Playout {
    /// The state the playout stopped in.
    #[must_use]
    pub fn last(&self) -> &GameState {
        // Always holds at least the starting state.
        &self.states[self.states.len() - 1]
    }

    /// Number of actions applied.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.states.len() - 1
    }
}

/// Play random actions from `start` until the match ends, a seat is stuck,
/// or `max_steps` actions have been applied.
pub fn play_out<E: RulesEngine>(
    engine: &E,
    start: GameState,
    player: &mut RandomPlayer,
    max_steps: usize,
) -> Playout {
    let mut states = vec![start];

    loop {
        let state = &states[states.len() - 1];
        if engine.is_terminal(state).is_some() {
            return Playout { states, end: PlayoutEnd::Finished };
        }
        if states.len() > max_steps {
            return Playout { states, end: PlayoutEnd::StepLimit };
        }

        let Some(action) = player.choose(engine, state) else {
            debug!(turn = state.turn_number, "acting seat has no legal action");
            return Playout { states, end: PlayoutEnd::Stuck };
        };

        match engine.apply_action(state, state.acting_player(), &action) {
            Ok(next) => states.push(next),
            Err(err) => {
                warn!(%err, ?action, "enumerated action was rejected");
                return Playout { states, end: PlayoutEnd::Stuck };
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::MandalaRules;

    #[test]
    fn test_playout_is_reproducible() {
        let rules = MandalaRules::default();
        let start = rules.initialize("a", "b", GameRng::new(21));

        let a = play_out(&rules, start.clone(), &mut RandomPlayer::new(1), 500);
        let b = play_out(&rules, start, &mut RandomPlayer::new(1), 500);

        assert_eq!(a.steps(), b.steps());
        assert_eq!(a.last(), b.last());
    }

    #[test]
    fn test_step_limit() {
        let rules = MandalaRules::default();
        let start = rules.initialize("a", "b", GameRng::new(2));
        let playout = play_out(&rules, start, &mut RandomPlayer::new(2), 3);

        assert_eq!(playout.end, PlayoutEnd::StepLimit);
        assert_eq!(playout.steps(), 3);
    }
}
