//! Enumeration of currently legal actions.
//!
//! Advisory only, for UIs and bots: `dispatch` re-validates whatever it is
//! given. Multi-card selections are enumerated as prefixes of each color's
//! run in hand order (one card, two cards, ...), not as every subset.

use serde::{Deserialize, Serialize};

use super::color::{can_play_color_to_field, can_play_color_to_mountain};
use crate::core::action::Action;
use crate::core::card::{CardId, ALL_COLORS};
use crate::core::player::PlayerId;
use crate::core::state::{GameState, Phase, MANDALA_COUNT};

/// Legal actions grouped by kind.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidActions {
    pub build_mountain: Vec<Action>,
    pub grow_field: Vec<Action>,
    pub discard_redraw: Vec<Action>,
    pub claim_color: Vec<Action>,
}

impl ValidActions {
    /// Every action, in group order.
    pub fn iter(&self) -> impl Iterator<Item = &Action> {
        self.build_mountain
            .iter()
            .chain(&self.grow_field)
            .chain(&self.discard_redraw)
            .chain(&self.claim_color)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.build_mountain.len()
            + self.grow_field.len()
            + self.discard_redraw.len()
            + self.claim_color.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<Action> {
        let mut all = self.build_mountain;
        all.extend(self.grow_field);
        all.extend(self.discard_redraw);
        all.extend(self.claim_color);
        all
    }
}

/// Every action `player` could legally take right now.
#[must_use]
pub fn valid_actions(state: &GameState, player: PlayerId) -> ValidActions {
    let mut out = ValidActions::default();

    match state.phase {
        Phase::Playing if state.current_player == player => {
            playing_actions(state, player, &mut out);
        }
        Phase::Destroying => {
            if let Some(d) = state.destruction.filter(|d| d.current_claimer == player) {
                out.claim_color = d
                    .remaining_colors
                    .iter()
                    .map(|color| Action::ClaimColor { color })
                    .collect();
            }
        }
        _ => {}
    }

    out
}

fn playing_actions(state: &GameState, player: PlayerId, out: &mut ValidActions) {
    let hand = &state.player(player).hand;

    for card in hand {
        for (mandala_index, mandala) in state.mandalas.iter().enumerate() {
            if can_play_color_to_mountain(mandala, card.color) {
                out.build_mountain.push(Action::BuildMountain {
                    card_id: card.id,
                    mandala_index,
                });
            }
        }
    }

    for color in ALL_COLORS {
        let run: Vec<CardId> = hand
            .iter()
            .filter(|c| c.color == color)
            .map(|c| c.id)
            .collect();
        if run.is_empty() {
            continue;
        }

        let max_field = run.len().min(hand.len() - 1);
        for mandala_index in 0..MANDALA_COUNT {
            if !can_play_color_to_field(&state.mandalas[mandala_index], player, color) {
                continue;
            }
            for count in 1..=max_field {
                out.grow_field
                    .push(Action::grow_field(&run[..count], mandala_index));
            }
        }

        for count in 1..=run.len() {
            out.discard_redraw.push(Action::discard_redraw(&run[..count]));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::{Card, Color};
    use crate::core::rng::GameRng;
    use crate::core::state::Destruction;
    use crate::rules::actions::validate;

    fn table(hand: &[Color]) -> GameState {
        let mut state = GameState::new("a", "b", GameRng::new(1));
        state.players[PlayerId::FIRST].hand = hand
            .iter()
            .enumerate()
            .map(|(i, &c)| Card::new(i as u32, c))
            .collect();
        state
    }

    #[test]
    fn test_counts_on_open_table() {
        // Two reds, one black; both mandalas empty.
        let state = table(&[Color::Red, Color::Red, Color::Black]);
        let actions = valid_actions(&state, PlayerId::FIRST);

        assert_eq!(actions.build_mountain.len(), 3 * 2);
        // Red: prefixes 1..=2 per mandala; black: prefix 1 per mandala.
        assert_eq!(actions.grow_field.len(), 2 * 2 + 2);
        assert_eq!(actions.discard_redraw.len(), 2 + 1);
        assert!(actions.claim_color.is_empty());
    }

    #[test]
    fn test_single_color_hand_keeps_one() {
        let state = table(&[Color::Green, Color::Green, Color::Green]);
        let actions = valid_actions(&state, PlayerId::FIRST);

        // Prefixes of length 1 and 2 only, on each mandala.
        assert_eq!(actions.grow_field.len(), 4);
        assert_eq!(actions.discard_redraw.len(), 3);
    }

    #[test]
    fn test_filtered_by_rule_of_color() {
        let mut state = table(&[Color::Red, Color::Black]);
        state.mandalas[0].fields[PlayerId::SECOND].push_back(Card::new(50, Color::Red));

        let actions = valid_actions(&state, PlayerId::FIRST);
        assert!(!actions.build_mountain.contains(&Action::BuildMountain {
            card_id: CardId(0),
            mandala_index: 0
        }));
        assert!(!actions
            .grow_field
            .contains(&Action::grow_field(&[CardId(0)], 0)));
    }

    #[test]
    fn test_every_enumerated_action_validates() {
        let mut state = table(&[Color::Red, Color::Red, Color::Black, Color::Purple]);
        state.mandalas[1].mountain.push_back(Card::new(60, Color::Purple));
        state.mandalas[0].fields[PlayerId::SECOND].push_back(Card::new(61, Color::Black));

        let actions = valid_actions(&state, PlayerId::FIRST);
        assert!(!actions.is_empty());
        for action in actions.iter() {
            assert_eq!(validate(&state, PlayerId::FIRST, action), Ok(()), "{action:?}");
        }
    }

    #[test]
    fn test_nothing_off_turn() {
        let state = table(&[Color::Red]);
        assert!(valid_actions(&state, PlayerId::SECOND).is_empty());
    }

    #[test]
    fn test_claims_for_claimer_only() {
        let mut state = table(&[Color::Red]);
        state.phase = Phase::Destroying;
        state.destruction = Some(Destruction {
            mandala_index: 0,
            current_claimer: PlayerId::SECOND,
            remaining_colors: [Color::Red, Color::Yellow].into_iter().collect(),
        });

        assert!(valid_actions(&state, PlayerId::FIRST).is_empty());
        let claims = valid_actions(&state, PlayerId::SECOND);
        assert_eq!(
            claims.into_vec(),
            vec![
                Action::ClaimColor { color: Color::Red },
                Action::ClaimColor { color: Color::Yellow },
            ]
        );
    }
}
