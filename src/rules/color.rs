//! The Rule of Color.
//!
//! Within one mandala each color may live in at most one kind of zone: the
//! shared mountain, or exactly one player's field. Repeats within the same
//! zone are always fine.

use crate::core::card::{Color, COLOR_COUNT};
use crate::core::player::PlayerId;
use crate::core::state::Mandala;

/// A color may go to the mountain if neither field holds it.
#[must_use]
pub fn can_play_color_to_mountain(mandala: &Mandala, color: Color) -> bool {
    PlayerId::all().all(|p| !mandala.field_colors(p).contains(color))
}

/// A color may go to `player`'s field if neither the mountain nor the
/// opponent's field holds it.
#[must_use]
pub fn can_play_color_to_field(mandala: &Mandala, player: PlayerId, color: Color) -> bool {
    !mandala.mountain_colors().contains(color)
        && !mandala.field_colors(player.opponent()).contains(color)
}

/// A mandala is complete once all six colors appear somewhere in it.
#[must_use]
pub fn is_mandala_complete(mandala: &Mandala) -> bool {
    mandala.colors().len() == COLOR_COUNT
}

/// Check the Rule of Color holds for `mandala`. Returns the first offending color.
#[must_use]
pub fn rule_of_color_violation(mandala: &Mandala) -> Option<Color> {
    let mountain = mandala.mountain_colors();
    let first = mandala.field_colors(PlayerId::FIRST);
    let second = mandala.field_colors(PlayerId::SECOND);

    mountain
        .iter()
        .find(|&c| first.contains(c) || second.contains(c))
        .or_else(|| first.iter().find(|&c| second.contains(c)))
}
