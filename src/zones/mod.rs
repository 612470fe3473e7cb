//! Card zones: the deck, and accounting across every zone.
//!
//! ## Key Items
//!
//! - `create_deck`, `shuffle_deck`, `draw_cards`: the card universe and
//!   draw-with-reshuffle
//! - `ZoneCensus`: per-zone card counts for conservation checks

pub mod census;
pub mod deck;

pub use census::{all_cards, duplicate_card, ZoneCensus};
pub use deck::{create_deck, draw_cards, shuffle_deck};
