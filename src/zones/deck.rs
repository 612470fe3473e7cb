//! Deck construction, shuffling and drawing.
//!
//! Drawing never fails: when the deck runs dry the discard pile is
//! shuffled into a fresh deck (which triggers the end of the match), and
//! when both are empty the draw simply comes up short.

use im::Vector;
use tracing::debug;

use crate::core::card::{Card, ALL_COLORS};
use crate::core::config::GameConfig;
use crate::core::rng::GameRng;
use crate::core::state::{EndGameTrigger, GameState};

/// Build the full, unshuffled card universe.
///
/// Colors appear in palette order; ids run from 0 without gaps.
///
/// ```
/// use mandala_engine::core::GameConfig;
/// use mandala_engine::zones::create_deck;
///
/// let deck = create_deck(&GameConfig::default());
/// assert_eq!(deck.len(), 108);
/// assert_eq!(deck[0].id.raw(), 0);
/// ```
#[must_use]
pub fn create_deck(config: &GameConfig) -> Vector<Card> {
    let mut next_id = 0u32;
    let mut deck = Vector::new();
    for color in ALL_COLORS {
        for _ in 0..config.cards_per_color {
            deck.push_back(Card::new(next_id, color));
            next_id += 1;
        }
    }
    deck
}

/// Return a uniformly shuffled copy of `deck`.
#[must_use]
pub fn shuffle_deck(deck: &Vector<Card>, rng: &mut GameRng) -> Vector<Card> {
    let mut cards: Vec<Card> = deck.iter().copied().collect();
    rng.shuffle(&mut cards);
    cards.into_iter().collect()
}

/// Draw up to `count` cards from the front of the deck.
///
/// If the deck empties mid-draw and the discard pile has cards, the
/// discard is shuffled into a new deck and the end-game trigger is set to
/// `DeckExhausted` (unless already set). If both are empty the draw stops
/// early and fewer cards are returned.
pub fn draw_cards(state: &mut GameState, count: usize) -> Vec<Card> {
    let mut drawn = Vec::with_capacity(count);
    while drawn.len() < count {
        if state.deck.is_empty() && !reshuffle_discard(state) {
            debug!(requested = count, drawn = drawn.len(), "deck and discard empty, draw short");
            break;
        }
        match state.deck.pop_front() {
            Some(card) => drawn.push(card),
            None => break,
        }
    }
    drawn
}

/// Move the discard pile into the deck, shuffled. Returns false if there was nothing to move.
fn reshuffle_discard(state: &mut GameState) -> bool {
    if state.discard.is_empty() {
        return false;
    }
    let pile = std::mem::take(&mut state.discard);
    state.deck = shuffle_deck(&pile, &mut state.rng);
    let newly_set = state.trigger_end(EndGameTrigger::DeckExhausted);
    debug!(cards = state.deck.len(), newly_set, "discard reshuffled into deck");
    true
}
