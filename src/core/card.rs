//! Cards and the six-color palette.
//!
//! Every card is one of six colors. A standard match uses 18 cards per
//! color; each card carries a unique [`CardId`] for its whole life.
//!
//! ## Usage
//!
//! ```
//! use mandala_engine::core::{Color, ColorSet};
//!
//! let mut set = ColorSet::empty();
//! set.insert(Color::Red);
//! set.insert(Color::Green);
//! set.insert(Color::Red);
//!
//! assert_eq!(set.len(), 2);
//! assert!(set.contains(Color::Green));
//! assert!(!set.contains(Color::Black));
//! ```

use serde::{Deserialize, Serialize};

/// Number of colors in the palette.
pub const COLOR_COUNT: usize = 6;

/// Card colors, in the fixed order used when building a deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Black,
    Red,
    Orange,
    Yellow,
    Green,
    Purple,
}

/// All colors in palette order.
pub const ALL_COLORS: [Color; COLOR_COUNT] = [
    Color::Black,
    Color::Red,
    Color::Orange,
    Color::Yellow,
    Color::Green,
    Color::Purple,
];

impl Color {
    /// Position of this color in [`ALL_COLORS`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [`Color::index`].
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        ALL_COLORS.get(index).copied()
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Color::Black => "black",
            Color::Red => "red",
            Color::Orange => "orange",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Purple => "purple",
        };
        f.write_str(name)
    }
}

/// A set of colors stored as a 6-bit mask.
///
/// Iteration yields colors in palette order. Serializes as a list of colors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "Vec<Color>", from = "Vec<Color>")]
pub struct ColorSet(u8);

impl ColorSet {
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    pub fn insert(&mut self, color: Color) {
        self.0 |= 1 << color.index();
    }

    pub fn remove(&mut self, color: Color) {
        self.0 &= !(1 << color.index());
    }

    #[must_use]
    pub const fn contains(self, color: Color) -> bool {
        self.0 & (1 << color.index()) != 0
    }

    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub fn iter(self) -> impl Iterator<Item = Color> {
        ALL_COLORS.into_iter().filter(move |&c| self.contains(c))
    }
}

impl FromIterator<Color> for ColorSet {
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
        let mut set = Self::empty();
        for color in iter {
            set.insert(color);
        }
        set
    }
}

impl From<ColorSet> for Vec<Color> {
    fn from(set: ColorSet) -> Self {
        set.iter().collect()
    }
}

impl From<Vec<Color>> for ColorSet {
    fn from(colors: Vec<Color>) -> Self {
        colors.into_iter().collect()
    }
}

/// Unique identifier of a physical card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single card: identity plus color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub color: Color,
}

impl Card {
    #[must_use]
    pub const fn new(id: u32, color: Color) -> Self {
        Self {
            id: CardId(id),
            color,
        }
    }
}

/// Distinct colors among `cards`.
pub fn colors_of<'a>(cards: impl IntoIterator<Item = &'a Card>) -> ColorSet {
    cards.into_iter().map(|c| c.color).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_index_roundtrip() {
        for (i, color) in ALL_COLORS.iter().enumerate() {
            assert_eq!(color.index(), i);
            assert_eq!(Color::from_index(i), Some(*color));
        }
        assert_eq!(Color::from_index(COLOR_COUNT), None);
    }

    #[test]
    fn test_color_set_ops() {
        let mut set = ColorSet::empty();
        assert!(set.is_empty());

        set.insert(Color::Green);
        set.insert(Color::Black);
        assert_eq!(set.len(), 2);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![Color::Black, Color::Green]);

        set.remove(Color::Black);
        assert!(!set.contains(Color::Black));
        assert!(set.contains(Color::Green));
    }

    #[test]
    fn test_color_set_union_full() {
        let a: ColorSet = [Color::Black, Color::Red, Color::Orange].into_iter().collect();
        let b: ColorSet = [Color::Yellow, Color::Green, Color::Purple].into_iter().collect();
        assert_eq!(a.union(b).len(), COLOR_COUNT);
    }

    #[test]
    fn test_color_set_serializes_as_colors() {
        let set: ColorSet = [Color::Yellow, Color::Black].into_iter().collect();
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["black","yellow"]"#);

        let back: ColorSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }

    #[test]
    fn test_colors_of() {
        let cards = [
            Card::new(0, Color::Red),
            Card::new(1, Color::Red),
            Card::new(2, Color::Purple),
        ];
        let set = colors_of(&cards);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_color_serialization() {
        let json = serde_json::to_string(&Color::Orange).unwrap();
        assert_eq!(json, "\"orange\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Color::Orange);
    }
}
