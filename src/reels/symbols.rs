//! Reel symbol vocabulary.
//!
//! Symbols are plain tokens. How they are drawn on screen is up to the
//! renderer; the engine only cares about face values and which effect a
//! matched symbol triggers.

use serde::{Deserialize, Serialize};

/// Every symbol a reel can show.
///
/// The declaration order doubles as the walk order of the weighted draw, so
/// reordering variants changes which symbol a given roll lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Symbol {
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Wild,
    Jackpot,
    FixedBonus,
    MultiplierDie,
    FreeSpin,
    DayTrigger,
    NightTrigger,
    Fever,
    Penalty,
    /// Shown before the first spin. Never drawable.
    Idle,
}

impl Symbol {
    pub const NUMERIC: [Symbol; 10] = [
        Symbol::One,
        Symbol::Two,
        Symbol::Three,
        Symbol::Four,
        Symbol::Five,
        Symbol::Six,
        Symbol::Seven,
        Symbol::Eight,
        Symbol::Nine,
        Symbol::Ten,
    ];

    /// All symbols that may appear in a weight table.
    pub const DRAWABLE: [Symbol; 19] = [
        Symbol::One,
        Symbol::Two,
        Symbol::Three,
        Symbol::Four,
        Symbol::Five,
        Symbol::Six,
        Symbol::Seven,
        Symbol::Eight,
        Symbol::Nine,
        Symbol::Ten,
        Symbol::Wild,
        Symbol::Jackpot,
        Symbol::FixedBonus,
        Symbol::MultiplierDie,
        Symbol::FreeSpin,
        Symbol::DayTrigger,
        Symbol::NightTrigger,
        Symbol::Fever,
        Symbol::Penalty,
    ];

    /// Face value for numeric symbols, `None` for specials.
    pub fn face_value(self) -> Option<u32> {
        match self {
            Symbol::One => Some(1),
            Symbol::Two => Some(2),
            Symbol::Three => Some(3),
            Symbol::Four => Some(4),
            Symbol::Five => Some(5),
            Symbol::Six => Some(6),
            Symbol::Seven => Some(7),
            Symbol::Eight => Some(8),
            Symbol::Nine => Some(9),
            Symbol::Ten => Some(10),
            _ => None,
        }
    }

    pub fn is_numeric(self) -> bool {
        self.face_value().is_some()
    }

    pub fn is_wild(self) -> bool {
        self == Symbol::Wild
    }

    /// Numeric symbol for a face value in `1..=10`.
    pub fn from_face_value(value: u32) -> Option<Symbol> {
        match value {
            1..=10 => Some(Symbol::NUMERIC[value as usize - 1]),
            _ => None,
        }
    }

    /// Short display name, used in result messages and reports.
    pub fn name(self) -> &'static str {
        match self {
            Symbol::One => "1",
            Symbol::Two => "2",
            Symbol::Three => "3",
            Symbol::Four => "4",
            Symbol::Five => "5",
            Symbol::Six => "6",
            Symbol::Seven => "7",
            Symbol::Eight => "8",
            Symbol::Nine => "9",
            Symbol::Ten => "10",
            Symbol::Wild => "Wild",
            Symbol::Jackpot => "Jackpot",
            Symbol::FixedBonus => "Bonus",
            Symbol::MultiplierDie => "Die",
            Symbol::FreeSpin => "Free Spin",
            Symbol::DayTrigger => "Sunrise",
            Symbol::NightTrigger => "Full Moon",
            Symbol::Fever => "Fever",
            Symbol::Penalty => "Skull",
            Symbol::Idle => "Slot",
        }
    }
}
