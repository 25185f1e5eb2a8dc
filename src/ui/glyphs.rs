//! How each symbol looks on screen.

use ratatui::style::Color;

use crate::reels::Symbol;

/// Emoji shown on a reel.
pub fn symbol_glyph(symbol: Symbol) -> &'static str {
    match symbol {
        Symbol::One => "1️⃣",
        Symbol::Two => "2️⃣",
        Symbol::Three => "3️⃣",
        Symbol::Four => "4️⃣",
        Symbol::Five => "5️⃣",
        Symbol::Six => "6️⃣",
        Symbol::Seven => "7️⃣",
        Symbol::Eight => "8️⃣",
        Symbol::Nine => "9️⃣",
        Symbol::Ten => "🔟",
        Symbol::Wild => "🃏",
        Symbol::Jackpot => "🍯",
        Symbol::FixedBonus => "💯",
        Symbol::MultiplierDie => "🎲",
        Symbol::FreeSpin => "🆓",
        Symbol::DayTrigger => "🌅",
        Symbol::NightTrigger => "🌕",
        Symbol::Fever => "🔥",
        Symbol::Penalty => "💀",
        Symbol::Idle => "🎰",
    }
}

pub fn symbol_color(symbol: Symbol) -> Color {
    match symbol {
        Symbol::Jackpot | Symbol::FixedBonus => Color::Yellow,
        Symbol::Wild => Color::Magenta,
        Symbol::Fever => Color::Red,
        Symbol::Penalty => Color::DarkGray,
        Symbol::DayTrigger | Symbol::NightTrigger => Color::Cyan,
        _ => Color::White,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_symbol_has_a_distinct_glyph() {
        let mut seen = HashSet::new();
        for symbol in Symbol::DRAWABLE.iter().chain([Symbol::Idle].iter()) {
            assert!(seen.insert(symbol_glyph(*symbol)), "{:?}", symbol);
        }
    }
}
