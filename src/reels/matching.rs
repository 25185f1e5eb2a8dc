//! Win evaluation for a resolved slot.

use super::symbols::Symbol;

/// Three reels, left to right.
pub type Slot = [Symbol; 3];

/// Result of evaluating a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// Three wildcards. Counts as a match but pays nothing.
    AllWild,
    /// A logical three-of-a-kind of the given symbol.
    Match(Symbol),
    NoMatch,
}

impl MatchOutcome {
    pub fn is_match(self) -> bool {
        !matches!(self, MatchOutcome::NoMatch)
    }

    /// The matched symbol, if the match has one.
    pub fn symbol(self) -> Option<Symbol> {
        match self {
            MatchOutcome::Match(symbol) => Some(symbol),
            _ => None,
        }
    }
}

/// Decide whether a slot is a win.
///
/// Wildcards stand in for numeric faces only. Special symbols, the penalty
/// skull included, need three literal copies to trigger.
pub fn evaluate(slot: &Slot) -> MatchOutcome {
    let wilds = slot.iter().filter(|s| s.is_wild()).count();
    let mut rest = slot.iter().copied().filter(|s| !s.is_wild());

    match wilds {
        3 => MatchOutcome::AllWild,
        2 => match rest.next() {
            Some(symbol) if symbol.is_numeric() => MatchOutcome::Match(symbol),
            _ => MatchOutcome::NoMatch,
        },
        1 => match (rest.next(), rest.next()) {
            (Some(a), Some(b)) if a == b && a.is_numeric() => MatchOutcome::Match(a),
            _ => MatchOutcome::NoMatch,
        },
        _ if slot[0] == slot[1] && slot[1] == slot[2] => MatchOutcome::Match(slot[0]),
        _ => MatchOutcome::NoMatch,
    }
}
