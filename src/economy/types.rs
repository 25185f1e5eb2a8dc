//! Outcomes of a resolved spin.

use crate::reels::Symbol;

/// What the economy did with a finished spin.
///
/// The session stores [`SpinEvent::message`] as the last result; the
/// simulator tallies the events directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpinEvent {
    /// Three wildcards: a laugh, no payout.
    AllWild,
    JackpotWon { amount: i64 },
    BonusWon { amount: i64 },
    MultiplierRolled { multiplier: u32 },
    FreeSpinGranted,
    TurnedDay,
    TurnedNight,
    FeverStarted,
    PenaltyTaken { amount: i64 },
    NumericWin {
        face: Symbol,
        payout: i64,
        fever_doubled: bool,
    },
    /// No match; the pool grew to `jackpot_pool`.
    Loss { jackpot_pool: i64 },
}

impl SpinEvent {
    pub fn is_win(&self) -> bool {
        !matches!(self, SpinEvent::Loss { .. })
    }

    /// The symbol whose effect fired, if any.
    pub fn symbol(&self) -> Option<Symbol> {
        match self {
            SpinEvent::AllWild => Some(Symbol::Wild),
            SpinEvent::JackpotWon { .. } => Some(Symbol::Jackpot),
            SpinEvent::BonusWon { .. } => Some(Symbol::FixedBonus),
            SpinEvent::MultiplierRolled { .. } => Some(Symbol::MultiplierDie),
            SpinEvent::FreeSpinGranted => Some(Symbol::FreeSpin),
            SpinEvent::TurnedDay => Some(Symbol::DayTrigger),
            SpinEvent::TurnedNight => Some(Symbol::NightTrigger),
            SpinEvent::FeverStarted => Some(Symbol::Fever),
            SpinEvent::PenaltyTaken { .. } => Some(Symbol::Penalty),
            SpinEvent::NumericWin { face, .. } => Some(*face),
            SpinEvent::Loss { .. } => None,
        }
    }

    /// Player-facing result line.
    pub fn message(&self) -> String {
        match self {
            SpinEvent::AllWild => {
                "Hahahahahahahaha! Three wilds and nothing to show for it.".to_string()
            }
            SpinEvent::JackpotWon { amount } => {
                format!("YOU HIT THE JACKPOT!!! You won {} dollars!", amount)
            }
            SpinEvent::BonusWon { amount } => format!("Nice 100! You won {} dollars!", amount),
            SpinEvent::MultiplierRolled { multiplier } => {
                format!("Your new multiplier is x{}", multiplier)
            }
            SpinEvent::FreeSpinGranted => {
                "Nice! You got a free spin! Go ahead and reroll!".to_string()
            }
            SpinEvent::TurnedDay => {
                "It's back to being daytime! Wilds and skulls are back to normal.".to_string()
            }
            SpinEvent::TurnedNight => {
                "It's nighttime now! Wilds and skulls show up more often!".to_string()
            }
            SpinEvent::FeverStarted => {
                "You're in fever mode now! Your next number win is doubled.".to_string()
            }
            SpinEvent::PenaltyTaken { amount } => format!("Skulls! You lost {} dollars!", amount),
            SpinEvent::NumericWin {
                payout,
                fever_doubled,
                ..
            } => {
                if *fever_doubled {
                    format!("You won {} dollars! Doubled by fever mode!", payout)
                } else {
                    format!("You won {} dollars!", payout)
                }
            }
            SpinEvent::Loss { .. } => "Try again :(".to_string(),
        }
    }
}
