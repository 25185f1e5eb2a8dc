//! Simulation report generation.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::core::game_state::SessionState;
use crate::economy::SpinEvent;

/// Aggregated results of one simulated session.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SimReport {
    pub spins_requested: u64,
    pub spins_played: u64,
    pub total_ticks: u64,
    pub wins: u64,
    pub losses: u64,
    pub free_spins_used: u64,
    pub token_packs_bought: u64,
    /// Ran out of tokens and could not buy more.
    pub went_broke: bool,

    /// Wins keyed by the symbol that fired.
    pub symbol_wins: BTreeMap<String, u64>,

    // Money flow
    pub numeric_payouts: i64,
    pub bonus_payouts: i64,
    pub jackpot_payouts: i64,
    pub penalties: i64,
    pub largest_jackpot: i64,
    pub peak_currency: i64,
    pub highest_multiplier: u32,

    pub final_tokens: i64,
    pub final_currency: i64,
    pub final_jackpot_pool: i64,
    pub final_multiplier: u32,
    pub ended_at_night: bool,
}

impl SimReport {
    pub fn new(spins_requested: u64, state: &SessionState) -> Self {
        Self {
            spins_requested,
            peak_currency: state.currency,
            highest_multiplier: state.multiplier,
            ..Self::default()
        }
    }

    /// Fold one settled spin into the totals.
    pub fn record(&mut self, event: &SpinEvent, state: &SessionState, ticks: u64) {
        self.spins_played += 1;
        self.total_ticks += ticks;

        match event.symbol() {
            Some(symbol) => {
                self.wins += 1;
                *self.symbol_wins.entry(symbol.name().to_string()).or_insert(0) += 1;
            }
            None => self.losses += 1,
        }

        match event {
            SpinEvent::NumericWin { payout, .. } => self.numeric_payouts += payout,
            SpinEvent::BonusWon { amount } => self.bonus_payouts += amount,
            SpinEvent::JackpotWon { amount } => {
                self.jackpot_payouts += amount;
                self.largest_jackpot = self.largest_jackpot.max(*amount);
            }
            SpinEvent::PenaltyTaken { amount } => self.penalties += amount,
            _ => {}
        }

        self.peak_currency = self.peak_currency.max(state.currency);
        self.highest_multiplier = self.highest_multiplier.max(state.multiplier);
    }

    /// Capture the closing balances.
    pub fn finish(&mut self, state: &SessionState) {
        self.final_tokens = state.tokens;
        self.final_currency = state.currency;
        self.final_jackpot_pool = state.jackpot_pool;
        self.final_multiplier = state.multiplier;
        self.ended_at_night = !state.is_daytime;
    }

    pub fn win_rate(&self) -> f64 {
        if self.spins_played == 0 {
            return 0.0;
        }
        self.wins as f64 / self.spins_played as f64
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut out = String::new();

        out.push_str("═══════════════════════════════════════════════════════════════\n");
        out.push_str("                        SIMULATION REPORT\n");
        out.push_str("═══════════════════════════════════════════════════════════════\n\n");

        out.push_str("SPINS\n");
        out.push_str(&format!(
            "  Played:           {} / {}\n",
            self.spins_played, self.spins_requested
        ));
        out.push_str(&format!(
            "  Win rate:         {:.1}% ({} wins, {} losses)\n",
            self.win_rate() * 100.0,
            self.wins,
            self.losses
        ));
        out.push_str(&format!("  Free spins used:  {}\n", self.free_spins_used));
        out.push_str(&format!("  Token packs:      {}\n", self.token_packs_bought));
        if self.went_broke {
            out.push_str("  Stopped early: out of tokens and dollars\n");
        }
        out.push('\n');

        out.push_str("WINS BY SYMBOL\n");
        if self.symbol_wins.is_empty() {
            out.push_str("  (none)\n");
        }
        for (symbol, count) in &self.symbol_wins {
            let share = *count as f64 / self.spins_played.max(1) as f64 * 100.0;
            out.push_str(&format!("  {:<12} {:>8}  ({:.2}%)\n", symbol, count, share));
        }
        out.push('\n');

        out.push_str("MONEY\n");
        out.push_str(&format!("  Number wins:      ${}\n", self.numeric_payouts));
        out.push_str(&format!("  Bonus wins:       ${}\n", self.bonus_payouts));
        out.push_str(&format!(
            "  Jackpots:         ${} (largest ${})\n",
            self.jackpot_payouts, self.largest_jackpot
        ));
        out.push_str(&format!("  Lost to skulls:   ${}\n", self.penalties));
        out.push_str(&format!("  Peak balance:     ${}\n", self.peak_currency));
        out.push_str(&format!("  Best multiplier:  x{}\n", self.highest_multiplier));
        out.push('\n');

        out.push_str("FINAL STATE\n");
        out.push_str(&format!("  Tokens:           {}\n", self.final_tokens));
        out.push_str(&format!("  Currency:         ${}\n", self.final_currency));
        out.push_str(&format!("  Jackpot pool:     ${}\n", self.final_jackpot_pool));
        out.push_str(&format!("  Multiplier:       x{}\n", self.final_multiplier));
        out.push_str(&format!(
            "  Time of day:      {}\n",
            if self.ended_at_night { "night" } else { "day" }
        ));

        out
    }

    /// Export as JSON for external analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
