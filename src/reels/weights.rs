//! Weighted symbol distribution and day/night reweighting.

use std::collections::BTreeMap;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::symbols::Symbol;
use crate::core::constants::{
    COMMON_FACE_WEIGHT, NIGHT_FACE_WEIGHT, NIGHT_PENALTY_WEIGHT, NIGHT_WILD_FACTOR, SPECIAL_WEIGHT,
};
use crate::core::error::SlotError;

/// Entries rewritten when the session turns to day.
const DAYTIME_PROFILE: [(Symbol, u32); 6] = [
    (Symbol::DayTrigger, 0),
    (Symbol::NightTrigger, SPECIAL_WEIGHT),
    (Symbol::Wild, SPECIAL_WEIGHT),
    (Symbol::Penalty, 0),
    (Symbol::Eight, 0),
    (Symbol::Nine, 0),
];

/// Entries rewritten when the session turns to night.
const NIGHTTIME_PROFILE: [(Symbol, u32); 6] = [
    (Symbol::DayTrigger, SPECIAL_WEIGHT),
    (Symbol::NightTrigger, 0),
    (Symbol::Wild, SPECIAL_WEIGHT * NIGHT_WILD_FACTOR),
    (Symbol::Penalty, NIGHT_PENALTY_WEIGHT),
    (Symbol::Eight, NIGHT_FACE_WEIGHT),
    (Symbol::Nine, NIGHT_FACE_WEIGHT),
];

/// Mapping from symbol to draw weight.
///
/// Backed by a `BTreeMap` so the cumulative walk in [`WeightTable::draw`]
/// always visits symbols in the same order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeightTable {
    weights: BTreeMap<Symbol, u32>,
}

impl WeightTable {
    /// The daytime table a fresh session starts with.
    pub fn base() -> Self {
        let mut weights = BTreeMap::new();
        for symbol in Symbol::DRAWABLE {
            weights.insert(symbol, 0);
        }
        for face in [Symbol::Three, Symbol::Five, Symbol::Seven, Symbol::Ten] {
            weights.insert(face, COMMON_FACE_WEIGHT);
        }
        for special in [
            Symbol::Jackpot,
            Symbol::Wild,
            Symbol::FixedBonus,
            Symbol::MultiplierDie,
            Symbol::FreeSpin,
            Symbol::NightTrigger,
            Symbol::Fever,
        ] {
            weights.insert(special, SPECIAL_WEIGHT);
        }
        Self { weights }
    }

    /// Build a table from explicit entries. Symbols not listed are absent
    /// (equivalent to weight zero).
    pub fn from_entries(entries: &[(Symbol, u32)]) -> Self {
        let mut table = Self {
            weights: BTreeMap::new(),
        };
        for &(symbol, weight) in entries {
            table.set(symbol, weight);
        }
        table
    }

    pub fn get(&self, symbol: Symbol) -> u32 {
        self.weights.get(&symbol).copied().unwrap_or(0)
    }

    /// Set one entry. `Idle` is not drawable and is ignored.
    pub fn set(&mut self, symbol: Symbol, weight: u32) {
        if symbol == Symbol::Idle {
            return;
        }
        self.weights.insert(symbol, weight);
    }

    pub fn total(&self) -> u64 {
        self.weights.values().map(|&w| w as u64).sum()
    }

    /// Entries in walk order.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, u32)> + '_ {
        self.weights.iter().map(|(&s, &w)| (s, w))
    }

    /// Draw one symbol with probability `weight / total`.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Symbol, SlotError> {
        let total = self.total();
        if total == 0 {
            return Err(SlotError::DegenerateDistribution);
        }

        let roll = rng.gen_range(0..total);
        let mut cumulative = 0u64;
        for (symbol, weight) in self.iter() {
            cumulative += weight as u64;
            if roll < cumulative {
                return Ok(symbol);
            }
        }

        // cumulative == total > roll after the last entry
        unreachable!("roll {roll} exceeded total weight {total}")
    }

    pub fn apply_daytime_weights(&mut self) {
        self.apply_profile(&DAYTIME_PROFILE);
    }

    pub fn apply_nighttime_weights(&mut self) {
        self.apply_profile(&NIGHTTIME_PROFILE);
    }

    fn apply_profile(&mut self, profile: &[(Symbol, u32)]) {
        for &(symbol, weight) in profile {
            self.set(symbol, weight);
        }
    }
}

impl Default for WeightTable {
    fn default() -> Self {
        Self::base()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    proptest! {
        #[test]
        fn prop_draw_only_returns_positive_weight(
            weights in proptest::collection::vec(0u32..20, Symbol::DRAWABLE.len()),
            seed in any::<u64>(),
        ) {
            let entries: Vec<(Symbol, u32)> = Symbol::DRAWABLE
                .iter()
                .copied()
                .zip(weights.iter().copied())
                .collect();
            let table = WeightTable::from_entries(&entries);
            let mut rng = ChaCha8Rng::seed_from_u64(seed);

            if table.total() == 0 {
                prop_assert!(table.draw(&mut rng).is_err());
            } else {
                for _ in 0..50 {
                    let symbol = table.draw(&mut rng).unwrap();
                    prop_assert!(table.get(symbol) > 0);
                }
            }
        }
    }
}
