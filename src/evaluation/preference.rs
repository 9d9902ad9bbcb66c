//! Learned player preference per decision type
//!
//! Every execution nudges the executed type toward 1.0:
//! `new = (1 - rate) * old + rate`. Types never executed sit at the default.

use crate::decision::DecisionType;
use ahash::AHashMap;

#[derive(Debug, Clone)]
pub struct PreferenceTable {
    weights: AHashMap<DecisionType, f64>,
    default_weight: f64,
    learning_rate: f64,
}

impl Default for PreferenceTable {
    fn default() -> Self {
        Self::new(0.5, 0.1)
    }
}

impl PreferenceTable {
    pub fn new(default_weight: f64, learning_rate: f64) -> Self {
        Self {
            weights: AHashMap::new(),
            default_weight: default_weight.clamp(0.0, 1.0),
            learning_rate: learning_rate.clamp(0.0, 1.0),
        }
    }

    pub fn weight(&self, kind: DecisionType) -> f64 {
        self.weights.get(&kind).copied().unwrap_or(self.default_weight)
    }

    /// Record one execution of `kind`, returning the new weight
    pub fn reinforce(&mut self, kind: DecisionType) -> f64 {
        let old = self.weight(kind);
        let new = ((1.0 - self.learning_rate) * old + self.learning_rate).clamp(0.0, 1.0);
        self.weights.insert(kind, new);
        new
    }

    /// Types that have been reinforced at least once
    pub fn learned(&self) -> impl Iterator<Item = (DecisionType, f64)> + '_ {
        self.weights.iter().map(|(k, v)| (*k, *v))
    }

    pub fn reset(&mut self) {
        self.weights.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unseen_type_uses_default() {
        let table = PreferenceTable::default();
        assert_eq!(table.weight(DecisionType::TacticalDefend), 0.5);
    }

    #[test]
    fn test_reinforce_moves_toward_one() {
        let mut table = PreferenceTable::default();
        assert!((table.reinforce(DecisionType::TacticalDefend) - 0.55).abs() < 1e-12);
        assert!((table.reinforce(DecisionType::TacticalDefend) - 0.595).abs() < 1e-12);
        assert_eq!(table.weight(DecisionType::TacticalRetreat), 0.5);

        for _ in 0..500 {
            table.reinforce(DecisionType::TacticalDefend);
        }
        let weight = table.weight(DecisionType::TacticalDefend);
        assert!(weight <= 1.0 && weight > 0.999);
    }
}
