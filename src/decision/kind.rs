//! Decision type table
//!
//! Every decision type is a single enum key. Its layer, strategic category
//! and mutually exclusive partner are all looked up from here so the
//! generators, evaluator, personality weights and arbitration never drift
//! apart.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Organizational horizon a decision belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecisionLayer {
    Tactical,
    Operational,
    Strategic,
    Ethical,
}

impl DecisionLayer {
    pub const ALL: [DecisionLayer; 4] = [
        DecisionLayer::Tactical,
        DecisionLayer::Operational,
        DecisionLayer::Strategic,
        DecisionLayer::Ethical,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DecisionLayer::Tactical => "tactical",
            DecisionLayer::Operational => "operational",
            DecisionLayer::Strategic => "strategic",
            DecisionLayer::Ethical => "ethical",
        }
    }
}

impl fmt::Display for DecisionLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Strategic category used for personality priorities and evaluator bonuses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategicPriority {
    Expansion,
    Defense,
    Research,
    Balance,
}

/// All decision types the layer processors can emit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DecisionType {
    // === Tactical ===
    TacticalDefend,
    TacticalCounterAttack,
    TacticalRetreat,
    TacticalFlank,
    TacticalResourceDenial,
    TacticalEnergyConservation,
    TacticalOverclock,

    // === Operational ===
    OperationalEconomyInvestment,
    OperationalMilitaryBuildup,
    OperationalExpansion,
    OperationalTechPrioritization,

    // === Strategic ===
    StrategicIndustrialVictory,
    StrategicEcologicalVictory,
    StrategicTechnologicalVictory,
    StrategicBalancedVictory,
    StrategicBuildRefinery,

    // === Ethical ===
    EthicalAcceptTrade,
    EthicalRefuseTrade,
    EthicalExploit,
    EthicalPreserve,
}

impl DecisionType {
    pub const ALL: [DecisionType; 20] = [
        DecisionType::TacticalDefend,
        DecisionType::TacticalCounterAttack,
        DecisionType::TacticalRetreat,
        DecisionType::TacticalFlank,
        DecisionType::TacticalResourceDenial,
        DecisionType::TacticalEnergyConservation,
        DecisionType::TacticalOverclock,
        DecisionType::OperationalEconomyInvestment,
        DecisionType::OperationalMilitaryBuildup,
        DecisionType::OperationalExpansion,
        DecisionType::OperationalTechPrioritization,
        DecisionType::StrategicIndustrialVictory,
        DecisionType::StrategicEcologicalVictory,
        DecisionType::StrategicTechnologicalVictory,
        DecisionType::StrategicBalancedVictory,
        DecisionType::StrategicBuildRefinery,
        DecisionType::EthicalAcceptTrade,
        DecisionType::EthicalRefuseTrade,
        DecisionType::EthicalExploit,
        DecisionType::EthicalPreserve,
    ];

    pub fn layer(self) -> DecisionLayer {
        use DecisionType::*;
        match self {
            TacticalDefend
            | TacticalCounterAttack
            | TacticalRetreat
            | TacticalFlank
            | TacticalResourceDenial
            | TacticalEnergyConservation
            | TacticalOverclock => DecisionLayer::Tactical,
            OperationalEconomyInvestment
            | OperationalMilitaryBuildup
            | OperationalExpansion
            | OperationalTechPrioritization => DecisionLayer::Operational,
            StrategicIndustrialVictory
            | StrategicEcologicalVictory
            | StrategicTechnologicalVictory
            | StrategicBalancedVictory
            | StrategicBuildRefinery => DecisionLayer::Strategic,
            EthicalAcceptTrade | EthicalRefuseTrade | EthicalExploit | EthicalPreserve => {
                DecisionLayer::Ethical
            }
        }
    }

    /// Strategic category this type is weighted under
    pub fn priority(self) -> StrategicPriority {
        use DecisionType::*;
        match self {
            TacticalDefend
            | TacticalCounterAttack
            | TacticalRetreat
            | TacticalFlank
            | TacticalResourceDenial
            | OperationalMilitaryBuildup => StrategicPriority::Defense,
            TacticalOverclock
            | OperationalEconomyInvestment
            | OperationalExpansion
            | StrategicIndustrialVictory
            | StrategicBuildRefinery
            | EthicalExploit => StrategicPriority::Expansion,
            OperationalTechPrioritization | StrategicTechnologicalVictory => {
                StrategicPriority::Research
            }
            TacticalEnergyConservation
            | StrategicEcologicalVictory
            | StrategicBalancedVictory
            | EthicalAcceptTrade
            | EthicalRefuseTrade
            | EthicalPreserve => StrategicPriority::Balance,
        }
    }

    /// The type that may never be active together with this one
    pub fn exclusive_partner(self) -> Option<DecisionType> {
        use DecisionType::*;
        match self {
            EthicalAcceptTrade => Some(EthicalRefuseTrade),
            EthicalRefuseTrade => Some(EthicalAcceptTrade),
            EthicalExploit => Some(EthicalPreserve),
            EthicalPreserve => Some(EthicalExploit),
            TacticalRetreat => Some(TacticalCounterAttack),
            TacticalCounterAttack => Some(TacticalRetreat),
            TacticalOverclock => Some(TacticalEnergyConservation),
            TacticalEnergyConservation => Some(TacticalOverclock),
            _ => None,
        }
    }

    pub fn excludes(self, other: DecisionType) -> bool {
        self.exclusive_partner() == Some(other)
    }

    pub fn is_expansion(self) -> bool {
        self.priority() == StrategicPriority::Expansion
    }

    pub fn is_defense(self) -> bool {
        self.priority() == StrategicPriority::Defense
    }

    /// Human-readable label
    pub fn label(self) -> &'static str {
        use DecisionType::*;
        match self {
            TacticalDefend => "Defend position",
            TacticalCounterAttack => "Counter-attack",
            TacticalRetreat => "Tactical retreat",
            TacticalFlank => "Flank weakened enemy",
            TacticalResourceDenial => "Deny enemy resources",
            TacticalEnergyConservation => "Conserve energy",
            TacticalOverclock => "Overclock extractors",
            OperationalEconomyInvestment => "Invest in economy",
            OperationalMilitaryBuildup => "Military buildup",
            OperationalExpansion => "Expand territory",
            OperationalTechPrioritization => "Prioritize research",
            StrategicIndustrialVictory => "Pursue industrial victory",
            StrategicEcologicalVictory => "Pursue ecological victory",
            StrategicTechnologicalVictory => "Pursue technological victory",
            StrategicBalancedVictory => "Pursue balanced victory",
            StrategicBuildRefinery => "Build refinery",
            EthicalAcceptTrade => "Accept AI trade offer",
            EthicalRefuseTrade => "Refuse AI trade offer",
            EthicalExploit => "Exploit biomass reserves",
            EthicalPreserve => "Preserve biomass reserves",
        }
    }
}

impl fmt::Display for DecisionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exclusive_pairs_are_symmetric() {
        for kind in DecisionType::ALL {
            if let Some(partner) = kind.exclusive_partner() {
                assert_eq!(partner.exclusive_partner(), Some(kind));
                assert_eq!(partner.layer(), kind.layer());
            }
        }
    }

    #[test]
    fn test_every_layer_has_types() {
        for layer in DecisionLayer::ALL {
            assert!(DecisionType::ALL.iter().any(|k| k.layer() == layer));
        }
    }

    #[test]
    fn test_serialized_tag_is_screaming_snake() {
        let json = serde_json::to_string(&DecisionType::EthicalExploit).unwrap();
        assert_eq!(json, "\"ETHICAL_EXPLOIT\"");
        let json = serde_json::to_string(&DecisionType::TacticalOverclock).unwrap();
        assert_eq!(json, "\"TACTICAL_OVERCLOCK\"");
    }

    #[test]
    fn test_categories() {
        assert!(DecisionType::OperationalExpansion.is_expansion());
        assert!(DecisionType::TacticalDefend.is_defense());
        assert!(!DecisionType::EthicalPreserve.is_defense());
        assert_eq!(
            DecisionType::OperationalTechPrioritization.priority(),
            StrategicPriority::Research
        );
    }
}
