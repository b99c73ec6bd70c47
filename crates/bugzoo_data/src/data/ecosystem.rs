use super::creature::Creature;
use serde::{Deserialize, Serialize};

/// One notable occurrence during a tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationEvent {
    pub message: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
}

impl SimulationEvent {
    pub fn new(message: impl Into<String>, timestamp: i64) -> Self {
        Self {
            message: message.into(),
            timestamp,
        }
    }
}

/// Summary figures shown next to the terrarium.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EcosystemStats {
    pub total_creatures: usize,
    pub total_hp: i64,
    pub average_aggression: i64,
    pub active_threats: usize,
}

impl EcosystemStats {
    #[must_use]
    pub fn from_creatures(creatures: &[Creature]) -> Self {
        if creatures.is_empty() {
            return Self::default();
        }
        let total_hp = creatures.iter().map(|c| i64::from(c.hp)).sum();
        let aggression: i64 = creatures.iter().map(|c| i64::from(c.aggression)).sum();
        let mean = aggression as f64 / creatures.len() as f64;
        Self {
            total_creatures: creatures.len(),
            total_hp,
            average_aggression: mean.round() as i64,
            active_threats: creatures.iter().filter(|c| c.severity.is_threat()).count(),
        }
    }
}
