//! Configuration management for simulation policy.
//!
//! Every numeric rule the tick engine applies lives here so a run can be
//! tuned (or made fully quiet for tests) from a `config.toml` file.
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [population]
//! max_creatures = 25
//! max_offspring_per_tick = 2
//! min_hp_for_reproduction = 40
//! min_hp_for_cross_breeding = 30
//! reproduction_chance_cap = 0.12
//! reproduction_rate_scale = 0.15
//! cross_breeding_chance = 0.35
//! interaction_chance = 0.5
//!
//! [mutation]
//! hp_decay_min = 1
//! hp_decay_max = 2
//! mutation_min = 5
//! mutation_max = 10
//! min_reproduction_rate = 0.1
//! max_reproduction_rate = 0.7
//!
//! [session]
//! event_history = 50
//! narration_interval = 3
//! tick_interval_ms = 1200
//! seed = 42
//! deterministic = true
//! ```

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Population growth and crowding rules.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PopulationConfig {
    pub max_creatures: usize,
    pub max_offspring_per_tick: usize,
    pub min_hp_for_reproduction: i32,
    pub min_hp_for_cross_breeding: i32,
    pub reproduction_chance_cap: f64,
    pub reproduction_rate_scale: f64,
    pub cross_breeding_chance: f64,
    pub interaction_chance: f64,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            max_creatures: 25,
            max_offspring_per_tick: 2,
            min_hp_for_reproduction: 40,
            min_hp_for_cross_breeding: 30,
            reproduction_chance_cap: 0.12,
            reproduction_rate_scale: 0.15,
            cross_breeding_chance: 0.35,
            interaction_chance: 0.5,
        }
    }
}

/// Per-tick decay and offspring mutation ranges (inclusive).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct MutationConfig {
    pub hp_decay_min: i32,
    pub hp_decay_max: i32,
    pub mutation_min: i32,
    pub mutation_max: i32,
    pub min_reproduction_rate: f64,
    pub max_reproduction_rate: f64,
}

impl Default for MutationConfig {
    fn default() -> Self {
        Self {
            hp_decay_min: 1,
            hp_decay_max: 2,
            mutation_min: 5,
            mutation_max: 10,
            min_reproduction_rate: 0.1,
            max_reproduction_rate: 0.7,
        }
    }
}

/// Harness settings: history retention, narration cadence, driver timing.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SessionConfig {
    pub event_history: usize,
    pub narration_interval: u64,
    pub tick_interval_ms: u64,
    pub seed: Option<u64>,
    pub deterministic: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            event_history: 50,
            narration_interval: 3,
            tick_interval_ms: 1200,
            seed: None,
            deterministic: false,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ZooConfig {
    pub population: PopulationConfig,
    pub mutation: MutationConfig,
    pub session: SessionConfig,
}

fn is_probability(p: f64) -> bool {
    (0.0..=1.0).contains(&p)
}

impl ZooConfig {
    /// Policy with every random birth and clash switched off.
    ///
    /// Decay, extinction and the population cap still apply.
    #[must_use]
    pub fn quiet() -> Self {
        let mut config = Self::default();
        config.population.reproduction_rate_scale = 0.0;
        config.population.cross_breeding_chance = 0.0;
        config.population.interaction_chance = 0.0;
        config
    }

    /// Validates all configuration parameters.
    ///
    /// Returns `Ok(())` if all parameters are valid, or `Err` with a description
    /// of the first validation failure.
    pub fn validate(&self) -> anyhow::Result<()> {
        let p = &self.population;
        anyhow::ensure!(p.max_creatures > 0, "Population cap must be positive");
        anyhow::ensure!(
            p.min_hp_for_reproduction >= 0 && p.min_hp_for_reproduction <= 100,
            "Reproduction HP threshold must be in [0, 100]"
        );
        anyhow::ensure!(
            p.min_hp_for_cross_breeding >= 0 && p.min_hp_for_cross_breeding <= 100,
            "Cross-breeding HP threshold must be in [0, 100]"
        );
        anyhow::ensure!(
            is_probability(p.reproduction_chance_cap),
            "Reproduction chance cap must be in [0.0, 1.0]"
        );
        anyhow::ensure!(
            p.reproduction_rate_scale >= 0.0,
            "Reproduction rate scale must be non-negative"
        );
        anyhow::ensure!(
            is_probability(p.cross_breeding_chance),
            "Cross-breeding chance must be in [0.0, 1.0]"
        );
        anyhow::ensure!(
            is_probability(p.interaction_chance),
            "Interaction chance must be in [0.0, 1.0]"
        );

        let m = &self.mutation;
        anyhow::ensure!(m.hp_decay_min >= 1, "HP decay must be at least 1 per tick");
        anyhow::ensure!(
            m.hp_decay_min <= m.hp_decay_max,
            "HP decay min must not exceed max"
        );
        anyhow::ensure!(m.mutation_min >= 0, "Mutation min must be non-negative");
        anyhow::ensure!(
            m.mutation_min <= m.mutation_max,
            "Mutation min must not exceed max"
        );
        anyhow::ensure!(
            m.min_reproduction_rate > 0.0 && m.min_reproduction_rate <= m.max_reproduction_rate,
            "Reproduction rate bounds must satisfy 0 < min <= max"
        );

        let s = &self.session;
        anyhow::ensure!(s.event_history > 0, "Event history must be positive");
        anyhow::ensure!(s.narration_interval > 0, "Narration interval must be positive");
        anyhow::ensure!(s.tick_interval_ms > 0, "Tick interval must be positive");
        anyhow::ensure!(
            !s.deterministic || s.seed.is_some(),
            "Deterministic sessions need a seed"
        );

        Ok(())
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path`, falling back to defaults when the file does not exist.
    pub fn load(path: &std::path::Path) -> anyhow::Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Invalid config {}", path.display()))
    }

    /// Digest of the policy sections, so a run can record which rules made it.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.population).as_bytes());
        hasher.update(format!("{:?}", self.mutation).as_bytes());
        hex::encode(hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        assert!(ZooConfig::default().validate().is_ok());
        assert!(ZooConfig::quiet().validate().is_ok());
    }

    #[test]
    fn test_zero_cap_rejected() {
        let config = ZooConfig {
            population: PopulationConfig {
                max_creatures: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_probability_rejected() {
        let config = ZooConfig {
            population: PopulationConfig {
                cross_breeding_chance: 1.5,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_inverted_decay_rejected() {
        let config = ZooConfig {
            mutation: MutationConfig {
                hp_decay_min: 3,
                hp_decay_max: 2,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_deterministic_requires_seed() {
        let mut config = ZooConfig::default();
        config.session.deterministic = true;
        assert!(config.validate().is_err());
        config.session.seed = Some(9);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = ZooConfig::from_toml("[population]\nmax_creatures = 10\n").unwrap();
        assert_eq!(config.population.max_creatures, 10);
        assert_eq!(config.population.max_offspring_per_tick, 2);
        assert_eq!(config.session.tick_interval_ms, 1200);
    }

    #[test]
    fn test_fingerprint_tracks_policy_only() {
        let a = ZooConfig::default();
        let mut b = ZooConfig::default();
        b.session.tick_interval_ms = 50;
        assert_eq!(a.fingerprint(), b.fingerprint());
        assert_ne!(a.fingerprint(), ZooConfig::quiet().fingerprint());
    }
}
