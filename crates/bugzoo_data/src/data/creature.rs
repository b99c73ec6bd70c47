use super::category::Lineage;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Threat level of a creature. Declaration order is the severity order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }

    /// High and critical creatures count as active threats.
    #[must_use]
    pub fn is_threat(self) -> bool {
        self >= Severity::High
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Behavior label shown next to a creature.
///
/// Labels are not an automaton: the engine may overwrite any label with any
/// other. `Extinct` is terminal and never survives a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Roaming,
    Hunting,
    Sleeping,
    Reproducing,
    Evolving,
    #[serde(rename = "Newly spawned")]
    NewlySpawned,
    Clashing,
    Competing,
    #[serde(rename = "Hybrid offspring")]
    HybridOffspring,
    Extinct,
}

impl Status {
    /// Statuses a freshly generated creature may start with, in draw order.
    pub const INITIAL: [Status; 5] = [
        Status::Roaming,
        Status::Hunting,
        Status::Sleeping,
        Status::Reproducing,
        Status::Evolving,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Roaming => "Roaming",
            Status::Hunting => "Hunting",
            Status::Sleeping => "Sleeping",
            Status::Reproducing => "Reproducing",
            Status::Evolving => "Evolving",
            Status::NewlySpawned => "Newly spawned",
            Status::Clashing => "Clashing",
            Status::Competing => "Competing",
            Status::HybridOffspring => "Hybrid offspring",
            Status::Extinct => "Extinct",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A live bug creature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creature {
    pub id: String,
    pub name: String,
    pub label: String,
    pub lineage: Lineage,
    pub description: String,
    pub severity: Severity,
    pub hp: i32,
    pub aggression: i32,
    pub speed: i32,
    pub reproduction_rate: f64,
    pub status: Status,
}

impl Creature {
    #[must_use]
    pub fn is_extinct(&self) -> bool {
        self.status == Status::Extinct
    }

    /// First word of the display name, used to compose hybrid names.
    #[must_use]
    pub fn first_name_word(&self) -> &str {
        self.name.split(' ').next().unwrap_or_default()
    }
}
