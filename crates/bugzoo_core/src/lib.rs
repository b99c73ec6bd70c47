//! # Bug Zoo Core
//!
//! The deterministic engine behind the bug zoo: pasted source text becomes a
//! small population of bug creatures which then evolve tick by tick.
//!
//! This crate contains:
//! - A seeded mulberry32 generator and a djb2 text-to-seed hasher
//! - A heuristic pattern analyzer mapping code smells to bug categories
//! - The static archetype catalog
//! - The population generator (initial cohort, flavor events, narration)
//! - The tick engine (decay, extinction, reproduction, hybrids, cap, clashes)
//! - Chaos scoring and narration selection
//!
//! ## Determinism
//!
//! Generation is fully seeded from the text. The tick engine takes any
//! [`rand::Rng`], so a seeded stream replays a whole run exactly while
//! [`rand::thread_rng`] gives a live, unrepeatable one.
//!
//! ## Example
//!
//! ```
//! use bugzoo_core::generator::generate;
//! use bugzoo_core::simulation::run_tick_with_rng;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let zoo = generate("while (true) { items.push(1); }").unwrap();
//! assert!(!zoo.creatures.is_empty());
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(7);
//! let outcome = run_tick_with_rng(&zoo.creatures, &mut rng);
//! assert!(outcome.creatures.len() <= 25);
//! ```

/// Pattern heuristics over pasted source text
pub mod analyzer;
/// Static archetype table
pub mod catalog;
/// Chaos score and narration selection
pub mod chaos;
/// Tunable simulation policy
pub mod config;
/// Engine error type
pub mod error;
/// Initial population from text
pub mod generator;
/// Pairwise clashes between creatures
pub mod interaction;
/// Decay, extinction and stat clamping
pub mod lifecycle;
/// Tick counters and structured logging
pub mod metrics;
/// Asexual offspring and cross-breeding
pub mod reproduction;
/// Seeded generator and text hashing
pub mod rng;
/// The per-tick orchestrator
pub mod simulation;

pub use bugzoo_data::{
    Archetype, BreedType, BugCategory, Creature, EcosystemStats, Lineage, Severity,
    SimulationEvent, Status,
};
pub use error::{ZooError, ZooResult};
pub use metrics::{init_logging, Metrics};
pub use rng::{hash_string_to_seed, SeededRng};
