//! Core data structures for the bug zoo.
//!
//! Everything here is plain data: the engine in `bugzoo_core` creates and
//! mutates these values, the presentation layer only reads them.

pub mod data;

pub use data::archetype::Archetype;
pub use data::category::{BreedType, BugCategory, Lineage};
pub use data::creature::{Creature, Severity, Status};
pub use data::ecosystem::{EcosystemStats, SimulationEvent};
