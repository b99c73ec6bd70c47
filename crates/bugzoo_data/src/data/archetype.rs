use super::category::{BreedType, BugCategory};
use super::creature::Severity;
use serde::Serialize;

/// Static template a live creature is stamped from.
///
/// Rows live in a compile-time table and are only ever read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Archetype {
    pub name: &'static str,
    pub label: &'static str,
    pub category: BugCategory,
    pub description: &'static str,
    pub severity: Severity,
    pub breed: BreedType,
}
