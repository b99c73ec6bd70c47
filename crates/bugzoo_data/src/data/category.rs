use serde::{Deserialize, Serialize};
use std::fmt;

/// Bug category a base archetype embodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BugCategory {
    MemoryLeak,
    SpaghettiCode,
    NullPointer,
    OffByOne,
    RaceCondition,
    InfiniteLoop,
    SyntaxError,
    LogSpam,
}

impl BugCategory {
    pub const ALL: [BugCategory; 8] = [
        BugCategory::MemoryLeak,
        BugCategory::SpaghettiCode,
        BugCategory::NullPointer,
        BugCategory::OffByOne,
        BugCategory::RaceCondition,
        BugCategory::InfiniteLoop,
        BugCategory::SyntaxError,
        BugCategory::LogSpam,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            BugCategory::MemoryLeak => "memory_leak",
            BugCategory::SpaghettiCode => "spaghetti_code",
            BugCategory::NullPointer => "null_pointer",
            BugCategory::OffByOne => "off_by_one",
            BugCategory::RaceCondition => "race_condition",
            BugCategory::InfiniteLoop => "infinite_loop",
            BugCategory::SyntaxError => "syntax_error",
            BugCategory::LogSpam => "log_spam",
        }
    }

    /// Breed family the category belongs to.
    #[must_use]
    pub fn breed(self) -> BreedType {
        match self {
            BugCategory::MemoryLeak => BreedType::Memory,
            BugCategory::SpaghettiCode => BreedType::Architecture,
            BugCategory::NullPointer => BreedType::Safety,
            BugCategory::OffByOne => BreedType::Indexing,
            BugCategory::RaceCondition => BreedType::Concurrency,
            BugCategory::InfiniteLoop => BreedType::ControlFlow,
            BugCategory::SyntaxError => BreedType::Syntax,
            BugCategory::LogSpam => BreedType::Logging,
        }
    }
}

impl fmt::Display for BugCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BreedType {
    Memory,
    Architecture,
    Safety,
    Indexing,
    Concurrency,
    ControlFlow,
    Syntax,
    Logging,
}

impl BreedType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            BreedType::Memory => "memory",
            BreedType::Architecture => "architecture",
            BreedType::Safety => "safety",
            BreedType::Indexing => "indexing",
            BreedType::Concurrency => "concurrency",
            BreedType::ControlFlow => "control_flow",
            BreedType::Syntax => "syntax",
            BreedType::Logging => "logging",
        }
    }
}

impl fmt::Display for BreedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Archetype lineage of a creature.
///
/// Catalog creatures carry a single base category. Cross-breeding joins the
/// two parent lineages, so a hybrid of hybrids keeps its full ancestry
/// without any string parsing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lineage {
    Base(BugCategory),
    Hybrid(Box<Lineage>, Box<Lineage>),
}

impl Lineage {
    #[must_use]
    pub fn hybrid(a: &Lineage, b: &Lineage) -> Self {
        Lineage::Hybrid(Box::new(a.clone()), Box::new(b.clone()))
    }

    #[must_use]
    pub fn is_hybrid(&self) -> bool {
        matches!(self, Lineage::Hybrid(..))
    }

    /// Base categories in left-to-right ancestry order, duplicates included.
    #[must_use]
    pub fn categories(&self) -> Vec<BugCategory> {
        let mut out = Vec::new();
        self.collect_into(&mut out);
        out
    }

    fn collect_into(&self, out: &mut Vec<BugCategory>) {
        match self {
            Lineage::Base(c) => out.push(*c),
            Lineage::Hybrid(a, b) => {
                a.collect_into(out);
                b.collect_into(out);
            }
        }
    }

    /// Breed types joined with `" + "`, e.g. `memory + concurrency`.
    #[must_use]
    pub fn breed_label(&self) -> String {
        self.categories()
            .iter()
            .map(|c| c.breed().as_str())
            .collect::<Vec<_>>()
            .join(" + ")
    }
}

impl From<BugCategory> for Lineage {
    fn from(category: BugCategory) -> Self {
        Lineage::Base(category)
    }
}

impl fmt::Display for Lineage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lineage::Base(c) => write!(f, "{c}"),
            Lineage::Hybrid(a, b) => write!(f, "{a}+{b}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hybrid_display_joins_categories() {
        let a = Lineage::from(BugCategory::MemoryLeak);
        let b = Lineage::from(BugCategory::RaceCondition);
        let h = Lineage::hybrid(&a, &b);
        assert_eq!(h.to_string(), "memory_leak+race_condition");
        assert_eq!(h.breed_label(), "memory + concurrency");
        assert!(h.is_hybrid());
        assert!(!a.is_hybrid());
    }

    #[test]
    fn test_nested_hybrid_keeps_ancestry() {
        let ab = Lineage::hybrid(
            &BugCategory::LogSpam.into(),
            &BugCategory::OffByOne.into(),
        );
        let abc = Lineage::hybrid(&ab, &BugCategory::LogSpam.into());
        assert_eq!(
            abc.categories(),
            vec![
                BugCategory::LogSpam,
                BugCategory::OffByOne,
                BugCategory::LogSpam
            ]
        );
        assert_eq!(abc.to_string(), "log_spam+off_by_one+log_spam");
    }

    #[test]
    fn test_category_serializes_snake_case() {
        let json = serde_json::to_string(&BugCategory::InfiniteLoop).unwrap();
        assert_eq!(json, "\"infinite_loop\"");
    }
}
