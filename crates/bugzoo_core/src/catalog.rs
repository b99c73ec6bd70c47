//! The archetype table.
//!
//! Read-only: the encyclopedia view enumerates it, the generator stamps
//! creatures from it, nothing writes to it.

use bugzoo_data::{Archetype, BreedType, BugCategory, Severity};

pub static ARCHETYPES: [Archetype; 8] = [
    Archetype {
        name: "Glow Moth",
        label: "💧 Memory Leak",
        category: BugCategory::MemoryLeak,
        description: "A luminous moth that drips stored data wherever it goes, slowly flooding the heap with glowing residue.",
        severity: Severity::High,
        breed: BreedType::Memory,
    },
    Archetype {
        name: "Tangled Worm",
        label: "🍝 Spaghetti Code",
        category: BugCategory::SpaghettiCode,
        description: "A rainbow worm made of twisted logic strands, impossible to straighten without breaking something else.",
        severity: Severity::Medium,
        breed: BreedType::Architecture,
    },
    Archetype {
        name: "Void Beetle",
        label: "⛔ Null Pointer",
        category: BugCategory::NullPointer,
        description: "A hollow-shelled beetle that represents missing values and unchecked assumptions, crashing anything that touches its void.",
        severity: Severity::High,
        breed: BreedType::Safety,
    },
    Archetype {
        name: "Offset Ant",
        label: "➕1 Off-by-one",
        category: BugCategory::OffByOne,
        description: "An over-eager ant that always overshoots or undershoots the target slot by one tiny step.",
        severity: Severity::Medium,
        breed: BreedType::Indexing,
    },
    Archetype {
        name: "Flash Mantis",
        label: "⚡ Race Condition",
        category: BugCategory::RaceCondition,
        description: "A hyper-fast mantis that acts before the rest of the system is ready, causing unpredictable outcomes.",
        severity: Severity::Critical,
        breed: BreedType::Concurrency,
    },
    Archetype {
        name: "Ring Cicada",
        label: "∞ Infinite Loop",
        category: BugCategory::InfiniteLoop,
        description: "A cicada that sings the same cycle forever, looping in a glowing ring without ever reaching a return.",
        severity: Severity::Critical,
        breed: BreedType::ControlFlow,
    },
    Archetype {
        name: "Rune Spider",
        label: "{} Syntax Error",
        category: BugCategory::SyntaxError,
        description: "A spider that spins webs of broken symbols; one wrong rune and the whole structure collapses.",
        severity: Severity::Low,
        breed: BreedType::Syntax,
    },
    Archetype {
        name: "Blink Firefly",
        label: "📣 Log Spam",
        category: BugCategory::LogSpam,
        description: "An overexcited firefly that won't stop blinking, drowning the night (and your console) in noise.",
        severity: Severity::Low,
        breed: BreedType::Logging,
    },
];

/// Returns every archetype in catalog order.
#[must_use]
pub fn all() -> &'static [Archetype] {
    &ARCHETYPES
}

#[must_use]
pub fn find_by_category(category: BugCategory) -> Option<&'static Archetype> {
    ARCHETYPES.iter().find(|a| a.category == category)
}
