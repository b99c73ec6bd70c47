//! Turns pasted text into the initial zoo.
//!
//! Every draw comes from one [`SeededRng`] seeded by the trimmed text, in a
//! fixed order: population size, filler archetypes, per-creature stats,
//! flavor events, narration. Only creature ids use side streams, so that an
//! id never depends on how far the shared stream has advanced.

use crate::analyzer::{analyze_code_patterns, detected_categories, is_browser_space, CodePattern};
use crate::catalog;
use crate::error::ZooResult;
use crate::rng::{hash_string_to_seed, SeededRng};
use bugzoo_data::{Archetype, BugCategory, Creature, Lineage, Severity, Status};
use serde::{Deserialize, Serialize};

pub const EMPTY_EVENT: &str = "No code detected. The terrarium remains empty.";
pub const EMPTY_NARRATION: &str =
    "The digital terrarium awaits... Paste code to populate it with bug creatures.";
const LONELY_EVENTS: [&str; 2] = [
    "The ecosystem is too calm... too quiet.",
    "A single creature wanders alone in the digital void.",
];
const ID_SEED_STRIDE: u32 = 1000;

/// Output of [`generate`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Generation {
    pub creatures: Vec<Creature>,
    pub events: Vec<String>,
    pub narration: String,
}

impl Generation {
    /// The placeholder zoo for blank input.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            creatures: Vec::new(),
            events: vec![EMPTY_EVENT.to_string()],
            narration: EMPTY_NARRATION.to_string(),
        }
    }
}

/// What the analyzer saw in a piece of text, without hatching anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    pub seed: u32,
    pub patterns: Vec<CodePattern>,
    pub categories: Vec<BugCategory>,
    pub target_population: usize,
}

/// Length in UTF-16 code units, the unit the size breakpoints are tuned for.
fn text_length(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Population size for a text of `length` code units. Draws at most once.
pub fn target_population(length: usize, rng: &mut SeededRng) -> usize {
    let (min, max) = match length {
        0..=99 => return 2,
        100..=499 => (2, 4),
        500..=1999 => (3, 5),
        _ => (4, 6),
    };
    rng.rand_int(min, max) as usize
}

/// `text` without the surrounding whitespace a browser `trim` strips.
///
/// Differs from [`str::trim`]: a byte-order mark is stripped, U+0085 is kept.
#[must_use]
pub fn trim_source(text: &str) -> &str {
    text.trim_matches(is_browser_space)
}

/// Seed, patterns and planned population size for `text`.
///
/// Returns `None` for blank text.
#[must_use]
pub fn analyze_text(text: &str) -> Option<Analysis> {
    let trimmed = trim_source(text);
    if trimmed.is_empty() {
        return None;
    }
    let seed = hash_string_to_seed(trimmed);
    let mut rng = SeededRng::new(seed);
    let patterns = analyze_code_patterns(text);
    let categories = detected_categories(&patterns);
    let target_population = target_population(text_length(text), &mut rng);
    Some(Analysis {
        seed,
        patterns,
        categories,
        target_population,
    })
}

/// Detected archetypes first, then random fillers drawn without replacement.
fn select_archetypes(
    categories: &[BugCategory],
    target: usize,
    rng: &mut SeededRng,
) -> ZooResult<Vec<&'static Archetype>> {
    let mut selected: Vec<&'static Archetype> = categories
        .iter()
        .filter_map(|&c| catalog::find_by_category(c))
        .collect();
    let mut available: Vec<&'static Archetype> = catalog::all()
        .iter()
        .filter(|a| !categories.contains(&a.category))
        .collect();

    while selected.len() < target && !available.is_empty() {
        let idx = rng.pick_index(available.len())?;
        selected.push(available.remove(idx));
    }
    Ok(selected)
}

fn hatch(
    archetype: &Archetype,
    index: usize,
    seed: u32,
    rng: &mut SeededRng,
) -> ZooResult<Creature> {
    let id_seed = seed.wrapping_add((index as u32).wrapping_mul(ID_SEED_STRIDE));
    let id_number = SeededRng::new(id_seed).rand_int(1_000_000, 10_000_000);

    Ok(Creature {
        id: format!("creature-{id_number}-{index}"),
        name: archetype.name.to_string(),
        label: archetype.label.to_string(),
        lineage: Lineage::Base(archetype.category),
        description: archetype.description.to_string(),
        severity: archetype.severity,
        hp: rng.rand_int(40, 121) as i32,
        aggression: rng.rand_int(10, 96) as i32,
        speed: rng.rand_int(5, 91) as i32,
        reproduction_rate: rng.rand_range(0.1, 0.71),
        status: *rng.pick(&Status::INITIAL)?,
    })
}

fn flavor_events(creatures: &[Creature], rng: &mut SeededRng) -> Vec<String> {
    if creatures.len() < 2 {
        return LONELY_EVENTS.iter().map(|s| s.to_string()).collect();
    }

    let second = if creatures.len() > 2 {
        rng.rand_int(1, creatures.len() as i64) as usize
    } else {
        1
    };
    let (a, b) = (&creatures[0], &creatures[second]);
    let intent = if b.severity == Severity::Critical {
        "malicious"
    } else {
        "curious"
    };
    let (a_breed, b_breed) = (a.lineage.breed_label(), b.lineage.breed_label());
    let templates = [
        format!("{} eyes {} warily.", a.name, b.name),
        format!("{} circles {} with {intent} intent.", b.name, a.name),
        format!(
            "{} {}s near {}.",
            a.name,
            a.status.as_str().to_lowercase(),
            b.name
        ),
        format!("{} detects {}'s {a_breed} signature.", b.name, a.name),
        format!("A tense standoff between {} and {}.", a.name, b.name),
        format!(
            "{} pretends nothing is wrong while {} watches.",
            a.name, b.name
        ),
        format!(
            "The {a_breed} energy of {} clashes with {}'s {b_breed} aura.",
            a.name, b.name
        ),
    ];

    let wanted = rng.rand_int(2, 4) as usize;
    let mut used = Vec::with_capacity(wanted);
    let mut events = Vec::with_capacity(wanted);
    while events.len() < wanted && used.len() < templates.len() {
        let idx = rng.rand_int(0, templates.len() as i64) as usize;
        if !used.contains(&idx) {
            used.push(idx);
            events.push(templates[idx].clone());
        }
    }
    events
}

fn opening_narration(creatures: &[Creature], rng: &mut SeededRng) -> ZooResult<String> {
    let n = creatures.len();
    let critical = creatures.iter().any(|c| c.severity == Severity::Critical);
    let high = creatures.iter().any(|c| c.severity == Severity::High);
    let one = n == 1;

    let narrations = [
        format!(
            "In the shadowed depths of this repo, {n} species {} for dominance...",
            if one { "clashes" } else { "clash" }
        ),
        format!(
            "The digital terrarium pulses with {n} {}, each a manifestation of code gone wrong.",
            if one { "lifeform" } else { "lifeforms" }
        ),
        format!(
            "An unstable ecosystem emerges: {n} bug creatures {} the codebase, {}.",
            if one { "roams" } else { "roam" },
            if critical {
                "with critical threats lurking"
            } else {
                "seeking vulnerabilities"
            }
        ),
        format!(
            "Nature documentary voice: \"Here we observe {n} {} in their natural habitat—a repository of chaos.\"",
            if one { "specimen" } else { "specimens" }
        ),
        format!(
            "The codebase trembles as {n} {} {}, {}.",
            if one { "entity" } else { "entities" },
            if one { "awakens" } else { "awaken" },
            if high {
                "some more dangerous than others"
            } else {
                "each with unique behaviors"
            }
        ),
    ];
    rng.pick(&narrations).cloned()
}

/// Hatches the zoo for `text`. Identical text always yields an identical zoo.
pub fn generate(text: &str) -> ZooResult<Generation> {
    let Some(analysis) = analyze_text(text) else {
        return Ok(Generation::empty());
    };

    let mut rng = SeededRng::new(analysis.seed);
    let target = target_population(text_length(text), &mut rng);
    let archetypes = select_archetypes(&analysis.categories, target, &mut rng)?;

    let creatures = archetypes
        .iter()
        .enumerate()
        .map(|(index, archetype)| hatch(archetype, index, analysis.seed, &mut rng))
        .collect::<ZooResult<Vec<_>>>()?;
    let events = flavor_events(&creatures, &mut rng);
    let narration = opening_narration(&creatures, &mut rng)?;

    tracing::debug!(
        seed = analysis.seed,
        patterns = ?analysis.patterns,
        creatures = creatures.len(),
        "Generated zoo"
    );

    Ok(Generation {
        creatures,
        events,
        narration,
    })
}
