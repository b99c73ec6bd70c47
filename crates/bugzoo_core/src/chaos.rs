//! Chaos scoring and narration.
//!
//! Chaos blends population size, mean aggression and how many high or
//! critical creatures are loose into a single `0..=100` number that picks the
//! tone of the narrator.

use bugzoo_data::{Creature, Severity};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

const COUNT_CHAOS_MAX: f64 = 40.0;
const AGGRESSION_CHAOS_MAX: f64 = 30.0;
const SEVERITY_CHAOS_MAX: f64 = 30.0;
const CROWD_REFERENCE: usize = 25;

/// Chaos level of a population snapshot, `0` when nothing is alive.
#[must_use]
pub fn chaos_score(creatures: &[Creature]) -> u8 {
    let living: Vec<&Creature> = creatures.iter().filter(|c| !c.is_extinct()).collect();
    if living.is_empty() {
        return 0;
    }
    let n = living.len() as f64;
    let mean_aggression = living.iter().map(|c| f64::from(c.aggression)).sum::<f64>() / n;
    let critical = living.iter().filter(|c| c.severity == Severity::Critical).count();
    let high = living.iter().filter(|c| c.severity == Severity::High).count();

    let crowd = living.len().min(CROWD_REFERENCE) as f64 / CROWD_REFERENCE as f64;
    let count_chaos = (crowd * COUNT_CHAOS_MAX).min(COUNT_CHAOS_MAX);
    let aggression_chaos = (mean_aggression * 0.3).min(AGGRESSION_CHAOS_MAX);
    let severity_chaos = ((critical * 10 + high * 4) as f64).min(SEVERITY_CHAOS_MAX);

    let total = (count_chaos + aggression_chaos + severity_chaos + 0.5).floor();
    total.clamp(0.0, 100.0) as u8
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChaosBand {
    Calm,
    Unstable,
    Apocalyptic,
}

impl ChaosBand {
    #[must_use]
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=29 => ChaosBand::Calm,
            30..=69 => ChaosBand::Unstable,
            _ => ChaosBand::Apocalyptic,
        }
    }
}

fn plural<'a>(n: usize, one: &'a str, many: &'a str) -> &'a str {
    if n == 1 {
        one
    } else {
        many
    }
}

/// Every narration line for `band`, given `n` living creatures.
#[must_use]
pub fn narration_templates(band: ChaosBand, n: usize) -> Vec<String> {
    match band {
        ChaosBand::Calm => vec![
            format!(
                "The ecosystem remains calm with {n} {} peacefully coexisting.",
                plural(n, "creature", "creatures")
            ),
            format!(
                "A tranquil moment in the digital terrarium. {n} {} {} quietly.",
                plural(n, "lifeform", "lifeforms"),
                plural(n, "roams", "roam")
            ),
            format!(
                "The codebase is stable. {n} {} {} in harmony.",
                plural(n, "bug", "bugs"),
                plural(n, "exists", "exist")
            ),
        ],
        ChaosBand::Unstable => vec![
            format!(
                "Tensions rise in the ecosystem. {n} {} {} signs of instability.",
                plural(n, "creature", "creatures"),
                plural(n, "shows", "show")
            ),
            format!(
                "The digital terrarium grows unstable. {n} {} {} for survival.",
                plural(n, "entity", "entities"),
                plural(n, "struggles", "struggle")
            ),
            format!(
                "Chaos begins to spread. {n} {} {} adapting to the changing environment.",
                plural(n, "bug", "bugs"),
                plural(n, "is", "are")
            ),
        ],
        ChaosBand::Apocalyptic => vec![
            format!(
                "APOCALYPTIC CHAOS! The ecosystem has reached critical instability. {n} {} {} to consume everything.",
                plural(n, "creature", "creatures"),
                plural(n, "threatens", "threaten")
            ),
            format!(
                "The codebase trembles under apocalyptic pressure. {n} {} {} supreme in chaos.",
                plural(n, "entity", "entities"),
                plural(n, "reigns", "reign")
            ),
            format!(
                "EXTINCTION EVENT IMMINENT! {n} {} {} pushed the ecosystem beyond its limits.",
                plural(n, "bug", "bugs"),
                plural(n, "has", "have")
            ),
        ],
    }
}

/// Picks a narration line for the chaos band `score` falls in.
pub fn pick_narration_with_rng<R: Rng>(score: u8, living: usize, rng: &mut R) -> String {
    narration_templates(ChaosBand::from_score(score), living)
        .choose(rng)
        .cloned()
        .unwrap_or_default()
}

/// [`pick_narration_with_rng`] with thread-local randomness.
#[must_use]
pub fn pick_narration(score: u8, living: usize) -> String {
    pick_narration_with_rng(score, living, &mut rand::thread_rng())
}
