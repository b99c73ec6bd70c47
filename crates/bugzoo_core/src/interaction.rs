use crate::config::PopulationConfig;
use bugzoo_data::{Creature, Status};
use rand::Rng;

const TEMPLATE_COUNT: usize = 4;

fn interaction_message(template: usize, first: &Creature, second: &Creature) -> String {
    let (a, b) = (&first.name, &second.name);
    match template % TEMPLATE_COUNT {
        0 => format!("{a} clashes with {b} over scarce CPU cycles."),
        1 => format!("{a} competes with {b} for memory resources."),
        2 => format!("{b} challenges {a}'s dominance in the codebase."),
        _ => format!("A territorial dispute erupts between {a} and {b}."),
    }
}

/// Two distinct indices drawn uniformly from `0..len` (requires `len >= 2`).
fn pick_distinct_pair<R: Rng>(len: usize, rng: &mut R) -> (usize, usize) {
    let first = rng.gen_range(0..len);
    let mut second = rng.gen_range(0..len);
    while second == first {
        second = rng.gen_range(0..len);
    }
    (first, second)
}

/// Maybe sets one pair of living creatures clashing or competing.
///
/// Has no memory of earlier ticks: the same pair may meet again next tick.
/// Returns the event text when an interaction happened.
pub fn resolve_interactions<R: Rng>(
    creatures: &mut [Creature],
    config: &PopulationConfig,
    rng: &mut R,
) -> Option<String> {
    let living: Vec<usize> = creatures
        .iter()
        .enumerate()
        .filter(|(_, c)| !c.is_extinct())
        .map(|(i, _)| i)
        .collect();
    if living.len() < 2 || !rng.gen_bool(config.interaction_chance) {
        return None;
    }

    let (i, j) = pick_distinct_pair(living.len(), rng);
    let (first, second) = (living[i], living[j]);
    let status = if rng.gen_bool(0.5) {
        Status::Clashing
    } else {
        Status::Competing
    };
    creatures[first].status = status;
    creatures[second].status = status;

    let template = rng.gen_range(0..TEMPLATE_COUNT);
    let message = interaction_message(template, &creatures[first], &creatures[second]);
    tracing::trace!(%message, "Interaction");
    Some(message)
}
