use crate::config::ZooConfig;
use crate::lifecycle::{clamp_stat, mint_id, roll_mutations};
use bugzoo_data::{Creature, Lineage, Status};
use rand::Rng;

/// Rounds halves toward positive infinity.
fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

/// Per-tick spawn probability for one parent.
#[must_use]
pub fn reproduction_chance(parent: &Creature, config: &ZooConfig) -> f64 {
    let p = &config.population;
    (parent.reproduction_rate * p.reproduction_rate_scale).min(p.reproduction_chance_cap)
}

/// Whether `parent` may try to spawn this tick.
///
/// `living_before_tick` is the population at the start of the tick, not the
/// running count.
#[must_use]
pub fn can_reproduce(
    parent: &Creature,
    living_before_tick: usize,
    offspring_this_tick: usize,
    config: &ZooConfig,
) -> bool {
    let p = &config.population;
    parent.hp > p.min_hp_for_reproduction
        && living_before_tick < p.max_creatures
        && offspring_this_tick < p.max_offspring_per_tick
}

/// Asexual copy of `parent` with mutated hp, aggression and speed.
pub fn spawn_offspring<R: Rng>(parent: &Creature, config: &ZooConfig, rng: &mut R) -> Creature {
    let [hp, aggression, speed] = roll_mutations(&config.mutation, rng);
    Creature {
        id: mint_id(false, rng),
        name: parent.name.clone(),
        label: parent.label.clone(),
        lineage: parent.lineage.clone(),
        description: parent.description.clone(),
        severity: parent.severity,
        hp: clamp_stat(parent.hp + hp),
        aggression: clamp_stat(parent.aggression + aggression),
        speed: clamp_stat(parent.speed + speed),
        reproduction_rate: parent.reproduction_rate,
        status: Status::NewlySpawned,
    }
}

#[must_use]
pub fn offspring_message(parent: &Creature) -> String {
    format!("{} spawned an offspring.", parent.name)
}

/// Two creatures can cross-breed when they are different species and both
/// are healthy enough.
#[must_use]
pub fn is_valid_breeding_pair(a: &Creature, b: &Creature, config: &ZooConfig) -> bool {
    let min_hp = config.population.min_hp_for_cross_breeding;
    a.name != b.name && a.id != b.id && a.hp > min_hp && b.hp > min_hp
}

/// Index pairs `(i, j)` with `i < j` that may cross-breed, extinct members skipped.
#[must_use]
pub fn valid_breeding_pairs(creatures: &[Creature], config: &ZooConfig) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for (i, a) in creatures.iter().enumerate() {
        if a.is_extinct() {
            continue;
        }
        for (j, b) in creatures.iter().enumerate().skip(i + 1) {
            if !b.is_extinct() && is_valid_breeding_pair(a, b, config) {
                pairs.push((i, j));
            }
        }
    }
    pairs
}

#[must_use]
pub fn hybrid_name(a: &Creature, b: &Creature) -> String {
    format!("{} {} (Hybrid)", a.first_name_word(), b.first_name_word())
}

/// Hybrid of two parents: averaged stats, harsher severity, joined lineage.
pub fn cross_breed<R: Rng>(
    a: &Creature,
    b: &Creature,
    config: &ZooConfig,
    rng: &mut R,
) -> Creature {
    let m = &config.mutation;
    let mean = |x: i32, y: i32| f64::from(x + y) / 2.0;
    let rate = ((a.reproduction_rate + b.reproduction_rate) / 2.0)
        .clamp(m.min_reproduction_rate, m.max_reproduction_rate);

    let [hp, aggression, speed] = roll_mutations(m, rng);
    let description = format!(
        "Hybrid of {} and {}. A unique fusion combining {} and {} traits.",
        a.name,
        b.name,
        a.lineage.breed_label(),
        b.lineage.breed_label()
    );

    Creature {
        id: mint_id(true, rng),
        name: hybrid_name(a, b),
        label: format!("{} × {}", a.label, b.label),
        lineage: Lineage::hybrid(&a.lineage, &b.lineage),
        description,
        severity: a.severity.max(b.severity),
        hp: clamp_stat(round_half_up(mean(a.hp, b.hp) + f64::from(hp))),
        aggression: clamp_stat(round_half_up(
            mean(a.aggression, b.aggression) + f64::from(aggression),
        )),
        speed: clamp_stat(round_half_up(mean(a.speed, b.speed) + f64::from(speed))),
        reproduction_rate: rate,
        status: Status::HybridOffspring,
    }
}

#[must_use]
pub fn hybrid_message(a: &Creature, b: &Creature, hybrid: &Creature) -> String {
    format!(
        "{} and {} cross-breed, spawning {}.",
        a.name, b.name, hybrid.name
    )
}
