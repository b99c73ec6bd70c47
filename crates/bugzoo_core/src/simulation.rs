//! The tick engine.
//!
//! A tick takes a population snapshot and returns the next one; the input is
//! never mutated and the engine keeps nothing between calls. Steps run in a
//! fixed order:
//!
//! 1. drop creatures already extinct
//! 2. decay hp by a small random amount
//! 3. remove creatures whose hp hit zero
//! 4. let healthy creatures spawn asexual offspring (bounded per tick)
//! 5. maybe cross-breed one pair of different species
//! 6. evict the weakest creatures above the population cap
//! 7. maybe set one pair clashing or competing

use crate::config::ZooConfig;
use crate::interaction::resolve_interactions;
use crate::lifecycle::{apply_decay, extinction_message};
use crate::reproduction::{
    can_reproduce, cross_breed, hybrid_message, offspring_message, reproduction_chance,
    spawn_offspring, valid_breeding_pairs,
};
use bugzoo_data::{Creature, SimulationEvent};
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const OVERCROWDING_MESSAGE: &str =
    "Overcrowding event: weaker species were pushed out of the ecosystem.";

/// What happened during one tick, for metrics and logging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickReport {
    pub births: usize,
    pub hybrids: usize,
    pub extinctions: usize,
    pub evicted: usize,
    pub interactions: usize,
}

impl TickReport {
    /// Offspring plus hybrids created this tick.
    #[must_use]
    pub fn new_entities(&self) -> usize {
        self.births + self.hybrids
    }

    /// Number of events the tick emitted. Overcrowding is a single event.
    #[must_use]
    pub fn event_count(&self) -> usize {
        self.births
            + self.hybrids
            + self.extinctions
            + usize::from(self.evicted > 0)
            + self.interactions
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TickOutcome {
    pub creatures: Vec<Creature>,
    pub events: Vec<SimulationEvent>,
    pub report: TickReport,
}

/// Advances one tick with the default policy and thread-local randomness.
#[must_use]
pub fn run_tick(creatures: &[Creature]) -> TickOutcome {
    let mut rng = rand::thread_rng();
    run_tick_with_rng(creatures, &mut rng)
}

/// Advances one tick with the default policy.
pub fn run_tick_with_rng<R: Rng>(creatures: &[Creature], rng: &mut R) -> TickOutcome {
    run_tick_with_config(creatures, &ZooConfig::default(), rng)
}

/// Advances one tick under `config`, drawing every roll from `rng`.
pub fn run_tick_with_config<R: Rng>(
    creatures: &[Creature],
    config: &ZooConfig,
    rng: &mut R,
) -> TickOutcome {
    let timestamp = chrono::Utc::now().timestamp_millis();
    let mut events = Vec::new();
    let mut report = TickReport::default();
    let mut next: Vec<Creature> = Vec::with_capacity(creatures.len() + 2);

    let living_before_tick = creatures.iter().filter(|c| !c.is_extinct()).count();
    let mut offspring = 0usize;

    for creature in creatures.iter().filter(|c| !c.is_extinct()) {
        let mut updated = creature.clone();
        apply_decay(&mut updated, &config.mutation, rng);

        if updated.is_extinct() {
            tracing::debug!(id = %updated.id, name = %updated.name, "Extinction");
            events.push(SimulationEvent::new(extinction_message(&updated), timestamp));
            report.extinctions += 1;
            continue;
        }

        if can_reproduce(&updated, living_before_tick, offspring, config) {
            let chance = reproduction_chance(&updated, config);
            if rng.gen::<f64>() < chance {
                let child = spawn_offspring(&updated, config, rng);
                tracing::debug!(parent = %updated.id, child = %child.id, "Birth");
                next.push(child);
                offspring += 1;
                report.births += 1;
                events.push(SimulationEvent::new(offspring_message(&updated), timestamp));
            }
        }

        next.push(updated);
    }

    let p = &config.population;
    let may_cross_breed = next.len() >= 2
        && offspring < p.max_offspring_per_tick
        && next.len() < p.max_creatures
        && rng.gen_bool(p.cross_breeding_chance);
    if may_cross_breed {
        let pairs = valid_breeding_pairs(&next, config);
        if !pairs.is_empty() {
            let (i, j) = pairs[rng.gen_range(0..pairs.len())];
            let hybrid = cross_breed(&next[i], &next[j], config, rng);
            tracing::debug!(a = %next[i].id, b = %next[j].id, hybrid = %hybrid.id, "Hybrid");
            events.push(SimulationEvent::new(
                hybrid_message(&next[i], &next[j], &hybrid),
                timestamp,
            ));
            next.push(hybrid);
            report.hybrids += 1;
        }
    }

    let evicted = evict_weakest(&mut next, p.max_creatures);
    if evicted > 0 {
        tracing::debug!(evicted, cap = p.max_creatures, "Overcrowding");
        events.push(SimulationEvent::new(OVERCROWDING_MESSAGE, timestamp));
        report.evicted = evicted;
    }

    if let Some(message) = resolve_interactions(&mut next, p, rng) {
        events.push(SimulationEvent::new(message, timestamp));
        report.interactions += 1;
    }

    TickOutcome {
        creatures: next,
        events,
        report,
    }
}

/// Removes the lowest-hp creatures until at most `cap` remain.
///
/// Ties go to list order; survivors keep their relative order. Returns the
/// number evicted.
pub fn evict_weakest(creatures: &mut Vec<Creature>, cap: usize) -> usize {
    let excess = creatures.len().saturating_sub(cap);
    if excess == 0 {
        return 0;
    }
    let mut by_hp: Vec<usize> = (0..creatures.len()).collect();
    by_hp.sort_by_key(|&i| creatures[i].hp);

    let mut doomed = vec![false; creatures.len()];
    for &i in &by_hp[..excess] {
        doomed[i] = true;
    }
    let mut idx = 0;
    creatures.retain(|_| {
        let keep = !doomed[idx];
        idx += 1;
        keep
    });
    excess
}

#[cfg(test)]
mod tests {
    use super::*;
    use bugzoo_data::{BugCategory, Lineage, Severity, Status};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn bug(i: usize, hp: i32) -> Creature {
        Creature {
            id: format!("creature-{i}"),
            name: format!("Bug{i} Specimen"),
            label: String::new(),
            lineage: Lineage::Base(BugCategory::SyntaxError),
            description: String::new(),
            severity: Severity::Low,
            hp,
            aggression: 30,
            speed: 30,
            reproduction_rate: 0.7,
            status: Status::Roaming,
        }
    }

    #[test]
    fn test_evict_weakest_keeps_order() {
        let mut creatures: Vec<Creature> =
            [50, 10, 70, 20, 60].iter().enumerate().map(|(i, &hp)| bug(i, hp)).collect();
        assert_eq!(evict_weakest(&mut creatures, 3), 2);
        let hps: Vec<i32> = creatures.iter().map(|c| c.hp).collect();
        assert_eq!(hps, vec![50, 70, 60]);
        assert_eq!(evict_weakest(&mut creatures, 3), 0);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let creatures = vec![bug(0, 80), bug(1, 80)];
        let before = creatures.clone();
        let _ = run_tick_with_rng(&creatures, &mut rng);
        assert_eq!(creatures, before);
    }

    #[test]
    fn test_extinct_input_is_dropped_silently() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let mut dead = bug(0, 80);
        dead.status = Status::Extinct;
        let outcome = run_tick_with_config(&[dead], &ZooConfig::quiet(), &mut rng);
        assert!(outcome.creatures.is_empty());
        assert!(outcome.events.is_empty());
    }

    #[test]
    fn test_single_extinction_event() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let outcome = run_tick_with_config(&[bug(0, 1), bug(1, 90)], &ZooConfig::quiet(), &mut rng);
        assert_eq!(outcome.creatures.len(), 1);
        assert_eq!(outcome.creatures[0].id, "creature-1");
        assert_eq!(outcome.report.extinctions, 1);
        let extinct: Vec<_> = outcome
            .events
            .iter()
            .filter(|e| e.message.contains("Bug0 Specimen has gone extinct"))
            .collect();
        assert_eq!(extinct.len(), 1);
    }

    #[test]
    fn test_forced_breeding_respects_budget() {
        let mut config = ZooConfig::default();
        config.population.reproduction_chance_cap = 1.0;
        config.population.reproduction_rate_scale = 10.0;
        config.population.cross_breeding_chance = 1.0;
        let creatures: Vec<Creature> = (0..10).map(|i| bug(i, 90)).collect();

        for seed in 0..50 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let outcome = run_tick_with_config(&creatures, &config, &mut rng);
            assert_eq!(outcome.report.births, 2);
            assert_eq!(outcome.report.hybrids, 0);
            assert_eq!(outcome.creatures.len(), 12);
        }
    }

    #[test]
    fn test_forced_cross_breeding_adds_one_hybrid() {
        let mut config = ZooConfig::quiet();
        config.population.cross_breeding_chance = 1.0;
        let creatures = vec![bug(0, 90), bug(1, 90)];
        let mut rng = ChaCha8Rng::seed_from_u64(21);
        let outcome = run_tick_with_config(&creatures, &config, &mut rng);
        assert_eq!(outcome.report.hybrids, 1);
        let hybrid = outcome.creatures.last().unwrap();
        assert_eq!(hybrid.status, Status::HybridOffspring);
        assert_eq!(hybrid.name, "Bug0 Bug1 (Hybrid)");
        assert_eq!(outcome.events.len(), 1);
        assert_eq!(outcome.report.event_count(), 1);
    }

    #[test]
    fn test_event_count_matches_events() {
        let creatures: Vec<Creature> = (0..30).map(|i| bug(i, (i as i32 % 7) + 1)).collect();
        for seed in 0..20 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let outcome = run_tick_with_rng(&creatures, &mut rng);
            assert_eq!(outcome.report.event_count(), outcome.events.len());
        }
    }
}
