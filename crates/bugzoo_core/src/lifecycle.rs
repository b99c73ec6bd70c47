use crate::config::MutationConfig;
use bugzoo_data::{Creature, Status};
use rand::Rng;
use uuid::Uuid;

pub const STAT_MIN: i32 = 0;
pub const STAT_MAX: i32 = 100;

/// Saturates hp, aggression or speed into `[0, 100]`.
#[must_use]
pub fn clamp_stat(value: i32) -> i32 {
    value.clamp(STAT_MIN, STAT_MAX)
}

/// Applies one tick of hp decay and returns the amount lost.
///
/// Marks the creature `Extinct` when hp reaches zero.
pub fn apply_decay<R: Rng>(creature: &mut Creature, config: &MutationConfig, rng: &mut R) -> i32 {
    let decay = rng.gen_range(config.hp_decay_min..=config.hp_decay_max);
    creature.hp = clamp_stat(creature.hp - decay);
    if creature.hp <= 0 {
        creature.status = Status::Extinct;
    }
    decay
}

#[must_use]
pub fn extinction_message(creature: &Creature) -> String {
    format!(
        "{} has gone extinct as its energy faded away.",
        creature.name
    )
}

/// Signed offsets for hp, aggression and speed.
///
/// Magnitudes are drawn first, then the three signs, so a seeded stream
/// always mutates the same way.
pub fn roll_mutations<R: Rng>(config: &MutationConfig, rng: &mut R) -> [i32; 3] {
    let mut magnitudes = [0i32; 3];
    for m in &mut magnitudes {
        *m = rng.gen_range(config.mutation_min..=config.mutation_max);
    }
    magnitudes.map(|m| if rng.gen_bool(0.5) { m } else { -m })
}

/// Mints a fresh creature id from the stream.
pub fn mint_id<R: Rng>(hybrid: bool, rng: &mut R) -> String {
    let id = Uuid::from_u128(rng.gen());
    if hybrid {
        format!("creature-hybrid-{id}")
    } else {
        format!("creature-{id}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bugzoo_data::{BugCategory, Lineage, Severity};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    fn bug(hp: i32) -> Creature {
        Creature {
            id: "creature-1".to_string(),
            name: "Ring Cicada".to_string(),
            label: String::new(),
            lineage: Lineage::Base(BugCategory::InfiniteLoop),
            description: String::new(),
            severity: Severity::Critical,
            hp,
            aggression: 50,
            speed: 50,
            reproduction_rate: 0.4,
            status: Status::Roaming,
        }
    }

    #[test]
    fn test_clamp_stat() {
        assert_eq!(clamp_stat(-7), 0);
        assert_eq!(clamp_stat(42), 42);
        assert_eq!(clamp_stat(120), 100);
    }

    #[test]
    fn test_decay_clamps_oversized_hp() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut c = bug(120);
        apply_decay(&mut c, &MutationConfig::default(), &mut rng);
        assert_eq!(c.hp, 100);
    }

    #[test]
    fn test_decay_kills_at_zero() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut c = bug(1);
        let lost = apply_decay(&mut c, &MutationConfig::default(), &mut rng);
        assert!((1..=2).contains(&lost));
        assert_eq!(c.hp, 0);
        assert_eq!(c.status, Status::Extinct);
    }

    #[test]
    fn test_mutations_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let config = MutationConfig::default();
        for _ in 0..500 {
            for m in roll_mutations(&config, &mut rng) {
                assert!((5..=10).contains(&m.abs()), "mutation {m} out of range");
            }
        }
    }

    #[test]
    fn test_ids_unique() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let ids: HashSet<String> = (0..1000).map(|i| mint_id(i % 2 == 0, &mut rng)).collect();
        assert_eq!(ids.len(), 1000);
        assert!(mint_id(true, &mut rng).starts_with("creature-hybrid-"));
    }
}
