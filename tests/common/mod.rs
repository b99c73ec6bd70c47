pub mod macros;

use bugzoo_core::config::ZooConfig;
use bugzoo_core::simulation::{run_tick_with_config, TickOutcome};
use bugzoo_core::{BugCategory, Creature, Lineage, Severity, Status};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[allow(dead_code)]
pub struct CreatureBuilder {
    creature: Creature,
}

#[allow(dead_code)]
impl CreatureBuilder {
    pub fn new(index: usize) -> Self {
        Self {
            creature: Creature {
                id: format!("creature-test-{index}"),
                name: format!("Specimen{index} Bug"),
                label: "Test label".to_string(),
                lineage: Lineage::Base(BugCategory::OffByOne),
                description: "A creature built for tests.".to_string(),
                severity: Severity::Medium,
                hp: 80,
                aggression: 40,
                speed: 40,
                reproduction_rate: 0.4,
                status: Status::Roaming,
            },
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.creature.name = name.to_string();
        self
    }

    pub fn hp(mut self, hp: i32) -> Self {
        self.creature.hp = hp;
        self
    }

    pub fn aggression(mut self, aggression: i32) -> Self {
        self.creature.aggression = aggression;
        self
    }

    pub fn severity(mut self, severity: Severity) -> Self {
        self.creature.severity = severity;
        self
    }

    pub fn category(mut self, category: BugCategory) -> Self {
        self.creature.lineage = Lineage::Base(category);
        self
    }

    pub fn reproduction_rate(mut self, rate: f64) -> Self {
        self.creature.reproduction_rate = rate;
        self
    }

    pub fn status(mut self, status: Status) -> Self {
        self.creature.status = status;
        self
    }

    pub fn build(self) -> Creature {
        self.creature
    }
}

/// `count` distinct healthy creatures.
#[allow(dead_code)]
pub fn population(count: usize, hp: i32) -> Vec<Creature> {
    (0..count).map(|i| CreatureBuilder::new(i).hp(hp).build()).collect()
}

/// Config with every random birth and clash switched off.
#[allow(dead_code)]
pub fn quiet_config() -> ZooConfig {
    ZooConfig::quiet()
}

#[allow(dead_code)]
pub fn tick_seeded(creatures: &[Creature], config: &ZooConfig, seed: u64) -> TickOutcome {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    run_tick_with_config(creatures, config, &mut rng)
}
