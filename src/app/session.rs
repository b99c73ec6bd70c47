//! A running zoo: the creatures plus the state a viewer shows alongside them.

use bugzoo_core::chaos::{chaos_score, pick_narration_with_rng};
use bugzoo_core::config::ZooConfig;
use bugzoo_core::generator::{generate, EMPTY_NARRATION};
use bugzoo_core::simulation::{run_tick_with_config, TickReport};
use bugzoo_core::{Creature, EcosystemStats, ZooResult};
use rand::Rng;
use serde::Serialize;
use std::collections::VecDeque;

#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub creatures: Vec<Creature>,
    pub events: VecDeque<String>,
    pub narration: String,
    pub tick_count: u64,
    pub chaos_level: u8,
    pub running: bool,
    #[serde(skip)]
    config: ZooConfig,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(ZooConfig::default())
    }
}

impl Session {
    /// An empty, paused session.
    #[must_use]
    pub fn new(config: ZooConfig) -> Self {
        Self {
            creatures: Vec::new(),
            events: VecDeque::new(),
            narration: EMPTY_NARRATION.to_string(),
            tick_count: 0,
            chaos_level: 0,
            running: false,
            config,
        }
    }

    /// Hatches a zoo from `text`.
    ///
    /// The generator's opening narration is replaced by a chaos-driven line
    /// straight away, so `rng` is drawn from once when anything hatched.
    pub fn from_text<R: Rng>(text: &str, config: ZooConfig, rng: &mut R) -> ZooResult<Self> {
        let zoo = generate(text)?;
        let mut session = Self::new(config);
        session.chaos_level = chaos_score(&zoo.creatures);
        session.narration = zoo.narration;
        session.creatures = zoo.creatures;
        session.events = zoo.events.into();
        session.trim_events();
        if !session.creatures.is_empty() {
            session.narration =
                pick_narration_with_rng(session.chaos_level, session.creatures.len(), rng);
        }
        Ok(session)
    }

    #[must_use]
    pub fn config(&self) -> &ZooConfig {
        &self.config
    }

    /// Advances one tick and returns what happened.
    pub fn step<R: Rng>(&mut self, rng: &mut R) -> TickReport {
        let outcome = run_tick_with_config(&self.creatures, &self.config, rng);
        self.creatures = outcome.creatures;
        self.events
            .extend(outcome.events.into_iter().map(|e| e.message));
        self.trim_events();

        self.chaos_level = chaos_score(&self.creatures);
        self.tick_count += 1;
        if self.tick_count % self.config.session.narration_interval == 0 {
            let living = self.creatures.iter().filter(|c| !c.is_extinct()).count();
            self.narration = pick_narration_with_rng(self.chaos_level, living, rng);
        }
        outcome.report
    }

    fn trim_events(&mut self) {
        let cap = self.config.session.event_history;
        while self.events.len() > cap {
            self.events.pop_front();
        }
    }

    /// Marks the session as running.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Stops the session from advancing.
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Flips between running and paused.
    pub fn toggle_running(&mut self) {
        self.running = !self.running;
    }

    /// Back to an empty, paused session. The config is kept.
    pub fn reset(&mut self) {
        self.creatures.clear();
        self.events.clear();
        self.narration = EMPTY_NARRATION.to_string();
        self.tick_count = 0;
        self.chaos_level = 0;
        self.running = false;
    }

    #[must_use]
    pub fn stats(&self) -> EcosystemStats {
        EcosystemStats::from_creatures(&self.creatures)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.creatures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const CODE: &str = "while (true) { count++ }";

    #[test]
    fn test_new_session_is_idle() {
        let session = Session::default();
        assert!(session.is_empty());
        assert!(!session.running);
        assert_eq!(session.narration, EMPTY_NARRATION);
        assert_eq!(session.tick_count, 0);
    }

    #[test]
    fn test_from_blank_text_keeps_placeholder() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let session = Session::from_text("  ", ZooConfig::default(), &mut rng).unwrap();
        assert!(session.is_empty());
        assert_eq!(session.narration, EMPTY_NARRATION);
        assert_eq!(session.events.len(), 1);
        assert_eq!(session.chaos_level, 0);
    }

    #[test]
    fn test_from_text_scores_chaos() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let session = Session::from_text(CODE, ZooConfig::default(), &mut rng).unwrap();
        assert_eq!(session.creatures.len(), 2);
        assert_eq!(session.chaos_level, chaos_score(&session.creatures));
        assert!(session.narration.contains("2 "));
    }

    #[test]
    fn test_step_counts_and_trims() {
        let mut config = ZooConfig::default();
        config.session.event_history = 3;
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut session = Session::from_text(CODE, config, &mut rng).unwrap();
        for _ in 0..30 {
            session.step(&mut rng);
            assert!(session.events.len() <= 3);
        }
        assert_eq!(session.tick_count, 30);
    }

    #[test]
    fn test_narration_refreshes_on_interval() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut session = Session::from_text(CODE, ZooConfig::quiet(), &mut rng).unwrap();
        session.narration = "stale".to_string();
        session.step(&mut rng);
        session.step(&mut rng);
        assert_eq!(session.narration, "stale");
        session.step(&mut rng);
        assert_ne!(session.narration, "stale");
    }

    #[test]
    fn test_running_controls() {
        let mut session = Session::default();
        session.start();
        assert!(session.running);
        session.pause();
        assert!(!session.running);
        session.toggle_running();
        assert!(session.running);
        session.toggle_running();
        assert!(!session.running);
    }

    #[test]
    fn test_reset() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let mut session = Session::from_text(CODE, ZooConfig::default(), &mut rng).unwrap();
        session.start();
        session.step(&mut rng);
        session.reset();
        assert!(session.is_empty());
        assert!(session.events.is_empty());
        assert_eq!(session.narration, EMPTY_NARRATION);
        assert_eq!(session.tick_count, 0);
        assert_eq!(session.chaos_level, 0);
        assert!(!session.running);
    }

    #[test]
    fn test_stats_match_creatures() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let session = Session::from_text(CODE, ZooConfig::default(), &mut rng).unwrap();
        let stats = session.stats();
        assert_eq!(stats.total_creatures, 2);
        assert_eq!(
            stats.total_hp,
            session.creatures.iter().map(|c| i64::from(c.hp)).sum::<i64>()
        );
    }
}
