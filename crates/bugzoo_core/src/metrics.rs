//! Run counters and logging setup.
//!
//! Counters are atomics so a renderer may read them while the driver ticks.

use crate::simulation::TickReport;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Log an info summary every this many ticks.
const SUMMARY_INTERVAL: u64 = 100;

/// Counters accumulated over a run.
pub struct Metrics {
    tick_count: AtomicU64,
    population: AtomicU64,
    births: AtomicU64,
    hybrids: AtomicU64,
    extinctions: AtomicU64,
    evictions: AtomicU64,
    start_time: Instant,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Creates a new set of zeroed counters.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tick_count: AtomicU64::new(0),
            population: AtomicU64::new(0),
            births: AtomicU64::new(0),
            hybrids: AtomicU64::new(0),
            extinctions: AtomicU64::new(0),
            evictions: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    /// Records a completed tick.
    pub fn record_tick(&self, report: &TickReport, population: usize, duration: Duration) {
        let tick = self.tick_count.fetch_add(1, Ordering::Relaxed) + 1;
        self.population.store(population as u64, Ordering::Relaxed);
        self.births.fetch_add(report.births as u64, Ordering::Relaxed);
        self.hybrids.fetch_add(report.hybrids as u64, Ordering::Relaxed);
        self.extinctions
            .fetch_add(report.extinctions as u64, Ordering::Relaxed);
        self.evictions.fetch_add(report.evicted as u64, Ordering::Relaxed);

        if tick % SUMMARY_INTERVAL == 0 {
            tracing::info!(
                tick,
                population,
                births = self.births(),
                hybrids = self.hybrids(),
                extinctions = self.extinctions(),
                duration_us = duration.as_micros() as u64,
                "Simulation tick"
            );
        }
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn population(&self) -> u64 {
        self.population.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn births(&self) -> u64 {
        self.births.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn hybrids(&self) -> u64 {
        self.hybrids.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn extinctions(&self) -> u64 {
        self.extinctions.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn evictions(&self) -> u64 {
        self.evictions.load(Ordering::Relaxed)
    }

    /// Time since these counters were created.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub fn reset(&self) {
        for counter in [
            &self.tick_count,
            &self.population,
            &self.births,
            &self.hybrids,
            &self.extinctions,
            &self.evictions,
        ] {
            counter.store(0, Ordering::Relaxed);
        }
    }
}

/// Installs the global tracing subscriber. `RUST_LOG` overrides the `info` default.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .finish(),
    )
    .ok();
}
