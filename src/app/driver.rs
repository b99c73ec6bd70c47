//! Periodic tick driver.
//!
//! Each step completes before the next is scheduled, and ticks that fall
//! behind are skipped rather than replayed in a burst.

use super::session::Session;
use super::shutdown::ShutdownManager;
use bugzoo_core::simulation::TickReport;
use bugzoo_core::Metrics;
use rand::Rng;
use std::time::{Duration, Instant};
use tokio::time::MissedTickBehavior;

/// Why [`drive`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    Paused,
    Shutdown,
    TickLimit,
    Extinct,
}

/// Pacing and limits for one [`drive`] run.
#[derive(Debug, Clone, Copy)]
pub struct DriveOptions {
    pub interval: Duration,
    /// Stop after this many ticks; `None` runs until something else stops it.
    pub max_ticks: Option<u64>,
}

impl DriveOptions {
    #[must_use]
    pub fn from_session(session: &Session) -> Self {
        Self {
            interval: Duration::from_millis(session.config().session.tick_interval_ms),
            max_ticks: None,
        }
    }
}

/// Starts the session and steps it once per interval until it stops.
///
/// `on_tick` sees the session after every step and may pause it.
pub async fn drive<R, F>(
    session: &mut Session,
    rng: &mut R,
    options: DriveOptions,
    shutdown: &ShutdownManager,
    metrics: &Metrics,
    mut on_tick: F,
) -> StopReason
where
    R: Rng,
    F: FnMut(&mut Session, &TickReport),
{
    let mut interval = tokio::time::interval(options.interval);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    // The first tick of a tokio interval completes immediately.
    interval.tick().await;

    session.start();
    let mut ticks = 0u64;
    let reason = loop {
        if session.is_empty() {
            break StopReason::Extinct;
        }
        if let Some(limit) = options.max_ticks {
            if ticks >= limit {
                break StopReason::TickLimit;
            }
        }

        interval.tick().await;

        if shutdown.is_shutdown_requested() {
            break StopReason::Shutdown;
        }
        if !session.running {
            break StopReason::Paused;
        }

        let started = Instant::now();
        let report = session.step(rng);
        ticks += 1;
        metrics.record_tick(&report, session.creatures.len(), started.elapsed());
        on_tick(session, &report);
    };

    session.pause();
    tracing::info!(
        ?reason,
        ticks,
        population = session.creatures.len(),
        elapsed_ms = metrics.elapsed().as_millis() as u64,
        "Driver stopped"
    );
    reason
}
