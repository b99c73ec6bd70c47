//! Session harness around the bug zoo engine.
//!
//! The engine itself lives in `bugzoo_core`; this crate owns a running
//! session, the timer that ticks it, and shutdown handling.

pub mod app;

pub use app::{drive, DriveOptions, Session, ShutdownManager, StopReason};
