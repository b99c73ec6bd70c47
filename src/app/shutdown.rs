//! Graceful shutdown handling for the tick driver.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared stop flag, raised by Ctrl+C or by the caller.
#[derive(Clone)]
pub struct ShutdownManager {
    shutdown_requested: Arc<AtomicBool>,
}

impl Default for ShutdownManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ShutdownManager {
    /// Creates a new manager with the flag lowered.
    #[must_use]
    pub fn new() -> Self {
        Self {
            shutdown_requested: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Spawns a task that requests shutdown on Ctrl+C.
    ///
    /// Must be called from within a tokio runtime.
    pub fn listen_for_ctrl_c(&self) {
        let manager = self.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("Ctrl+C received, initiating graceful shutdown...");
                manager.request_shutdown();
            }
        });
    }

    /// Raises the stop flag for every clone of this manager.
    pub fn request_shutdown(&self) {
        self.shutdown_requested.store(true, Ordering::SeqCst);
        tracing::info!("Shutdown requested");
    }

    #[must_use]
    pub fn is_shutdown_requested(&self) -> bool {
        self.shutdown_requested.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shutdown_manager_new() {
        let manager = ShutdownManager::new();
        assert!(!manager.is_shutdown_requested());
    }

    #[test]
    fn test_shutdown_request_is_shared() {
        let manager = ShutdownManager::new();
        let handle = manager.clone();
        handle.request_shutdown();
        assert!(manager.is_shutdown_requested());
    }

    #[test]
    fn test_default_is_not_shared() {
        let first = ShutdownManager::default();
        let second = ShutdownManager::default();
        first.request_shutdown();
        assert!(!second.is_shutdown_requested());
    }
}
