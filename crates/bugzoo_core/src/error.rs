//! Error types for the bug zoo engine.
//!
//! Almost nothing in the engine can fail: clamps saturate and missing
//! breeding candidates are skipped. What remains is the guard against
//! picking from an empty sequence, which is a programmer error.

use thiserror::Error;

/// Errors raised by the zoo engine.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZooError {
    /// A uniform pick was asked to choose from nothing.
    #[error("cannot pick from empty input")]
    EmptyInput,
}

pub type ZooResult<T> = std::result::Result<T, ZooError>;
