//! Error types for u-meeting.
//!
//! Optimization itself never fails: a meeting without a feasible slot is
//! reported by omission. Errors only arise when building an optimizer from
//! configuration.

use thiserror::Error;

/// Result type for u-meeting operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when configuring the optimizer.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration values are out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration text is not valid TOML for `OptimizerConfig`.
    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Configuration file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
