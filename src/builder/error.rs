//! Build errors for the period builder.

use crate::period::ConfigError;
use thiserror::Error;

/// Errors that can occur when building a period.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    /// Every configuration rule that failed, in checking order.
    #[error(
        "Invalid period configuration: {}",
        .0.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
    )]
    InvalidConfiguration(Vec<ConfigError>),
}

impl BuildError {
    /// Get the violated rules, in checking order.
    pub fn violations(&self) -> &[ConfigError] {
        match self {
            Self::InvalidConfiguration(violations) => violations,
        }
    }
}
