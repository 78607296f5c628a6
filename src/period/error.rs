//! Configuration errors.

use thiserror::Error;

/// Errors reported when a period is configured.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Empty interval cannot be converted into a period")]
    EmptyInterval,

    #[error("Interval has a part shorter than a day, which a date cannot step by")]
    PartialDayInterval,

    #[error("Start point not specified. Call .start(point) before .build()")]
    MissingStart,
}
