//! Recur: lazy recurring date-range iteration
//!
//! A [`Period`] walks forward from a start point by a fixed step and stops
//! at an optional end, at a recurrence limit, or when a filter says so.
//! Points are computed one at a time; nothing is materialized up front.
//!
//! # Core Concepts
//!
//! - **Point / Step**: the seam to calendar arithmetic, implemented for
//!   chrono's `NaiveDate`, `NaiveDateTime` and `DateTime<Tz>` with
//!   [`Interval`](core::Interval)
//! - **Filters**: ordered predicates answering `Pass`, `Reject` or
//!   `Terminate` for each candidate
//! - **Cursor**: the `Uninitialized` / `Positioned` / `Exhausted` state
//!   machine behind `reset`, `advance`, `current` and `key`
//!
//! # Example
//!
//! ```rust
//! use chrono::{Datelike, NaiveDate, Weekday};
//! use recur::core::Interval;
//! use recur::PeriodBuilder;
//!
//! let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let end = NaiveDate::from_ymd_opt(2024, 1, 14).unwrap();
//!
//! let mut period = PeriodBuilder::new()
//!     .start(start)
//!     .end(end)
//!     .interval(Interval::days(1))
//!     .when(|d: &NaiveDate| !matches!(d.weekday(), Weekday::Sat | Weekday::Sun))
//!     .build()
//!     .unwrap();
//!
//! period.reset();
//! let mut workdays = Vec::new();
//! while let Some(day) = period.current() {
//!     workdays.push(*day);
//!     period.advance();
//! }
//! assert_eq!(workdays.len(), 10);
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod filter;
pub mod period;

// Re-export commonly used types
pub use builder::{BuildError, PeriodBuilder};
pub use config::PeriodConfig;
pub use self::core::{Interval, Options, Point, Step};
pub use filter::{Filter, FilterResult};
pub use period::{ConfigError, Cursor, Period};
