//! Builder API for period construction.
//!
//! The builder checks the whole configuration at once and reports every
//! violated rule, instead of stopping at the first one.

pub mod error;
pub mod period;

pub use error::BuildError;
pub use period::PeriodBuilder;

use crate::core::{Interval, Point};
use crate::period::Period;

/// Create a daily period from `start` to `end`, both included.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use recur::builder::daily;
///
/// let start = NaiveDate::from_ymd_opt(2024, 2, 27).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
///
/// assert_eq!(daily(start, end).unwrap().iter().count(), 4);
/// ```
pub fn daily<P>(start: P, end: P) -> Result<Period<P>, BuildError>
where
    P: Point<Step = Interval>,
{
    PeriodBuilder::new()
        .start(start)
        .end(end)
        .interval(Interval::days(1))
        .build()
}

/// Create a period of `count` occurrences starting at `start`.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use recur::builder::repeated;
/// use recur::core::Interval;
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
/// let period = repeated(start, Interval::months(1), 3).unwrap();
///
/// let dates: Vec<_> = period.iter().map(|d| d.to_string()).collect();
/// assert_eq!(dates, ["2024-01-31", "2024-02-29", "2024-03-29"]);
/// ```
pub fn repeated<P: Point>(
    start: P,
    interval: P::Step,
    count: usize,
) -> Result<Period<P>, BuildError> {
    PeriodBuilder::new()
        .start(start)
        .interval(interval)
        .recurrences(count)
        .build()
}
