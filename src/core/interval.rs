//! Calendar interval used to step chrono points.

use super::point::Step;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A forward calendar step made of months, days and a sub-day duration.
///
/// Components are applied in that order. Month arithmetic clamps to the last
/// day of the target month, as chrono does. Every component is unsigned, so
/// a non-empty interval always moves a point forward.
///
/// # Example
///
/// ```rust
/// use recur::core::{Interval, Step};
///
/// assert_eq!(Interval::default(), Interval::days(1));
/// assert_eq!(Interval::years(2).month_count(), 24);
/// assert!(Interval::seconds(0).is_empty());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval {
    #[serde(default)]
    months: u32,
    #[serde(default)]
    days: u32,
    #[serde(default)]
    time: Duration,
}

impl Interval {
    /// Create an interval from all three components.
    pub const fn new(months: u32, days: u32, time: Duration) -> Self {
        Self { months, days, time }
    }

    /// Step by whole years (twelve months each).
    pub const fn years(years: u32) -> Self {
        Self::months(years.saturating_mul(12))
    }

    /// Step by calendar months.
    pub const fn months(months: u32) -> Self {
        Self::new(months, 0, Duration::ZERO)
    }

    /// Step by weeks of seven days.
    pub const fn weeks(weeks: u32) -> Self {
        Self::days(weeks.saturating_mul(7))
    }

    /// Step by calendar days.
    pub const fn days(days: u32) -> Self {
        Self::new(0, days, Duration::ZERO)
    }

    /// Step by hours of wall-clock time.
    pub const fn hours(hours: u64) -> Self {
        Self::seconds(hours.saturating_mul(3_600))
    }

    /// Step by minutes.
    pub const fn minutes(minutes: u64) -> Self {
        Self::seconds(minutes.saturating_mul(60))
    }

    /// Step by seconds.
    pub const fn seconds(seconds: u64) -> Self {
        Self::new(0, 0, Duration::from_secs(seconds))
    }

    /// Number of calendar months in the step.
    pub const fn month_count(&self) -> u32 {
        self.months
    }

    /// Number of calendar days in the step.
    pub const fn day_count(&self) -> u32 {
        self.days
    }

    /// Sub-day part of the step.
    pub const fn time(&self) -> Duration {
        self.time
    }
}

impl Default for Interval {
    fn default() -> Self {
        Self::days(1)
    }
}

impl Step for Interval {
    fn is_empty(&self) -> bool {
        self.months == 0 && self.days == 0 && self.time.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_fill_the_right_component() {
        assert_eq!(Interval::years(1), Interval::new(12, 0, Duration::ZERO));
        assert_eq!(Interval::weeks(2), Interval::new(0, 14, Duration::ZERO));
        assert_eq!(Interval::hours(2).time(), Duration::from_secs(7_200));
        assert_eq!(Interval::minutes(3).time(), Duration::from_secs(180));
    }

    #[test]
    fn empty_only_when_every_component_is_zero() {
        assert!(Interval::new(0, 0, Duration::ZERO).is_empty());
        assert!(!Interval::months(1).is_empty());
        assert!(!Interval::days(1).is_empty());
        assert!(!Interval::new(0, 0, Duration::from_nanos(1)).is_empty());
    }

    #[test]
    fn missing_components_deserialize_as_zero() {
        let interval: Interval = serde_json::from_str(r#"{"days": 3}"#).unwrap();
        assert_eq!(interval, Interval::days(3));
    }
}
