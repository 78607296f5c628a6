//! Point and Step traits for recurring sequences.
//!
//! A period never does calendar arithmetic itself. It asks its point type to
//! move forward by a step and only relies on the result being ordered.

use super::interval::Interval;
use crate::period::ConfigError;
use chrono::{DateTime, Days, Months, NaiveDate, NaiveDateTime, TimeDelta, TimeZone};
use std::fmt::Debug;

/// A step value that can move a [`Point`] forward.
///
/// The only thing a period needs to know about a step is whether it is
/// empty: an empty step would never advance the cursor. `Default` is the
/// step used when a period is configured without one.
pub trait Step: Clone + PartialEq + Debug + Default {
    /// Check if applying this step leaves a point unchanged.
    fn is_empty(&self) -> bool;
}

/// Trait for the points a period iterates over.
///
/// # Required Traits
///
/// - `Clone`: the cursor always works on its own copies
/// - `PartialOrd`: candidates are compared against the end boundary
/// - `Debug`: points show up in diagnostics
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use recur::core::{Interval, Point};
///
/// let day = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
/// let next = day.advance(&Interval::months(1)).unwrap();
/// assert_eq!(next, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
/// ```
pub trait Point: Clone + PartialOrd + Debug {
    /// The step type this point can be advanced by.
    type Step: Step;

    /// Return this point moved forward by `step`.
    ///
    /// Pure: `self` is left untouched. Returns `None` when the result is not
    /// representable (calendar overflow).
    fn advance(&self, step: &Self::Step) -> Option<Self>;

    /// Check that `step` can drive a period of this point type.
    ///
    /// Called whenever a period is given a step. The default only rejects
    /// empty steps; point types that cannot represent part of a step
    /// override it.
    fn check_step(step: &Self::Step) -> Result<(), ConfigError> {
        if step.is_empty() {
            return Err(ConfigError::EmptyInterval);
        }
        Ok(())
    }
}

const SECONDS_PER_DAY: u64 = 86_400;

impl Point for NaiveDate {
    type Step = Interval;

    /// A date step needs at least one whole day, and its sub-day part must
    /// be a whole number of days.
    fn check_step(step: &Interval) -> Result<(), ConfigError> {
        let time = step.time();
        let moves_by_days = time.as_secs() >= SECONDS_PER_DAY;
        if step.month_count() == 0 && step.day_count() == 0 && !moves_by_days {
            return Err(ConfigError::EmptyInterval);
        }
        if time.subsec_nanos() != 0 || time.as_secs() % SECONDS_PER_DAY != 0 {
            return Err(ConfigError::PartialDayInterval);
        }
        Ok(())
    }

    /// Only whole days of the sub-day part move a date; [`Point::check_step`]
    /// keeps any other step out of a period.
    fn advance(&self, step: &Interval) -> Option<Self> {
        let whole_days = step.time().as_secs() / SECONDS_PER_DAY;
        self.checked_add_months(Months::new(step.month_count()))?
            .checked_add_days(Days::new(u64::from(step.day_count())))?
            .checked_add_days(Days::new(whole_days))
    }
}

impl Point for NaiveDateTime {
    type Step = Interval;

    fn advance(&self, step: &Interval) -> Option<Self> {
        let time = TimeDelta::from_std(step.time()).ok()?;
        self.checked_add_months(Months::new(step.month_count()))?
            .checked_add_days(Days::new(u64::from(step.day_count())))?
            .checked_add_signed(time)
    }
}

impl<Tz: TimeZone> Point for DateTime<Tz> {
    type Step = Interval;

    /// Also `None` when the month or day part lands on a local time that
    /// does not exist or is ambiguous in `Tz`.
    fn advance(&self, step: &Interval) -> Option<Self> {
        let time = TimeDelta::from_std(step.time()).ok()?;
        self.clone()
            .checked_add_months(Months::new(step.month_count()))?
            .checked_add_days(Days::new(u64::from(step.day_count())))?
            .checked_add_signed(time)
    }
}
