//! Filter predicates evaluated against each candidate point.

use crate::core::Point;
use crate::period::Period;
use std::fmt;
use std::sync::Arc;

/// Outcome of checking a candidate.
///
/// `Reject` only skips the candidate, iteration goes on with the next step.
/// `Terminate` ends iteration: no further candidate is produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FilterResult {
    /// The candidate is accepted.
    Pass,

    /// The candidate is skipped.
    Reject,

    /// Iteration stops before this candidate.
    Terminate,
}

impl FilterResult {
    /// Check if the candidate is accepted.
    pub fn is_pass(self) -> bool {
        matches!(self, Self::Pass)
    }

    /// Check if iteration must stop.
    pub fn is_terminate(self) -> bool {
        matches!(self, Self::Terminate)
    }
}

impl From<bool> for FilterResult {
    fn from(pass: bool) -> Self {
        if pass {
            Self::Pass
        } else {
            Self::Reject
        }
    }
}

/// Type alias for custom filter functions.
///
/// Called with the candidate, its ordinal in the raw sequence (the start
/// point is ordinal 0) and the period being iterated.
pub type Predicate<P> = Arc<dyn Fn(&P, usize, &Period<P>) -> FilterResult + Send + Sync>;

#[derive(Clone)]
enum FilterKind<P: Point> {
    Recurrences(usize),
    Custom(Predicate<P>),
}

/// A single entry of a period's filter chain.
///
/// # Example
///
/// ```rust
/// use chrono::{Datelike, NaiveDate, Weekday};
/// use recur::filter::{Filter, FilterResult};
///
/// let weekdays = Filter::when(|day: &NaiveDate| {
///     !matches!(day.weekday(), Weekday::Sat | Weekday::Sun)
/// });
///
/// let before_march = Filter::new(|day: &NaiveDate, _ordinal, _period| {
///     if day.month() < 3 {
///         FilterResult::Pass
///     } else {
///         FilterResult::Terminate
///     }
/// });
/// # let _ = (weekdays, before_march);
/// ```
#[derive(Clone)]
pub struct Filter<P: Point> {
    kind: FilterKind<P>,
}

impl<P: Point> Filter<P> {
    /// Create a filter from a three-way predicate.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&P, usize, &Period<P>) -> FilterResult + Send + Sync + 'static,
    {
        Filter {
            kind: FilterKind::Custom(Arc::new(predicate)),
        }
    }

    /// Create a filter that passes or rejects based on the point alone.
    pub fn when<F>(predicate: F) -> Self
    where
        F: Fn(&P) -> bool + Send + Sync + 'static,
    {
        Self::new(move |point, _, _| FilterResult::from(predicate(point)))
    }

    /// Create the recurrence filter, limiting the period to `limit`
    /// occurrences.
    ///
    /// The start point always consumes one of the `limit` slots, even when
    /// it is excluded: an excluded start leaves `limit - 1` points.
    pub fn recurrences(limit: usize) -> Self {
        Filter {
            kind: FilterKind::Recurrences(limit),
        }
    }

    /// The limit if this is the recurrence filter.
    pub fn recurrence_limit(&self) -> Option<usize> {
        match self.kind {
            FilterKind::Recurrences(limit) => Some(limit),
            FilterKind::Custom(_) => None,
        }
    }

    /// Check a candidate at `ordinal` within `period`.
    pub fn check(&self, candidate: &P, ordinal: usize, period: &Period<P>) -> FilterResult {
        match &self.kind {
            FilterKind::Recurrences(limit) => {
                let skipped = usize::from(period.has_start_excluded());
                let position = ordinal.saturating_sub(skipped);
                if position < limit.saturating_sub(skipped) {
                    FilterResult::Pass
                } else {
                    FilterResult::Terminate
                }
            }
            FilterKind::Custom(predicate) => predicate(candidate, ordinal, period),
        }
    }
}

impl<P: Point> fmt::Debug for Filter<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            FilterKind::Recurrences(limit) => f.debug_tuple("Recurrences").field(limit).finish(),
            FilterKind::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}
